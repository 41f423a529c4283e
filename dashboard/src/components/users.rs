//! User management view: roster table with status chips and removal.

use leptos::prelude::*;
use shared::User;

use crate::api;
use crate::format;

fn status_class(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "active" => "chip chip-success",
        "inactive" => "chip chip-error",
        "on-leave" => "chip chip-warning",
        _ => "chip",
    }
}

#[component]
pub fn UsersView() -> impl IntoView {
    let (users, set_users) = signal(Vec::<User>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    leptos::task::spawn_local(async move {
        match api::fetch_users().await {
            Ok(data) => set_users.set(data),
            Err(e) => {
                leptos::logging::error!("failed to fetch users: {e}");
                set_error.set(Some(e));
            }
        }
        set_loading.set(false);
    });

    let delete = move |id: String| {
        leptos::task::spawn_local(async move {
            match api::delete_user(&id).await {
                Ok(()) => set_users.update(|users| users.retain(|user| user.id != id)),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="users-container">
            <h1>"User Management"</h1>

            <Show when=move || loading.get()>
                <div class="spinner-row">
                    <span class="spinner"></span>
                    " Loading users..."
                </div>
            </Show>

            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <div class="result error">
                                <div class="result-label">"Error"</div>
                                <div class="result-value">{e}</div>
                            </div>
                        }
                    })
            }}

            <Show when=move || !loading.get() && error.get().is_none()>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Phone"</th>
                            <th>"Role"</th>
                            <th>"Registered"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            users
                                .get()
                                .into_iter()
                                .map(|user| {
                                    let delete_id = user.id.clone();
                                    view! {
                                        <tr>
                                            <td>{user.name.clone()}</td>
                                            <td>{user.email.clone()}</td>
                                            <td>{user.phone.clone()}</td>
                                            <td>{format::or_na(user.job_title.as_deref())}</td>
                                            <td>
                                                {format::opt_date(
                                                    user.registration_date.as_deref(),
                                                )}
                                            </td>
                                            <td>
                                                <span class=status_class(
                                                    &user.status,
                                                )>{user.status.clone()}</span>
                                            </td>
                                            <td>
                                                <button
                                                    class="action-btn danger"
                                                    on:click=move |_| delete(delete_id.clone())
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
