//! Savings accounts view: portfolio table with view and edit dialogs.

use leptos::prelude::*;
use shared::SavingsAccount;

use crate::api;
use crate::format;

fn status_class(status: Option<&str>) -> &'static str {
    match status.unwrap_or_default().to_lowercase().as_str() {
        "active" => "chip chip-success",
        "inactive" => "chip chip-error",
        "suspended" => "chip chip-warning",
        "pending" => "chip chip-info",
        _ => "chip",
    }
}

#[component]
pub fn SavingsAccountsView() -> impl IntoView {
    let (accounts, set_accounts) = signal(Vec::<SavingsAccount>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    // dialog state
    let (viewing, set_viewing) = signal(None::<SavingsAccount>);
    let (edit_open, set_edit_open) = signal(false);
    let edit_form = RwSignal::new(SavingsAccount::default());
    let (saving, set_saving) = signal(false);

    leptos::task::spawn_local(async move {
        match api::fetch_savings_accounts().await {
            Ok(data) => set_accounts.set(data),
            Err(e) => {
                leptos::logging::error!("failed to fetch savings accounts: {e}");
                set_error.set(Some(e));
            }
        }
        set_loading.set(false);
    });

    let save_edit = move |_| {
        let updated = edit_form.get();
        set_saving.set(true);
        leptos::task::spawn_local(async move {
            match api::update_savings_account(&updated).await {
                Ok(saved) => {
                    set_accounts.update(|accounts| {
                        if let Some(slot) =
                            accounts.iter_mut().find(|acc| acc.id == saved.id)
                        {
                            *slot = saved;
                        }
                    });
                    set_edit_open.set(false);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="savings-container">
            <h1>"Savings Accounts"</h1>

            <Show when=move || loading.get()>
                <div class="spinner-row">
                    <span class="spinner"></span>
                    " Loading savings accounts..."
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
                            <th>"Account Number"</th>
                            <th>"Account Holder"</th>
                            <th>"Phone Number"</th>
                            <th>"Account Type"</th>
                            <th>"Current Balance"</th>
                            <th>"Interest Rate"</th>
                            <th>"Status"</th>
                            <th>"Date Opened"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            accounts
                                .get()
                                .into_iter()
                                .map(|account| {
                                    let view_account = account.clone();
                                    let edit_account = account.clone();
                                    view! {
                                        <tr>
                                            <td class="strong">
                                                {format::or_na(account.account_number.as_deref())}
                                            </td>
                                            <td>{format::or_na(account.full_name.as_deref())}</td>
                                            <td>
                                                {format::or_na(account.phone_number.as_deref())}
                                            </td>
                                            <td>
                                                {format::or_na(account.account_type.as_deref())}
                                            </td>
                                            <td class="amount">
                                                {format::kes(account.current_balance)}
                                            </td>
                                            <td>
                                                <span class="chip chip-info">
                                                    {format!("{}%", account.interest_rate)}
                                                </span>
                                            </td>
                                            <td>
                                                <span class=status_class(
                                                    account.account_status.as_deref(),
                                                )>
                                                    {format::or_na(
                                                        account.account_status.as_deref(),
                                                    )}
                                                </span>
                                            </td>
                                            <td>
                                                {format::opt_date(account.date_opened.as_deref())}
                                            </td>
                                            <td>
                                                <button
                                                    class="action-btn"
                                                    on:click=move |_| {
                                                        set_viewing.set(Some(view_account.clone()))
                                                    }
                                                >
                                                    "View"
                                                </button>
                                                <button
                                                    class="action-btn"
                                                    on:click=move |_| {
                                                        edit_form.set(edit_account.clone());
                                                        set_edit_open.set(true);
                                                    }
                                                >
                                                    "Edit"
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

            // view dialog
            {move || {
                viewing
                    .get()
                    .map(|account| {
                        view! {
                            <div class="dialog-backdrop">
                                <div class="dialog">
                                    <h3>"Account Details"</h3>
                                    <dl class="detail-list">
                                        <dt>"Account Number"</dt>
                                        <dd>{format::or_na(account.account_number.as_deref())}</dd>
                                        <dt>"Account Holder"</dt>
                                        <dd>{format::or_na(account.full_name.as_deref())}</dd>
                                        <dt>"Phone Number"</dt>
                                        <dd>{format::or_na(account.phone_number.as_deref())}</dd>
                                        <dt>"Account Type"</dt>
                                        <dd>{format::or_na(account.account_type.as_deref())}</dd>
                                        <dt>"Current Balance"</dt>
                                        <dd>{format::kes(account.current_balance)}</dd>
                                        <dt>"Interest Rate"</dt>
                                        <dd>{format!("{}%", account.interest_rate)}</dd>
                                        <dt>"Status"</dt>
                                        <dd>{format::or_na(account.account_status.as_deref())}</dd>
                                        <dt>"Date Opened"</dt>
                                        <dd>{format::opt_date(account.date_opened.as_deref())}</dd>
                                    </dl>
                                    <div class="dialog-actions">
                                        <button on:click=move |_| set_viewing.set(None)>
                                            "Close"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}

            // edit dialog
            <Show when=move || edit_open.get()>
                <div class="dialog-backdrop">
                    <div class="dialog">
                        <h3>"Edit Account"</h3>
                        <div class="form-field">
                            <label>"Account Type"</label>
                            <select
                                prop:value=move || {
                                    edit_form.with(|f| f.account_type.clone().unwrap_or_default())
                                }
                                on:change=move |ev| {
                                    edit_form
                                        .update(|f| {
                                            f.account_type = Some(event_target_value(&ev))
                                        });
                                }
                            >
                                <option value="Regular Savings">"Regular Savings"</option>
                                <option value="Fixed Deposit">"Fixed Deposit"</option>
                                <option value="Premium Savings">"Premium Savings"</option>
                            </select>
                        </div>
                        <div class="form-field">
                            <label>"Current Balance"</label>
                            <input
                                type="number"
                                prop:value=move || {
                                    edit_form.with(|f| f.current_balance.to_string())
                                }
                                on:input=move |ev| {
                                    edit_form
                                        .update(|f| {
                                            f.current_balance = event_target_value(&ev)
                                                .parse()
                                                .unwrap_or(0.0)
                                        });
                                }
                            />
                        </div>
                        <div class="form-field">
                            <label>"Interest Rate (%)"</label>
                            <input
                                type="number"
                                prop:value=move || edit_form.with(|f| f.interest_rate.to_string())
                                on:input=move |ev| {
                                    edit_form
                                        .update(|f| {
                                            f.interest_rate = event_target_value(&ev)
                                                .parse()
                                                .unwrap_or(0.0)
                                        });
                                }
                            />
                        </div>
                        <div class="form-field">
                            <label>"Status"</label>
                            <select
                                prop:value=move || {
                                    edit_form.with(|f| f.account_status.clone().unwrap_or_default())
                                }
                                on:change=move |ev| {
                                    edit_form
                                        .update(|f| {
                                            f.account_status = Some(event_target_value(&ev))
                                        });
                                }
                            >
                                <option value="active">"active"</option>
                                <option value="inactive">"inactive"</option>
                                <option value="suspended">"suspended"</option>
                                <option value="pending">"pending"</option>
                            </select>
                        </div>
                        <div class="dialog-actions">
                            <button on:click=move |_| set_edit_open.set(false)>"Cancel"</button>
                            <button disabled=move || saving.get() on:click=save_edit>
                                {move || if saving.get() { "Saving..." } else { "Save" }}
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
