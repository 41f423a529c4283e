//! User data grid: case-insensitive search, sortable columns, and windowed
//! pagination with direct page entry.

use std::cmp::Ordering;

use leptos::prelude::*;
use shared::User;

use crate::api;

/// one entry in the pagination strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageItem {
    Page(usize),
    Ellipsis,
}

const MAX_VISIBLE_PAGES: usize = 5;

/// windowed page list: all pages when few, otherwise the edges plus a
/// window around the current page, with ellipses in the gaps
fn page_numbers(total_pages: usize, current: usize) -> Vec<PageItem> {
    let mut pages = Vec::new();
    if total_pages <= MAX_VISIBLE_PAGES {
        pages.extend((1..=total_pages).map(PageItem::Page));
    } else if current <= 3 {
        pages.extend((1..=4).map(PageItem::Page));
        pages.push(PageItem::Ellipsis);
        pages.push(PageItem::Page(total_pages));
    } else if current >= total_pages - 2 {
        pages.push(PageItem::Page(1));
        pages.push(PageItem::Ellipsis);
        pages.extend((total_pages - 3..=total_pages).map(PageItem::Page));
    } else {
        pages.push(PageItem::Page(1));
        pages.push(PageItem::Ellipsis);
        pages.extend((current - 1..=current + 1).map(PageItem::Page));
        pages.push(PageItem::Ellipsis);
        pages.push(PageItem::Page(total_pages));
    }
    pages
}

fn field_of(user: &User, key: &str) -> String {
    match key {
        "name" => user.name.clone(),
        "email" => user.email.clone(),
        "phone" => user.phone.clone(),
        "gender" => user.gender.clone(),
        "status" => user.status.clone(),
        "role" => user.job_title.clone().unwrap_or_default(),
        "department" => user.department.clone().unwrap_or_default(),
        "city" => user.city.clone().unwrap_or_default(),
        _ => user.id.clone(),
    }
}

fn matches_search(user: &User, term: &str) -> bool {
    let term = term.to_lowercase();
    ["name", "email", "role", "phone", "city", "department", "gender", "status"]
        .iter()
        .any(|key| field_of(user, key).to_lowercase().contains(&term))
}

fn compare_users(a: &User, b: &User, key: &str) -> Ordering {
    if key == "id" {
        // ids are numeric strings; fall back to text when they aren't
        if let (Ok(a), Ok(b)) = (a.id.parse::<u64>(), b.id.parse::<u64>()) {
            return a.cmp(&b);
        }
    }
    field_of(a, key)
        .to_lowercase()
        .cmp(&field_of(b, key).to_lowercase())
}

fn process(users: &[User], term: &str, sort_by: &str, ascending: bool) -> Vec<User> {
    let mut filtered: Vec<User> = users
        .iter()
        .filter(|user| term.is_empty() || matches_search(user, term))
        .cloned()
        .collect();
    filtered.sort_by(|a, b| {
        let ord = compare_users(a, b, sort_by);
        if ascending { ord } else { ord.reverse() }
    });
    filtered
}

#[component]
pub fn UserDataView() -> impl IntoView {
    let (users, set_users) = signal(Vec::<User>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let (search, set_search) = signal(String::new());
    let (sort_by, set_sort_by) = signal("id".to_string());
    let (ascending, set_ascending) = signal(true);
    let (page, set_page) = signal(1usize);
    let (per_page, set_per_page) = signal(5usize);
    let (page_input, set_page_input) = signal("1".to_string());

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

    let processed = Memo::new(move |_| {
        users.with(|users| process(users, search.get().trim(), &sort_by.get(), ascending.get()))
    });
    let total_pages = Memo::new(move |_| {
        let total = processed.with(|p| p.len());
        total.div_ceil(per_page.get()).max(1)
    });
    let current_page_rows = move || {
        let start = (page.get() - 1) * per_page.get();
        processed.with(|p| p.iter().skip(start).take(per_page.get()).cloned().collect::<Vec<_>>())
    };

    let go_to = move |target: usize| {
        if target >= 1 && target <= total_pages.get() {
            set_page.set(target);
            set_page_input.set(target.to_string());
        }
    };

    let sort_column = move |column: &'static str| {
        if sort_by.get() == column {
            set_ascending.update(|asc| *asc = !*asc);
        } else {
            set_sort_by.set(column.to_string());
            set_ascending.set(true);
        }
        set_page.set(1);
        set_page_input.set("1".to_string());
    };

    let submit_page_input = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match page_input.get().parse::<usize>() {
            Ok(target) if target >= 1 && target <= total_pages.get() => set_page.set(target),
            _ => set_page_input.set(page.get().to_string()),
        }
    };

    let delete = move |id: String| {
        leptos::task::spawn_local(async move {
            match api::delete_user(&id).await {
                Ok(()) => set_users.update(|users| users.retain(|user| user.id != id)),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let header = move |column: &'static str, label: &'static str| {
        view! {
            <th on:click=move |_| sort_column(column)>
                {label}
                {move || {
                    (sort_by.get() == column)
                        .then(|| if ascending.get() { " ▲" } else { " ▼" })
                }}
            </th>
        }
    };

    view! {
        <div class="user-data-container">
            <h1>"User Data"</h1>

            <div class="table-controls">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search users..."
                    prop:value=move || search.get()
                    on:input=move |ev| {
                        set_search.set(event_target_value(&ev));
                        set_page.set(1);
                        set_page_input.set("1".to_string());
                    }
                />
                <select on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        set_per_page.set(size);
                        set_page.set(1);
                        set_page_input.set("1".to_string());
                    }
                }>
                    <option value="5">"5 per page"</option>
                    <option value="10">"10 per page"</option>
                    <option value="20">"20 per page"</option>
                </select>
            </div>

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
                            {header("id", "ID")}
                            {header("name", "Name")}
                            {header("email", "Email")}
                            {header("role", "Role")}
                            {header("department", "Department")}
                            {header("gender", "Gender")}
                            {header("status", "Status")}
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            current_page_rows()
                                .into_iter()
                                .map(|user| {
                                    let delete_id = user.id.clone();
                                    view! {
                                        <tr>
                                            <td>{user.id.clone()}</td>
                                            <td>{user.name.clone()}</td>
                                            <td>{user.email.clone()}</td>
                                            <td>{user.job_title.clone().unwrap_or_default()}</td>
                                            <td>{user.department.clone().unwrap_or_default()}</td>
                                            <td>{user.gender.clone()}</td>
                                            <td>{user.status.clone()}</td>
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

                <div class="pagination">
                    <button
                        disabled=move || page.get() == 1
                        on:click=move |_| go_to(page.get() - 1)
                    >
                        "Prev"
                    </button>
                    {move || {
                        page_numbers(total_pages.get(), page.get())
                            .into_iter()
                            .map(|item| match item {
                                PageItem::Page(n) => {
                                    view! {
                                        <button
                                            class=if page.get() == n {
                                                "page-btn active"
                                            } else {
                                                "page-btn"
                                            }
                                            on:click=move |_| go_to(n)
                                        >
                                            {n}
                                        </button>
                                    }
                                        .into_any()
                                }
                                PageItem::Ellipsis => {
                                    view! { <span class="page-ellipsis">"..."</span> }.into_any()
                                }
                            })
                            .collect_view()
                    }}
                    <button
                        disabled=move || page.get() >= total_pages.get()
                        on:click=move |_| go_to(page.get() + 1)
                    >
                        "Next"
                    </button>
                    <form class="page-input" on:submit=submit_page_input>
                        <input
                            type="text"
                            prop:value=move || page_input.get()
                            on:input=move |ev| set_page_input.set(event_target_value(&ev))
                        />
                        <span>{move || format!(" of {}", total_pages.get())}</span>
                    </form>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, name: &str, city: &str, status: &str) -> User {
        User {
            id: id.into(),
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            city: Some(city.into()),
            status: status.into(),
            ..Default::default()
        }
    }

    #[test]
    fn page_numbers_lists_everything_when_few_pages() {
        assert_eq!(
            page_numbers(3, 2),
            vec![PageItem::Page(1), PageItem::Page(2), PageItem::Page(3)]
        );
    }

    #[test]
    fn page_numbers_windows_the_front() {
        assert_eq!(
            page_numbers(10, 2),
            vec![
                PageItem::Page(1),
                PageItem::Page(2),
                PageItem::Page(3),
                PageItem::Page(4),
                PageItem::Ellipsis,
                PageItem::Page(10),
            ]
        );
    }

    #[test]
    fn page_numbers_windows_the_back() {
        assert_eq!(
            page_numbers(10, 9),
            vec![
                PageItem::Page(1),
                PageItem::Ellipsis,
                PageItem::Page(7),
                PageItem::Page(8),
                PageItem::Page(9),
                PageItem::Page(10),
            ]
        );
    }

    #[test]
    fn page_numbers_windows_the_middle() {
        assert_eq!(
            page_numbers(10, 5),
            vec![
                PageItem::Page(1),
                PageItem::Ellipsis,
                PageItem::Page(4),
                PageItem::Page(5),
                PageItem::Page(6),
                PageItem::Ellipsis,
                PageItem::Page(10),
            ]
        );
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let users = vec![
            user("1", "Winnie", "Nairobi", "active"),
            user("2", "Amina", "Mombasa", "inactive"),
        ];
        let hits = process(&users, "MOMBASA", "id", true);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Amina");
    }

    #[test]
    fn sort_by_name_descending() {
        let users = vec![
            user("1", "Amina", "Nairobi", "active"),
            user("2", "winnie", "Nairobi", "active"),
            user("3", "Brian", "Kisumu", "active"),
        ];
        let sorted = process(&users, "", "name", false);
        let names: Vec<&str> = sorted.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["winnie", "Brian", "Amina"]);
    }

    #[test]
    fn sort_by_id_is_numeric() {
        let users = vec![
            user("10", "A", "x", "active"),
            user("2", "B", "x", "active"),
        ];
        let sorted = process(&users, "", "id", true);
        assert_eq!(sorted[0].id, "2");
    }
}
