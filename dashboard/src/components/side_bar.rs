//! Navigation menu.
//!
//! Holds only presentation state (collapsed flag, which groups are expanded);
//! every destination click is forwarded to the tab controller via `add_tab`.

use leptos::prelude::*;

use super::tab_manager::TabsContext;

/// one leaf destination in the menu
#[component]
fn MenuLink(
    id: &'static str,
    title: &'static str,
    path: &'static str,
    label: &'static str,
) -> impl IntoView {
    let ctx = expect_context::<TabsContext>();
    view! {
        <li>
            <a
                href=path
                on:click=move |ev| {
                    // the tab controller's navigate is the sole writer of the
                    // url, and a leaf click must not toggle its parent group
                    ev.prevent_default();
                    ev.stop_propagation();
                    ctx.add_tab(id, title, path);
                }
            >
                <span>{label}</span>
            </a>
        </li>
    }
}

#[component]
pub fn SideBar() -> impl IntoView {
    let (collapsed, set_collapsed) = signal(false);
    let (user_info_open, set_user_info_open) = signal(false);
    let (finance_open, set_finance_open) = signal(false);

    view! {
        <div class="major-container">
            <div class=move || if collapsed.get() { "sidebar collapsed" } else { "sidebar" }>
                <div class="sidebar-header">
                    <h2>{move || if collapsed.get() { "AP" } else { "Admin Panel" }}</h2>
                    <button
                        class="toggle-btn"
                        on:click=move |_| set_collapsed.update(|c| *c = !*c)
                    >
                        {move || if collapsed.get() { "☰" } else { "✕" }}
                    </button>
                </div>
                <ul class="sidebar-menu">
                    <MenuLink id="dashboard" title="Dashboard" path="/" label="Dashboard" />
                    <MenuLink id="users" title="User Management" path="/users" label="Users" />
                    <MenuLink
                        id="products"
                        title="Product Management"
                        path="/products"
                        label="Products"
                    />

                    <li
                        class="menu-group"
                        on:click=move |_| set_user_info_open.update(|open| *open = !*open)
                    >
                        <div class="menu-group-header">
                            <span>"User Information"</span>
                            <span class="chevron">
                                {move || if user_info_open.get() { "▾" } else { "▸" }}
                            </span>
                        </div>
                        <Show when=move || user_info_open.get()>
                            <ul class="submenu">
                                <MenuLink
                                    id="user-personal-info"
                                    title="Personal Info"
                                    path="/user-personal-info"
                                    label="Personal Info"
                                />
                                <MenuLink
                                    id="user-data"
                                    title="User Data"
                                    path="/user-data"
                                    label="User Data"
                                />
                            </ul>
                        </Show>
                    </li>

                    <li
                        class="menu-group"
                        on:click=move |_| set_finance_open.update(|open| *open = !*open)
                    >
                        <div class="menu-group-header">
                            <span>"Finance"</span>
                            <span class="chevron">
                                {move || if finance_open.get() { "▾" } else { "▸" }}
                            </span>
                        </div>
                        <Show when=move || finance_open.get()>
                            <ul class="submenu">
                                <MenuLink
                                    id="finance"
                                    title="Finance"
                                    path="/finance"
                                    label="Finance Overview"
                                />
                                <MenuLink
                                    id="savings-account"
                                    title="Savings Accounts"
                                    path="/savings-account"
                                    label="Savings Accounts"
                                />
                                <MenuLink
                                    id="loan-application"
                                    title="Loan Application"
                                    path="/loan-application"
                                    label="Loan Application"
                                />
                                <MenuLink
                                    id="loan-approvals"
                                    title="Loan Approvals"
                                    path="/loan-approvals"
                                    label="Loan Approvals"
                                />
                            </ul>
                        </Show>
                    </li>
                </ul>
            </div>
        </div>
    }
}
