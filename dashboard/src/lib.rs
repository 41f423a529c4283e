//! ==============================================================================
//! lib.rs - Admin Panel Dashboard
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm dashboard for a financial/retail back office: user
//!     management, product catalog, savings accounts and loan workflows,
//!     presented as a tabbed single-page application.
//!
//! architecture:
//!     - leptos csr (client-side rendering), compiled to wasm
//!     - leptos_router owns the url; the tab controller owns the tabs and
//!       keeps the two in step in both directions
//!     - every routed view renders inside the TabManager shell and reaches
//!       the navigation capabilities through context
//!     - entity data lives behind a json REST endpoint, fetched via api.rs
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use wasm_bindgen::prelude::*;

mod api;
mod components;
mod format;
mod tabs;

use components::{
    DashboardView, FinanceView, LoanApplicationView, LoanApprovalView, ProductsView,
    SavingsAccountsView, TabManager, UserDataView, UserPersonalInfoView, UsersView,
};

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Admin Panel" />
        <Router>
            <TabManager>
                <Routes fallback=|| view! { <div class="not-found">"Page not found."</div> }>
                    <Route path=path!("/") view=DashboardView />
                    <Route path=path!("/users") view=UsersView />
                    <Route path=path!("/products") view=ProductsView />
                    <Route path=path!("/user-personal-info") view=UserPersonalInfoView />
                    <Route path=path!("/user-data") view=UserDataView />
                    <Route path=path!("/finance") view=FinanceView />
                    <Route path=path!("/savings-account") view=SavingsAccountsView />
                    <Route path=path!("/loan-application") view=LoanApplicationView />
                    <Route path=path!("/loan-approvals") view=LoanApprovalView />
                </Routes>
            </TabManager>
        </Router>
    }
}
