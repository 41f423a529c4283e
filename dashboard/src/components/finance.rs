//! Finance overview: portfolio totals plus shortcuts that open the detailed
//! finance views as tabs.

use leptos::prelude::*;
use shared::{LoanApplication, SavingsAccount};

use super::tab_manager::TabsContext;
use crate::api;
use crate::format;

#[component]
pub fn FinanceView() -> impl IntoView {
    let ctx = expect_context::<TabsContext>();

    let (accounts, set_accounts) = signal(Vec::<SavingsAccount>::new());
    let (loans, set_loans) = signal(Vec::<LoanApplication>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    leptos::task::spawn_local(async move {
        let mut first_error = None;
        match api::fetch_savings_accounts().await {
            Ok(data) => set_accounts.set(data),
            Err(e) => first_error = Some(e),
        }
        match api::fetch_loan_applications().await {
            Ok(data) => set_loans.set(data),
            Err(e) => {
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
        if let Some(e) = &first_error {
            leptos::logging::error!("failed to load finance overview: {e}");
        }
        set_error.set(first_error);
        set_loading.set(false);
    });

    let total_balance =
        move || accounts.with(|a| a.iter().map(|acc| acc.current_balance).sum::<f64>());
    let pending_loans =
        move || loans.with(|l| l.iter().filter(|loan| loan.awaiting_decision()).count());
    let requested_amount = move || {
        loans.with(|l| {
            l.iter()
                .filter(|loan| loan.awaiting_decision())
                .map(|loan| loan.loan_amount)
                .sum::<f64>()
        })
    };

    view! {
        <div class="finance-container">
            <h1>"Finance"</h1>

            <Show when=move || loading.get()>
                <div class="spinner-row">
                    <span class="spinner"></span>
                    " Loading finance data..."
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

            <div class="row">
                <div class="card">
                    <h3>"Savings"</h3>
                    <div class="overview-number">{move || accounts.with(|a| a.len())}</div>
                    <div>"open accounts"</div>
                    <div class="stat-value">{move || format::kes(total_balance())}</div>
                    <button
                        class="quick-link"
                        on:click=move |_| {
                            ctx.add_tab("savings-account", "Savings Accounts", "/savings-account")
                        }
                    >
                        "Open Savings Accounts"
                    </button>
                </div>
                <div class="card">
                    <h3>"Loan Queue"</h3>
                    <div class="overview-number">{pending_loans}</div>
                    <div>"applications awaiting a decision"</div>
                    <div class="stat-value">{move || format::kes(requested_amount())}</div>
                    <button
                        class="quick-link"
                        on:click=move |_| {
                            ctx.add_tab("loan-approvals", "Loan Approvals", "/loan-approvals")
                        }
                    >
                        "Open Loan Approvals"
                    </button>
                </div>
                <div class="card">
                    <h3>"Applications"</h3>
                    <div class="overview-number">{move || loans.with(|l| l.len())}</div>
                    <div>"loan applications on file"</div>
                    <button
                        class="quick-link"
                        on:click=move |_| {
                            ctx.add_tab("loan-application", "Loan Application", "/loan-application")
                        }
                    >
                        "Open Loan Application"
                    </button>
                </div>
            </div>
        </div>
    }
}
