//! Loan approval queue: pending applications plus the officer's evaluation
//! dialog that records the decision.

use leptos::prelude::*;
use shared::LoanApplication;

use super::loan_application::loan_status_class;
use crate::api;
use crate::format;

/// evaluation form state, kept separate from the loan record until the
/// officer commits a decision
#[derive(Debug, Clone, Default, PartialEq)]
struct Evaluation {
    credit_score: String,
    officer_notes: String,
    /// "approve" or "reject"; empty until chosen
    recommended_action: String,
    approved_amount: String,
    interest_rate: String,
    conditions: String,
}

#[component]
pub fn LoanApprovalView() -> impl IntoView {
    let (queue, set_queue) = signal(Vec::<LoanApplication>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let (current, set_current) = signal(None::<LoanApplication>);
    let evaluation = RwSignal::new(Evaluation::default());
    let (processing, set_processing) = signal(false);
    let (notice, set_notice) = signal(None::<Result<String, String>>);

    leptos::task::spawn_local(async move {
        match api::fetch_loan_applications().await {
            Ok(data) => {
                set_queue.set(data.into_iter().filter(|l| l.awaiting_decision()).collect())
            }
            Err(e) => {
                leptos::logging::error!("failed to fetch loan queue: {e}");
                set_error.set(Some(e));
            }
        }
        set_loading.set(false);
    });

    let open_dialog = move |loan: LoanApplication| {
        evaluation.set(Evaluation {
            credit_score: loan.credit_score.map(|s| s.to_string()).unwrap_or_default(),
            officer_notes: loan.officer_notes.clone().unwrap_or_default(),
            recommended_action: String::new(),
            approved_amount: loan.loan_amount.to_string(),
            interest_rate: loan.interest_rate.map(|r| r.to_string()).unwrap_or_default(),
            conditions: loan.conditions.clone().unwrap_or_default(),
        });
        set_current.set(Some(loan));
    };

    let close_dialog = move || {
        set_current.set(None);
        evaluation.set(Evaluation::default());
    };

    let decide = move |_| {
        let Some(loan) = current.get() else {
            return;
        };
        let eval = evaluation.get();
        if eval.recommended_action.is_empty() {
            set_notice.set(Some(Err("Please fill in all required fields".to_string())));
            return;
        }

        let approve = eval.recommended_action == "approve";
        let mut updated = loan;
        updated.status = if approve { "Approved" } else { "Rejected" }.to_string();
        updated.credit_score = eval.credit_score.parse().ok();
        updated.officer_notes = Some(eval.officer_notes);
        updated.approved_amount = if approve {
            eval.approved_amount.parse().ok()
        } else {
            Some(0.0)
        };
        updated.interest_rate = eval.interest_rate.parse().ok();
        updated.conditions = Some(eval.conditions);
        updated.processed_date = Some(js_sys::Date::new_0().to_iso_string().into());
        updated.processed_by = Some("Loan Officer".to_string());

        set_processing.set(true);
        leptos::task::spawn_local(async move {
            match api::update_loan_application(&updated).await {
                Ok(saved) => {
                    // a decided application leaves the queue
                    set_queue.update(|queue| queue.retain(|l| l.id != saved.id));
                    set_notice.set(Some(Ok(format!(
                        "Application {} {}",
                        saved.id,
                        saved.status.to_lowercase()
                    ))));
                    close_dialog();
                }
                Err(e) => set_notice.set(Some(Err(e))),
            }
            set_processing.set(false);
        });
    };

    view! {
        <div class="loan-approval-container">
            <h1>"Loan Approvals"</h1>

            {move || {
                notice
                    .get()
                    .map(|n| match n {
                        Ok(text) => {
                            view! {
                                <div class="result success">
                                    <div class="result-value">{text}</div>
                                </div>
                            }
                        }
                        Err(text) => {
                            view! {
                                <div class="result error">
                                    <div class="result-value">{text}</div>
                                </div>
                            }
                        }
                    })
            }}

            <Show when=move || loading.get()>
                <div class="spinner-row">
                    <span class="spinner"></span>
                    " Loading approval queue..."
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
                <Show
                    when=move || !queue.with(|q| q.is_empty())
                    fallback=|| {
                        view! { <p class="empty-note">"No applications awaiting a decision."</p> }
                    }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Applicant"</th>
                                <th>"Type"</th>
                                <th>"Requested"</th>
                                <th>"Monthly Income"</th>
                                <th>"Applied"</th>
                                <th>"Status"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                queue
                                    .get()
                                    .into_iter()
                                    .map(|loan| {
                                        let dialog_loan = loan.clone();
                                        view! {
                                            <tr>
                                                <td>{loan.applicant_name.clone()}</td>
                                                <td>{loan.loan_type.clone()}</td>
                                                <td>{format::kes(loan.loan_amount)}</td>
                                                <td>{format::kes(loan.monthly_income)}</td>
                                                <td>
                                                    {format::opt_date(
                                                        loan.application_date.as_deref(),
                                                    )}
                                                </td>
                                                <td>
                                                    <span class=loan_status_class(
                                                        &loan.status,
                                                    )>{loan.status.clone()}</span>
                                                </td>
                                                <td>
                                                    <button
                                                        class="action-btn"
                                                        on:click=move |_| open_dialog(
                                                            dialog_loan.clone(),
                                                        )
                                                    >
                                                        "Evaluate"
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
            </Show>

            // evaluation dialog
            {move || {
                current
                    .get()
                    .map(|loan| {
                        view! {
                            <div class="dialog-backdrop">
                                <div class="dialog">
                                    <h3>{format!("Evaluate: {}", loan.applicant_name)}</h3>
                                    <p class="dialog-subtitle">
                                        {format!(
                                            "{} · {} over {} months",
                                            loan.loan_type,
                                            format::kes(loan.loan_amount),
                                            loan.repayment_period,
                                        )}
                                    </p>
                                    <div class="form-field">
                                        <label>"Credit Score"</label>
                                        <input
                                            type="number"
                                            prop:value=move || {
                                                evaluation.with(|e| e.credit_score.clone())
                                            }
                                            on:input=move |ev| {
                                                evaluation
                                                    .update(|e| {
                                                        e.credit_score = event_target_value(&ev)
                                                    });
                                            }
                                        />
                                    </div>
                                    <div class="form-field">
                                        <label>"Officer Notes"</label>
                                        <input
                                            type="text"
                                            prop:value=move || {
                                                evaluation.with(|e| e.officer_notes.clone())
                                            }
                                            on:input=move |ev| {
                                                evaluation
                                                    .update(|e| {
                                                        e.officer_notes = event_target_value(&ev)
                                                    });
                                            }
                                        />
                                    </div>
                                    <div class="form-field">
                                        <label>"Recommended Action"</label>
                                        <select
                                            prop:value=move || {
                                                evaluation.with(|e| e.recommended_action.clone())
                                            }
                                            on:change=move |ev| {
                                                evaluation
                                                    .update(|e| {
                                                        e.recommended_action = event_target_value(&ev)
                                                    });
                                            }
                                        >
                                            <option value="">"Select action"</option>
                                            <option value="approve">"Approve"</option>
                                            <option value="reject">"Reject"</option>
                                        </select>
                                    </div>
                                    <div class="form-field">
                                        <label>"Approved Amount (KES)"</label>
                                        <input
                                            type="number"
                                            prop:value=move || {
                                                evaluation.with(|e| e.approved_amount.clone())
                                            }
                                            on:input=move |ev| {
                                                evaluation
                                                    .update(|e| {
                                                        e.approved_amount = event_target_value(&ev)
                                                    });
                                            }
                                        />
                                    </div>
                                    <div class="form-field">
                                        <label>"Interest Rate (%)"</label>
                                        <input
                                            type="number"
                                            prop:value=move || {
                                                evaluation.with(|e| e.interest_rate.clone())
                                            }
                                            on:input=move |ev| {
                                                evaluation
                                                    .update(|e| {
                                                        e.interest_rate = event_target_value(&ev)
                                                    });
                                            }
                                        />
                                    </div>
                                    <div class="form-field">
                                        <label>"Conditions"</label>
                                        <input
                                            type="text"
                                            prop:value=move || {
                                                evaluation.with(|e| e.conditions.clone())
                                            }
                                            on:input=move |ev| {
                                                evaluation
                                                    .update(|e| {
                                                        e.conditions = event_target_value(&ev)
                                                    });
                                            }
                                        />
                                    </div>
                                    <div class="dialog-actions">
                                        <button on:click=move |_| close_dialog()>"Cancel"</button>
                                        <button
                                            disabled=move || processing.get()
                                            on:click=decide
                                        >
                                            {move || {
                                                if processing.get() {
                                                    "Processing..."
                                                } else {
                                                    "Record Decision"
                                                }
                                            }}
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
