//! Loan application view: submission form plus the applications table with
//! edit and delete.

use leptos::prelude::*;
use shared::LoanApplication;

use crate::api;
use crate::format;

pub(super) fn loan_status_class(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "pending" => "chip chip-warning",
        "under review" => "chip chip-info",
        "approved" => "chip chip-success",
        "rejected" => "chip chip-error",
        _ => "chip",
    }
}

const LOAN_TYPES: [&str; 4] = ["Personal", "Business", "Mortgage", "Education"];
const EMPLOYMENT_STATUSES: [&str; 4] = ["Employed", "Self-Employed", "Business Owner", "Retired"];
const COLLATERAL_TYPES: [&str; 4] = ["Vehicle", "Property", "Fixed Deposit", "None"];

#[component]
pub fn LoanApplicationView() -> impl IntoView {
    let (loans, set_loans) = signal(Vec::<LoanApplication>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let form = RwSignal::new(LoanApplication::default());
    // id of the application being edited, None while creating
    let (editing_id, set_editing_id) = signal(None::<String>);
    let (saving, set_saving) = signal(false);
    let (message, set_message) = signal(None::<Result<String, String>>);
    let (pending_delete, set_pending_delete) = signal(None::<String>);

    leptos::task::spawn_local(async move {
        match api::fetch_loan_applications().await {
            Ok(data) => set_loans.set(data),
            Err(e) => {
                leptos::logging::error!("failed to fetch loan applications: {e}");
                set_error.set(Some(e));
            }
        }
        set_loading.set(false);
    });

    let reset_form = move || {
        form.set(LoanApplication::default());
        set_editing_id.set(None);
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = form.get();
        if draft.applicant_name.trim().is_empty()
            || draft.loan_type.is_empty()
            || draft.loan_amount <= 0.0
            || draft.purpose.trim().is_empty()
            || draft.repayment_period == 0
            || draft.employment_status.is_empty()
        {
            set_message.set(Some(Err("Please fill in all required fields".to_string())));
            return;
        }

        set_saving.set(true);
        set_message.set(None);
        let editing = editing_id.get();
        leptos::task::spawn_local(async move {
            let result = match editing {
                Some(id) => {
                    let mut updated = draft;
                    updated.id = id;
                    api::update_loan_application(&updated).await
                }
                None => {
                    let mut created = draft;
                    created.id = (js_sys::Date::now() as u64).to_string();
                    created.status = "Pending".to_string();
                    let now_iso: String = js_sys::Date::new_0().to_iso_string().into();
                    created.application_date = Some(now_iso);
                    api::create_loan_application(&created).await
                }
            };
            match result {
                Ok(saved) => {
                    set_loans.update(|loans| {
                        if let Some(slot) = loans.iter_mut().find(|l| l.id == saved.id) {
                            *slot = saved;
                        } else {
                            loans.push(saved);
                        }
                    });
                    set_message.set(Some(Ok("Application saved".to_string())));
                    reset_form();
                }
                Err(e) => set_message.set(Some(Err(e))),
            }
            set_saving.set(false);
        });
    };

    let confirm_delete = move |_| {
        let Some(id) = pending_delete.get() else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::delete_loan_application(&id).await {
                Ok(()) => set_loans.update(|loans| loans.retain(|l| l.id != id)),
                Err(e) => set_error.set(Some(e)),
            }
            set_pending_delete.set(None);
        });
    };

    let text_field = move |label: &'static str,
                           get: fn(&LoanApplication) -> String,
                           set: fn(&mut LoanApplication, String)| {
        view! {
            <div class="form-field">
                <label>{label}</label>
                <input
                    type="text"
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </div>
        }
    };

    let amount_field = move |label: &'static str,
                             get: fn(&LoanApplication) -> f64,
                             set: fn(&mut LoanApplication, f64)| {
        view! {
            <div class="form-field">
                <label>{label}</label>
                <input
                    type="number"
                    prop:value=move || form.with(|f| get(f).to_string())
                    on:input=move |ev| {
                        form.update(|f| set(f, event_target_value(&ev).parse().unwrap_or(0.0)))
                    }
                />
            </div>
        }
    };

    let select_field = move |label: &'static str,
                             options: &'static [&'static str],
                             get: fn(&LoanApplication) -> String,
                             set: fn(&mut LoanApplication, String)| {
        view! {
            <div class="form-field">
                <label>{label}</label>
                <select
                    prop:value=move || form.with(get)
                    on:change=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                >
                    <option value="">"Select..."</option>
                    {options
                        .iter()
                        .map(|opt| view! { <option value=*opt>{*opt}</option> })
                        .collect_view()}
                </select>
            </div>
        }
    };

    view! {
        <div class="loan-application-container">
            <h1>"Loan Application"</h1>

            {move || {
                message
                    .get()
                    .map(|m| match m {
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

            <div class="card">
                <h3>
                    {move || {
                        if editing_id.get().is_some() {
                            "Edit Application"
                        } else {
                            "New Application"
                        }
                    }}
                </h3>
                <form class="loan-form" on:submit=submit>
                    {text_field(
                        "Applicant Name",
                        |f| f.applicant_name.clone(),
                        |f, v| f.applicant_name = v,
                    )}
                    {select_field(
                        "Loan Type",
                        &LOAN_TYPES,
                        |f| f.loan_type.clone(),
                        |f, v| f.loan_type = v,
                    )}
                    {amount_field("Loan Amount (KES)", |f| f.loan_amount, |f, v| f.loan_amount = v)}
                    {text_field("Purpose", |f| f.purpose.clone(), |f, v| f.purpose = v)}
                    <div class="form-field">
                        <label>"Repayment Period (months)"</label>
                        <input
                            type="number"
                            prop:value=move || form.with(|f| f.repayment_period.to_string())
                            on:input=move |ev| {
                                form.update(|f| {
                                    f.repayment_period =
                                        event_target_value(&ev).parse().unwrap_or(0)
                                })
                            }
                        />
                    </div>
                    {select_field(
                        "Employment Status",
                        &EMPLOYMENT_STATUSES,
                        |f| f.employment_status.clone(),
                        |f, v| f.employment_status = v,
                    )}
                    {amount_field(
                        "Monthly Income (KES)",
                        |f| f.monthly_income,
                        |f, v| f.monthly_income = v,
                    )}
                    {amount_field("Other Income (KES)", |f| f.other_income, |f, v| {
                        f.other_income = v
                    })}
                    {amount_field(
                        "Monthly Expenses (KES)",
                        |f| f.monthly_expenses,
                        |f, v| f.monthly_expenses = v,
                    )}
                    {select_field(
                        "Collateral Type",
                        &COLLATERAL_TYPES,
                        |f| f.collateral_type.clone(),
                        |f, v| f.collateral_type = v,
                    )}
                    {text_field(
                        "Collateral Description",
                        |f| f.collateral.clone(),
                        |f, v| f.collateral = v,
                    )}
                    {amount_field(
                        "Collateral Value (KES)",
                        |f| f.collateral_value,
                        |f, v| f.collateral_value = v,
                    )}
                    <div class="form-actions">
                        <button type="submit" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Submit" }}
                        </button>
                        <Show when=move || editing_id.get().is_some()>
                            <button type="button" on:click=move |_| reset_form()>
                                "Cancel Edit"
                            </button>
                        </Show>
                    </div>
                </form>
            </div>

            <Show when=move || loading.get()>
                <div class="spinner-row">
                    <span class="spinner"></span>
                    " Loading applications..."
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

            <Show when=move || !loading.get()>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Applicant"</th>
                            <th>"Type"</th>
                            <th>"Amount"</th>
                            <th>"Purpose"</th>
                            <th>"Period"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            loans
                                .get()
                                .into_iter()
                                .map(|loan| {
                                    let edit_loan = loan.clone();
                                    let delete_id = loan.id.clone();
                                    view! {
                                        <tr>
                                            <td>{loan.applicant_name.clone()}</td>
                                            <td>{loan.loan_type.clone()}</td>
                                            <td>{format::kes(loan.loan_amount)}</td>
                                            <td>{loan.purpose.clone()}</td>
                                            <td>{format!("{} months", loan.repayment_period)}</td>
                                            <td>
                                                <span class=loan_status_class(
                                                    &loan.status,
                                                )>{loan.status.clone()}</span>
                                            </td>
                                            <td>
                                                <button
                                                    class="action-btn"
                                                    on:click=move |_| {
                                                        set_editing_id.set(Some(edit_loan.id.clone()));
                                                        form.set(edit_loan.clone());
                                                    }
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="action-btn danger"
                                                    on:click=move |_| {
                                                        set_pending_delete.set(Some(delete_id.clone()))
                                                    }
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

            // delete confirmation
            <Show when=move || pending_delete.get().is_some()>
                <div class="dialog-backdrop">
                    <div class="dialog">
                        <h3>"Delete Application"</h3>
                        <p>"This will permanently remove the application."</p>
                        <div class="dialog-actions">
                            <button on:click=move |_| set_pending_delete.set(None)>
                                "Cancel"
                            </button>
                            <button class="danger" on:click=confirm_delete>
                                "Delete"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classes_follow_the_decision_lifecycle() {
        assert_eq!(loan_status_class("Pending"), "chip chip-warning");
        assert_eq!(loan_status_class("Under Review"), "chip chip-info");
        assert_eq!(loan_status_class("Approved"), "chip chip-success");
        assert_eq!(loan_status_class("Rejected"), "chip chip-error");
        assert_eq!(loan_status_class("???"), "chip");
    }
}
