//! User registration form.
//!
//! Dropdown options are harvested from the distinct values already present
//! in the user records; a fetch failure falls back to a static set so the
//! form stays usable.

use std::collections::HashMap;

use leptos::prelude::*;
use shared::User;

use crate::api;

/// same shape the original form accepted: nonspace '@' nonspace '.' nonspace
fn valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    let nonblank = |s: &str| !s.is_empty() && !s.contains(char::is_whitespace);
    nonblank(local) && nonblank(host) && nonblank(tld)
}

fn distinct(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = Vec::new();
    for value in values {
        if !value.is_empty() && !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

#[component]
pub fn UserPersonalInfoView() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (address, set_address) = signal(String::new());
    let (date_of_birth, set_date_of_birth) = signal(String::new());
    let (gender, set_gender) = signal(String::new());
    let (role, set_role) = signal(String::new());
    let (status, set_status) = signal(String::new());

    let (errors, set_errors) = signal(HashMap::<&'static str, &'static str>::new());
    let (saving, set_saving) = signal(false);
    let (message, set_message) = signal(None::<Result<String, String>>);

    let (genders, set_genders) = signal(Vec::<String>::new());
    let (roles, set_roles) = signal(Vec::<String>::new());
    let (statuses, set_statuses) = signal(Vec::<String>::new());

    leptos::task::spawn_local(async move {
        match api::fetch_users().await {
            Ok(users) => {
                set_genders.set(distinct(users.iter().map(|u| u.gender.clone())));
                set_roles.set(distinct(users.iter().filter_map(|u| u.job_title.clone())));
                set_statuses.set(distinct(users.iter().map(|u| u.status.clone())));
            }
            Err(e) => {
                leptos::logging::error!("falling back to static dropdown options: {e}");
                set_genders.set(vec!["male".into(), "female".into(), "other".into()]);
                set_roles.set(vec![
                    "Software Developer".into(),
                    "Marketing Manager".into(),
                    "Financial Analyst".into(),
                    "HR Specialist".into(),
                ]);
                set_statuses.set(vec!["active".into(), "inactive".into(), "on-leave".into()]);
            }
        }
    });

    let validate = move || {
        let mut errors = HashMap::new();
        if name.get().trim().is_empty() {
            errors.insert("name", "Full name is required");
        }
        let email_value = email.get();
        if email_value.trim().is_empty() {
            errors.insert("email", "Email is required");
        } else if !valid_email(email_value.trim()) {
            errors.insert("email", "Email format is invalid");
        }
        if phone.get().trim().is_empty() {
            errors.insert("phone", "Phone number is required");
        }
        if address.get().trim().is_empty() {
            errors.insert("address", "Address is required");
        }
        if date_of_birth.get().is_empty() {
            errors.insert("dateOfBirth", "Date of birth is required");
        }
        if gender.get().is_empty() {
            errors.insert("gender", "Gender is required");
        }
        if role.get().is_empty() {
            errors.insert("role", "Role is required");
        }
        let ok = errors.is_empty();
        set_errors.set(errors);
        ok
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !validate() {
            set_message.set(Some(Err("Please fix the errors below".to_string())));
            return;
        }

        let now_iso: String = js_sys::Date::new_0().to_iso_string().into();
        let today = now_iso.split('T').next().unwrap_or_default().to_string();
        let selected_role = role.get();
        let user = User {
            id: (js_sys::Date::now() as u64).to_string(),
            name: name.get().trim().to_string(),
            email: email.get().trim().to_string(),
            phone: phone.get().trim().to_string(),
            address: address.get().trim().to_string(),
            date_of_birth: date_of_birth.get(),
            gender: gender.get(),
            role: selected_role.clone(),
            status: status.get(),
            job_title: Some(selected_role.clone()),
            department: Some(selected_role.to_lowercase().replace(' ', "")),
            city: None,
            registration_date: Some(today),
            last_login: Some(now_iso.clone()),
            created_at: Some(now_iso),
        };

        set_saving.set(true);
        set_message.set(None);
        leptos::task::spawn_local(async move {
            match api::create_user(&user).await {
                Ok(_) => {
                    set_message
                        .set(Some(Ok("User information saved successfully!".to_string())));
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_phone.set(String::new());
                    set_address.set(String::new());
                    set_date_of_birth.set(String::new());
                    set_gender.set(String::new());
                    set_role.set(String::new());
                    set_status.set(String::new());
                }
                Err(e) => set_message.set(Some(Err(e))),
            }
            set_saving.set(false);
        });
    };

    let field_error = move |field: &'static str| {
        errors
            .get()
            .get(field)
            .map(|msg| view! { <span class="field-error">{*msg}</span> })
    };

    view! {
        <div class="personal-info-container">
            <h1>"Personal Info"</h1>

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

            <form class="personal-info-form" on:submit=submit>
                <div class="form-field">
                    <label>"Full Name"</label>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    {move || field_error("name")}
                </div>
                <div class="form-field">
                    <label>"Email"</label>
                    <input
                        type="text"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    {move || field_error("email")}
                </div>
                <div class="form-field">
                    <label>"Phone"</label>
                    <input
                        type="text"
                        prop:value=move || phone.get()
                        on:input=move |ev| set_phone.set(event_target_value(&ev))
                    />
                    {move || field_error("phone")}
                </div>
                <div class="form-field">
                    <label>"Address"</label>
                    <input
                        type="text"
                        prop:value=move || address.get()
                        on:input=move |ev| set_address.set(event_target_value(&ev))
                    />
                    {move || field_error("address")}
                </div>
                <div class="form-field">
                    <label>"Date of Birth"</label>
                    <input
                        type="date"
                        prop:value=move || date_of_birth.get()
                        on:input=move |ev| set_date_of_birth.set(event_target_value(&ev))
                    />
                    {move || field_error("dateOfBirth")}
                </div>
                <div class="form-field">
                    <label>"Gender"</label>
                    <select
                        prop:value=move || gender.get()
                        on:change=move |ev| set_gender.set(event_target_value(&ev))
                    >
                        <option value="">"Select gender"</option>
                        {move || {
                            genders
                                .get()
                                .into_iter()
                                .map(|g| view! { <option value=g.clone()>{g.clone()}</option> })
                                .collect_view()
                        }}
                    </select>
                    {move || field_error("gender")}
                </div>
                <div class="form-field">
                    <label>"Role"</label>
                    <select
                        prop:value=move || role.get()
                        on:change=move |ev| set_role.set(event_target_value(&ev))
                    >
                        <option value="">"Select role"</option>
                        {move || {
                            roles
                                .get()
                                .into_iter()
                                .map(|r| view! { <option value=r.clone()>{r.clone()}</option> })
                                .collect_view()
                        }}
                    </select>
                    {move || field_error("role")}
                </div>
                <div class="form-field">
                    <label>"Status"</label>
                    <select
                        prop:value=move || status.get()
                        on:change=move |ev| set_status.set(event_target_value(&ev))
                    >
                        <option value="">"Select status"</option>
                        {move || {
                            statuses
                                .get()
                                .into_iter()
                                .map(|s| view! { <option value=s.clone()>{s.clone()}</option> })
                                .collect_view()
                        }}
                    </select>
                </div>
                <button type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_email_accepts_ordinary_addresses() {
        assert!(valid_email("winnie@jomo.co.ke"));
        assert!(valid_email("a@b.c"));
    }

    #[test]
    fn valid_email_rejects_malformed_addresses() {
        assert!(!valid_email("no-at-sign"));
        assert!(!valid_email("missing@tld"));
        assert!(!valid_email("spaces in@local.part"));
        assert!(!valid_email("@example.com"));
    }

    #[test]
    fn distinct_drops_duplicates_and_blanks() {
        let values = vec![
            "active".to_string(),
            "".to_string(),
            "inactive".to_string(),
            "active".to_string(),
        ];
        assert_eq!(distinct(values.into_iter()), vec!["active", "inactive"]);
    }
}
