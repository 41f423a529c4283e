//! ==============================================================================
//! lib.rs - shared types for the admin panel
//! ==============================================================================
//!
//! purpose:
//!     defines the back-office entity records used across the project.
//!     having a shared crate ensures type consistency between the dashboard's
//!     api client and any service that produces the same json.
//!
//! relationships:
//!     - used by: dashboard (api client + all entity views)
//!     - wire format: json-server style REST endpoint with camelCase keys
//!
//! design rationale:
//!     the backing store is a loosely-typed json document, so string-ish
//!     fields that may be absent are Option<String> and everything carries
//!     serde defaults. views render "N/A" for missing values instead of
//!     failing deserialization.
//!
//! ==============================================================================

use serde::{Deserialize, Serialize};

// ==============================================================================
// user records
// ==============================================================================

/// a registered back-office user
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub date_of_birth: String,
    pub gender: String,
    /// display role, mirrored into `job_title` on creation
    pub role: String,
    /// "active", "inactive" or "on-leave"
    pub status: String,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub city: Option<String>,
    pub registration_date: Option<String>,
    pub last_login: Option<String>,
    pub created_at: Option<String>,
}

// ==============================================================================
// product catalog
// ==============================================================================

/// one catalog entry
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    /// unit price in KES
    pub price: f64,
    pub stock: u32,
    pub status: String,
}

// ==============================================================================
// savings accounts
// ==============================================================================

/// a customer savings account
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SavingsAccount {
    pub id: String,
    pub account_number: Option<String>,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    /// "Fixed Deposit", "Regular Savings", ...
    pub account_type: Option<String>,
    pub current_balance: f64,
    /// annual rate in percent
    pub interest_rate: f64,
    /// "active", "inactive", "suspended" or "pending"
    pub account_status: Option<String>,
    pub date_opened: Option<String>,
}

// ==============================================================================
// loan applications
// ==============================================================================

/// a loan application, carrying both the applicant's submission and the
/// officer's evaluation once processed
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LoanApplication {
    pub id: String,
    pub applicant_name: String,
    pub loan_type: String,
    pub loan_amount: f64,
    pub purpose: String,
    /// repayment period in months
    pub repayment_period: u32,
    pub employment_status: String,
    pub monthly_income: f64,
    pub other_income: f64,
    pub monthly_expenses: f64,
    pub collateral_type: String,
    pub collateral: String,
    pub collateral_value: f64,
    /// "Pending", "Under Review", "Approved" or "Rejected"
    pub status: String,
    pub application_date: Option<String>,

    // evaluation fields, absent until an officer processes the application
    pub credit_score: Option<u32>,
    pub officer_notes: Option<String>,
    pub approved_amount: Option<f64>,
    pub interest_rate: Option<f64>,
    pub conditions: Option<String>,
    pub processed_date: Option<String>,
    pub processed_by: Option<String>,
}

impl LoanApplication {
    /// whether this application still sits in the approval queue
    pub fn awaiting_decision(&self) -> bool {
        self.status == "Pending" || self.status == "Under Review"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_tolerates_sparse_json() {
        let user: User =
            serde_json::from_str(r#"{"id":"7","name":"Winnie Jomo","email":"w@j.co"}"#).unwrap();
        assert_eq!(user.name, "Winnie Jomo");
        assert!(user.job_title.is_none());
        assert_eq!(user.status, "");
    }

    #[test]
    fn user_round_trips_camel_case_keys() {
        let user = User {
            id: "1".into(),
            name: "Amina".into(),
            date_of_birth: "1990-04-01".into(),
            job_title: Some("Financial Analyst".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["dateOfBirth"], "1990-04-01");
        assert_eq!(json["jobTitle"], "Financial Analyst");
    }

    #[test]
    fn savings_account_numeric_fields_default_to_zero() {
        let account: SavingsAccount =
            serde_json::from_str(r#"{"id":"3","accountNumber":"SAV-003"}"#).unwrap();
        assert_eq!(account.current_balance, 0.0);
        assert_eq!(account.interest_rate, 0.0);
        assert!(account.account_status.is_none());
    }

    #[test]
    fn loan_awaiting_decision_matches_queue_statuses() {
        let mut loan = LoanApplication {
            status: "Pending".into(),
            ..Default::default()
        };
        assert!(loan.awaiting_decision());
        loan.status = "Under Review".into();
        assert!(loan.awaiting_decision());
        loan.status = "Approved".into();
        assert!(!loan.awaiting_decision());
    }
}
