//! ==============================================================================
//! api.rs - REST client for the back-office data service
//! ==============================================================================
//!
//! purpose:
//!     thin fetch layer over the json-server style endpoint that stores
//!     users, products, savings accounts and loan applications. every view
//!     goes through here; none of them build requests themselves.
//!
//! error model:
//!     Result<T, String> with human-readable messages, surfaced directly in
//!     the views' error banners. a non-2xx status becomes an Err carrying
//!     the status code.
//!
//! ==============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde_json::Value;
use shared::{LoanApplication, Product, SavingsAccount, User};

/// base url of the data service (json-server)
pub const API_BASE: &str = "http://localhost:3001";

fn ensure_ok(response: &Response) -> Result<(), String> {
    if response.ok() {
        Ok(())
    } else {
        Err(format!("request failed with status {}", response.status()))
    }
}

async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&format!("{API_BASE}{path}"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    ensure_ok(&response)?;
    response.json::<T>().await.map_err(|e| e.to_string())
}

async fn send_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
    request: RequestBuilder,
    body: &B,
) -> Result<T, String> {
    let response = request
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(body).map_err(|e| e.to_string())?)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    ensure_ok(&response)?;
    response.json::<T>().await.map_err(|e| e.to_string())
}

// ==============================================================================
// users
// ==============================================================================

pub async fn fetch_users() -> Result<Vec<User>, String> {
    get_json("/users").await
}

pub async fn create_user(user: &User) -> Result<User, String> {
    send_json(Request::post(&format!("{API_BASE}/users")), user).await
}

pub async fn update_user(user: &User) -> Result<User, String> {
    send_json(Request::put(&format!("{API_BASE}/users/{}", user.id)), user).await
}

pub async fn delete_user(id: &str) -> Result<(), String> {
    let response = Request::delete(&format!("{API_BASE}/users/{id}"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    ensure_ok(&response)
}

// ==============================================================================
// products
// ==============================================================================

pub async fn fetch_products() -> Result<Vec<Product>, String> {
    get_json("/products").await
}

pub async fn create_product(product: &Product) -> Result<Product, String> {
    send_json(Request::post(&format!("{API_BASE}/products")), product).await
}

pub async fn delete_product(id: &str) -> Result<(), String> {
    let response = Request::delete(&format!("{API_BASE}/products/{id}"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    ensure_ok(&response)
}

// ==============================================================================
// savings accounts
// ==============================================================================

/// fetch all savings accounts.
///
/// the endpoint has been observed returning either a bare array or an object
/// wrapping the array under "savingsAccounts" / "accounts", so parse loosely
/// before committing to the typed representation.
pub async fn fetch_savings_accounts() -> Result<Vec<SavingsAccount>, String> {
    let data: Value = get_json("/savingsAccounts").await?;
    let array = if data.is_array() {
        data
    } else if let Some(inner) = data.get("savingsAccounts").filter(|v| v.is_array()) {
        inner.clone()
    } else if let Some(inner) = data.get("accounts").filter(|v| v.is_array()) {
        inner.clone()
    } else {
        Value::Array(vec![])
    };
    serde_json::from_value(array).map_err(|e| e.to_string())
}

pub async fn update_savings_account(account: &SavingsAccount) -> Result<SavingsAccount, String> {
    send_json(
        Request::put(&format!("{API_BASE}/savingsAccounts/{}", account.id)),
        account,
    )
    .await
}

// ==============================================================================
// loan applications
// ==============================================================================

pub async fn fetch_loan_applications() -> Result<Vec<LoanApplication>, String> {
    get_json("/loanApplications").await
}

pub async fn create_loan_application(loan: &LoanApplication) -> Result<LoanApplication, String> {
    send_json(Request::post(&format!("{API_BASE}/loanApplications")), loan).await
}

pub async fn update_loan_application(loan: &LoanApplication) -> Result<LoanApplication, String> {
    send_json(
        Request::put(&format!("{API_BASE}/loanApplications/{}", loan.id)),
        loan,
    )
    .await
}

pub async fn delete_loan_application(id: &str) -> Result<(), String> {
    let response = Request::delete(&format!("{API_BASE}/loanApplications/{id}"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    ensure_ok(&response)
}
