//! Typed API surface: one function per backend operation.
//!
//! Pages call these instead of building requests by hand, so every
//! endpoint path and payload shape lives in exactly one place. Nothing
//! here inspects responses beyond decoding; interpretation of the data
//! is the pages' job.

use serde_json::json;

use crate::net::http::{self, ApiError};
use crate::net::types::{
    AuthResponse, Budget, BudgetDraft, DashboardSummary, Goal, GoalDraft, Insight, Prediction,
    Transaction, TransactionDraft, TransactionListResponse,
};

/// Forecast horizon requested when a page has no reason to pick its own.
pub const DEFAULT_PREDICTION_DAYS: u32 = 30;

/// Optional server-side filters for the transaction list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransactionFilters {
    pub category: String,
    pub start_date: String,
    pub end_date: String,
}

impl TransactionFilters {
    /// Render the non-blank filters as a query string, `""` when every
    /// filter is blank. Values are category slugs and ISO dates, so no
    /// percent-encoding is needed.
    fn query_string(&self) -> String {
        let mut query = String::new();
        for (key, value) in [
            ("category", &self.category),
            ("startDate", &self.start_date),
            ("endDate", &self.end_date),
        ] {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            query.push(if query.is_empty() { '?' } else { '&' });
            query.push_str(key);
            query.push('=');
            query.push_str(value);
        }
        query
    }
}

// ====== auth ======

/// Create an account. The server signs the new user straight in.
///
/// # Errors
/// `Unauthorized`/`Api` with the server's message on rejected input.
pub async fn register(name: &str, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    http::post_json("/auth/register", &register_payload(name, email, password)).await
}

/// Exchange credentials for a bearer token and profile.
///
/// # Errors
/// `Unauthorized` with the server's message on bad credentials.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    http::post_json("/auth/login", &login_payload(email, password)).await
}

fn register_payload(name: &str, email: &str, password: &str) -> serde_json::Value {
    json!({ "email": email, "password": password, "name": name })
}

fn login_payload(email: &str, password: &str) -> serde_json::Value {
    json!({ "email": email, "password": password })
}

// ====== transactions ======

/// # Errors
/// Any transport, status, or decode failure.
pub async fn list_transactions(filters: &TransactionFilters) -> Result<Vec<Transaction>, ApiError> {
    let path = format!("/transactions{}", filters.query_string());
    let list: TransactionListResponse = http::get_json(&path).await?;
    Ok(list.data)
}

/// # Errors
/// Any transport, status, or decode failure.
pub async fn get_transaction(id: i64) -> Result<Transaction, ApiError> {
    http::get_json(&transaction_endpoint(id)).await
}

/// # Errors
/// Any transport or status failure.
pub async fn create_transaction(draft: &TransactionDraft) -> Result<(), ApiError> {
    http::post_json_expect_ok("/transactions", draft).await
}

/// # Errors
/// Any transport or status failure.
pub async fn update_transaction(id: i64, draft: &TransactionDraft) -> Result<(), ApiError> {
    http::put_json_expect_ok(&transaction_endpoint(id), draft).await
}

/// # Errors
/// Any transport or status failure.
pub async fn delete_transaction(id: i64) -> Result<(), ApiError> {
    http::delete_expect_ok(&transaction_endpoint(id)).await
}

/// Bulk-import transactions from a CSV file upload.
///
/// # Errors
/// Any transport or status failure, or a file that cannot be attached.
#[cfg(feature = "csr")]
pub async fn import_transactions(file: &web_sys::File) -> Result<(), ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|err| ApiError::Network(format!("could not build form data: {err:?}")))?;
    form.append_with_blob("file", file)
        .map_err(|err| ApiError::Network(format!("could not attach file: {err:?}")))?;
    http::post_form_expect_ok("/transactions/import", &form).await
}

// ====== budgets ======

/// # Errors
/// Any transport, status, or decode failure.
pub async fn list_budgets() -> Result<Vec<Budget>, ApiError> {
    http::get_json("/budgets").await
}

/// # Errors
/// Any transport, status, or decode failure.
pub async fn get_budget(id: i64) -> Result<Budget, ApiError> {
    http::get_json(&budget_endpoint(id)).await
}

/// # Errors
/// Any transport or status failure.
pub async fn create_budget(draft: &BudgetDraft) -> Result<(), ApiError> {
    http::post_json_expect_ok("/budgets", draft).await
}

/// # Errors
/// Any transport or status failure.
pub async fn update_budget(id: i64, draft: &BudgetDraft) -> Result<(), ApiError> {
    http::put_json_expect_ok(&budget_endpoint(id), draft).await
}

/// # Errors
/// Any transport or status failure.
pub async fn delete_budget(id: i64) -> Result<(), ApiError> {
    http::delete_expect_ok(&budget_endpoint(id)).await
}

// ====== goals ======

/// # Errors
/// Any transport, status, or decode failure.
pub async fn list_goals() -> Result<Vec<Goal>, ApiError> {
    http::get_json("/goals").await
}

/// # Errors
/// Any transport, status, or decode failure.
pub async fn get_goal(id: i64) -> Result<Goal, ApiError> {
    http::get_json(&goal_endpoint(id)).await
}

/// # Errors
/// Any transport or status failure.
pub async fn create_goal(draft: &GoalDraft) -> Result<(), ApiError> {
    http::post_json_expect_ok("/goals", draft).await
}

/// # Errors
/// Any transport or status failure.
pub async fn update_goal(id: i64, draft: &GoalDraft) -> Result<(), ApiError> {
    http::put_json_expect_ok(&goal_endpoint(id), draft).await
}

/// # Errors
/// Any transport or status failure.
pub async fn delete_goal(id: i64) -> Result<(), ApiError> {
    http::delete_expect_ok(&goal_endpoint(id)).await
}

// ====== aggregates ======

/// # Errors
/// Any transport, status, or decode failure.
pub async fn get_insights() -> Result<Vec<Insight>, ApiError> {
    http::get_json("/insights").await
}

/// # Errors
/// Any transport, status, or decode failure.
pub async fn get_predictions(days: u32) -> Result<Vec<Prediction>, ApiError> {
    http::get_json(&predictions_endpoint(days)).await
}

/// # Errors
/// Any transport, status, or decode failure.
pub async fn get_dashboard() -> Result<DashboardSummary, ApiError> {
    http::get_json("/dashboard").await
}

/// Spending-trend aggregates. The shape is server-defined and passed
/// through untyped.
///
/// # Errors
/// Any transport, status, or decode failure.
pub async fn get_spending_trends() -> Result<serde_json::Value, ApiError> {
    http::get_json("/trends").await
}

fn transaction_endpoint(id: i64) -> String {
    format!("/transactions/{id}")
}

fn budget_endpoint(id: i64) -> String {
    format!("/budgets/{id}")
}

fn goal_endpoint(id: i64) -> String {
    format!("/goals/{id}")
}

fn predictions_endpoint(days: u32) -> String {
    format!("/predictions?days={days}")
}

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;
