//! Wire types for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend is a separate service and its JSON is not always tidy:
//! money fields arrive as numbers or as numeric strings depending on the
//! endpoint, and optional fields are sometimes omitted entirely. Every
//! response type here defaults missing fields and accepts both numeric
//! encodings so one sloppy row never sinks a whole list.
//!
//! Drafts (the `*Draft` types) are the client-to-server half: they
//! serialize exactly the payload each create/update endpoint expects.

use serde::{Deserialize, Serialize};

/// Accept a JSON number, a numeric string, or null for an amount field.
///
/// Unparseable strings and nulls collapse to `0.0` rather than failing
/// the surrounding record. Non-numeric shapes (objects, arrays) are
/// still an error.
fn deserialize_lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0.0),
        serde_json::Value::Number(number) => Ok(number.as_f64().unwrap_or(0.0)),
        serde_json::Value::String(text) => Ok(text.trim().parse().unwrap_or(0.0)),
        other => Err(serde::de::Error::custom(format!(
            "expected an amount, got {other}"
        ))),
    }
}

/// Signed-in account profile. Persisted to localStorage verbatim, so an
/// empty object must deserialize cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Body of a successful login or registration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub user: User,
}

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    pub id: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_lenient_amount")]
    pub amount: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default, rename = "type")]
    pub kind: TransactionKind,
    #[serde(default)]
    pub date: String,
}

/// Transactions come back wrapped in a `data` envelope, unlike every
/// other list endpoint.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TransactionListResponse {
    #[serde(default)]
    pub data: Vec<Transaction>,
}

/// Payload for creating or updating a transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: f64,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Budget {
    pub id: i64,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "deserialize_lenient_amount")]
    pub limit: f64,
    /// Server-computed spend against this budget for the current period.
    #[serde(default, deserialize_with = "deserialize_lenient_amount")]
    pub spent: f64,
}

/// Payload for creating or updating a budget. `spent` is server-owned
/// and never sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetDraft {
    pub category: String,
    pub limit: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_lenient_amount")]
    pub target_amount: f64,
    #[serde(default, deserialize_with = "deserialize_lenient_amount")]
    pub saved_amount: f64,
    #[serde(default)]
    pub deadline: String,
    #[serde(default = "default_goal_priority")]
    pub priority: String,
    #[serde(default = "default_goal_status")]
    pub status: String,
}

fn default_goal_priority() -> String {
    "medium".to_owned()
}

fn default_goal_status() -> String {
    "active".to_owned()
}

/// Payload for creating or updating a goal. The server stores whatever
/// `saved_amount`/`status` the client sends, so creation must zero them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalDraft {
    pub name: String,
    pub target_amount: f64,
    pub saved_amount: f64,
    pub deadline: String,
    pub priority: String,
    pub status: String,
}

/// One AI-generated recommendation.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub actionable: bool,
}

/// One per-category spending forecast.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Prediction {
    pub category: String,
    #[serde(deserialize_with = "deserialize_lenient_amount")]
    pub predicted_amount: f64,
    /// Model confidence in `0.0..=1.0`.
    #[serde(deserialize_with = "deserialize_lenient_amount")]
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CategorySpend {
    pub category: String,
    #[serde(deserialize_with = "deserialize_lenient_amount")]
    pub amount: f64,
}

/// Aggregates behind the dashboard's stat cards and chart.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(deserialize_with = "deserialize_lenient_amount")]
    pub total_spent: f64,
    #[serde(deserialize_with = "deserialize_lenient_amount")]
    pub total_saved: f64,
    #[serde(deserialize_with = "deserialize_lenient_amount")]
    pub total_income: f64,
    #[serde(deserialize_with = "deserialize_lenient_amount")]
    pub total_expenses: f64,
    /// Percent of budgets in warning or exceeded state.
    #[serde(deserialize_with = "deserialize_lenient_amount")]
    pub budget_alert: f64,
    #[serde(deserialize_with = "deserialize_lenient_amount")]
    pub savings_rate: f64,
    pub spending_by_category: Vec<CategorySpend>,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
