//! Route-level screens, one module per page.

pub mod budgets;
pub mod dashboard;
pub mod goals;
pub mod insights;
pub mod login;
pub mod not_found;
pub mod register;
pub mod transactions;
