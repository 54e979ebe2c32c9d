//! # finhealth-client
//!
//! Leptos + WASM frontend for the FinHealthTracker personal finance
//! application. A single-page client that talks to the platform's REST
//! API for authentication, transactions, budgets, savings goals, and
//! AI-generated insights.
//!
//! This crate contains pages, components, application state, network
//! types, and the REST transport. Everything browser-facing sits behind
//! the `csr` feature so the reactive logic and its tests also compile
//! natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
