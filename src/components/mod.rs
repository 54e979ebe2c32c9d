//! Shared building blocks used across pages.

pub mod layout;
pub mod route_guard;
pub mod spending_overview;
pub mod stat_card;
