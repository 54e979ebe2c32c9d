//! Client-side application state shared through context.

pub mod session;
