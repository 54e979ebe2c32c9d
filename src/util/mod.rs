//! Cross-cutting helpers: localStorage access and display formatting.

pub mod format;
pub mod storage;
