//! Helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so the decision rules can be unit tested natively.

pub mod auth;
pub mod listing;
pub mod markdown;
pub mod storage;
