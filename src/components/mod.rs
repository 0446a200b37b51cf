//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and shared widgets while reading the session
//! from the `SessionContext` provider.

pub mod markdown_view;
pub mod navbar;
pub mod pagination_bar;
pub mod protected_route;
pub mod quiz_block;
pub mod status;
pub mod topic_sidebar;
