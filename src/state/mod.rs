//! Client-side state modules.
//!
//! DESIGN
//! ======
//! The session lives in `session` (plain store) and `auth` (reactive handle);
//! `quiz` and `fetch` hold per-view state that components own locally.

pub mod auth;
pub mod fetch;
pub mod quiz;
pub mod session;
