//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped fetching and form state and delegates shared
//! widgets to `components`.

pub mod admin;
pub mod college_details;
pub mod consultancy;
pub mod course_details;
pub mod for_coders;
pub mod for_students;
pub mod forbidden;
pub mod home;
pub mod languages;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
pub mod roadmap_details;
pub mod roadmaps;
