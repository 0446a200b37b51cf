//! Route table: URL paths, per-route access rules, and nested-layout defaults.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app::App` declares the same routes for `leptos_router`; this module is the
//! plain-data mirror used to compute redirects, access requirements, and
//! canonical links without a running router.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::content::Language;
use crate::net::types::Role;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const CONSULTANCY_PATH: &str = "/consultancy";
pub const COURSES_PATH: &str = "/courses";
pub const FOR_CODERS_PATH: &str = "/for-coders";
pub const FOR_STUDENTS_PATH: &str = "/for-students";
pub const ROADMAPS_PATH: &str = "/roadmaps";
pub const PROFILE_PATH: &str = "/profile";
pub const FORBIDDEN_PATH: &str = "/forbidden";
pub const ADMIN_PATH: &str = "/admin";

/// Who may render a view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Role(Role),
}

/// A resolved view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Login,
    Register,
    Consultancy,
    CollegeDetails { id: String },
    CourseDetails { id: String },
    ForCoders,
    ForStudents,
    Roadmaps,
    RoadmapDetails { id: String },
    Profile,
    Forbidden,
    Topic { language: Language, slug: String, subslug: Option<String> },
    Admin { rest: String },
}

/// Outcome of resolving a path against the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Render(AppRoute),
    Redirect(String),
    NotFound,
}

impl AppRoute {
    pub fn access(&self) -> Access {
        match self {
            Self::Home
            | Self::Login
            | Self::Register
            | Self::Consultancy
            | Self::CollegeDetails { .. }
            | Self::CourseDetails { .. }
            | Self::Forbidden
            | Self::Topic { .. } => Access::Public,
            Self::ForCoders | Self::ForStudents | Self::Roadmaps | Self::RoadmapDetails { .. } | Self::Profile => {
                Access::Authenticated
            }
            Self::Admin { .. } => Access::Role(Role::Admin),
        }
    }

    /// Canonical path for links.
    pub fn path(&self) -> String {
        match self {
            Self::Home => HOME_PATH.to_owned(),
            Self::Login => LOGIN_PATH.to_owned(),
            Self::Register => REGISTER_PATH.to_owned(),
            Self::Consultancy => CONSULTANCY_PATH.to_owned(),
            Self::CollegeDetails { id } => college_path(id),
            Self::CourseDetails { id } => course_path(id),
            Self::ForCoders => FOR_CODERS_PATH.to_owned(),
            Self::ForStudents => FOR_STUDENTS_PATH.to_owned(),
            Self::Roadmaps => ROADMAPS_PATH.to_owned(),
            Self::RoadmapDetails { id } => roadmap_path(id),
            Self::Profile => PROFILE_PATH.to_owned(),
            Self::Forbidden => FORBIDDEN_PATH.to_owned(),
            Self::Topic { language, slug, subslug } => topic_path(*language, slug, subslug.as_deref()),
            Self::Admin { rest } if rest.is_empty() => ADMIN_PATH.to_owned(),
            Self::Admin { rest } => format!("{ADMIN_PATH}/{rest}"),
        }
    }
}

pub fn college_path(id: &str) -> String {
    format!("/colleges/{id}")
}

pub fn course_path(id: &str) -> String {
    format!("{COURSES_PATH}/{id}")
}

pub fn roadmap_path(id: &str) -> String {
    format!("{ROADMAPS_PATH}/{id}")
}

pub fn language_path(language: Language) -> String {
    format!("/languages/{}", language.slug())
}

pub fn topic_path(language: Language, slug: &str, subslug: Option<&str>) -> String {
    match subslug {
        Some(sub) => format!("/languages/{}/{slug}/{sub}", language.slug()),
        None => format!("/languages/{}/{slug}", language.slug()),
    }
}

/// Where a bare language layout path redirects: its first topic, if it has any.
pub fn default_topic_path(language: Language) -> Option<String> {
    language.tutorial().default_topic().map(|topic| topic_path(language, topic.slug, None))
}

/// Resolve a path (query and fragment ignored) to a view, a redirect, or not-found.
///
/// Only nested layout roots redirect, and always to a path that itself
/// renders, so following a redirect never loops.
pub fn resolve(path: &str) -> Resolution {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let route = match segments.as_slice() {
        [] => AppRoute::Home,
        ["login"] => AppRoute::Login,
        ["register"] => AppRoute::Register,
        ["consultancy"] => AppRoute::Consultancy,
        ["colleges", id] => AppRoute::CollegeDetails { id: (*id).to_owned() },
        ["courses", id] => AppRoute::CourseDetails { id: (*id).to_owned() },
        ["for-coders"] => AppRoute::ForCoders,
        ["for-students"] => AppRoute::ForStudents,
        ["roadmaps"] => AppRoute::Roadmaps,
        ["roadmaps", id] => AppRoute::RoadmapDetails { id: (*id).to_owned() },
        ["profile"] => AppRoute::Profile,
        ["forbidden"] => AppRoute::Forbidden,
        ["admin", rest @ ..] => AppRoute::Admin { rest: rest.join("/") },
        ["languages", lang, rest @ ..] => {
            let Some(language) = Language::from_slug(lang) else {
                return Resolution::NotFound;
            };
            match rest {
                [] => {
                    return default_topic_path(language).map_or(Resolution::NotFound, Resolution::Redirect);
                }
                [slug] => AppRoute::Topic { language, slug: (*slug).to_owned(), subslug: None },
                [slug, sub] => AppRoute::Topic {
                    language,
                    slug: (*slug).to_owned(),
                    subslug: Some((*sub).to_owned()),
                },
                _ => return Resolution::NotFound,
            }
        }
        _ => return Resolution::NotFound,
    };
    Resolution::Render(route)
}
