//! REST API wrappers for the external Vidhyardhi backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds and tests: every call returns `ApiError::Unavailable`, so
//! pages and the session store compile and test without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures are returned once to the caller; there is no retry. Rejections
//! carry the server's `message` (or a per-endpoint fallback) verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::error::ApiError;
use super::types::{
    AuthResponse, College, Course, Credentials, Envelope, Exam, ProfilePatch, ProfileResponse, Question,
    Registration, ReviewDraft, Roadmap, UserProfile,
};
use crate::config::ApiConfig;

/// Query string pairs; empty values are filtered out by the caller.
pub type Query = Vec<(&'static str, String)>;

/// Authentication endpoints the session store depends on.
///
/// Futures are not `Send`: everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait AuthApi {
    /// `POST /auth/login`.
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError>;

    /// `POST /auth/register`.
    async fn register(&self, registration: &Registration) -> Result<AuthResponse, ApiError>;

    /// `PUT /auth/updateprofile`.
    async fn update_profile(&self, token: &str, patch: &ProfilePatch) -> Result<UserProfile, ApiError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
}

/// Build a full endpoint URL from path segments and query pairs.
///
/// Segments are percent-encoded individually, so opaque identifiers taken
/// from the address bar cannot escape their path position.
pub(crate) fn endpoint_url(
    config: &ApiConfig,
    segments: &[&str],
    query: &[(&'static str, String)],
) -> Result<String, ApiError> {
    let mut url = Url::parse(&config.base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| ApiError::InvalidUrl(config.base_url.clone()))?
        .pop_if_empty()
        .extend(segments);
    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            pairs.append_pair(key, value);
        }
    }
    Ok(url.into())
}

#[cfg(any(test, feature = "csr"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// HTTP client for the external REST API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&'static str, String)],
        token: Option<&str>,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let url = endpoint_url(&self.config, segments, query)?;
        self.dispatch::<T, ()>(Method::Get, &url, token, None, fallback).await
    }

    async fn send<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        segments: &[&str],
        token: Option<&str>,
        body: &B,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let url = endpoint_url(&self.config, segments, &[])?;
        self.dispatch(method, &url, token, Some(body), fallback).await
    }

    async fn dispatch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        token: Option<&str>,
        body: Option<&B>,
        fallback: &str,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let mut builder = match method {
                Method::Get => Request::get(url),
                Method::Post => Request::post(url),
                Method::Put => Request::put(url),
            };
            if let Some(token) = token {
                builder = builder.header("Authorization", &bearer_header(token));
            }
            let sent = match body {
                Some(body) => builder
                    .json(body)
                    .map_err(|e| ApiError::Decode(e.to_string()))?
                    .send()
                    .await,
                None => builder.send().await,
            };
            let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                let status = resp.status();
                let text = resp.text().await.unwrap_or_default();
                leptos::logging::warn!("api rejected: {method:?} {url} status={status}");
                return Err(ApiError::rejected(status, &text, fallback));
            }
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (method, url, token, body, fallback);
            Err(ApiError::Unavailable)
        }
    }

    /// `GET /colleges` with filter and paging query pairs.
    ///
    /// # Errors
    ///
    /// Returns the API rejection or transport failure.
    pub async fn colleges(&self, query: &Query) -> Result<Envelope<Vec<College>>, ApiError> {
        self.get(&["colleges"], query, None, "Failed to fetch colleges").await
    }

    /// `GET /colleges/:id`.
    ///
    /// # Errors
    ///
    /// Returns the API rejection (404 for unknown ids) or transport failure.
    pub async fn college(&self, id: &str) -> Result<Envelope<College>, ApiError> {
        self.get(&["colleges", id], &[], None, "Failed to fetch college").await
    }

    /// `POST /colleges/:id/reviews`.
    ///
    /// # Errors
    ///
    /// Returns the API rejection or transport failure.
    pub async fn add_review(&self, token: &str, college_id: &str, review: &ReviewDraft) -> Result<(), ApiError> {
        self.send::<serde_json::Value, _>(
            Method::Post,
            &["colleges", college_id, "reviews"],
            Some(token),
            review,
            "Failed to add review",
        )
        .await
        .map(|_| ())
    }

    /// `GET /courses`.
    ///
    /// # Errors
    ///
    /// Returns the API rejection or transport failure.
    pub async fn courses(&self, query: &Query) -> Result<Envelope<Vec<Course>>, ApiError> {
        self.get(&["courses"], query, None, "Failed to fetch courses").await
    }

    /// `GET /courses/:id`.
    ///
    /// # Errors
    ///
    /// Returns the API rejection (404 for unknown ids) or transport failure.
    pub async fn course(&self, id: &str) -> Result<Envelope<Course>, ApiError> {
        self.get(&["courses", id], &[], None, "Failed to fetch course").await
    }

    /// `POST /courses/:id/enroll`.
    ///
    /// # Errors
    ///
    /// Returns the API rejection or transport failure.
    pub async fn enroll_course(&self, token: &str, course_id: &str) -> Result<(), ApiError> {
        self.send::<serde_json::Value, _>(
            Method::Post,
            &["courses", course_id, "enroll"],
            Some(token),
            &serde_json::json!({}),
            "Failed to enroll",
        )
        .await
        .map(|_| ())
    }

    /// `GET /exams`.
    ///
    /// # Errors
    ///
    /// Returns the API rejection or transport failure.
    pub async fn exams(&self, query: &Query) -> Result<Envelope<Vec<Exam>>, ApiError> {
        self.get(&["exams"], query, None, "Failed to fetch exams").await
    }

    /// `GET /roadmaps`.
    ///
    /// # Errors
    ///
    /// Returns the API rejection or transport failure.
    pub async fn roadmaps(&self, query: &Query, token: Option<&str>) -> Result<Envelope<Vec<Roadmap>>, ApiError> {
        self.get(&["roadmaps"], query, token, "Failed to fetch roadmaps").await
    }

    /// `GET /roadmaps/:id`.
    ///
    /// # Errors
    ///
    /// Returns the API rejection (404 for unknown ids) or transport failure.
    pub async fn roadmap(&self, id: &str, token: Option<&str>) -> Result<Envelope<Roadmap>, ApiError> {
        self.get(&["roadmaps", id], &[], token, "Failed to fetch roadmap").await
    }

    /// `POST /roadmaps/:id/follow` (toggles follow status server-side).
    ///
    /// # Errors
    ///
    /// Returns the API rejection or transport failure.
    pub async fn follow_roadmap(&self, token: &str, roadmap_id: &str) -> Result<(), ApiError> {
        self.send::<serde_json::Value, _>(
            Method::Post,
            &["roadmaps", roadmap_id, "follow"],
            Some(token),
            &serde_json::json!({}),
            "Failed to follow roadmap",
        )
        .await
        .map(|_| ())
    }

    /// `GET /questions`.
    ///
    /// # Errors
    ///
    /// Returns the API rejection or transport failure.
    pub async fn questions(&self, query: &Query, token: Option<&str>) -> Result<Envelope<Vec<Question>>, ApiError> {
        self.get(&["questions"], query, token, "Failed to fetch questions").await
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpApi {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.send(Method::Post, &["auth", "login"], None, credentials, "Login failed").await
    }

    async fn register(&self, registration: &Registration) -> Result<AuthResponse, ApiError> {
        self.send(Method::Post, &["auth", "register"], None, registration, "Registration failed")
            .await
    }

    async fn update_profile(&self, token: &str, patch: &ProfilePatch) -> Result<UserProfile, ApiError> {
        let body: ProfileResponse = self
            .send(Method::Put, &["auth", "updateprofile"], Some(token), patch, "Update failed")
            .await?;
        Ok(body.user)
    }
}
