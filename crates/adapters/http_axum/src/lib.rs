//! # spotbook-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** for spots, spot images and reviews under `/spots`
//! - Resolve the caller from the `x-user-id` header forwarded by the
//!   authentication layer in front of this service
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `spotbook-app` (for port traits and services) and
//! `spotbook-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod auth;
pub mod error;
pub mod json;
pub mod router;
pub mod state;
