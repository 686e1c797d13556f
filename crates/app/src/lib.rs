//! # spotbook-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `SpotRepository`: CRUD for spots
//!   - `SpotImageRepository`: images attached to spots
//!   - `ReviewRepository`: reviews, including the one-per-user lookup
//!   - `ReviewImageRepository`: images attached to reviews
//!   - `UserRepository`: read access to user profiles
//! - Define **driving/inbound ports** as use-case structs:
//!   - `SpotService`: list, detail, create, update, delete, add image
//!   - `ReviewService`: list and create reviews for a spot
//!   - `UserService`: resolve and register users
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `spotbook-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
