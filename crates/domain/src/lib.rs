//! # spotbook-domain
//!
//! Pure domain model for the spotbook listing service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Spots** (listed properties) and their **Spot images**
//! - Define **Reviews** (one per user and spot) and their **Review images**
//! - Define the public projection of **Users**
//! - Field validation for incoming drafts, the rating fold, and the
//!   ownership guard shared by every owner-gated operation
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
mod input;
pub mod time;

pub mod rating;
pub mod review;
pub mod spot;
pub mod spot_image;
pub mod user;
