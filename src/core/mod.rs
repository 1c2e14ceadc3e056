//! Core components of the `newsdesk-rs` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The [`DeskClient`] HTTP client and its builder.
//! - The primary [`DeskError`] type.
//! - The [`NewsService`] seam the aggregation pipeline fetches through.

/// The HTTP client (`DeskClient`), builder, and endpoint defaults.
pub mod client;
/// The primary error type (`DeskError`) for the crate.
pub mod error;
/// Service traits for abstracting news fetching.
pub mod services;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::DeskClient`
pub use client::{DeskClient, DeskClientBuilder};
pub use error::DeskError;
pub use services::{NewsFuture, NewsService};
