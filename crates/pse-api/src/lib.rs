//! Typed async client for the protein structure analysis service.
//!
//! Two collaborators live behind this crate:
//!
//! - [`ApiClient`] — the analysis service (metadata, physicochemical and
//!   sequence analysis, mutation impact, alignment, reports). All endpoints
//!   return JSON; a payload carrying an `error` string is a domain-level
//!   rejection and maps to [`ApiError::Service`].
//! - [`CoordinateClient`] — the public structure archive serving raw
//!   coordinate files for the 3D viewer.

pub mod client;
pub mod coords;
pub mod error;
pub mod types;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use coords::{CoordinateClient, DEFAULT_ARCHIVE_URL};
pub use error::{ApiError, Result};
