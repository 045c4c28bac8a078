//! Protein Structure Explorer - GUI Library
//!
//! Core application types and modules for the Protein Structure Explorer
//! desktop application: a client for a remote protein structure analysis
//! service, with a 3D backbone viewer, per-chain composition charts,
//! mutation impact and UniProt alignment panels, and markdown reports.
//!
//! Built with Iced 0.14.0 using the Elm architecture.

pub mod app;
pub mod component;
pub mod error;
pub mod message;
pub mod service;
pub mod state;
pub mod theme;
pub mod view;
