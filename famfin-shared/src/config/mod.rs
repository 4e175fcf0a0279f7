//! # Configuration
//!
//! Client-side settings: where the REST API lives, where the session is
//! persisted and how the native binaries log.

pub mod client;
