//! Domain Layer - RepoHub
//!
//! Core types shared by every other crate in the workspace:
//!
//! - [`ports::RepoApi`]: the capability every repository host provider implements
//! - [`Payload`]: the string-keyed map submitted to and returned by a provider
//! - [`error::Error`]: the domain error type
//!
//! This crate has no knowledge of how providers are registered or selected.
//! That lives in `repohub-application`.

pub mod constants;
pub mod error;
pub mod ports;

pub use error::{Error, Result};
pub use ports::{Payload, RepoApi};
