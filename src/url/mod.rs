//! URL generation subsystem.
//!
//! The deployment decides where the app is mounted; this module turns that
//! decision into concrete paths and links. Nothing else in the crate
//! hardcodes the mount prefix.

pub mod generator;

pub use generator::{UrlError, UrlGenerator};
