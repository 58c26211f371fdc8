//! # overlook-npm
//!
//! External collaborators for overlook's override audit:
//! - Read override declarations from a `package.json` (including the
//!   pnpm-nested `pnpm.overrides` map)
//! - Detect which package manager's lock artifact is present
//! - Invoke `npm explain --json` and parse its response, tolerating partial
//!   output on non-zero exit
//!
//! The invoker implements [`overlook_core::Explainer`], so the core stays a
//! pure transform over this crate's responses.

#![warn(missing_docs)]

pub mod error;
pub mod explain;
pub mod lockfile;
pub mod manifest;

pub use error::{Error, Result};
pub use explain::ExplainInvoker;
pub use lockfile::PackageManager;
pub use manifest::read_overrides;
