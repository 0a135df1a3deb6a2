//! Canonical version normalization.
//!
//! Toolchain labels (`go1.22.3`), module-cache directory names (`v1.0.2`) and
//! user-supplied constraints (`1.20rc1`) all describe versions with slightly
//! different surface syntax. [`normalize`] folds them into a single
//! [`CanonicalVersion`] that can be compared, hashed and rendered as
//! `v{major}.{minor}.{patch}[-{label}]`.
//!
//! ```
//! use canonver_core::normalize;
//!
//! let v = normalize("go1.22rc1").unwrap();
//! assert_eq!(v.to_string(), "v1.22.0-rc1");
//! assert!(normalize("").is_none());
//! ```

pub mod normalize;
pub mod version;

pub use normalize::normalize;
pub use version::{CanonicalVersion, VersionError};
