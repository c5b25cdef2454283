//! Error Types for Catalog Access
//!
//! The constant table itself cannot fail: every value is a literal or a
//! fixed formula. Errors only arise on the catalog surface, when a caller
//! asks for a name that does not exist or when the self-check finds a
//! record that disagrees with its documented derivation.
//!
//! Errors stay heap-free so the crate works under `no_std`. Names coming
//! from the catalog are `&'static str`; the one caller-supplied name is
//! copied into an inline [`heapless::String`].
//!
//! ```rust
//! use relunits_core::{catalog, CatalogError};
//!
//! fn speed_of_light_or_default(name: &str) -> f64 {
//!     match catalog::get(name) {
//!         Ok(value) => value,
//!         Err(CatalogError::UnknownConstant { name }) => {
//!             // Typo in a parameter file - report it and fall back
//!             println!("no constant called {}", name);
//!             299_792_458.0
//!         }
//!         Err(CatalogError::NameTooLong { len }) => {
//!             println!("constant name of {} bytes is not in the table", len);
//!             299_792_458.0
//!         }
//!         Err(e) => panic!("catalog lookup cannot fail with {}", e),
//!     }
//! }
//!
//! assert_eq!(speed_of_light_or_default("c0"), 299_792_458.0);
//! assert_eq!(speed_of_light_or_default("c1"), 299_792_458.0);
//! ```

use heapless::String;
use thiserror_no_std::Error;

/// Longest unknown name that is echoed back in [`CatalogError::UnknownConstant`].
pub const MAX_NAME_LEN: usize = 32;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// No constant with this name
    #[error("Unknown constant: {name}")]
    UnknownConstant {
        /// The requested name
        name: String<MAX_NAME_LEN>,
    },

    /// Unknown name too long to echo back
    #[error("Unknown constant: name of {len} bytes is too long to report")]
    NameTooLong {
        /// Length of the requested name in bytes
        len: usize,
    },

    /// A derived constant depends on a name that is not declared before it
    #[error("Constant {name} depends on {dependency}, which is not declared earlier")]
    UnresolvedDependency {
        /// Derived constant
        name: &'static str,
        /// Missing or out-of-order dependency
        dependency: &'static str,
    },

    /// Re-evaluating the derivation does not reproduce the stored value
    #[error("Constant {name} = {actual} does not match its derivation {expected}")]
    DerivationMismatch {
        /// Constant being checked
        name: &'static str,
        /// Value produced by the derivation
        expected: f64,
        /// Value stored in the table
        actual: f64,
    },

    /// Stored value disagrees with the approximation quoted in the reference listing
    #[error("Constant {name} = {actual} disagrees with documented value {documented}")]
    DocumentedMismatch {
        /// Constant being checked
        name: &'static str,
        /// Value quoted in the reference listing
        documented: f64,
        /// Value stored in the table
        actual: f64,
    },
}

impl CatalogError {
    /// Build a [`CatalogError::UnknownConstant`], falling back to
    /// [`CatalogError::NameTooLong`] when the name does not fit inline.
    pub fn unknown(name: &str) -> Self {
        let mut buf = String::new();
        match buf.push_str(name) {
            Ok(()) => Self::UnknownConstant { name: buf },
            Err(()) => Self::NameTooLong { len: name.len() },
        }
    }

    /// Name of the catalog entry involved, if the error refers to one.
    pub fn constant(&self) -> Option<&'static str> {
        match self {
            Self::UnresolvedDependency { name, .. }
            | Self::DerivationMismatch { name, .. }
            | Self::DocumentedMismatch { name, .. } => Some(*name),
            Self::UnknownConstant { .. } | Self::NameTooLong { .. } => None,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CatalogError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::UnknownConstant { name } =>
                defmt::write!(fmt, "Unknown constant {}", name.as_str()),
            Self::NameTooLong { len } =>
                defmt::write!(fmt, "Unknown constant ({} bytes)", len),
            Self::UnresolvedDependency { name, dependency } =>
                defmt::write!(fmt, "{} depends on undeclared {}", name, dependency),
            Self::DerivationMismatch { name, expected, actual } =>
                defmt::write!(fmt, "{} = {} but derivation gives {}", name, actual, expected),
            Self::DocumentedMismatch { name, documented, actual } =>
                defmt::write!(fmt, "{} = {} but documented {}", name, actual, documented),
        }
    }
}
