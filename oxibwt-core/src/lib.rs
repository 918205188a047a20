//! # OxiBWT Core
//!
//! Shared building blocks for the OxiBWT transform engines:
//!
//! - [`error`]: Error taxonomy and `Result` alias
//! - [`alphabet`]: Symbol sets and the sentinel-aware symbol order
//! - [`config`]: Engine configuration and presets
//!
//! ## Example
//!
//! ```rust
//! use oxibwt_core::{Alphabet, BwtConfig, symbol_rank};
//!
//! let config = BwtConfig::DNA;
//! assert!(config.alphabet.check(b"GATTACA", config.sentinel).is_ok());
//!
//! // The sentinel sorts first even though '$' > ' ' as a byte.
//! assert!(symbol_rank(b'$', b'$') < symbol_rank(b' ', b'$'));
//! assert_eq!(Alphabet::default(), Alphabet::Bytes);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod alphabet;
pub mod config;
pub mod error;

pub use alphabet::{Alphabet, RANK_COUNT, SymbolSet, symbol_rank};
pub use config::{BwtConfig, Construction, DEFAULT_SENTINEL, MissingSentinel};
pub use error::{BwtError, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::alphabet::{Alphabet, SymbolSet};
    pub use crate::config::{BwtConfig, Construction, MissingSentinel};
    pub use crate::error::{BwtError, Result};
}
