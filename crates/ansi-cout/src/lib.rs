#![deny(clippy::all)]
//! ANSI escape sequences for cursor movement, erasing and graphics mode.
//!
//! ```
//! use ansi_cout::{ColorBase, Emitter, EmitterConfig, TextAttribute};
//!
//! let mut emitter = Emitter::with_config(Vec::new(), EmitterConfig::new());
//! emitter.attribute(&[TextAttribute::Bold, TextAttribute::Underscore])?;
//! emitter.background(ColorBase::Red)?;
//! assert_eq!(emitter.into_inner(), b"\x1b[1;4m\x1b[31m");
//! # Ok::<(), ansi_cout::EmitError>(())
//! ```

pub mod config;
pub mod error;
mod emitter;
pub mod sequence;
mod types;

pub use config::EmitterConfig;
pub use config::WriteFailurePolicy;
pub use emitter::Emitter;
pub use error::EmitError;
pub use types::ColorBase;
pub use types::ParseNameError;
pub use types::ScreenMode;
pub use types::TextAttribute;

pub type Result<T> = std::result::Result<T, EmitError>;
