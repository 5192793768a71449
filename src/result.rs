//! Result type used throughout relmake.
//!
//! Type alias for `color_eyre::eyre::Result<T>`, giving every fallible
//! function in the crate colorized error reports and chain-able context
//! via `.wrap_err()`.

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used throughout relmake.
pub type Result<T> = EyreResult<T>;
