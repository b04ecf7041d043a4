//! Convenient imports for typical `sqlstanza` usage.
//!
//! ```ignore
//! use sqlstanza::prelude::*;
//! ```

pub use crate::{Dialect, IntoArgs, Param, StanzaError, StanzaResult, Statement, args};
