// src/resolver/mod.rs

//! Legacy URL handling: parse, resolve and format.
//!
//! None of these fail on string input. The rules are the lenient legacy
//! ones rather than the WHATWG URL standard: scheme-less `//host` is only an authority on
//! request, `mailto:` and friends carry a host, and dot segments are
//! removed by a single backward pass.

mod format;
mod host;
mod parse;
mod resolve;
mod tables;

pub use format::format;
pub use parse::{parse, parse_value};
pub use resolve::{Reference, resolve, resolve_object};
pub use tables::{is_hostless, is_slashed, is_unsafe};
