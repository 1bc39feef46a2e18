// src/lib.rs

//! navurl Library
//!
//! Legacy-compatible URL parsing, reference resolution and formatting,
//! plus the link navigation helpers a documentation site runtime needs.

pub mod error;
pub mod models;
pub mod navigation;
pub mod resolver;
pub mod utils;
