//! # Card Schema
//!
//! The on-disk shape of the two documents the editor works with: character
//! cards and world info records. This crate is the single source of truth for
//! key names and holds no editing or UI state.
//!
//! Every field is read leniently: a missing key, `null`, or a value of the
//! wrong JSON type falls back to the field's default instead of failing the
//! whole document.

pub mod character;
pub mod document;
pub mod lenient;
pub mod world;

pub use character::*;
pub use document::*;
pub use world::*;
