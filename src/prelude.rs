//! Prelude module for the pesel crate.
//!
//! Re-exports the derive_more macros used across modules.

#[allow(unused_imports)]
pub use derive_more::{Deref, Display};
