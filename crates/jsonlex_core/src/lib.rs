//! jsonlex_core: Core types shared by the jsonlex crates.
//!
//! Provides the text span type used to address regions of a source buffer
//! by offset, without copying text.

pub mod text;

pub use text::{TextPos, TextSpan};
