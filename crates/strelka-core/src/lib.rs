#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Leaf utilities shared by the strelka recognizer and CLI.
//!
//! - **Decoding**: one UTF-8 scalar at a byte offset, failing quietly on
//!   truncated or malformed sequences (`utf8`)
//! - **Character classes**: the identifier-constituent predicate shared by
//!   identifiers, keyword boundaries and literal bodies (`chars`)
//! - **Colors**: ANSI palette for terminal output (`colors`)

pub mod chars;
pub mod colors;
pub mod utf8;

pub use colors::Colors;
pub use utf8::{Utf8Char, decode_utf8};
