//! Reading SPLICE drum machine pattern files.
//!
//! The SPLICE drum machine saves its patterns as small binary `.splice` files.
//! This crate decodes such files into [`Pattern`] values and renders them in
//! the textual form the rest of the tooling displays. Decoding is strictly
//! read-only; the crate does not write pattern files back out.

pub mod pattern;
pub mod version;

mod serde;

pub use pattern::{Pattern, Track};
pub use version::Version;
