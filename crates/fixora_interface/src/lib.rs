//! Trait definitions for the Fixora video script generator.
//!
//! [`FixoraDriver`] is the seam between script generation and a concrete
//! generative API, so the generator can be exercised against test doubles.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::FixoraDriver;
