//! Curve engine: expo blends and the table sampler.
//!
//! Everything in here is pure: no I/O, no logging, no shared state. The
//! renderers and the report assembler are built on top of these functions.

pub mod blend;
pub mod error;
pub mod sampler;

pub use blend::*;
pub use error::*;
pub use sampler::*;
