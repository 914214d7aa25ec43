//! Domain model for capability descriptors.
//!
//! # Responsibility
//! - Define the immutable records used by core logic.
//!
//! # Invariants
//! - Model values are fixed at construction; no setters exist.

pub mod feature;
