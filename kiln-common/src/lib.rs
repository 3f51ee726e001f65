//! Shared definitions for the Kiln model container format.
//!
//! This crate is shared between:
//! - `kiln-export` (asset pipeline)
//! - runtime loaders consuming `.kmodel` files
//!
//! # Modules
//!
//! - [`container`] - Container constants and the [`ModelFile`] reader
//! - [`header`] - Serde types for the JSON metadata header
//! - [`wire`] - Big-endian wire writers/readers

pub mod container;
pub mod header;
pub mod wire;

pub use container::{HEADER_PREFIX_SIZE, MAX_VERTEX_INDEX, MODEL_EXTENSION, ModelFile};
pub use header::{Light, LightKind, ModelHeader};
