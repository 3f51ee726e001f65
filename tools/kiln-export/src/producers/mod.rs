//! Segment producers.
//!
//! Each producer turns one section of the scene document into a
//! JSON-serializable summary and, for the binary segment kinds, raw arrays
//! with a declared byte size. Producer internals (triangulation, curve
//! sampling, weight computation) live upstream; these types consume the
//! upstream modules' stable output contracts.

pub mod animation;
pub mod geometry;
pub mod hierarchy;
pub mod material;

pub use animation::{AnimationProducer, AnimationTrack};
pub use geometry::{GeometryHeader, GeometryProducer, GeometrySegment, GeometrySet};
pub use hierarchy::HierarchyProducer;
pub use material::MaterialProducer;
