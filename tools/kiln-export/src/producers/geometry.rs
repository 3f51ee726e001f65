//! Geometry segment producer.
//!
//! Segments keep the collection order of the source document; the binary
//! payload writes them in that order, indices before vertices per segment.

use serde::Serialize;

use crate::config::{ExportConfig, VertexAttribute};
use crate::scene::SceneDocument;

/// One mesh: a u16-destined index buffer plus a packed f32 vertex buffer.
///
/// Indices are held as u32 so that out-of-range source data survives until
/// the encoder's overflow check; the wire format is u16.
#[derive(Debug, Clone)]
pub struct GeometrySegment {
    pub name: String,
    pub indices: Vec<u32>,
    pub vertices: Vec<f32>,
}

impl GeometrySegment {
    /// Exact wire size of this segment: 2 bytes per index, 4 per vertex
    /// float.
    pub fn byte_size(&self) -> usize {
        self.indices.len() * 2 + self.vertices.len() * 4
    }
}

/// The `geometry` header value: the vertex layout shared by all segments
/// plus one entry per segment. Loaders reconstruct payload offsets
/// cumulatively from the counts.
#[derive(Debug, Serialize)]
pub struct GeometryHeader {
    /// Names of the vertex attributes packed into each vertex buffer, in
    /// packing order.
    pub attributes: Vec<&'static str>,
    pub meshes: Vec<GeometrySummary>,
}

/// Per-segment header entry.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometrySummary {
    pub name: String,
    pub index_count: usize,
    pub vertex_count: usize,
}

/// Geometry producer, pre-finalization.
///
/// [`finalize`](Self::finalize) consumes the producer and returns the
/// [`GeometrySet`] that exposes sizes and summaries; size queries before
/// finalization are unrepresentable.
pub struct GeometryProducer {
    segments: Vec<GeometrySegment>,
    attributes: Vec<&'static str>,
}

impl GeometryProducer {
    pub fn from_scene(document: &SceneDocument, config: &ExportConfig) -> Self {
        let segments = document
            .geometry
            .iter()
            .flat_map(|section| &section.meshes)
            .map(|mesh| GeometrySegment {
                name: mesh.name.clone(),
                indices: mesh.indices.clone(),
                vertices: mesh.vertices.clone(),
            })
            .collect();
        let attributes = VertexAttribute::ALL
            .into_iter()
            .filter(|attribute| config.attribute(*attribute))
            .map(VertexAttribute::name)
            .collect();
        Self {
            segments,
            attributes,
        }
    }

    /// Prepare internal buffers for export and compute the total byte size.
    ///
    /// Upstream flattening has already deduplicated vertex data, so this is
    /// a single sizing pass over the segments.
    pub fn finalize(self) -> GeometrySet {
        let byte_size = self.segments.iter().map(GeometrySegment::byte_size).sum();
        GeometrySet {
            segments: self.segments,
            attributes: self.attributes,
            byte_size,
        }
    }
}

/// Finalized geometry, ready for summary extraction and binary writing.
pub struct GeometrySet {
    segments: Vec<GeometrySegment>,
    attributes: Vec<&'static str>,
    byte_size: usize,
}

impl GeometrySet {
    pub fn byte_size(&self) -> usize {
        self.byte_size
    }

    pub fn segments(&self) -> &[GeometrySegment] {
        &self.segments
    }

    /// The geometry header value, or `None` when the scene carries no
    /// geometry.
    pub fn summary(&self) -> Option<GeometryHeader> {
        if self.segments.is_empty() {
            return None;
        }
        Some(GeometryHeader {
            attributes: self.attributes.clone(),
            meshes: self
                .segments
                .iter()
                .map(|segment| GeometrySummary {
                    name: segment.name.clone(),
                    index_count: segment.indices.len(),
                    vertex_count: segment.vertices.len(),
                })
                .collect(),
        })
    }
}
