//! Model container encoder.
//!
//! One encoding run walks a fixed state sequence: collect summaries,
//! compute the exact container size, write the header-length prefix and
//! JSON header, write the binary segments, flush. There is no retry or
//! rollback; any failure is fatal for the run. The whole container is
//! assembled in memory, so nothing reaches the output file before every
//! check has passed.

use std::path::Path;

use kiln_common::{HEADER_PREFIX_SIZE, MAX_VERTEX_INDEX, ModelHeader, wire};

use crate::config::ExportConfig;
use crate::error::{ExportError, Result};
use crate::lights::LightExtractor;
use crate::producers::{AnimationProducer, GeometryProducer, HierarchyProducer, MaterialProducer};
use crate::scene::SceneDocument;

pub struct ContainerEncoder<'a> {
    config: &'a ExportConfig,
}

impl<'a> ContainerEncoder<'a> {
    pub fn new(config: &'a ExportConfig) -> Self {
        Self { config }
    }

    /// Encode a scene document into container bytes.
    pub fn encode(&self, document: &SceneDocument) -> Result<Vec<u8>> {
        let config = self.config;
        let mut header = ModelHeader::default();

        // Collect summaries. Lights are always computed; the binary segment
        // producers are only constructed (and thus only summarized) when
        // their flag is on, so a header without binary data never promises
        // segments the payload does not carry.
        let lights = LightExtractor::extract(document);
        header.lights = lights.summary().map(<[_]>::to_vec);

        let geometry = if config.include_geometry {
            // Finalization must happen exactly once, before the byte size
            // is queried; `finalize` consumes the producer to enforce that.
            let set = GeometryProducer::from_scene(document, config).finalize();
            header.geometry = set.summary().map(serde_json::to_value).transpose()?;
            Some(set)
        } else {
            None
        };

        let animation = if config.include_animation {
            let producer = AnimationProducer::from_scene(document)?;
            header.animation = producer.summary().map(serde_json::to_value).transpose()?;
            Some(producer)
        } else {
            None
        };

        if config.include_hierarchy {
            let producer = HierarchyProducer::from_scene(document)?;
            header.hierarchy = producer.summary().map(serde_json::to_value).transpose()?;
        }

        if config.include_material {
            let producer = MaterialProducer::from_scene(document);
            header.material = producer.summary().map(serde_json::to_value).transpose()?;
        }

        // Compute the exact container size.
        let header_bytes = serde_json::to_vec(&header)?;
        let payload_size = if config.include_binary {
            geometry.as_ref().map_or(0, |set| set.byte_size())
                + animation.as_ref().map_or(0, |producer| producer.byte_size())
        } else {
            0
        };
        let total_size = HEADER_PREFIX_SIZE + header_bytes.len() + payload_size;
        let mut buf = Vec::with_capacity(total_size);

        // Header-length prefix, then the UTF-8 header.
        wire::put_u32_be(&mut buf, header_bytes.len() as u32);
        buf.extend_from_slice(&header_bytes);

        // Binary payload: geometry segments in collection order (indices
        // before vertices per segment), then animation tracks in playback
        // order.
        if config.include_binary {
            if let Some(set) = &geometry {
                for segment in set.segments() {
                    for &index in &segment.indices {
                        if index > MAX_VERTEX_INDEX {
                            return Err(ExportError::IndexOverflow {
                                segment: segment.name.clone(),
                                index,
                            });
                        }
                        wire::put_u16_be(&mut buf, index as u16);
                    }
                    for &value in &segment.vertices {
                        wire::put_f32_be(&mut buf, value);
                    }
                }
            }
            if let Some(producer) = &animation {
                for track in producer.tracks() {
                    for &sample in &track.samples {
                        wire::put_f32_be(&mut buf, sample);
                    }
                }
            }
        }

        debug_assert_eq!(buf.len(), total_size, "container size mismatch");
        Ok(buf)
    }

    /// Encode and flush to disk in one shot.
    ///
    /// On I/O failure the file may be left in a partial state; atomic
    /// staging is the caller's concern.
    pub fn encode_to_file(&self, document: &SceneDocument, output: &Path) -> Result<()> {
        let bytes = self.encode(document)?;
        std::fs::write(output, &bytes)?;
        tracing::info!("wrote {} ({} bytes)", output.display(), bytes.len());
        Ok(())
    }
}
