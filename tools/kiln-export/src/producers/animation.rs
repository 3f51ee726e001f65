//! Animation segment producer.
//!
//! The playback order list is semantically significant: the binary payload
//! writes tracks in that exact order, never in map iteration order. Tracks
//! are therefore resolved against the order list once, at construction.

use serde::Serialize;

use crate::error::{ExportError, Result};
use crate::scene::SceneDocument;

/// One named keyframe track: a flat f32 sample sequence.
#[derive(Debug, Clone)]
pub struct AnimationTrack {
    pub name: String,
    pub samples: Vec<f32>,
}

/// Per-track header entry, in playback order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationSummary {
    pub name: String,
    pub sample_count: usize,
}

#[derive(Debug)]
pub struct AnimationProducer {
    tracks: Vec<AnimationTrack>,
}

impl AnimationProducer {
    /// Resolve the scene's animation tracks into playback order.
    ///
    /// A name listed in the order without a matching track is a malformed
    /// scene. Tracks absent from the order list are dropped with a warning.
    pub fn from_scene(document: &SceneDocument) -> Result<Self> {
        let Some(section) = &document.animation else {
            return Ok(Self { tracks: Vec::new() });
        };

        let mut tracks = Vec::with_capacity(section.order.len());
        for name in &section.order {
            let samples = section.tracks.get(name).ok_or_else(|| {
                ExportError::MalformedScene(format!(
                    "animation '{name}' listed in playback order but has no track"
                ))
            })?;
            tracks.push(AnimationTrack {
                name: name.clone(),
                samples: samples.clone(),
            });
        }

        for name in section.tracks.keys() {
            if !section.order.iter().any(|ordered| ordered == name) {
                tracing::warn!("animation track '{name}' not in playback order, dropping");
            }
        }

        Ok(Self { tracks })
    }

    pub fn byte_size(&self) -> usize {
        self.tracks.iter().map(|track| track.samples.len() * 4).sum()
    }

    /// Tracks in playback order.
    pub fn tracks(&self) -> &[AnimationTrack] {
        &self.tracks
    }

    /// Header entries in playback order, or `None` when there are no tracks.
    pub fn summary(&self) -> Option<Vec<AnimationSummary>> {
        if self.tracks.is_empty() {
            return None;
        }
        Some(
            self.tracks
                .iter()
                .map(|track| AnimationSummary {
                    name: track.name.clone(),
                    sample_count: track.samples.len(),
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::AnimationSection;

    fn document(order: &[&str], tracks: &[(&str, usize)]) -> SceneDocument {
        SceneDocument {
            animation: Some(AnimationSection {
                order: order.iter().map(|n| n.to_string()).collect(),
                tracks: tracks
                    .iter()
                    .map(|(name, len)| (name.to_string(), vec![0.5; *len]))
                    .collect(),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_tracks_follow_playback_order_not_map_order() {
        let document = document(&["walk", "idle"], &[("idle", 2), ("walk", 3)]);
        let producer = AnimationProducer::from_scene(&document).unwrap();
        let names: Vec<_> = producer.tracks().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["walk", "idle"]);
        assert_eq!(producer.byte_size(), (3 + 2) * 4);
    }

    #[test]
    fn test_missing_track_is_malformed() {
        let document = document(&["walk", "run"], &[("walk", 3)]);
        let err = AnimationProducer::from_scene(&document).unwrap_err();
        assert!(matches!(err, ExportError::MalformedScene(_)));
        assert!(err.to_string().contains("run"));
    }

    #[test]
    fn test_no_animation_section() {
        let producer = AnimationProducer::from_scene(&SceneDocument::default()).unwrap();
        assert_eq!(producer.byte_size(), 0);
        assert!(producer.summary().is_none());
    }
}
