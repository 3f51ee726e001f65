//! Light extraction from the scene light library.
//!
//! Lights are collected in document order so that repeated exports of the
//! same scene are deterministic. A light that is neither point nor spot is
//! an unsupported kind (ambient, directional) and is skipped silently; the
//! output schema does not model it.

use kiln_common::{Light, LightKind};

use crate::scene::{LightElement, SceneDocument};

pub struct LightExtractor {
    lights: Vec<Light>,
}

impl LightExtractor {
    /// One pass over the scene's light library.
    pub fn extract(document: &SceneDocument) -> Self {
        let mut lights = Vec::new();
        for library in &document.library_lights {
            for element in &library.light {
                if let Some(light) = convert_light(element) {
                    lights.push(light);
                } else {
                    tracing::debug!("skipping unsupported light '{}'", element.attributes.id);
                }
            }
        }
        Self { lights }
    }

    /// The extracted lights, or `None` when the scene has none.
    ///
    /// `None` tells the encoder to omit the `lights` header key entirely
    /// rather than emit an empty array.
    pub fn summary(&self) -> Option<&[Light]> {
        if self.lights.is_empty() {
            None
        } else {
            Some(&self.lights)
        }
    }
}

fn convert_light(element: &LightElement) -> Option<Light> {
    let technique = element.technique_common.first()?;
    let (params, kind) = if let Some(point) = technique.point.first() {
        (point, LightKind::Point)
    } else if let Some(spot) = technique.spot.first() {
        (spot, LightKind::Spot)
    } else {
        return None;
    };

    let color = parse_color(params.color.first().map(String::as_str).unwrap_or(""));
    let cone_angle = match kind {
        LightKind::Spot => params
            .falloff_angle
            .first()
            .and_then(|text| text.trim().parse::<f32>().ok()),
        LightKind::Point => None,
    };

    Some(Light {
        id: element.attributes.id.clone(),
        kind,
        color,
        cone_angle,
    })
}

/// Parse three integer channels from a whitespace-separated token list.
///
/// Deliberately lenient: out-of-range values pass through unchanged and
/// unparseable or missing tokens become 0, matching the tolerance of the
/// exporters that produce these scenes.
fn parse_color(text: &str) -> [i64; 3] {
    let mut channels = text
        .split_whitespace()
        .map(|token| token.parse::<i64>().unwrap_or(0));
    [
        channels.next().unwrap_or(0),
        channels.next().unwrap_or(0),
        channels.next().unwrap_or(0),
    ]
}
