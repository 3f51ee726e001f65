//! Serde types for the JSON metadata header.
//!
//! Every key is optional: the encoder omits a key entirely when the
//! corresponding feature is disabled or its producer yielded no data. A
//! loader must treat a missing key as "segment not present", not as an
//! empty segment.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The JSON metadata header preceding the binary payload.
///
/// Keys serialize in declaration order, so the same input always produces
/// byte-identical headers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelHeader {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lights: Option<Vec<Light>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchy: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<Value>,
}

/// One light definition in the header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: LightKind,
    /// Three color channels, passed through from the source document
    /// without clamping or range validation.
    pub color: [i64; 3],
    /// Cone falloff angle in degrees, spot lights only.
    #[serde(rename = "coneAngle", skip_serializing_if = "Option::is_none")]
    pub cone_angle: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightKind {
    Point,
    Spot,
}
