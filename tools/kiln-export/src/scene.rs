//! Parsed scene-description document.
//!
//! The XML front-end is an external collaborator; it hands us its parsed
//! tree as a JSON interchange document. The light library keeps the
//! element-tree shape of the source scene (repeated child elements are
//! arrays, attributes live under `$`, text content is a string), because
//! light extraction is done here. The geometry, animation, hierarchy, and
//! material sections are the stable output contracts of the external
//! producer modules: pre-flattened index/vertex arrays, sampled keyframe
//! tracks, node trees, and material parameter maps.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// A complete parsed scene description.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SceneDocument {
    pub library_lights: Vec<LightLibrary>,
    pub geometry: Option<GeometrySection>,
    pub animation: Option<AnimationSection>,
    pub hierarchy: Option<HierarchySection>,
    pub material: Option<MaterialSection>,
}

impl SceneDocument {
    /// Load a scene document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Names of all meshes in the geometry section.
    pub fn mesh_names(&self) -> impl Iterator<Item = &str> {
        self.geometry
            .iter()
            .flat_map(|section| &section.meshes)
            .map(|mesh| mesh.name.as_str())
    }
}

/// `library_lights` element in element-tree shape.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LightLibrary {
    pub light: Vec<LightElement>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LightElement {
    #[serde(rename = "$")]
    pub attributes: LightAttributes,
    #[serde(default)]
    pub technique_common: Vec<LightTechnique>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LightAttributes {
    pub id: String,
}

/// A light's common technique. At most one of `point`/`spot` is expected;
/// other light kinds (ambient, directional) appear as neither.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LightTechnique {
    pub point: Vec<LightParams>,
    pub spot: Vec<LightParams>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LightParams {
    /// Whitespace-separated color channel triple, e.g. `"255 0 0"`.
    pub color: Vec<String>,
    /// Spot falloff angle in degrees, e.g. `"45.0"`.
    pub falloff_angle: Vec<String>,
}

/// Triangulated, deduplicated meshes from the geometry producer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GeometrySection {
    pub meshes: Vec<MeshElement>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MeshElement {
    pub name: String,
    #[serde(default)]
    pub indices: Vec<u32>,
    #[serde(default)]
    pub vertices: Vec<f32>,
}

/// Sampled keyframe tracks from the animation producer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnimationSection {
    /// Playback order. Semantically significant; the binary payload follows
    /// this order verbatim.
    pub order: Vec<String>,
    pub tracks: hashbrown::HashMap<String, Vec<f32>>,
}

/// Scene node tree from the hierarchy producer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HierarchySection {
    pub nodes: Vec<SceneNode>,
}

/// One node of the scene hierarchy. Serialized into the header as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneNode {
    pub name: String,
    /// Mesh reference into the geometry section, by name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<String>,
    /// Column-major 4x4 local transform; identity when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<Vec<f32>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SceneNode>,
}

/// Material parameter maps from the material producer, passed through to
/// the header unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MaterialSection {
    pub materials: Vec<serde_json::Value>,
}
