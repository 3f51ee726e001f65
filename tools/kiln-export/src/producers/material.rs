//! Material segment producer.
//!
//! Material parameter extraction happens upstream; the parameter maps are
//! passed through to the header unchanged.

use serde_json::Value;

use crate::scene::SceneDocument;

pub struct MaterialProducer {
    materials: Vec<Value>,
}

impl MaterialProducer {
    pub fn from_scene(document: &SceneDocument) -> Self {
        let materials = document
            .material
            .as_ref()
            .map(|section| section.materials.clone())
            .unwrap_or_default();
        Self { materials }
    }

    /// The material list, or `None` when the scene has none.
    pub fn summary(&self) -> Option<&[Value]> {
        if self.materials.is_empty() {
            None
        } else {
            Some(&self.materials)
        }
    }
}
