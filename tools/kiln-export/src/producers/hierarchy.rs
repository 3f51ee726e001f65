//! Hierarchy segment producer.
//!
//! Carries the scene node tree into the header. A node may reference a mesh
//! in the geometry section by name; a dangling reference is a malformed
//! scene, unlike unsupported light kinds which are merely skipped.

use hashbrown::HashSet;

use crate::error::{ExportError, Result};
use crate::scene::{SceneDocument, SceneNode};

#[derive(Debug)]
pub struct HierarchyProducer {
    nodes: Vec<SceneNode>,
}

impl HierarchyProducer {
    pub fn from_scene(document: &SceneDocument) -> Result<Self> {
        let nodes = document
            .hierarchy
            .as_ref()
            .map(|section| section.nodes.clone())
            .unwrap_or_default();

        let mesh_names: HashSet<&str> = document.mesh_names().collect();
        for node in &nodes {
            check_mesh_references(node, &mesh_names)?;
        }

        Ok(Self { nodes })
    }

    /// The node tree, or `None` when the scene has no hierarchy.
    pub fn summary(&self) -> Option<&[SceneNode]> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(&self.nodes)
        }
    }
}

fn check_mesh_references(node: &SceneNode, mesh_names: &HashSet<&str>) -> Result<()> {
    if let Some(reference) = &node.geometry {
        if !mesh_names.contains(reference.as_str()) {
            return Err(ExportError::MalformedScene(format!(
                "node '{}' references missing mesh '{reference}'",
                node.name
            )));
        }
    }
    for child in &node.children {
        check_mesh_references(child, mesh_names)?;
    }
    Ok(())
}
