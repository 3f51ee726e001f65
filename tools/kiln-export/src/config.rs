//! Export configuration resolution.
//!
//! Caller-supplied flags and overrides are merged into one immutable
//! [`ExportConfig`] before anything else runs. Resolution is one-way: the
//! raw options are never mutated, and overrides can only switch features
//! off, never force them on past what the binary/sub-animation rules allow.

use crate::error::{ExportError, Result};

/// Disables all binary output; the file carries only the JSON header.
pub const FLAG_SKIP_BINARY: &str = "skip-binary";
/// Marks the output as a sub-animation file (animation data only).
pub const FLAG_SUB_ANIM: &str = "sub-anim";

/// The recognized caller flags.
pub const ALLOWED_FLAGS: [&str; 2] = [FLAG_SKIP_BINARY, FLAG_SUB_ANIM];

/// Vertex attributes a geometry segment may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttribute {
    Position,
    Normal,
    Texcoord0,
    Texcoord1,
    Weight,
}

impl VertexAttribute {
    pub const ALL: [VertexAttribute; 5] = [
        VertexAttribute::Position,
        VertexAttribute::Normal,
        VertexAttribute::Texcoord0,
        VertexAttribute::Texcoord1,
        VertexAttribute::Weight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            VertexAttribute::Position => "POSITION",
            VertexAttribute::Normal => "NORMAL",
            VertexAttribute::Texcoord0 => "TEXCOORD0",
            VertexAttribute::Texcoord1 => "TEXCOORD1",
            VertexAttribute::Weight => "WEIGHT",
        }
    }
}

/// Optional caller overrides. `Some(false)` turns a feature off; `Some(true)`
/// is ignored (a feature already excluded by the binary or sub-animation
/// rules cannot be forced back on).
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub include_geometry: Option<bool>,
    pub include_animation: Option<bool>,
    pub include_hierarchy: Option<bool>,
    pub include_material: Option<bool>,
    pub include_normals: Option<bool>,
    pub include_uv: Option<bool>,
}

/// Resolved, immutable export configuration.
///
/// Owned by the encoding run and passed by reference to every producer.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub include_binary: bool,
    pub include_geometry: bool,
    pub include_animation: bool,
    pub include_hierarchy: bool,
    pub include_material: bool,
    pub is_sub_animation: bool,
    attributes: [bool; 5],
}

impl ExportConfig {
    /// Resolve raw caller options into a configuration.
    ///
    /// Fails fast with [`ExportError::UnknownOption`] on an unrecognized
    /// flag token, before any input file is touched.
    pub fn resolve(flags: &[String], overrides: Overrides) -> Result<Self> {
        let mut skip_binary = false;
        let mut sub_anim = false;
        for flag in flags {
            match flag.as_str() {
                FLAG_SKIP_BINARY => skip_binary = true,
                FLAG_SUB_ANIM => sub_anim = true,
                other => {
                    return Err(ExportError::UnknownOption {
                        flag: other.to_string(),
                    });
                }
            }
        }

        let include_binary = !skip_binary;
        let is_sub_animation = sub_anim;

        let mut include_geometry = include_binary && !is_sub_animation;
        let mut include_animation = include_binary;
        let mut include_hierarchy = !is_sub_animation;
        let mut include_material = !is_sub_animation;

        if overrides.include_geometry == Some(false) {
            include_geometry = false;
        }
        if overrides.include_animation == Some(false) {
            include_animation = false;
        }
        if overrides.include_hierarchy == Some(false) {
            include_hierarchy = false;
        }
        if overrides.include_material == Some(false) {
            include_material = false;
        }

        let mut attributes = [true; 5];
        if overrides.include_normals == Some(false) {
            attributes[VertexAttribute::Normal as usize] = false;
        }
        if overrides.include_uv == Some(false) {
            attributes[VertexAttribute::Texcoord0 as usize] = false;
            attributes[VertexAttribute::Texcoord1 as usize] = false;
        }

        Ok(Self {
            include_binary,
            include_geometry,
            include_animation,
            include_hierarchy,
            include_material,
            is_sub_animation,
            attributes,
        })
    }

    /// Whether a vertex attribute is included in geometry output.
    pub fn attribute(&self, attribute: VertexAttribute) -> bool {
        self.attributes[attribute as usize]
    }
}
