//! kiln-export library
//!
//! Converts parsed scene descriptions into binary `.kmodel` containers.
//! The CLI binary is a thin wrapper; embedders (e.g. batch pipelines) call
//! [`convert_scene`] or drive [`ContainerEncoder`] directly.

pub mod config;
pub mod container;
pub mod error;
pub mod lights;
pub mod producers;
pub mod scene;

pub use config::{ExportConfig, Overrides, VertexAttribute};
pub use container::ContainerEncoder;
pub use error::{ExportError, Result};
pub use scene::SceneDocument;

use std::path::Path;

/// Convert a scene document file to a binary model file.
///
/// Option resolution runs first so that an unknown flag aborts before the
/// input file is even opened.
pub fn convert_scene(
    input: &Path,
    output: &Path,
    flags: &[String],
    overrides: Overrides,
) -> Result<()> {
    let config = ExportConfig::resolve(flags, overrides)?;
    let document = SceneDocument::load(input)?;
    ContainerEncoder::new(&config).encode_to_file(&document, output)
}
