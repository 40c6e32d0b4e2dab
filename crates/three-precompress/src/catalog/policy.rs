//! Inclusion policy resolution
//!
//! Merges caller overrides into both catalogs. Built once per build invocation and
//! then passed by reference to every rewrite.

use super::{ChunkCatalog, MaterialCatalog};
use crate::PrecompressOptions;

/// Resolved inclusion decisions for chunks and materials
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InclusionPolicy {
    /// Shader chunk flags
    pub chunks: ChunkCatalog,
    /// Material flags
    pub materials: MaterialCatalog,
}

impl InclusionPolicy {
    /// Resolves options, rejecting unknown names
    ///
    /// # Errors
    /// Returns [`crate::Error::UnknownNames`] for the first catalog whose overrides
    /// name a key it does not know.
    pub fn try_from_options(options: &PrecompressOptions) -> crate::Result<Self> {
        Ok(Self {
            chunks: ChunkCatalog::with_overrides(overrides(&options.shaders))?,
            materials: MaterialCatalog::with_overrides(overrides(&options.materials))?,
        })
    }

    /// Resolves options, reporting unknown names instead of failing
    ///
    /// A catalog whose overrides cannot be applied is logged and falls back to its
    /// all-excluded default. The other catalog is unaffected.
    pub fn from_options(options: &PrecompressOptions) -> Self {
        let chunks = ChunkCatalog::with_overrides(overrides(&options.shaders)).unwrap_or_else(|e| {
            tracing::error!("{e}; all shader chunks will be excluded");
            ChunkCatalog::default()
        });
        let materials = MaterialCatalog::with_overrides(overrides(&options.materials)).unwrap_or_else(|e| {
            tracing::error!("{e}; all materials will be excluded");
            MaterialCatalog::default()
        });
        Self { chunks, materials }
    }
}

fn overrides(map: &std::collections::BTreeMap<String, bool>) -> impl Iterator<Item = (&str, bool)> {
    map.iter().map(|(name, included)| (name.as_str(), *included))
}
