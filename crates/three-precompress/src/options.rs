//! Caller configuration
//!
//! Options are passed once when the build hook is constructed. They can be built
//! in code or loaded from a JSON or YAML file using the same camelCase keys as the
//! bundler plugin configuration (`colorKeywords`, `materials`, `shaders`).

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Options recognised by the build hook
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrecompressOptions {
    /// Keep the `_colorKeywords` lookup table (stripped when false)
    pub color_keywords: bool,
    /// Material overrides, keyed by material name (e.g. `phong`)
    pub materials: BTreeMap<String, bool>,
    /// Shader chunk overrides, keyed by chunk name (e.g. `common`)
    pub shaders: BTreeMap<String, bool>,
}

impl PrecompressOptions {
    /// Parses options from JSON content
    pub fn from_json(json_content: &str) -> Result<Self> {
        Ok(serde_json::from_str(json_content)?)
    }

    /// Parses options from YAML content
    pub fn from_yaml(yaml_content: &str) -> Result<Self> {
        Ok(serde_norway::from_str(yaml_content)?)
    }

    /// Loads options from a `.json`, `.yaml` or `.yml` file
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        match path.extension().and_then(|extension| extension.to_str()) {
            Some("json") => Self::from_json(&content),
            Some("yaml" | "yml") => Self::from_yaml(&content),
            _ => Err(Error::UnsupportedConfigFormat { path: path.to_path_buf() }),
        }
    }

    /// Enables a shader chunk by name
    pub fn with_shader(mut self, name: impl Into<String>) -> Self {
        self.shaders.insert(name.into(), true);
        self
    }

    /// Enables a material by name
    pub fn with_material(mut self, name: impl Into<String>) -> Self {
        self.materials.insert(name.into(), true);
        self
    }
}
