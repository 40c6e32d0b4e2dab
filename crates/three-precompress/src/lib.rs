//! three.js shader precompression
//!
//! This crate shrinks the three.js build at bundle time. It minifies GLSL shader
//! sources and performs selective inclusion over the bundled `ShaderChunk` and
//! `ShaderLib` sources: chunks and material shaders the application does not use
//! are emptied, the kept ones are minified.

mod error;
mod minify;
mod options;

pub mod catalog;
pub mod plugin;
pub mod rewrite;

use std::path::Path;

pub use catalog::{ChunkCatalog, InclusionPolicy, MaterialCatalog};
pub use error::{Error, Result};
pub use minify::{compact, minify_glsl, remove_comments};
pub use options::PrecompressOptions;
pub use plugin::ThreePrecompress;

/// Reads a source file as UTF-8 text
pub fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Rewrites a three.js build file
///
/// Reads the file and applies the selective inclusion rewrite with the given
/// options. Unlike [`ThreePrecompress::load`] this does not check the path and
/// reports errors instead of logging them.
///
/// # Arguments
/// * `path` - Path to the three.js build file
/// * `options` - Caller configuration; unknown catalog names are an error
///
/// # Returns
/// The rewrite result including its report
pub fn precompress_file(path: &Path, options: &PrecompressOptions) -> Result<rewrite::Rewritten> {
    let plugin = ThreePrecompress::try_new(options)?;
    let code = read_source(path)?;
    Ok(plugin.transform_with_report(&code))
}

/// Minifies a GLSL shader file
pub fn minify_glsl_file(path: &Path) -> Result<String> {
    Ok(minify_glsl(&read_source(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precompress_file() {
        let path = std::env::temp_dir().join(format!("three-precompress-lib-{}.js", std::process::id()));
        std::fs::write(&path, "const _colorKeywords = { 'red': 0xFF0000 };\nvar bsdfs = \"x\";\n").unwrap();

        let rewritten = precompress_file(&path, &PrecompressOptions::default()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(rewritten.code, "const _colorKeywords = {};\nvar bsdfs = ``;\n");
        assert!(matches!(precompress_file(&path, &PrecompressOptions::default()), Err(Error::Read { .. })));
    }

    #[test]
    fn test_precompress_file_rejects_unknown_names() {
        let options = PrecompressOptions::default().with_material("wireframe");
        assert!(matches!(
            precompress_file(Path::new("three.module.js"), &options),
            Err(Error::UnknownNames { catalog: "material", .. })
        ));
    }
}
