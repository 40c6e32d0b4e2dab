//! GLSL minification tool
//!
//! This binary minifies a single GLSL shader file and writes the result to stdout.
//! It uses the same minifier that compresses three.js shader chunks.

use std::env;
use std::path::Path;
use std::process;

use three_precompress::minify_glsl_file;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <shader.glsl>", args[0]);
        eprintln!("Minifies a GLSL shader and dumps the result to stdout");
        process::exit(1);
    }

    let shader_path = Path::new(&args[1]);

    // Check if the shader file exists
    if !shader_path.exists() {
        eprintln!("Error: Shader file '{}' does not exist", shader_path.display());
        process::exit(1);
    }

    match minify_glsl_file(shader_path) {
        Ok(minified) => print!("{minified}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
