//! GLSL shader minification utilities.
//!
//! This module reduces the size of GLSL chunk sources by stripping comments and
//! collapsing formatting. It works on plain text and never parses the shader, so
//! it can be run on fragments that are not complete translation units.

use std::sync::LazyLock;

use regex::Regex;

/// Runs of two or more whitespace characters inside a line
static WHITESPACE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());
/// Floats starting with 0 (`0.1` -> `.1`)
static LEADING_ZERO_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b0(\.\d+)").unwrap());
/// Floats ending with 0 (`1.0` -> `1.`)
static TRAILING_ZERO_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+\.)0\b").unwrap());
/// Whitespace around operators and punctuation that never needs a separator
static OPERATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*([{}=*,+/><&|\[\]()\-!?:;])\s*").unwrap());
/// Runs of one or more newlines
static NEWLINE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").unwrap());

/// Minifies GLSL shader source code.
///
/// Equivalent to `compact(&remove_comments(shader))`. Directive lines stay one
/// per line, everything else is packed onto as few lines as possible.
///
/// # Arguments
///
/// * `shader` - A string slice containing the GLSL source code.
///
/// # Returns
///
/// The minified source. The function never fails; malformed input (for example a
/// second block comment) produces best-effort output.
pub fn minify_glsl(shader: &str) -> String {
    compact(&remove_comments(shader))
}

/// Removes comments from GLSL source code.
///
/// Only the first block comment is removed: the span from the first `/*` through
/// the first `*/` after it. Every line is then truncated at its first `//`.
/// Line boundaries are preserved.
pub fn remove_comments(shader: &str) -> String {
    let shader = match strip_first_block_comment(shader) {
        Some(stripped) => stripped,
        None => shader.to_string(),
    };

    shader
        .split('\n')
        .map(|line| match line.find("//") {
            Some(index) => &line[..index],
            None => line,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn strip_first_block_comment(shader: &str) -> Option<String> {
    let open = shader.find("/*")?;
    let close = open + 2 + shader[open + 2..].find("*/")?;
    Some(format!("{}{}", &shader[..open], &shader[close + 2..]))
}

/// Compacts comment-free GLSL source code.
///
/// Each logical line is trimmed, its whitespace runs are collapsed and its float
/// literals shortened. Directive lines (`#...`) are kept on their own line; other
/// lines are concatenated after removing whitespace around operators. A space is
/// kept after a trailing `else` unless the next line opens a block.
pub fn compact(shader: &str) -> String {
    let mut units: Vec<String> = Vec::new();
    let mut code_pending = false;

    for line in NEWLINE_RUN_RE.split(shader) {
        let line = normalize_line(line);
        if line.is_empty() {
            continue;
        }

        if line.starts_with('#') {
            if code_pending {
                units.push("\n".to_string());
            }
            units.push(line);
            units.push("\n".to_string());
            code_pending = false;
        } else {
            if !line.starts_with('{') && units.last().is_some_and(|unit| unit.ends_with("else")) {
                units.push(" ".to_string());
            }
            units.push(OPERATOR_RE.replace_all(&line, "$1").into_owned());
            code_pending = true;
        }
    }

    NEWLINE_RUN_RE.replace_all(&units.concat(), "\n").into_owned()
}

fn normalize_line(line: &str) -> String {
    let line = WHITESPACE_RUN_RE.replace_all(line.trim(), " ");
    let line = LEADING_ZERO_RE.replace_all(&line, "$1");
    TRAILING_ZERO_RE.replace_all(&line, "$1").into_owned()
}
