//! Segment scanners over the three.js build source
//!
//! Each scanner only locates things; it returns byte ranges into the text it was
//! given and never modifies it.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// `<identifier> = <quote>`, where the identifier is not a property access
static ASSIGNMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"(?:^|[^\w$.])([A-Za-z_$][\w$]*)[ \t]*=[ \t]*(['"`])"#).unwrap());
static INCLUDE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#include <([\w$]+)>").unwrap());
static COLOR_KEYWORDS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_colorKeywords = \{([\s\S]+?)\};").unwrap());
/// Template literal preceded by the `/* glsl */` marker three.js uses for inline shaders
static INLINE_SHADER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/\* glsl \*/\s*`([^`]+)`").unwrap());

/// A string literal assigned to an identifier and terminated by `;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringAssignment<'a> {
    /// Assigned identifier
    pub name: &'a str,
    /// The literal including its quotes
    pub literal: Range<usize>,
    /// The literal body between the quotes, still escaped
    pub body: Range<usize>,
}

/// An `#include <name>` directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeDirective<'a> {
    /// Included chunk name
    pub name: &'a str,
    /// The whole directive
    pub range: Range<usize>,
}

/// Finds every `name = "..."`, `name = '...'` or ``name = `...` `` assignment
///
/// The literal is scanned to its matching unescaped quote and must be followed
/// directly by `;`. Scanning resumes after each literal, so text inside a literal is
/// never mistaken for another assignment.
pub fn string_assignments(source: &str) -> Vec<StringAssignment<'_>> {
    let mut assignments = Vec::new();
    let mut position = 0;

    while let Some(captures) = ASSIGNMENT_RE.captures_at(source, position) {
        let (Some(name), Some(quote)) = (captures.get(1), captures.get(2)) else {
            break;
        };

        let open = quote.start();
        let Some(close) = closing_quote(source, open) else {
            tracing::trace!("Unterminated literal assigned to '{}'", name.as_str());
            position = open + 1;
            continue;
        };

        if source.as_bytes().get(close + 1) == Some(&b';') {
            assignments.push(StringAssignment {
                name: name.as_str(),
                literal: open..close + 1,
                body: open + 1..close,
            });
        }
        position = close + 1;
    }

    assignments
}

/// Returns the offset of the quote closing the literal opened at `open`
fn closing_quote(source: &str, open: usize) -> Option<usize> {
    let bytes = source.as_bytes();
    let quote = bytes[open];
    let mut index = open + 1;
    while index < bytes.len() {
        match bytes[index] {
            b'\\' => index += 2,
            byte if byte == quote => return Some(index),
            _ => index += 1,
        }
    }
    None
}

/// Finds every `#include <name>` directive
pub fn include_directives(source: &str) -> Vec<IncludeDirective<'_>> {
    INCLUDE_RE
        .captures_iter(source)
        .filter_map(|captures| {
            let directive = captures.get(0)?;
            let name = captures.get(1)?;
            Some(IncludeDirective {
                name: name.as_str(),
                range: directive.range(),
            })
        })
        .collect()
}

/// Finds the identifiers `ShaderLib` assigns to `<stem>_vert` and `<stem>_frag`
///
/// Identifiers are returned verbatim, `$` included; the stem is regex-escaped before
/// it is used in a pattern.
pub fn material_shader_names<'a>(source: &'a str, stem: &str) -> Vec<&'a str> {
    let pattern = format!(r"\b{}_(?:vert|frag): (\S+)\b", regex::escape(stem));
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(e) => {
            tracing::warn!("Invalid material pattern for stem '{stem}': {e}");
            return Vec::new();
        }
    };

    re.captures_iter(source)
        .filter_map(|captures| captures.get(1))
        .map(|name| name.as_str())
        .collect()
}

/// Returns the body of the `_colorKeywords` object literal, if present and non-empty
pub fn color_keywords_body(source: &str) -> Option<Range<usize>> {
    COLOR_KEYWORDS_RE.captures(source)?.get(1).map(|body| body.range())
}

/// Returns the bodies of all `/* glsl */` template literals
pub fn inline_shader_bodies(source: &str) -> Vec<Range<usize>> {
    INLINE_SHADER_RE
        .captures_iter(source)
        .filter_map(|captures| captures.get(1))
        .map(|body| body.range())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_assignments_quote_styles() {
        let source = "var a = \"one\";\nvar b = 'two';\nvar c = `three\nlines`;\n";
        let assignments = string_assignments(source);
        let found: Vec<_> = assignments.iter().map(|a| (a.name, &source[a.body.clone()])).collect();
        assert_eq!(found, vec![("a", "one"), ("b", "two"), ("c", "three\nlines")]);
        assert_eq!(&source[assignments[0].literal.clone()], "\"one\"");
    }

    #[test]
    fn test_string_assignments_escapes() {
        let source = r#"var a = "say \"hi\";\n"; var b = 'x';"#;
        let assignments = string_assignments(source);
        assert_eq!(assignments.len(), 2);
        assert_eq!(&source[assignments[0].body.clone()], r#"say \"hi\";\n"#);
        assert_eq!(assignments[1].name, "b");
    }

    #[test]
    fn test_string_assignments_require_semicolon() {
        let source = "var a = \"x\", b = \"y\";\nfoo.bar = \"z\";\nvar c = \"unterminated";
        let assignments = string_assignments(source);
        let names: Vec<_> = assignments.iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["b"]);
    }

    #[test]
    fn test_string_assignments_dollar_identifiers() {
        let source = "var vertex$1 = \"a\";\nvar vertex$10 = \"b\";\nconst x = a$b = \"c\";";
        let names: Vec<_> = string_assignments(source).iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["vertex$1", "vertex$10", "a$b"]);
    }

    #[test]
    fn test_text_inside_literals_is_skipped() {
        let source = "var a = \"x = 'inner';\";\nvar b = \"y\";";
        let names: Vec<_> = string_assignments(source).iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_include_directives() {
        let source = "#include <common>\\n#include <packing>\\n#include common";
        let directives = include_directives(source);
        let names: Vec<_> = directives.iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["common", "packing"]);
        assert_eq!(&source[directives[1].range.clone()], "#include <packing>");
    }

    #[test]
    fn test_material_shader_names() {
        let source = "const ShaderLib = {\n\tmeshphong_vert: vertex$5,\n\tmeshphong_frag: fragment$5\n};\nmeshphongx_vert: nope";
        assert_eq!(material_shader_names(source, "meshphong"), vec!["vertex$5", "fragment$5"]);
        assert!(material_shader_names(source, "meshtoon").is_empty());
    }

    #[test]
    fn test_material_stem_is_whole_word() {
        let source = "backgroundCube_vert: vertex$2, background_vert: vertex$1";
        assert_eq!(material_shader_names(source, "background"), vec!["vertex$1"]);
        assert_eq!(material_shader_names(source, "backgroundCube"), vec!["vertex$2"]);
        assert!(material_shader_names(source, "Cube").is_empty());
    }

    #[test]
    fn test_color_keywords_body() {
        let source = "const _colorKeywords = { 'aliceblue': 0xF0F8FF, 'red': 0xFF0000 };";
        let body = color_keywords_body(source).unwrap();
        assert_eq!(&source[body], " 'aliceblue': 0xF0F8FF, 'red': 0xFF0000 ");
        assert!(color_keywords_body("const _colorKeywords = {};").is_none());
    }

    #[test]
    fn test_inline_shader_bodies() {
        let source = "a = /* glsl */`void main() {}`;\nb = `not a shader`;\nc = /* glsl */\n\t`\n\tfloat x;\n`;";
        let bodies: Vec<_> = inline_shader_bodies(source).into_iter().map(|range| &source[range]).collect();
        assert_eq!(bodies, vec!["void main() {}", "\n\tfloat x;\n"]);
    }
}
