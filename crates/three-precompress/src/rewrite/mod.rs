//! Selective inclusion rewriter for the three.js build
//!
//! The rewrite runs in ordered passes:
//!
//! 0. Strip the `_colorKeywords` table unless it is kept.
//! 1. Partition catalog chunks into included and excluded.
//! 2. Discover material shader identifiers through their `ShaderLib` stems.
//! 3. Empty excluded literals and delete `#include` directives of excluded chunks.
//! 4. Minify the literals of included chunks and material shaders.
//! 5. Minify inline `/* glsl */` template literals.
//!
//! Discovery reads the text before anything is deleted. Passes 3 and 4 are planned
//! as one edit list against the same text and applied once, so literals with
//! identical bodies are rewritten independently.

mod edits;
mod scan;

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::ops::Range;

pub use edits::{Edit, apply_edits};

use crate::InclusionPolicy;
use crate::minify::minify_glsl;

/// Statistics about one rewrite
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteReport {
    /// Whether the `_colorKeywords` table body was removed
    pub color_keywords_stripped: bool,
    /// Chunk or material literals replaced by an empty literal
    pub emptied: usize,
    /// Chunk or material literals minified
    pub compressed: usize,
    /// `#include` directives of excluded chunks removed
    pub includes_removed: usize,
    /// Inline `/* glsl */` literals minified
    pub inline_compressed: usize,
}

/// Output of [`rewrite`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    /// The rewritten source
    pub code: String,
    /// What the rewrite did
    pub report: RewriteReport,
}

/// What happens to a named literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fate {
    Empty,
    Compress,
}

/// Per-name decisions for one source file (passes 1 and 2)
#[derive(Debug)]
struct Plan<'a> {
    fates: HashMap<&'a str, Fate>,
    /// Catalog chunks whose `#include` directives are removed
    excluded_includes: HashSet<&'static str>,
}

impl<'a> Plan<'a> {
    fn new(source: &'a str, policy: &InclusionPolicy) -> Self {
        let mut fates = HashMap::new();
        let mut excluded_includes = HashSet::new();

        for (name, included) in policy.chunks.iter() {
            if included {
                fates.insert(name, Fate::Compress);
            } else {
                fates.insert(name, Fate::Empty);
                excluded_includes.insert(name);
            }
        }

        for (stem, included) in policy.materials.stems() {
            let fate = if included { Fate::Compress } else { Fate::Empty };
            for name in scan::material_shader_names(source, stem) {
                tracing::debug!("Material stem '{stem}' uses '{name}' ({fate:?})");
                // Exclusion wins over inclusion
                fates
                    .entry(name)
                    .and_modify(|existing| {
                        if fate == Fate::Empty {
                            *existing = Fate::Empty;
                        }
                    })
                    .or_insert(fate);
            }
        }

        Self { fates, excluded_includes }
    }
}

/// Rewrites one three.js build file
///
/// # Arguments
/// * `source` - Text of the build file
/// * `policy` - Resolved chunk and material inclusion flags
/// * `color_keywords` - Keep the `_colorKeywords` table when true
///
/// # Returns
/// The rewritten text with a report. Names absent from the source are skipped, so
/// the rewrite never fails.
pub fn rewrite(source: &str, policy: &InclusionPolicy, color_keywords: bool) -> Rewritten {
    let mut report = RewriteReport::default();

    let source = match (color_keywords, scan::color_keywords_body(source)) {
        (false, Some(body)) => {
            report.color_keywords_stripped = true;
            Cow::Owned(apply_edits(source, vec![Edit::delete(body)]))
        }
        _ => Cow::Borrowed(source),
    };

    let plan = Plan::new(&source, policy);
    let code = rewrite_chunks(&source, &plan, &mut report);
    let code = compress_inline_shaders(&code, &mut report);

    Rewritten { code, report }
}

/// Passes 3 and 4 as a single edit list
fn rewrite_chunks(source: &str, plan: &Plan<'_>, report: &mut RewriteReport) -> String {
    let mut edits = Vec::new();
    let mut rewritten_literals: Vec<Range<usize>> = Vec::new();

    for assignment in scan::string_assignments(source) {
        let Some(fate) = plan.fates.get(assignment.name) else {
            continue;
        };

        let replacement = match fate {
            Fate::Empty => {
                report.emptied += 1;
                "``".to_string()
            }
            Fate::Compress => {
                report.compressed += 1;
                compress_literal_body(&source[assignment.body.clone()], plan, report)
            }
        };

        rewritten_literals.push(assignment.literal.clone());
        edits.push(Edit::replace(assignment.literal, replacement));
    }

    // Directives inside rewritten literals were already handled with the literal
    for directive in scan::include_directives(source) {
        if !plan.excluded_includes.contains(directive.name) || is_inside(&rewritten_literals, directive.range.start) {
            continue;
        }
        report.includes_removed += 1;
        edits.push(Edit::delete(directive.range));
    }

    apply_edits(source, edits)
}

/// Minifies an escaped literal body and wraps it in a template literal
fn compress_literal_body(body: &str, plan: &Plan<'_>, report: &mut RewriteReport) -> String {
    let removed: Vec<Edit> = scan::include_directives(body)
        .into_iter()
        .filter(|directive| plan.excluded_includes.contains(directive.name))
        .map(|directive| Edit::delete(directive.range))
        .collect();
    report.includes_removed += removed.len();

    let body = apply_edits(body, removed);
    let glsl = body.replace("\\n", "\n").replace("\\t", "\t");

    format!("`\n{}`", minify_glsl(&glsl))
}

/// Pass 5
fn compress_inline_shaders(source: &str, report: &mut RewriteReport) -> String {
    let edits: Vec<Edit> = scan::inline_shader_bodies(source)
        .into_iter()
        .map(|body| {
            let minified = minify_glsl(&source[body.clone()]);
            Edit::replace(body, minified)
        })
        .collect();
    report.inline_compressed += edits.len();

    apply_edits(source, edits)
}

/// Whether `offset` falls inside one of the sorted, disjoint `ranges`
fn is_inside(ranges: &[Range<usize>], offset: usize) -> bool {
    let index = ranges.partition_point(|range| range.end <= offset);
    ranges.get(index).is_some_and(|range| range.contains(&offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrecompressOptions;

    fn policy(options: PrecompressOptions) -> InclusionPolicy {
        InclusionPolicy::try_from_options(&options).unwrap()
    }

    #[test]
    fn test_selective_inclusion() {
        let source = "var alphamap_fragment = \"glsl-body-1\";\nvar common = \"glsl-body-2\";\n#include <alphamap_fragment>\n#include <common>";
        let policy = policy(PrecompressOptions::default().with_shader("common"));

        let rewritten = rewrite(source, &policy, true);
        assert_eq!(
            rewritten.code,
            "var alphamap_fragment = ``;\nvar common = `\nglsl-body-2`;\n\n#include <common>"
        );
        assert_eq!(rewritten.report.emptied, 1);
        assert_eq!(rewritten.report.compressed, 1);
        assert_eq!(rewritten.report.includes_removed, 1);
    }

    #[test]
    fn test_excluded_material_is_emptied() {
        let source = "var vertex$1 = \"void main() {\\n\\tgl_Position = vec4( 0.0 );\\n}\";\nvar vertex$10 = \"keep  me\";\nvar fragment$1 = 'void main() {}';\nconst ShaderLib = { meshphong_vert: vertex$1, meshphong_frag: fragment$1 };";

        let rewritten = rewrite(source, &InclusionPolicy::default(), true);
        assert!(rewritten.code.contains("var vertex$1 = ``;"));
        assert!(rewritten.code.contains("var fragment$1 = ``;"));
        assert!(rewritten.code.contains("var vertex$10 = \"keep  me\";"));
        assert!(rewritten.code.contains("meshphong_vert: vertex$1, meshphong_frag: fragment$1"));
        assert_eq!(rewritten.report.emptied, 2);
    }

    #[test]
    fn test_included_material_is_compressed() {
        let source = "var vertex$1 = \"void main() {\\n\\tgl_Position = vec4( 0.0 );\\n}\";\nconst ShaderLib = { meshphong_vert: vertex$1 };";
        let policy = policy(PrecompressOptions::default().with_material("phong"));

        let rewritten = rewrite(source, &policy, true);
        assert!(rewritten.code.starts_with("var vertex$1 = `\nvoid main(){gl_Position=vec4(.0);}`;"));
        assert_eq!(rewritten.report.compressed, 1);
    }

    #[test]
    fn test_identical_bodies_rewritten_independently() {
        let source = "var begin_vertex = \"vec3 transformed = vec3( position );\";\nvar beginnormal_vertex = \"vec3 transformed = vec3( position );\";\nvar bsdfs = \"vec3 transformed = vec3( position );\";";
        let policy = policy(PrecompressOptions::default().with_shader("begin_vertex").with_shader("beginnormal_vertex"));

        let rewritten = rewrite(source, &policy, true);
        assert_eq!(
            rewritten.code,
            "var begin_vertex = `\nvec3 transformed=vec3(position);`;\nvar beginnormal_vertex = `\nvec3 transformed=vec3(position);`;\nvar bsdfs = ``;"
        );
    }

    #[test]
    fn test_excluded_includes_inside_kept_chunk() {
        let source = "var lights_phong_fragment = \"#include <bsdfs>\\n#include <common>\\nfloat x = 1.0;\";";
        let policy = policy(PrecompressOptions::default().with_shader("lights_phong_fragment").with_shader("common"));

        let rewritten = rewrite(source, &policy, true);
        assert_eq!(rewritten.code, "var lights_phong_fragment = `\n#include <common>\nfloat x=1.;`;");
        assert_eq!(rewritten.report.includes_removed, 1);
    }

    #[test]
    fn test_excluded_includes_in_untracked_literal() {
        let source = "var fragment = \"#include <bsdfs>\\nvoid main() {}\";";
        let rewritten = rewrite(source, &InclusionPolicy::default(), true);
        assert_eq!(rewritten.code, "var fragment = \"\\nvoid main() {}\";");
    }

    #[test]
    fn test_absent_names_leave_source_unchanged() {
        let source = "import { foo } from './foo.js';\nconst answer = \"42\";\nexport { answer };\n";
        let rewritten = rewrite(source, &InclusionPolicy::default(), false);
        assert_eq!(rewritten.code, source);
        assert_eq!(rewritten.report, RewriteReport::default());
    }

    #[test]
    fn test_color_keywords() {
        let source = "const _colorKeywords = { 'aliceblue': 0xF0F8FF, 'red': 0xFF0000 };\nconst x = 1;";

        let stripped = rewrite(source, &InclusionPolicy::default(), false);
        assert_eq!(stripped.code, "const _colorKeywords = {};\nconst x = 1;");
        assert!(stripped.report.color_keywords_stripped);

        let kept = rewrite(source, &InclusionPolicy::default(), true);
        assert_eq!(kept.code, source);
        assert!(!kept.report.color_keywords_stripped);
    }

    #[test]
    fn test_inline_shaders() {
        let source = "const shader = /* glsl */`\n\tvoid main() {\n\t\tgl_FragColor = vec4( 1.0 ); // white\n\t}\n`;";
        let rewritten = rewrite(source, &InclusionPolicy::default(), true);
        assert_eq!(rewritten.code, "const shader = /* glsl */`void main(){gl_FragColor=vec4(1.);}`;");
        assert_eq!(rewritten.report.inline_compressed, 1);
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let source = "var common = \"float a = 0.5;\\n#ifdef FOO\\nfloat b;\\n#endif\";\nvar bsdfs = \"x\";\n#include <bsdfs>";
        let policy = policy(PrecompressOptions::default().with_shader("common"));

        let once = rewrite(source, &policy, false).code;
        let twice = rewrite(&once, &policy, false).code;
        assert_eq!(once, twice);
    }

    #[test]
    fn test_is_inside() {
        let ranges = vec![2..5, 8..10];
        assert!(!is_inside(&ranges, 1));
        assert!(is_inside(&ranges, 2));
        assert!(is_inside(&ranges, 4));
        assert!(!is_inside(&ranges, 5));
        assert!(is_inside(&ranges, 9));
        assert!(!is_inside(&ranges, 10));
    }
}
