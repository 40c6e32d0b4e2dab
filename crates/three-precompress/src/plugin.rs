//! Build pipeline hook
//!
//! [`ThreePrecompress`] is constructed once per build invocation. The host calls
//! [`ThreePrecompress::load`] for every module it resolves; files outside the
//! three.js build directory are left to the host.

use std::path::Path;

use crate::rewrite::{RewriteReport, Rewritten, rewrite};
use crate::{InclusionPolicy, PrecompressOptions};

/// Path fragment identifying the three.js build output
pub const THREE_BUILD_DIR: &str = "node_modules/three/build/";

/// Selective inclusion hook for the three.js build
///
/// Holds the resolved inclusion policy. It is immutable after construction, so one
/// instance can serve concurrent `load` calls.
#[derive(Debug, Clone)]
pub struct ThreePrecompress {
    policy: InclusionPolicy,
    color_keywords: bool,
}

impl ThreePrecompress {
    /// Hook name reported to the host
    pub const NAME: &'static str = "vite-plugin-three-precompress";

    /// Creates the hook, reporting unknown override names through `tracing`
    ///
    /// A catalog whose overrides cannot be merged keeps its all-excluded default.
    pub fn new(options: &PrecompressOptions) -> Self {
        Self {
            policy: InclusionPolicy::from_options(options),
            color_keywords: options.color_keywords,
        }
    }

    /// Creates the hook, failing on unknown override names
    pub fn try_new(options: &PrecompressOptions) -> crate::Result<Self> {
        Ok(Self {
            policy: InclusionPolicy::try_from_options(options)?,
            color_keywords: options.color_keywords,
        })
    }

    /// Creates the hook from an already resolved policy
    pub fn with_policy(policy: InclusionPolicy, color_keywords: bool) -> Self {
        Self { policy, color_keywords }
    }

    /// The resolved inclusion policy
    pub fn policy(&self) -> &InclusionPolicy {
        &self.policy
    }

    /// Returns true if `path` lies in the three.js build directory
    pub fn is_target(path: &Path) -> bool {
        path.to_string_lossy().replace('\\', "/").contains(THREE_BUILD_DIR)
    }

    /// Load hook
    ///
    /// Returns `None` when the file is not a three.js build file or cannot be read
    /// (the error is logged), and the rewritten source otherwise.
    pub fn load(&self, path: &Path) -> Option<String> {
        if !Self::is_target(path) {
            return None;
        }

        let code = match crate::read_source(path) {
            Ok(code) => code,
            Err(e) => {
                tracing::error!("{e}");
                return None;
            }
        };

        let Rewritten { code: rewritten, report } = self.transform_with_report(&code);
        log_report(path, code.len(), rewritten.len(), &report);
        Some(rewritten)
    }

    /// Rewrites the text of one three.js build file
    pub fn transform(&self, code: &str) -> String {
        self.transform_with_report(code).code
    }

    /// Rewrites the text of one three.js build file and reports what changed
    pub fn transform_with_report(&self, code: &str) -> Rewritten {
        rewrite(code, &self.policy, self.color_keywords)
    }
}

/// Logs a one-line summary of a rewrite
pub fn log_report(path: &Path, before: usize, after: usize, report: &RewriteReport) {
    tracing::info!(
        emptied = report.emptied,
        compressed = report.compressed,
        includes_removed = report.includes_removed,
        inline_compressed = report.inline_compressed,
        color_keywords_stripped = report.color_keywords_stripped,
        "Rewrote {}: {before} -> {after} bytes",
        path.display()
    );
}
