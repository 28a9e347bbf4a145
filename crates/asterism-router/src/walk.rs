// File: src/walk.rs
// Purpose: Enumerate route files under the route root

use std::path::Path;

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use crate::classify::{self, FileRole};
use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::route::segment::parse_segments;
use crate::{path, ScannedFile};

/// Compiled exclusion rules, built once per scan.
///
/// Each rule is a fully anchored matcher over root-relative paths:
/// `*` and `?` stay within one path component, `**` spans components.
pub(crate) struct ExcludeSet {
    set: GlobSet,
}

impl ExcludeSet {
    /// Compile user patterns; invalid patterns are skipped with a warning,
    /// never a hard failure.
    pub(crate) fn compile(patterns: &[String]) -> Self {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            // `tmp/` names the directory itself; match it without the slash.
            let pattern = pattern.strip_suffix('/').unwrap_or(pattern.as_str());
            match GlobBuilder::new(pattern).literal_separator(true).build() {
                Ok(glob) => {
                    builder.add(glob);
                }
                Err(e) => {
                    tracing::warn!(pattern, error = %e, "invalid exclude pattern, skipped");
                    continue;
                }
            }
            // `tmp/**` should prune `tmp` itself, not just its contents.
            if let Some(prefix) = pattern.strip_suffix("/**") {
                if let Ok(glob) = GlobBuilder::new(prefix).literal_separator(true).build() {
                    builder.add(glob);
                }
            }
        }
        let set = builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to build exclude set");
            GlobSet::empty()
        });
        Self { set }
    }

    pub(crate) fn is_excluded(&self, route_path: &str) -> bool {
        self.set.is_match(route_path)
    }
}

/// Enumerates all eligible files under the route root in one pass.
///
/// Files beneath a private folder, or matching any exclude rule, never
/// reach the classifier. Discovered paths are explicitly sorted before
/// classification: the underlying enumeration order is not guaranteed to
/// be stable across platforms, and this sort is what makes the whole
/// scan deterministic.
pub(crate) fn walk_routes(
    route_root: &Path,
    config: &ScanConfig,
) -> (Vec<ScannedFile>, Vec<ScanError>) {
    let mut errors = Vec::new();

    // A missing root is a valid app with no routes. A root that exists
    // but is not a directory is the one enumeration error worth raising.
    if !route_root.exists() {
        tracing::debug!(root = %route_root.display(), "route root does not exist, nothing to scan");
        return (Vec::new(), errors);
    }
    if !route_root.is_dir() {
        errors.push(ScanError::file_read(
            route_root,
            &"route root is not a directory",
        ));
        return (Vec::new(), errors);
    }

    let excludes = ExcludeSet::compile(&config.exclude);
    let root = route_root.to_path_buf();

    let walker = WalkDir::new(&root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            // Private folders (and files) are pruned before classification.
            if classify::is_private_name(&name) {
                return false;
            }
            let rel = entry.path().strip_prefix(&root).unwrap_or(entry.path());
            let rel = path::route_path(rel);
            if excludes.is_excluded(&rel) {
                return false;
            }
            // The trailing-separator form lets directory-shaped rules prune.
            if entry.file_type().is_dir() && excludes.is_excluded(&format!("{rel}/")) {
                return false;
            }
            true
        });

    // Collect first, then sort, then classify.
    let mut discovered = Vec::new();
    for entry in walker {
        match entry {
            Ok(entry) => {
                if !entry.file_type().is_file() {
                    continue;
                }
                if !config.matches_extension(entry.path()) {
                    continue;
                }
                let rel = entry.path().strip_prefix(&root).unwrap_or(entry.path());
                discovered.push((path::route_path(rel), entry.path().to_path_buf()));
            }
            Err(e) => {
                let file = e
                    .path()
                    .map(|p| p.to_path_buf())
                    .unwrap_or_else(|| root.clone());
                errors.push(ScanError::file_read(file, &e));
            }
        }
    }
    discovered.sort_by(|a, b| a.0.cmp(&b.0));

    let mut files = Vec::with_capacity(discovered.len());
    for (route_path, abs_path) in discovered {
        let file_name = path::file_name_of(&route_path);
        let role = classify::classify_file(file_name, &config.island_suffix);
        if role == FileRole::Ignored {
            tracing::debug!(file = %route_path, "ignoring co-located file");
            continue;
        }
        let ext = abs_path
            .extension()
            .map(|e| e.to_string_lossy().to_string())
            .unwrap_or_default();
        let segments = parse_segments(path::dir_of(&route_path));
        files.push(ScannedFile {
            path: abs_path,
            route_path,
            role,
            segments,
            ext,
        });
    }

    (files, errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclude_single_component_star() {
        let set = ExcludeSet::compile(&["drafts/*.rsx".to_string()]);
        assert!(set.is_excluded("drafts/page.rsx"));
        // `*` stays within one component.
        assert!(!set.is_excluded("drafts/deep/page.rsx"));
    }

    #[test]
    fn test_exclude_double_star_spans_components() {
        let set = ExcludeSet::compile(&["drafts/**".to_string()]);
        assert!(set.is_excluded("drafts/page.rsx"));
        assert!(set.is_excluded("drafts/deep/page.rsx"));
        // The directory itself is pruned too.
        assert!(set.is_excluded("drafts"));
        assert!(!set.is_excluded("published/page.rsx"));
    }

    #[test]
    fn test_exclude_question_mark() {
        let set = ExcludeSet::compile(&["v?/page.rsx".to_string()]);
        assert!(set.is_excluded("v1/page.rsx"));
        assert!(!set.is_excluded("v12/page.rsx"));
    }

    #[test]
    fn test_exclude_trailing_slash_names_directory() {
        let set = ExcludeSet::compile(&["tmp/".to_string()]);
        assert!(set.is_excluded("tmp"));
    }

    #[test]
    fn test_invalid_pattern_skipped() {
        let set = ExcludeSet::compile(&["a[".to_string(), "good/*".to_string()]);
        assert!(set.is_excluded("good/file.rsx"));
    }
}
