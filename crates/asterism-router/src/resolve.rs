// File: src/resolve.rs
// Purpose: Layout chains and nearest loading/error/island resolution

use std::collections::HashMap;

use crate::classify::FileRole;
use crate::path::{self, DirHierarchy};
use crate::ScannedFile;

/// Flat index from directory route path (`""` for the route root) to the
/// special file it defines. Built once per scan; ancestor lookups are an
/// explicit path-segment walk with iterative truncation, never an
/// in-memory tree.
#[derive(Debug, Default)]
pub(crate) struct SpecialFiles {
    layouts: HashMap<String, String>,
    loading: HashMap<String, String>,
    errors: HashMap<String, String>,
    islands: HashMap<String, String>,
}

impl SpecialFiles {
    /// Index the scanned files. `files` must already be sorted by route
    /// path, so when a directory defines several candidates for one role
    /// the lexicographically first wins.
    pub(crate) fn index(files: &[ScannedFile]) -> Self {
        let mut special = Self::default();
        for file in files {
            let map = match file.role {
                FileRole::Layout => &mut special.layouts,
                FileRole::Loading => &mut special.loading,
                FileRole::Error => &mut special.errors,
                FileRole::Island => &mut special.islands,
                FileRole::Page | FileRole::Api | FileRole::Ignored => continue,
            };
            let dir = path::dir_of(&file.route_path).to_string();
            map.entry(dir).or_insert_with(|| file.route_path.clone());
        }
        special
    }

    /// The layout chain for a route directory, root → leaf.
    ///
    /// Every level from the route root down to the route's own directory
    /// contributes its layout, if it defines one. Group directories count:
    /// a layout inside `(shop)/` wraps its subtree even though the group
    /// is invisible in the pattern.
    pub(crate) fn layout_chain(&self, dir: &str) -> Vec<String> {
        let mut levels: Vec<&str> = DirHierarchy::new(dir).collect();
        levels.reverse();
        levels
            .into_iter()
            .filter_map(|level| self.layouts.get(level).cloned())
            .collect()
    }

    /// Nearest loading boundary at or above `dir`.
    pub(crate) fn closest_loading(&self, dir: &str) -> Option<&str> {
        Self::closest(&self.loading, dir)
    }

    /// Nearest error boundary at or above `dir`.
    pub(crate) fn closest_error(&self, dir: &str) -> Option<&str> {
        Self::closest(&self.errors, dir)
    }

    /// Nearest island file at or above `dir`.
    pub(crate) fn closest_island(&self, dir: &str) -> Option<&str> {
        Self::closest(&self.islands, dir)
    }

    fn closest<'a>(map: &'a HashMap<String, String>, dir: &str) -> Option<&'a str> {
        DirHierarchy::new(dir).find_map(|level| map.get(level).map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::segment::parse_segments;
    use std::path::PathBuf;

    fn file(route_path: &str, role: FileRole) -> ScannedFile {
        ScannedFile {
            path: PathBuf::from(format!("/project/routes/{route_path}")),
            route_path: route_path.to_string(),
            role,
            segments: parse_segments(path::dir_of(route_path)),
            ext: "rsx".to_string(),
        }
    }

    #[test]
    fn test_layout_chain_root_to_leaf() {
        let files = vec![
            file("blog/[slug]/page.rsx", FileRole::Page),
            file("blog/layout.rsx", FileRole::Layout),
            file("layout.rsx", FileRole::Layout),
        ];
        let special = SpecialFiles::index(&files);
        assert_eq!(
            special.layout_chain("blog/[slug]"),
            vec!["layout.rsx", "blog/layout.rsx"]
        );
    }

    #[test]
    fn test_layout_chain_without_root_layout() {
        let files = vec![file("blog/layout.rsx", FileRole::Layout)];
        let special = SpecialFiles::index(&files);
        assert_eq!(special.layout_chain("blog/[slug]"), vec!["blog/layout.rsx"]);
    }

    #[test]
    fn test_layout_chain_empty() {
        let special = SpecialFiles::index(&[]);
        assert!(special.layout_chain("a/b").is_empty());
    }

    #[test]
    fn test_closest_prefers_own_directory() {
        let files = vec![
            file("error.rsx", FileRole::Error),
            file("shop/error.rsx", FileRole::Error),
        ];
        let special = SpecialFiles::index(&files);
        assert_eq!(special.closest_error("shop"), Some("shop/error.rsx"));
        assert_eq!(special.closest_error("shop/items"), Some("shop/error.rsx"));
        assert_eq!(special.closest_error("blog"), Some("error.rsx"));
    }

    #[test]
    fn test_closest_absent_when_no_ancestor_defines_one() {
        let special = SpecialFiles::index(&[file("page.rsx", FileRole::Page)]);
        assert_eq!(special.closest_loading("a/b/c"), None);
    }

    #[test]
    fn test_first_island_wins_within_a_directory() {
        let files = vec![
            file("dash/alpha.island.rsx", FileRole::Island),
            file("dash/beta.island.rsx", FileRole::Island),
        ];
        let special = SpecialFiles::index(&files);
        assert_eq!(special.closest_island("dash"), Some("dash/alpha.island.rsx"));
    }
}
