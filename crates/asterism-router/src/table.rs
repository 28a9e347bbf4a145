// File: src/table.rs
// Purpose: Build the route table - dedupe, conflict-check, and order routes

use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

use crate::classify::FileRole;
use crate::error::ScanError;
use crate::route::{
    pattern_depth, pattern_shape, priority_class, segments_to_pattern, validate_segments,
    FsRouteConfig, RouteKind,
};
use crate::{path, ScannedFile};

/// Builds one `FsRouteConfig` per page/API file.
///
/// `files` must already be sorted by route path; the first-encountered
/// (lexicographically smallest) path wins every duplicate or conflict.
/// Layout chains, boundaries, client bindings, and API methods are
/// resolved afterwards by the caller - this pass is purely lexical.
pub(crate) fn build_route_table(
    files: &[ScannedFile],
    errors: &mut Vec<ScanError>,
) -> Vec<FsRouteConfig> {
    // Lookup tables keyed by pattern and by shape, mapping to the first
    // owner's source file.
    let mut by_pattern: HashMap<String, PathBuf> = HashMap::new();
    let mut by_shape: HashMap<String, PathBuf> = HashMap::new();
    let mut routes = Vec::new();

    for file in files {
        let kind = match file.role {
            FileRole::Page => RouteKind::Page,
            FileRole::Api => RouteKind::Api,
            _ => continue,
        };

        if let Err(detail) = validate_segments(&file.segments) {
            tracing::warn!(file = %file.route_path, %detail, "dropping route");
            errors.push(ScanError::invalid_segment(&file.path, &detail));
            continue;
        }

        let pattern = segments_to_pattern(&file.segments);
        let shape = pattern_shape(&file.segments);

        if let Some(first) = by_pattern.get(&pattern) {
            tracing::warn!(file = %file.route_path, %pattern, "duplicate route");
            errors.push(ScanError::duplicate_route(&file.path, first, &pattern));
            continue;
        }
        if let Some(first) = by_shape.get(&shape) {
            tracing::warn!(file = %file.route_path, %shape, "ambiguous route");
            errors.push(ScanError::pattern_conflict(&file.path, first, &shape));
            continue;
        }
        by_pattern.insert(pattern.clone(), file.path.clone());
        by_shape.insert(shape, file.path.clone());

        let id = path::strip_extension(&file.route_path).to_string();
        routes.push(FsRouteConfig {
            module: format!("routes/{id}"),
            component: match kind {
                RouteKind::Page => Some(file.route_path.clone()),
                RouteKind::Api => None,
            },
            id,
            segments: file.segments.clone(),
            pattern,
            kind,
            client: None,
            layouts: Vec::new(),
            loading: None,
            error: None,
            file: file.path.clone(),
            methods: BTreeSet::new(),
        });
    }

    routes
}

/// Sorts the table by match priority.
///
/// Entirely static routes sort before routes with a dynamic segment,
/// which sort before catch-alls (optional catch-alls last). Ties break
/// by descending segment count - deeper, more specific paths match
/// first - and finally by pattern string, for full determinism. This
/// ordering is the contract the dispatcher relies on: `/users/new` must
/// be tried before `/users/:id`.
pub(crate) fn sort_by_priority(routes: &mut [FsRouteConfig]) {
    routes.sort_by(|a, b| {
        priority_class(&a.segments)
            .cmp(&priority_class(&b.segments))
            .then_with(|| pattern_depth(&b.segments).cmp(&pattern_depth(&a.segments)))
            .then_with(|| a.pattern.cmp(&b.pattern))
    });
}
