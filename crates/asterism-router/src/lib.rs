//! # Asterism Router
//!
//! File-system route resolution for the Asterism framework, with support for:
//! - Static routes (`routes/about/page.rsx` → `/about`)
//! - Dynamic parameters (`routes/users/[id]/page.rsx` → `/users/:id`)
//! - Catch-all routes (`routes/docs/[...slug]/page.rsx` → `/docs/*slug`)
//! - Optional catch-alls (`[[...slug]]`), route groups (`(shop)`), and
//!   private folders (`_internal`)
//! - Nested layouts and loading/error boundaries
//! - Island files (`chart.island.rsx`) and hydration-risk analysis
//!
//! The engine walks the route directory, interprets file and directory
//! names as route definitions, and produces a validated, deterministically
//! ordered route table. It executes nothing: code generation, manifest
//! persistence, and dispatch all consume the [`ScanResult`] this crate
//! returns.
//!
//! Diagnostics are data. Duplicate routes, ambiguous patterns, malformed
//! segments, unreadable branches, and hydration risks are collected in
//! [`ScanResult::errors`] while the scan continues; nothing here is fatal
//! to the host process.
//!
//! ## Example
//!
//! ```
//! use asterism_router::scan;
//!
//! let project = tempfile::tempdir().unwrap();
//! let routes = project.path().join("routes");
//! std::fs::create_dir_all(routes.join("users/[id]")).unwrap();
//! std::fs::write(routes.join("page.rsx"), "<h1>Home</h1>").unwrap();
//! std::fs::write(routes.join("users/[id]/page.rsx"), "<h1>User</h1>").unwrap();
//!
//! let result = scan(project.path());
//! assert!(result.errors.is_empty());
//! assert_eq!(result.routes.len(), 2);
//! // Static routes sort before dynamic ones.
//! assert_eq!(result.routes[0].pattern, "/");
//! assert_eq!(result.routes[1].pattern, "/users/:id");
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use serde::Serialize;

// ============================================================================
// Module Declarations
// ============================================================================

mod classify;
mod config;
mod error;
mod hydrate;
pub mod path;
mod resolve;
pub mod route;
mod table;
mod walk;

// Re-export public types
pub use classify::{classify_file, FileRole};
pub use config::ScanConfig;
pub use error::{ScanError, ScanErrorKind};
pub use hydrate::{has_client_directive, has_null_bridge, imports_island, shell_mismatch_risk};
pub use route::{
    detect_methods, parse_segment, parse_segments, pattern_depth, pattern_shape, priority_class,
    segments_to_pattern, validate_segments, FsRouteConfig, HttpMethod, RouteKind, Segment,
    SegmentKind,
};

// ============================================================================
// Core Types
// ============================================================================

/// A file discovered under the route root.
///
/// Created per scan and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScannedFile {
    /// Absolute path on disk.
    pub path: PathBuf,
    /// Path relative to the route root, `/`-separated on every platform.
    pub route_path: String,
    pub role: FileRole,
    /// Parsed segments of the file's directory path.
    pub segments: Vec<Segment>,
    /// File extension, without the dot.
    pub ext: String,
}

/// Aggregate counters for one scan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanStats {
    pub files: usize,
    pub pages: usize,
    pub apis: usize,
    pub layouts: usize,
    pub islands: usize,
    pub elapsed: Duration,
}

/// The engine's sole output: scanned files, the priority-sorted route
/// table, diagnostics, and stats. Created fresh per invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanResult {
    pub files: Vec<ScannedFile>,
    pub routes: Vec<FsRouteConfig>,
    pub errors: Vec<ScanError>,
    pub stats: ScanStats,
}

// ============================================================================
// Entry Points
// ============================================================================

/// Scans `<project_root>/routes` with the default configuration.
///
/// See [`scan_with_config`].
pub fn scan(project_root: impl AsRef<Path>) -> ScanResult {
    scan_with_config(project_root, &ScanConfig::default())
}

/// Scans the configured route directory and resolves the route table.
///
/// The pipeline runs in one deterministic pass: walk → classify → build →
/// resolve ancestors → analyze hydration → sort. Scanning the same
/// unchanged tree twice yields identically ordered results.
///
/// A missing route root yields an empty, error-free result (an app with
/// no routes is valid). A root that exists but is not a directory yields
/// a single `file-read-error` and an empty table. Everything else is a
/// per-file diagnostic in [`ScanResult::errors`].
pub fn scan_with_config(project_root: impl AsRef<Path>, config: &ScanConfig) -> ScanResult {
    let started = Instant::now();
    let route_root = project_root.as_ref().join(&config.routes_dir);
    let route_root = fs::canonicalize(&route_root).unwrap_or(route_root);

    let (files, mut errors) = walk::walk_routes(&route_root, config);
    let mut routes = table::build_route_table(&files, &mut errors);

    let special = resolve::SpecialFiles::index(&files);
    let abs_of: HashMap<&str, &Path> = files
        .iter()
        .map(|f| (f.route_path.as_str(), f.path.as_path()))
        .collect();

    for route in &mut routes {
        let dir = path::dir_of(&route.id);
        route.layouts = special.layout_chain(dir);
        route.loading = special.closest_loading(dir).map(str::to_string);
        route.error = special.closest_error(dir).map(str::to_string);

        match route.kind {
            RouteKind::Api => match fs::read_to_string(&route.file) {
                Ok(source) => route.methods = detect_methods(&source),
                Err(e) => {
                    errors.push(ScanError::file_read(&route.file, &e));
                    route.methods = std::iter::once(HttpMethod::Get).collect();
                }
            },
            RouteKind::Page => {
                let island = special.closest_island(dir).map(str::to_string);
                let source = match fs::read_to_string(&route.file) {
                    Ok(source) => Some(source),
                    Err(e) => {
                        errors.push(ScanError::file_read(&route.file, &e));
                        None
                    }
                };
                if let Some(island_path) = island {
                    // An explicit island always wins the client binding.
                    if let Some(source) = &source {
                        let stem = classify::file_stem(path::file_name_of(&island_path));
                        let name = classify::island_name(stem, &config.island_suffix);
                        if hydrate::shell_mismatch_risk(source, stem, name) {
                            let island_file = abs_of
                                .get(island_path.as_str())
                                .map(|p| p.to_path_buf())
                                .unwrap_or_else(|| PathBuf::from(&island_path));
                            errors.push(ScanError::hydration_risk(&route.file, &island_file));
                        }
                    }
                    route.client = Some(island_path);
                } else if source.as_deref().is_some_and(hydrate::has_client_directive) {
                    // The page is its own client module.
                    route.client = route.component.clone();
                }
            }
        }
    }

    table::sort_by_priority(&mut routes);

    let stats = ScanStats {
        files: files.len(),
        pages: count_role(&files, FileRole::Page),
        apis: count_role(&files, FileRole::Api),
        layouts: count_role(&files, FileRole::Layout),
        islands: count_role(&files, FileRole::Island),
        elapsed: started.elapsed(),
    };
    tracing::debug!(
        files = stats.files,
        routes = routes.len(),
        errors = errors.len(),
        "scan complete"
    );

    ScanResult {
        files,
        routes,
        errors,
        stats,
    }
}

fn count_role(files: &[ScannedFile], role: FileRole) -> usize {
    files.iter().filter(|f| f.role == role).count()
}
