/// Path helpers for root-relative route paths
///
/// Route paths use `/` separators on every platform and are relative to
/// the route root; the root itself is the empty string.
use std::path::Path;

mod hierarchy;

pub use hierarchy::DirHierarchy;

/// Renders a filesystem path as a route path: components joined with `/`.
///
/// Windows separators and non-UTF-8 components are normalized lossily.
pub fn route_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// The directory portion of a route path (`""` for a top-level file).
pub fn dir_of(route_path: &str) -> &str {
    route_path
        .rsplit_once('/')
        .map(|(dir, _)| dir)
        .unwrap_or("")
}

/// The file-name portion of a route path.
pub fn file_name_of(route_path: &str) -> &str {
    route_path
        .rsplit_once('/')
        .map(|(_, name)| name)
        .unwrap_or(route_path)
}

/// Strips the final extension from a route path, yielding the route id.
pub fn strip_extension(route_path: &str) -> &str {
    match route_path.rsplit_once('.') {
        // Only strip within the file name, never inside a directory.
        Some((stem, ext)) if !ext.contains('/') => stem,
        _ => route_path,
    }
}
