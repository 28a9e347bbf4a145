/// Route module for file-based routing
///
/// Segment parsing, pattern compilation, and the resolved route
/// configuration consumed by the code generator and manifest writer.
use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::Serialize;

pub mod pattern;
pub mod segment;

// Re-export commonly used types
pub use pattern::{
    pattern_depth, pattern_shape, priority_class, segments_to_pattern, validate_segments,
};
pub use segment::{parse_segment, parse_segments, Segment, SegmentKind};

/// Whether a route serves a rendered page or an API handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteKind {
    Page,
    Api,
}

/// HTTP methods an API route accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl HttpMethod {
    const ALL: [HttpMethod; 7] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
        HttpMethod::Head,
        HttpMethod::Options,
    ];

    /// Declaration-macro marker for this method in a handler file.
    fn marker(self) -> &'static str {
        match self {
            HttpMethod::Get => "get!",
            HttpMethod::Post => "post!",
            HttpMethod::Put => "put!",
            HttpMethod::Patch => "patch!",
            HttpMethod::Delete => "delete!",
            HttpMethod::Head => "head!",
            HttpMethod::Options => "options!",
        }
    }
}

/// Detects the HTTP methods declared in an API handler source (pure function)
///
/// A handler declares endpoints with the framework's HTTP macros
/// (`get!`, `post!`, `put!`, `patch!`, `delete!`, `head!`, `options!`),
/// each at the start of a line. A file declaring none defaults to `GET`.
///
/// # Examples
///
/// ```
/// use asterism_router::{detect_methods, HttpMethod};
///
/// let src = "get!()\nfn list() {}\n\npost!()\nfn create() {}\n";
/// let methods = detect_methods(src);
/// assert!(methods.contains(&HttpMethod::Get));
/// assert!(methods.contains(&HttpMethod::Post));
/// assert!(!methods.contains(&HttpMethod::Delete));
/// ```
pub fn detect_methods(source: &str) -> BTreeSet<HttpMethod> {
    let mut methods: BTreeSet<HttpMethod> = HttpMethod::ALL
        .into_iter()
        .filter(|m| {
            source
                .lines()
                .map(str::trim_start)
                .any(|line| line.starts_with(m.marker()))
        })
        .collect();
    if methods.is_empty() {
        methods.insert(HttpMethod::Get);
    }
    methods
}

/// One resolved route: the engine's unit of output.
///
/// Exactly one config exists per page/API file; `pattern` is unique
/// across the whole table, and so is its shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FsRouteConfig {
    /// Stable id derived from the file path: the root-relative path with
    /// the extension stripped, e.g. `users/[id]/page`.
    pub id: String,
    /// Directory path segments, in order.
    pub segments: Vec<Segment>,
    /// Compiled URL pattern, e.g. `/users/:id`.
    pub pattern: String,
    pub kind: RouteKind,
    /// Generated module reference for the code generator.
    pub module: String,
    /// Component module (the page source itself); absent for API routes.
    pub component: Option<String>,
    /// Client hydration module: the bound island file, or the page itself
    /// when it carries the client directive. Absent for fully static routes.
    pub client: Option<String>,
    /// Layout chain, root → leaf.
    pub layouts: Vec<String>,
    /// Nearest loading boundary, if any ancestor directory defines one.
    pub loading: Option<String>,
    /// Nearest error boundary, if any ancestor directory defines one.
    pub error: Option<String>,
    /// Source file the route was resolved from.
    pub file: PathBuf,
    /// Accepted HTTP methods; populated for API routes, empty for pages.
    pub methods: BTreeSet<HttpMethod>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_methods_defaults_to_get() {
        let methods = detect_methods("fn nothing_declared() {}");
        assert_eq!(methods.len(), 1);
        assert!(methods.contains(&HttpMethod::Get));
    }

    #[test]
    fn test_detect_methods_requires_line_start() {
        // `widget!` must not register as a GET handler.
        let methods = detect_methods("widget!(\"spinner\")\ndelete!()\nfn remove() {}\n");
        assert!(methods.contains(&HttpMethod::Delete));
        assert!(!methods.contains(&HttpMethod::Get));
        assert_eq!(methods.len(), 1);
    }

    #[test]
    fn test_detect_methods_indented_macro() {
        let methods = detect_methods("    put!(\":id\")\n    fn update() {}\n");
        assert!(methods.contains(&HttpMethod::Put));
    }
}
