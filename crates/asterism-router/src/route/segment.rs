/// Segment parsing for route directory paths
///
/// Pure functional parsing of directory-name tokens into typed segments.
/// All functions are **pure**: same input → same output, no side effects.
use serde::Serialize;

/// The kind of a single route path segment.
///
/// Decided once at parse time; everything downstream matches exhaustively
/// over this variant instead of re-inspecting directory names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SegmentKind {
    /// Literal text segment: `users`
    Static,
    /// Single named parameter: `[id]`
    Dynamic,
    /// Required catch-all: `[...slug]` (one or more trailing parts)
    CatchAll,
    /// Optional catch-all: `[[...slug]]` (zero or more trailing parts)
    OptionalCatchAll,
    /// Route group: `(marketing)` - organizes files, invisible in the pattern
    Group,
    /// Private folder: `_internal` - the whole subtree is skipped
    Private,
}

/// One slash-delimited component of a route's directory path.
///
/// Immutable value object created once per file during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// The directory name exactly as it appears on disk.
    pub raw: String,
    pub kind: SegmentKind,
    /// Parameter name, present only for the dynamic/catch-all kinds.
    pub param: Option<String>,
}

impl Segment {
    fn new(raw: &str, kind: SegmentKind, param: Option<String>) -> Self {
        Self {
            raw: raw.to_string(),
            kind,
            param,
        }
    }

    /// Whether this segment binds a URL parameter.
    pub fn is_param(&self) -> bool {
        matches!(
            self.kind,
            SegmentKind::Dynamic | SegmentKind::CatchAll | SegmentKind::OptionalCatchAll
        )
    }
}

/// Parses one directory name into a typed segment (pure function)
///
/// # Parsing Rules (evaluated in order)
///
/// 1. **Optional catch-all**: `[[...name]]`
/// 2. **Catch-all**: `[...name]`
/// 3. **Dynamic parameter**: `[name]`
/// 4. **Route group**: `(name)`
/// 5. **Private folder**: `_name`
/// 6. **Static**: any other text
///
/// Malformed bracket forms (`[[name]]` without the ellipsis, `[]`, `[x/y]`)
/// still parse into their nearest kind; [`validate_segments`] rejects them
/// when the route is built.
///
/// [`validate_segments`]: crate::route::validate_segments
///
/// # Examples
///
/// ```
/// use asterism_router::{parse_segment, SegmentKind};
///
/// assert_eq!(parse_segment("about").kind, SegmentKind::Static);
/// assert_eq!(parse_segment("[id]").param.as_deref(), Some("id"));
/// assert_eq!(parse_segment("[...slug]").kind, SegmentKind::CatchAll);
/// assert_eq!(parse_segment("[[...slug]]").kind, SegmentKind::OptionalCatchAll);
/// assert_eq!(parse_segment("(admin)").kind, SegmentKind::Group);
/// assert_eq!(parse_segment("_drafts").kind, SegmentKind::Private);
/// ```
pub fn parse_segment(raw: &str) -> Segment {
    // Optional catch-all: [[...name]] (double brackets checked first so the
    // single-bracket branch never sees them)
    if let Some(inner) = raw
        .strip_prefix("[[")
        .and_then(|s| s.strip_suffix("]]"))
    {
        // A double-bracket form without the ellipsis is malformed; the
        // missing param is what validate_segments rejects.
        let param = inner.strip_prefix("...").map(str::to_string);
        return Segment::new(raw, SegmentKind::OptionalCatchAll, param);
    }

    if let Some(inner) = raw.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        return match inner.strip_prefix("...") {
            Some(param) => Segment::new(raw, SegmentKind::CatchAll, Some(param.to_string())),
            None => Segment::new(raw, SegmentKind::Dynamic, Some(inner.to_string())),
        };
    }

    if raw.starts_with('(') && raw.ends_with(')') && raw.len() >= 2 {
        return Segment::new(raw, SegmentKind::Group, None);
    }

    if raw.starts_with('_') {
        return Segment::new(raw, SegmentKind::Private, None);
    }

    Segment::new(raw, SegmentKind::Static, None)
}

/// Parses a root-relative directory path into its segments.
///
/// The route root itself is the empty path and yields no segments.
pub fn parse_segments(dir: &str) -> Vec<Segment> {
    if dir.is_empty() {
        return Vec::new();
    }
    dir.split('/').map(parse_segment).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static() {
        let seg = parse_segment("about");
        assert_eq!(seg.kind, SegmentKind::Static);
        assert_eq!(seg.raw, "about");
        assert_eq!(seg.param, None);
    }

    #[test]
    fn test_parse_dynamic() {
        let seg = parse_segment("[id]");
        assert_eq!(seg.kind, SegmentKind::Dynamic);
        assert_eq!(seg.param.as_deref(), Some("id"));
    }

    #[test]
    fn test_parse_catch_all() {
        let seg = parse_segment("[...slug]");
        assert_eq!(seg.kind, SegmentKind::CatchAll);
        assert_eq!(seg.param.as_deref(), Some("slug"));
    }

    #[test]
    fn test_parse_optional_catch_all() {
        let seg = parse_segment("[[...slug]]");
        assert_eq!(seg.kind, SegmentKind::OptionalCatchAll);
        assert_eq!(seg.param.as_deref(), Some("slug"));
    }

    #[test]
    fn test_parse_double_bracket_without_ellipsis_has_no_param() {
        let seg = parse_segment("[[slug]]");
        assert_eq!(seg.kind, SegmentKind::OptionalCatchAll);
        assert_eq!(seg.param, None);
    }

    #[test]
    fn test_parse_group() {
        let seg = parse_segment("(marketing)");
        assert_eq!(seg.kind, SegmentKind::Group);
        assert_eq!(seg.param, None);
    }

    #[test]
    fn test_parse_private() {
        let seg = parse_segment("_internal");
        assert_eq!(seg.kind, SegmentKind::Private);
    }

    #[test]
    fn test_parse_empty_dynamic_keeps_empty_param() {
        let seg = parse_segment("[]");
        assert_eq!(seg.kind, SegmentKind::Dynamic);
        assert_eq!(seg.param.as_deref(), Some(""));
    }

    #[test]
    fn test_parse_segments_splits_on_slash() {
        let segs = parse_segments("blog/[slug]");
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].kind, SegmentKind::Static);
        assert_eq!(segs[1].kind, SegmentKind::Dynamic);
    }

    #[test]
    fn test_parse_segments_empty_dir() {
        assert!(parse_segments("").is_empty());
    }

    #[test]
    fn test_unbalanced_brackets_are_static() {
        assert_eq!(parse_segment("[id").kind, SegmentKind::Static);
        assert_eq!(parse_segment("id]").kind, SegmentKind::Static);
    }
}
