/// Pattern compilation and priority classification for routes
///
/// Renders parsed segments into URL patterns and their shapes, and
/// validates the structural rules a segment list must satisfy before it
/// may become a route. All functions are **pure**.
use super::segment::{Segment, SegmentKind};

/// Marker used in a pattern shape wherever a parameter name was erased.
const SHAPE_PARAM: &str = "param";

/// Renders segments left to right into a URL pattern (pure function)
///
/// Literal segments are emitted as-is, dynamic segments as `:name`,
/// catch-alls as `*name` (`*name?` when optional), and group segments are
/// omitted entirely. An empty or group-only list compiles to `/`.
///
/// # Examples
///
/// ```
/// use asterism_router::{parse_segments, segments_to_pattern};
///
/// let segs = parse_segments("users/[id]");
/// assert_eq!(segments_to_pattern(&segs), "/users/:id");
///
/// let segs = parse_segments("(shop)/docs/[...slug]");
/// assert_eq!(segments_to_pattern(&segs), "/docs/*slug");
///
/// assert_eq!(segments_to_pattern(&parse_segments("")), "/");
/// ```
pub fn segments_to_pattern(segments: &[Segment]) -> String {
    render(segments, |seg| seg.param.as_deref().unwrap_or_default())
}

/// Renders segments into the pattern's shape (pure function)
///
/// Identical to [`segments_to_pattern`] except that every parameter name
/// is replaced by one fixed marker. The shape is the only representation
/// used for ambiguity detection: two routes that differ solely in
/// parameter naming share a shape and are rejected as conflicting.
///
/// # Examples
///
/// ```
/// use asterism_router::{parse_segments, pattern_shape};
///
/// let a = pattern_shape(&parse_segments("users/[id]"));
/// let b = pattern_shape(&parse_segments("users/[uid]"));
/// assert_eq!(a, b);
/// assert_eq!(a, "/users/:param");
///
/// // Catch-alls keep their sigil: a single parameter and a catch-all are
/// // structurally distinct and never collide.
/// let c = pattern_shape(&parse_segments("docs/[...rest]"));
/// assert_eq!(c, "/docs/*param");
/// assert_ne!(a, c);
/// ```
pub fn pattern_shape(segments: &[Segment]) -> String {
    render(segments, |_| SHAPE_PARAM)
}

/// Shared rendering walk; `name` picks the parameter text per segment.
fn render<'a>(segments: &'a [Segment], name: impl Fn(&'a Segment) -> &'a str) -> String {
    let mut pattern = String::new();
    for seg in segments {
        match seg.kind {
            SegmentKind::Static => {
                pattern.push('/');
                pattern.push_str(&seg.raw);
            }
            SegmentKind::Dynamic => {
                pattern.push_str("/:");
                pattern.push_str(name(seg));
            }
            SegmentKind::CatchAll => {
                pattern.push_str("/*");
                pattern.push_str(name(seg));
            }
            SegmentKind::OptionalCatchAll => {
                pattern.push_str("/*");
                pattern.push_str(name(seg));
                pattern.push('?');
            }
            // Groups organize files on disk; private folders never reach
            // the compiler. Neither contributes to the pattern.
            SegmentKind::Group | SegmentKind::Private => {}
        }
    }
    if pattern.is_empty() {
        pattern.push('/');
    }
    pattern
}

/// Validates the structural rules for a route's segment list.
///
/// Rejected as `invalid-segment`:
/// - a parameter kind with a missing, empty, or non-identifier name
///   (names are limited to ASCII alphanumerics and `_`)
/// - a catch-all (required or optional) anywhere but the final position
pub fn validate_segments(segments: &[Segment]) -> Result<(), String> {
    for (idx, seg) in segments.iter().enumerate() {
        if seg.is_param() {
            match seg.param.as_deref() {
                Some(name) if is_valid_param_name(name) => {}
                _ => {
                    return Err(format!(
                        "malformed parameter segment `{}`: expected a non-empty name of \
                         letters, digits, or `_`",
                        seg.raw
                    ));
                }
            }
        }
        let is_catch_all = matches!(
            seg.kind,
            SegmentKind::CatchAll | SegmentKind::OptionalCatchAll
        );
        if is_catch_all && idx != segments.len() - 1 {
            return Err(format!(
                "catch-all segment `{}` must be the last segment in its path",
                seg.raw
            ));
        }
    }
    Ok(())
}

fn is_valid_param_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Match-priority class of a segment list.
///
/// Lower sorts first: all-static routes (0) precede routes containing a
/// dynamic parameter (1), which precede required catch-alls (2), which
/// precede optional catch-alls (3).
pub fn priority_class(segments: &[Segment]) -> u8 {
    let mut class = 0;
    for seg in segments {
        let c = match seg.kind {
            SegmentKind::OptionalCatchAll => 3,
            SegmentKind::CatchAll => 2,
            SegmentKind::Dynamic => 1,
            _ => 0,
        };
        class = class.max(c);
    }
    class
}

/// Number of pattern-contributing segments (groups and private folders
/// excluded). Deeper routes are more specific and match first among
/// routes of the same class.
pub fn pattern_depth(segments: &[Segment]) -> usize {
    segments
        .iter()
        .filter(|seg| !matches!(seg.kind, SegmentKind::Group | SegmentKind::Private))
        .count()
}
