//! Pattern compilation tests
//!
//! Each test documents the directory convention and the URL pattern it
//! compiles to, in file-system order: `routes/<dirs>/page.rsx`.

use asterism_router::{
    parse_segments, pattern_shape, priority_class, segments_to_pattern, validate_segments,
    SegmentKind,
};

#[test]
fn test_static_routes() {
    // routes/about/page.rsx            → /about
    // routes/blog/posts/page.rsx       → /blog/posts
    assert_eq!(segments_to_pattern(&parse_segments("about")), "/about");
    assert_eq!(
        segments_to_pattern(&parse_segments("blog/posts")),
        "/blog/posts"
    );
}

#[test]
fn test_root_route() {
    // routes/page.rsx → /
    assert_eq!(segments_to_pattern(&parse_segments("")), "/");
}

#[test]
fn test_dynamic_segments() {
    // routes/blog/[slug]/page.rsx              → /blog/:slug
    // routes/shop/[category]/[item]/page.rsx   → /shop/:category/:item
    let segs = parse_segments("blog/[slug]");
    assert_eq!(segments_to_pattern(&segs), "/blog/:slug");
    assert_eq!(segs[1].param.as_deref(), Some("slug"));

    assert_eq!(
        segments_to_pattern(&parse_segments("shop/[category]/[item]")),
        "/shop/:category/:item"
    );
}

#[test]
fn test_catch_all_segments() {
    // routes/docs/[...slug]/page.rsx     → /docs/*slug     (1+ parts)
    // routes/files/[[...path]]/page.rsx  → /files/*path?   (0+ parts)
    assert_eq!(
        segments_to_pattern(&parse_segments("docs/[...slug]")),
        "/docs/*slug"
    );
    assert_eq!(
        segments_to_pattern(&parse_segments("files/[[...path]]")),
        "/files/*path?"
    );
}

#[test]
fn test_route_groups_are_invisible() {
    // routes/(marketing)/pricing/page.rsx → /pricing
    let segs = parse_segments("(marketing)/pricing");
    assert_eq!(segs[0].kind, SegmentKind::Group);
    assert_eq!(segments_to_pattern(&segs), "/pricing");
}

#[test]
fn test_shape_detects_renamed_parameters() {
    // users/[id] and users/[uid] are the same route structure.
    let a = parse_segments("users/[id]");
    let b = parse_segments("users/[uid]");
    assert_ne!(segments_to_pattern(&a), segments_to_pattern(&b));
    assert_eq!(pattern_shape(&a), pattern_shape(&b));
}

#[test]
fn test_shape_distinguishes_segment_kinds() {
    // A dynamic segment and a catch-all are structurally different.
    let dynamic = pattern_shape(&parse_segments("docs/[page]"));
    let catch_all = pattern_shape(&parse_segments("docs/[...rest]"));
    let optional = pattern_shape(&parse_segments("docs/[[...rest]]"));
    assert_ne!(dynamic, catch_all);
    assert_ne!(dynamic, optional);
    assert_ne!(catch_all, optional);
}

#[test]
fn test_catch_all_must_be_final() {
    assert!(validate_segments(&parse_segments("docs/[...rest]")).is_ok());
    assert!(validate_segments(&parse_segments("docs/[...rest]/extra")).is_err());
}

#[test]
fn test_parameter_names_must_be_identifiers() {
    assert!(validate_segments(&parse_segments("users/[user_id]")).is_ok());
    assert!(validate_segments(&parse_segments("users/[]")).is_err());
    assert!(validate_segments(&parse_segments("users/[user id]")).is_err());
    // Double brackets without the ellipsis are not an optional catch-all.
    assert!(validate_segments(&parse_segments("users/[[id]]")).is_err());
}

#[test]
fn test_priority_classes() {
    let static_route = priority_class(&parse_segments("users/new"));
    let dynamic = priority_class(&parse_segments("users/[id]"));
    let catch_all = priority_class(&parse_segments("docs/[...rest]"));
    let optional = priority_class(&parse_segments("docs/[[...rest]]"));
    assert!(static_route < dynamic);
    assert!(dynamic < catch_all);
    assert!(catch_all < optional);
}
