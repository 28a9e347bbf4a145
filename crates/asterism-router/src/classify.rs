// File: src/classify.rs
// Purpose: Decide a discovered file's role from its name

use serde::Serialize;

/// The role a file plays in the route tree.
///
/// Closed variant decided once at classification time; downstream code
/// matches exhaustively instead of re-inspecting file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileRole {
    /// `page.*` - a rendered page.
    Page,
    /// `api.*` - an API handler.
    Api,
    /// `layout.*` - wraps every route at or below its directory.
    Layout,
    /// `loading.*` - loading boundary.
    Loading,
    /// `error.*` - error boundary.
    Error,
    /// `<name><island_suffix>.*` - a client-hydrated island component.
    Island,
    /// Any other co-located file (styles, tests, fixtures). Not an error.
    Ignored,
}

/// Classifies a file by its name and the configured island suffix.
///
/// The stem is the file name minus its final extension; role is decided
/// purely by stem matching, never by content.
///
/// # Examples
///
/// ```
/// use asterism_router::{classify_file, FileRole};
///
/// assert_eq!(classify_file("page.rsx", ".island"), FileRole::Page);
/// assert_eq!(classify_file("api.rs", ".island"), FileRole::Api);
/// assert_eq!(classify_file("chart.island.rsx", ".island"), FileRole::Island);
/// assert_eq!(classify_file("styles.css", ".island"), FileRole::Ignored);
/// ```
pub fn classify_file(file_name: &str, island_suffix: &str) -> FileRole {
    let stem = file_stem(file_name);
    match stem {
        "page" => FileRole::Page,
        "api" => FileRole::Api,
        "layout" => FileRole::Layout,
        "loading" => FileRole::Loading,
        "error" => FileRole::Error,
        _ if stem.len() > island_suffix.len() && stem.ends_with(island_suffix) => {
            FileRole::Island
        }
        _ => FileRole::Ignored,
    }
}

/// The file name minus its final extension.
pub fn file_stem(file_name: &str) -> &str {
    file_name
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(file_name)
}

/// The island component's name: its stem with the suffix removed.
pub fn island_name<'a>(stem: &'a str, island_suffix: &str) -> &'a str {
    stem.strip_suffix(island_suffix).unwrap_or(stem)
}

/// Whether a path segment marks a private folder.
///
/// Private folders exclude themselves and everything beneath them from
/// the walk, before classification, so private files never leak into
/// diagnostics.
pub fn is_private_name(name: &str) -> bool {
    name.starts_with('_')
}
