// File: src/hydrate.rs
// Purpose: Client-binding detection and the hydration shell mismatch heuristic

use regex::Regex;

/// Checks a page's leading content for the client-execution directive.
///
/// The directive is the `r-client` attribute on the page's first content
/// line (blank lines and comment lines are skipped). A page carrying it
/// becomes its own client module.
///
/// # Examples
///
/// ```
/// use asterism_router::has_client_directive;
///
/// assert!(has_client_directive("<page r-client>\n  <h1>Hi</h1>\n</page>"));
/// assert!(has_client_directive("<!-- dashboard -->\n<div r-client>\n</div>"));
///
/// // The directive must be in the leading content, not buried below.
/// assert!(!has_client_directive("<div>\n  <span r-client></span>\n</div>"));
/// ```
pub fn has_client_directive(source: &str) -> bool {
    source
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with("<!--") && !line.starts_with("//"))
        .is_some_and(|line| line.contains("r-client"))
}

/// Checks whether a page imports the given island module.
///
/// Islands are imported with an `r-use` attribute whose quoted value
/// names the island file's stem, e.g. `r-use="chart.island"`.
pub fn imports_island(source: &str, island_stem: &str) -> bool {
    quoted_values(source, "r-use").any(|value| value.contains(island_stem))
}

/// Checks for a null bridge over the given island name: an element whose
/// `r-if` merely tests the island and whose body renders nothing.
///
/// ```text
/// <template r-if="chart"></template>
/// ```
///
/// Such an element produces no server output where the client island will
/// mount, so the two render trees deterministically diverge.
pub fn has_null_bridge(source: &str, island: &str) -> bool {
    let name = regex::escape(island);
    let pattern = format!(
        r#"<[A-Za-z][A-Za-z0-9-]*[^>]*\br-if\s*=\s*"{name}"[^>]*(?:/>|>\s*</[A-Za-z][A-Za-z0-9-]*\s*>)"#
    );
    match Regex::new(&pattern) {
        Ok(re) => re.is_match(source),
        Err(_) => false,
    }
}

/// The hydration shell mismatch heuristic (pure function)
///
/// Flags only the conjunction: the page imports the island *and* renders
/// a null bridge for it. Either alone is insufficient - an import with a
/// real placeholder is fine, and a null bridge over something that is
/// not an island is not this defect.
pub fn shell_mismatch_risk(source: &str, island_stem: &str, island: &str) -> bool {
    imports_island(source, island_stem) && has_null_bridge(source, island)
}

/// Iterates the quoted values of `attr="…"` occurrences in `source`.
fn quoted_values<'a>(source: &'a str, attr: &str) -> impl Iterator<Item = &'a str> {
    let needle = format!("{attr}=\"");
    let mut rest = source;
    std::iter::from_fn(move || {
        let start = rest.find(&needle)?;
        let after = &rest[start + needle.len()..];
        let end = after.find('"')?;
        let value = &after[..end];
        rest = &after[end + 1..];
        Some(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_WITH_BRIDGE: &str = r#"<page r-use="chart.island">
  <h1>Dashboard</h1>
  <template r-if="chart"></template>
</page>
"#;

    const PAGE_WITH_PLACEHOLDER: &str = r#"<page r-use="chart.island">
  <h1>Dashboard</h1>
  <div r-if="chart"><p>Loading chart…</p></div>
</page>
"#;

    const PAGE_WITHOUT_IMPORT: &str = r#"<page>
  <template r-if="chart"></template>
</page>
"#;

    #[test]
    fn test_client_directive_on_first_line() {
        assert!(has_client_directive("<page r-client>\n</page>"));
    }

    #[test]
    fn test_client_directive_skips_comments_and_blanks() {
        assert!(has_client_directive(
            "\n<!-- the dashboard -->\n<page r-client>\n</page>"
        ));
    }

    #[test]
    fn test_client_directive_not_in_leading_content() {
        assert!(!has_client_directive("<page>\n<div r-client></div>\n</page>"));
    }

    #[test]
    fn test_imports_island() {
        assert!(imports_island(PAGE_WITH_BRIDGE, "chart.island"));
        assert!(!imports_island(PAGE_WITHOUT_IMPORT, "chart.island"));
        assert!(!imports_island(PAGE_WITH_BRIDGE, "nav.island"));
    }

    #[test]
    fn test_null_bridge_empty_element() {
        assert!(has_null_bridge(PAGE_WITH_BRIDGE, "chart"));
    }

    #[test]
    fn test_null_bridge_self_closing() {
        assert!(has_null_bridge("<div r-if=\"chart\" />", "chart"));
    }

    #[test]
    fn test_null_bridge_whitespace_body() {
        assert!(has_null_bridge(
            "<template r-if=\"chart\">\n  </template>",
            "chart"
        ));
    }

    #[test]
    fn test_real_placeholder_is_not_a_bridge() {
        assert!(!has_null_bridge(PAGE_WITH_PLACEHOLDER, "chart"));
    }

    #[test]
    fn test_other_condition_is_not_a_bridge() {
        assert!(!has_null_bridge(
            "<template r-if=\"loading\"></template>",
            "chart"
        ));
    }

    #[test]
    fn test_risk_requires_conjunction() {
        assert!(shell_mismatch_risk(PAGE_WITH_BRIDGE, "chart.island", "chart"));
        assert!(!shell_mismatch_risk(
            PAGE_WITH_PLACEHOLDER,
            "chart.island",
            "chart"
        ));
        assert!(!shell_mismatch_risk(
            PAGE_WITHOUT_IMPORT,
            "chart.island",
            "chart"
        ));
    }
}
