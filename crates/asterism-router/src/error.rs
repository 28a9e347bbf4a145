// File: src/error.rs
// Purpose: Scan diagnostics - errors are data, not exceptions

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

/// Classification of a scan diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanErrorKind {
    /// Malformed dynamic/catch-all syntax, or a catch-all not in final
    /// position. The file's route is dropped, the scan continues.
    InvalidSegment,
    /// Two files compile to the identical pattern. The first wins.
    DuplicateRoute,
    /// Two files share a shape but differ in parameter naming.
    PatternConflict,
    /// A directory or file could not be read; that branch is skipped.
    FileReadError,
    /// A page renders a null bridge for an island it imports. The route
    /// is still built, but server and client render trees will diverge.
    HydrationShellMismatchRisk,
}

/// A non-fatal scan diagnostic.
///
/// Every diagnostic is appended to the result's error list and the scan
/// proceeds; no condition in this engine is fatal to the host process.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("{message}")]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub message: String,
    /// The offending file.
    pub file: PathBuf,
    /// The conflicting or duplicate file, where one exists.
    pub other: Option<PathBuf>,
}

impl ScanError {
    pub fn invalid_segment(file: impl Into<PathBuf>, detail: &str) -> Self {
        Self {
            kind: ScanErrorKind::InvalidSegment,
            message: detail.to_string(),
            file: file.into(),
            other: None,
        }
    }

    pub fn duplicate_route(
        file: impl Into<PathBuf>,
        first: impl Into<PathBuf>,
        pattern: &str,
    ) -> Self {
        let first = first.into();
        Self {
            kind: ScanErrorKind::DuplicateRoute,
            message: format!(
                "route `{pattern}` is already defined by {}",
                first.display()
            ),
            file: file.into(),
            other: Some(first),
        }
    }

    pub fn pattern_conflict(
        file: impl Into<PathBuf>,
        first: impl Into<PathBuf>,
        shape: &str,
    ) -> Self {
        let first = first.into();
        Self {
            kind: ScanErrorKind::PatternConflict,
            message: format!(
                "route is ambiguous with {} (both match `{shape}`, parameter names differ)",
                first.display()
            ),
            file: file.into(),
            other: Some(first),
        }
    }

    pub fn file_read(file: impl Into<PathBuf>, cause: &dyn std::fmt::Display) -> Self {
        Self {
            kind: ScanErrorKind::FileReadError,
            message: cause.to_string(),
            file: file.into(),
            other: None,
        }
    }

    pub fn hydration_risk(file: impl Into<PathBuf>, island: &Path) -> Self {
        Self {
            kind: ScanErrorKind::HydrationShellMismatchRisk,
            message: format!(
                "page imports island {} but renders a null bridge for it; server and \
                 client render trees will diverge",
                island.display()
            ),
            file: file.into(),
            other: Some(island.to_path_buf()),
        }
    }
}
