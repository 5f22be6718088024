#![forbid(unsafe_code)]

//! Text snapshots stored under `tests/snapshots/`.
//!
//! Run `BLESS=1 cargo test --package typeahead-harness` to create or update
//! snapshots. Comparison ignores trailing whitespace on each line and at the
//! end of the file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::dom::MemoryDisplay;

/// Environment variable that switches comparison into rewrite mode.
pub const BLESS_ENV: &str = "BLESS";

/// Something that can be rendered into snapshot text.
pub trait Snapshot {
    fn snapshot_text(&self) -> String;
}

impl Snapshot for MemoryDisplay {
    fn snapshot_text(&self) -> String {
        self.snapshot()
    }
}

impl Snapshot for str {
    fn snapshot_text(&self) -> String {
        self.to_owned()
    }
}

impl Snapshot for String {
    fn snapshot_text(&self) -> String {
        self.clone()
    }
}

/// Path of snapshot `name` for the crate rooted at `manifest_dir`.
#[must_use]
pub fn snapshot_path(manifest_dir: &str, name: &str) -> PathBuf {
    Path::new(manifest_dir)
        .join("tests")
        .join("snapshots")
        .join(format!("{name}.snap"))
}

fn normalize(text: &str) -> String {
    let mut out: Vec<&str> = text.lines().map(str::trim_end).collect();
    while out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    out.join("\n")
}

/// Compare `actual` against the stored snapshot, or store it under `BLESS=1`.
///
/// # Panics
///
/// Panics when the snapshot is missing or differs, which fails the test.
pub fn assert_snapshot_text(manifest_dir: &str, name: &str, actual: &str) {
    let path = snapshot_path(manifest_dir, name);
    let actual = normalize(actual);

    if std::env::var_os(BLESS_ENV).is_some_and(|v| v == "1") {
        if let Some(dir) = path.parent() {
            if let Err(e) = fs::create_dir_all(dir) {
                panic!("cannot create {}: {e}", dir.display());
            }
        }
        if let Err(e) = fs::write(&path, format!("{actual}\n")) {
            panic!("cannot write {}: {e}", path.display());
        }
        tracing::info!(snapshot = name, "blessed");
        return;
    }

    let expected = match fs::read_to_string(&path) {
        Ok(text) => normalize(&text),
        Err(e) => panic!(
            "snapshot '{name}' not found at {} ({e}); run with BLESS=1 to create it",
            path.display()
        ),
    };
    assert!(
        expected == actual,
        "snapshot '{name}' differs\n--- expected\n{expected}\n--- actual\n{actual}\n"
    );
}

/// Assert that a value matches `tests/snapshots/<name>.snap` in the calling
/// crate.
#[macro_export]
macro_rules! assert_snapshot {
    ($name:expr, $value:expr) => {
        $crate::snapshot::assert_snapshot_text(
            env!("CARGO_MANIFEST_DIR"),
            $name,
            &$crate::snapshot::Snapshot::snapshot_text($value),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_trailing_whitespace() {
        assert_eq!(normalize("a  \nb\t\n\n\n"), "a\nb");
    }

    #[test]
    fn normalize_keeps_leading_space() {
        assert_eq!(normalize("  0 x\n"), "  0 x");
    }

    #[test]
    fn path_layout() {
        let p = snapshot_path("/crate", "scenario");
        assert!(p.ends_with("tests/snapshots/scenario.snap"));
    }
}
