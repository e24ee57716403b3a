//! Keeps `src/` and `tests/unit/` in lockstep
//!
//! Every source file other than `lib.rs`, `main.rs` and `mod.rs` pulls its unit
//! tests in through a trailing `#[path]` module pointing at the same relative
//! path under `tests/unit/`. These checks catch files added on one side only
//! and `#[path]` attributes that drift from the mirror.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const SOURCE_ROOT: &str = "src";
const UNIT_ROOT: &str = "tests/unit";

/// Relative paths of every `.rs` file below `root`, sorted
fn rust_files(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                let relative = path
                    .strip_prefix(root)
                    .map_err(|error| io::Error::other(error.to_string()))?;
                found.push(relative.to_path_buf());
            }
        }
    }

    found.sort();
    Ok(found)
}

/// Source files that own a unit-test module
fn tested_sources() -> Vec<PathBuf> {
    let sources = rust_files(Path::new(SOURCE_ROOT)).unwrap_or_default();
    assert!(!sources.is_empty(), "no source files found under {SOURCE_ROOT}");
    sources
        .into_iter()
        .filter(|path| {
            let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
            let crate_root = path.parent() == Some(Path::new(""));
            !(name == "mod.rs" || crate_root && matches!(name, "lib.rs" | "main.rs"))
        })
        .collect()
}

/// The attribute a source file at `relative` must carry
fn expected_attribute(relative: &Path) -> String {
    let climb = "../".repeat(relative.components().count());
    let mirror = relative.to_string_lossy().replace('\\', "/");
    format!("#[path = \"{climb}{UNIT_ROOT}/{mirror}\"]")
}

#[test]
fn test_every_source_has_a_mirrored_unit_file() {
    let unit_root = Path::new(UNIT_ROOT);
    let missing: Vec<String> = tested_sources()
        .iter()
        .filter(|relative| !unit_root.join(relative).is_file())
        .map(|relative| format!("  - {UNIT_ROOT}/{}", relative.display()))
        .collect();

    assert!(
        missing.is_empty(),
        "Source files without unit tests:\n{}",
        missing.join("\n")
    );
}

#[test]
fn test_every_unit_file_has_a_source() {
    let sources = tested_sources();
    let orphans: Vec<String> = rust_files(Path::new(UNIT_ROOT))
        .unwrap_or_default()
        .into_iter()
        .filter(|relative| !sources.contains(relative))
        .map(|relative| format!("  - {UNIT_ROOT}/{}", relative.display()))
        .collect();

    assert!(
        orphans.is_empty(),
        "Unit test files with no matching source:\n{}",
        orphans.join("\n")
    );
}

#[test]
fn test_sources_include_their_mirror_by_path() {
    let mut broken = Vec::new();

    for relative in tested_sources() {
        let path = Path::new(SOURCE_ROOT).join(&relative);
        let Ok(content) = fs::read_to_string(&path) else {
            broken.push(format!("  - {}: unreadable", path.display()));
            continue;
        };

        let attribute = expected_attribute(&relative);
        let lines: Vec<&str> = content.lines().map(str::trim).collect();
        let wired = lines.windows(3).any(|window| {
            window == ["#[cfg(test)]", attribute.as_str(), "mod unit_tests;"]
        });
        if !wired {
            broken.push(format!(
                "  - {}: expected `#[cfg(test)]`, `{attribute}`, `mod unit_tests;`",
                path.display()
            ));
        }
    }

    assert!(
        broken.is_empty(),
        "Source files not wired to their unit tests:\n{}",
        broken.join("\n")
    );
}

#[test]
fn test_unit_files_declare_tests() {
    let unit_root = Path::new(UNIT_ROOT);
    let empty: Vec<String> = rust_files(unit_root)
        .unwrap_or_default()
        .into_iter()
        .filter(|relative| {
            fs::read_to_string(unit_root.join(relative))
                .map(|content| !content.contains("#[test]") || !content.contains("mod tests"))
                .unwrap_or(true)
        })
        .map(|relative| format!("  - {UNIT_ROOT}/{}", relative.display()))
        .collect();

    assert!(
        empty.is_empty(),
        "Unit test files without a `mod tests` holding #[test] functions:\n{}",
        empty.join("\n")
    );
}
