//! Hygiene: enforces coding standards at test time
//!
//! Scans `src/` for antipatterns. Every budget is zero; a new exception has
//! to retire an old one first.

use std::fs;
use std::path::{Path, PathBuf};

struct SourceFile {
    path: PathBuf,
    content: String,
}

impl SourceFile {
    fn is_browser_glue(&self) -> bool {
        self.path.components().any(|c| c.as_os_str() == "browser")
    }
}

/// Production `.rs` files under `src/`; `_test.rs` siblings are skipped.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if !is_rs || is_test {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path, content });
        }
    }
}

fn hits<'a>(files: impl IntoIterator<Item = &'a SourceFile>, pattern: &str) -> Vec<String> {
    files
        .into_iter()
        .flat_map(|file| {
            file.content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains(pattern))
                .map(|(n, line)| format!("  {}:{}: {}", file.path.display(), n + 1, line.trim()))
                .collect::<Vec<_>>()
        })
        .collect()
}

fn assert_absent(pattern: &str, what: &str) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");
    let found = hits(&files, pattern);
    assert!(found.is_empty(), "{what} budget exceeded ({}):\n{}", found.len(), found.join("\n"));
}

// =============================================================
// Panics
// =============================================================

#[test]
fn no_unwrap() {
    assert_absent(".unwrap()", ".unwrap()");
}

#[test]
fn no_expect() {
    assert_absent(".expect(", ".expect()");
}

#[test]
fn no_panic_macros() {
    for pattern in ["panic!(", "unreachable!(", "todo!(", "unimplemented!("] {
        assert_absent(pattern, pattern);
    }
}

// =============================================================
// Silent loss
// =============================================================

#[test]
fn no_silent_discard() {
    assert_absent("let _ =", "let _ =");
}

#[test]
fn no_dot_ok() {
    assert_absent(".ok()", ".ok()");
}

#[test]
fn no_allow_dead_code() {
    assert_absent("#[allow(dead_code)]", "#[allow(dead_code)]");
}

// =============================================================
// Layering
// =============================================================

#[test]
fn logging_goes_through_log_facade() {
    assert_absent("console::log", "direct console logging");
}

#[test]
fn core_modules_stay_browser_free() {
    let files = source_files();
    let core: Vec<&SourceFile> = files
        .iter()
        .filter(|f| !f.is_browser_glue())
        .collect();
    let found = hits(core, "web_sys");
    assert!(found.is_empty(), "web_sys used outside browser/:\n{}", found.join("\n"));
}
