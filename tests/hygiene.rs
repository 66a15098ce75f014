//! Hygiene: enforces coding standards at test time.
//!
//! These tests scan `src/` for patterns that crash the page, silently drop
//! browser errors, leak listeners outside the sanctioned places, or put
//! visitor data in the console. Budgets never grow: to add a hit, remove one
//! first.

use std::fs;
use std::path::Path;

struct SourceFile {
    /// Path relative to `src/`, e.g. `reveal.rs`.
    name: String,
    content: String,
}

/// A pattern and the most times production code may contain it.
struct Budget {
    pattern: &'static str,
    max: usize,
    hint: &'static str,
}

const BUDGETS: &[Budget] = &[
    // Panics take down every widget on the page.
    Budget { pattern: ".unwrap()", max: 0, hint: "propagate with `?` or report via dom::report" },
    Budget { pattern: ".expect(", max: 0, hint: "propagate with `?` or report via dom::report" },
    Budget { pattern: "panic!(", max: 0, hint: "return an FxError" },
    Budget { pattern: "unreachable!(", max: 0, hint: "return an FxError" },
    Budget { pattern: "todo!(", max: 0, hint: "finish the stub" },
    Budget { pattern: "unimplemented!(", max: 0, hint: "finish the stub" },
    // Silent loss of browser errors.
    Budget { pattern: "let _ =", max: 0, hint: "pass the result to dom::report" },
    Budget { pattern: ".ok()", max: 0, hint: "match the error and log it" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, hint: "delete the code or gate it on cfg(test)" },
    // Console output is visible to every visitor; only the ready line is info.
    Budget { pattern: "log::info!(", max: 1, hint: "use log::debug! for diagnostics" },
];

/// Files allowed to leak a closure or timer, and how many each may leak.
/// Page-lifetime only: the `dom::listen` helper, the reveal observer and its
/// two timers, and the inquiry reply timer.
const FORGET_ALLOWANCE: &[(&str, usize)] = &[("dom.rs", 1), ("reveal.rs", 3), ("inquiry.rs", 1)];

/// Files that may build a `Closure` directly; everything else goes through
/// `dom::listen`.
const CLOSURE_OWNERS: &[&str] = &["dom.rs", "reveal.rs"];

/// Modules compiled only under `hydrate` from `lib.rs`.
const BROWSER_ONLY: &[&str] = &["app.rs", "dom.rs", "lib.rs"];

/// Production `.rs` files under `src/`, excluding `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    let Ok(entries) = fs::read_dir(Path::new("src")) else {
        return files;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        let name = path.file_name().unwrap_or_default().to_string_lossy().to_string();
        if path.extension().is_none_or(|e| e != "rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            files.push(SourceFile { name, content });
        }
    }
    files.sort_by(|a, b| a.name.cmp(&b.name));
    files
}

fn count(file: &SourceFile, pattern: &str) -> usize {
    file.content.lines().filter(|line| line.contains(pattern)).count()
}

/// `(file, hits)` for every file containing `pattern`.
fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|file| (file.name.clone(), count(file, pattern)))
        .filter(|(_, n)| *n > 0)
        .collect()
}

fn describe(hits: &[(String, usize)]) -> String {
    hits.iter().map(|(name, n)| format!("  src/{name}: {n}")).collect::<Vec<_>>().join("\n")
}

// =============================================================
// Budgets
// =============================================================

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.name == "lib.rs"), "run from the crate root");
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let total: usize = found.iter().map(|(_, n)| n).sum();
        if total > budget.max {
            failures.push(format!(
                "`{}`: found {total}, max {} ({})\n{}",
                budget.pattern,
                budget.max,
                budget.hint,
                describe(&found)
            ));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

// =============================================================
// Listeners
// =============================================================

#[test]
fn forget_stays_within_per_file_allowance() {
    for (name, n) in hits(&source_files(), ".forget()") {
        let allowed = FORGET_ALLOWANCE.iter().find(|(file, _)| *file == name).map_or(0, |(_, max)| *max);
        assert!(
            n <= allowed,
            "src/{name} leaks {n} closures/timers, allowed {allowed}. Register listeners with dom::listen."
        );
    }
}

#[test]
fn event_listeners_are_registered_through_dom_listen() {
    let found = hits(&source_files(), "add_event_listener");
    let outside: Vec<_> = found.into_iter().filter(|(name, _)| name != "dom.rs").collect();
    assert!(outside.is_empty(), "call dom::listen instead:\n{}", describe(&outside));
}

#[test]
fn closures_are_built_only_by_their_owners() {
    let found = hits(&source_files(), "Closure::");
    let outside: Vec<_> = found.into_iter().filter(|(name, _)| !CLOSURE_OWNERS.contains(&name.as_str())).collect();
    assert!(outside.is_empty(), "build closures via dom::listen:\n{}", describe(&outside));
}

// =============================================================
// Native build
// =============================================================

#[test]
fn browser_code_is_gated_on_hydrate() {
    for file in source_files() {
        if BROWSER_ONLY.contains(&file.name.as_str()) || count(&file, "web_sys::") == 0 {
            continue;
        }
        assert!(
            file.content.contains("#[cfg(feature = \"hydrate\")]"),
            "src/{} touches web_sys without a hydrate gate",
            file.name
        );
    }
}
