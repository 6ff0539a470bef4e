use std::fs;
use std::path::{Path, PathBuf};

/// `(file relative to the crate root, 1-based line number, line text)`
pub type Hit = (String, usize, String);

fn root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn relative_path(path: &Path) -> String {
    path.strip_prefix(root())
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

fn collect_rs_files_recursive(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries = fs::read_dir(dir).unwrap_or_else(|e| {
        panic!("failed to read dir {}: {e}", dir.display());
    });

    for entry in entries {
        let path = entry
            .unwrap_or_else(|e| panic!("failed to read dir entry: {e}"))
            .path();

        if path.is_dir() {
            collect_rs_files_recursive(&path, files);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
}

/// All `.rs` files under `relative`, which may also name a single file.
fn collect_rs_files(relative: &str) -> Vec<PathBuf> {
    let base = root().join(relative);
    if base.is_file() {
        return vec![base];
    }
    let mut files = Vec::new();
    collect_rs_files_recursive(&base, &mut files);
    files.sort();
    files
}

/// Lines outside `#[cfg(test)]` modules. Test modules sit at the end of each
/// file, so everything after the first `#[cfg(test)]` is skipped.
fn production_lines(file: &Path) -> Vec<(usize, String)> {
    let content = fs::read_to_string(file).unwrap_or_else(|e| {
        panic!("failed to read {}: {e}", file.display());
    });

    content
        .lines()
        .enumerate()
        .take_while(|(_, line)| line.trim() != "#[cfg(test)]")
        .map(|(idx, line)| (idx + 1, line.to_string()))
        .collect()
}

/// Non-test source lines under `relative` containing any of `patterns`.
pub fn find_lines_containing(relative: &str, patterns: &[&str]) -> Vec<Hit> {
    let mut hits = Vec::new();
    for file in collect_rs_files(relative) {
        for (line_no, line) in production_lines(&file) {
            if patterns.iter().any(|p| line.contains(p)) {
                hits.push((relative_path(&file), line_no, line));
            }
        }
    }
    hits
}

pub fn path_exists(relative_path: &str) -> bool {
    root().join(relative_path).exists()
}

/// `mod.rs` lines that are neither comments, module declarations, nor
/// re-exports.
pub fn find_non_export_lines_in_mod_files(relative_dir: &str) -> Vec<Hit> {
    let mut violations = Vec::new();

    for file in collect_rs_files(relative_dir) {
        if file.file_name().and_then(|s| s.to_str()) != Some("mod.rs") {
            continue;
        }

        for (line_no, raw_line) in production_lines(&file) {
            let line = raw_line.trim();
            if line.is_empty()
                || line.starts_with("//")
                || line.starts_with("pub mod ")
                || line.starts_with("mod ")
                || line.starts_with("pub use ")
                || line.starts_with("#[cfg")
            {
                continue;
            }
            violations.push((relative_path(&file), line_no, raw_line));
        }
    }

    violations
}
