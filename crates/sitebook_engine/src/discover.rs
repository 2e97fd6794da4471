use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Find every `*.html` file under `root` in a fixed, deterministic order:
///
/// 1. `root/index.html`, if present.
/// 2. Other `*.html` files directly in `root`, case-insensitively by name.
/// 3. Non-hidden top-level subdirectories, case-insensitively by name; for
///    each, every `*.html` anywhere beneath it, case-insensitively by path
///    relative to `root`.
///
/// Subtree listings are collected in full and then sorted, so the result
/// never depends on filesystem iteration order. A missing or empty root
/// yields an empty list; validating the root is the caller's job.
pub fn discover(root: &Path) -> Vec<PathBuf> {
    let mut ordered = Vec::new();

    let index = root.join("index.html");
    if index.is_file() {
        ordered.push(index);
    }

    let mut root_files = Vec::new();
    let mut subdirs = Vec::new();
    if let Ok(entries) = fs::read_dir(root) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                if !name_of(&path).starts_with('.') {
                    subdirs.push(path);
                }
            } else if is_html(&path) && name_of(&path) != "index.html" {
                root_files.push(path);
            }
        }
    }

    root_files.sort_by_key(|p| name_of(p).to_lowercase());
    ordered.extend(root_files);

    subdirs.sort_by_key(|p| name_of(p).to_lowercase());
    for dir in subdirs {
        // Only the top level filters hidden directories; nested dot-dirs
        // inside a visible subtree are still traversed.
        let mut files: Vec<PathBuf> = WalkDir::new(&dir)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file() && is_html(e.path()))
            .map(walkdir::DirEntry::into_path)
            .collect();
        files.sort_by_key(|p| relative_key(p, root));
        ordered.extend(files);
    }

    ordered
}

fn is_html(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("html")
}

fn name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn relative_key(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_lowercase()
}
