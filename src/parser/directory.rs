//! JSON file discovery for batch conversion

use std::path::{Path, PathBuf};

/// Find all `.json` files under `dir`, optionally descending into
/// subdirectories. Results are sorted for deterministic processing order.
pub fn find_json_files(dir: &Path, recursive: bool) -> std::io::Result<Vec<PathBuf>> {
    let mut json_files = Vec::new();

    if recursive {
        for entry in walkdir::WalkDir::new(dir) {
            let entry = entry.map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
            let path = entry.path();
            if path.is_file() && is_json_file(path) {
                json_files.push(path.to_path_buf());
            }
        }
    } else {
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && is_json_file(&path) {
                json_files.push(path);
            }
        }
    }

    json_files.sort();
    Ok(json_files)
}

fn is_json_file(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"))
}
