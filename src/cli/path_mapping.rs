//! Output path derivation for converted files

use std::path::{Path, PathBuf};

/// Derive a CSV file name from an input name. A `.json` extension (any
/// case) is replaced with `.csv`; other names get `.csv` appended so the
/// original extension stays visible.
pub fn derive_csv_name(input: &Path) -> PathBuf {
    let is_json = input
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        input.with_extension("csv")
    } else {
        let mut name = input.as_os_str().to_os_string();
        name.push(".csv");
        PathBuf::from(name)
    }
}

/// Map an input JSON file into an output CSV file path, preserving the
/// directory structure relative to `input_dir`.
pub fn map_input_to_output(input_dir: &Path, input_file: &Path, output_dir: &Path) -> PathBuf {
    let relative = input_file.strip_prefix(input_dir).unwrap_or(input_file);
    derive_csv_name(&output_dir.join(relative))
}
