use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const MODULE_EXTENSIONS: [&str; 2] = ["js", "jsx"];

/// Discovers module files under a project root.
pub struct FileScanner;

impl FileScanner {
    pub fn new() -> Self {
        Self
    }

    /// Walk `root` collecting `.js`/`.jsx` files, symlinks not followed.
    /// Walk errors do not stop the scan; they are returned alongside the
    /// partial file set so the builder can surface them on the report.
    pub fn scan_root(&self, root: &Path) -> (Vec<PathBuf>, Vec<walkdir::Error>) {
        let mut files = Vec::new();
        let mut errors = Vec::new();

        for entry in WalkDir::new(root).follow_links(false) {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_file() && has_module_extension(entry.path()) {
                        files.push(entry.path().to_path_buf());
                    }
                }
                Err(err) => errors.push(err),
            }
        }

        (files, errors)
    }
}

fn has_module_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| MODULE_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}
