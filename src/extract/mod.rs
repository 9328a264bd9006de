pub mod cache;
pub mod javascript;

use anyhow::Result;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub use javascript::JsSpecifierExtractor;

/// Extracts raw dependency specifier strings from module source text.
///
/// Implementations return the specifiers in source order with duplicates
/// preserved, exactly as written in the source — no resolution,
/// normalization or validation. A source that cannot be parsed as a module
/// is an error, never a partial sequence. Extraction is restartable: calling
/// `extract` again on the same text yields the same sequence.
pub trait SpecifierExtractor {
    fn extract(&self, source: &str) -> Result<Vec<String>>;
}

/// Buffered file read with the buffer sized to the file.
pub fn read_source(path: &Path) -> std::io::Result<String> {
    let file = File::open(path)?;
    let file_size = file.metadata()?.len() as usize;

    let mut reader =
        BufReader::with_capacity(if file_size < 8192 { file_size } else { 8192 }, file);

    let mut content = String::with_capacity(file_size);
    reader.read_to_string(&mut content)?;
    Ok(content)
}
