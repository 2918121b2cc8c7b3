use crate::notebook::{Notebook, NotebookOptions, convert};
use std::fs;
use std::path::{Path, PathBuf};

pub const NOTEBOOK_EXTENSION: &str = "ipynb";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize notebook: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Read a markdown file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    log::debug!("Reading {}", path.display());
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a file, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    log::debug!("Writing {} bytes to {}", content.len(), path.display());
    fs::write(path, content).map_err(IoError::Io)
}

/// The input path with its extension swapped for `.ipynb`
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension(NOTEBOOK_EXTENSION)
}

/// Read `input`, convert it, and write the notebook JSON to `output`
pub fn convert_file(
    input: &Path,
    output: &Path,
    options: &NotebookOptions,
) -> Result<Notebook, IoError> {
    let markdown = read_file(input)?;
    let notebook = convert(&markdown, options);

    let mut json = notebook.to_json()?;
    json.push('\n');
    write_file(output, &json)?;

    Ok(notebook)
}
