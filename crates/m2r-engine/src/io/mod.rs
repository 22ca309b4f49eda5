use crate::error::ConvertError;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension given to converted files.
pub const RST_EXTENSION: &str = "rst";

/// Read a markdown file and return its content
pub fn read_file(path: &Path) -> Result<String, ConvertError> {
    if !path.exists() {
        return Err(ConvertError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(ConvertError::Io)
}

/// Write converted text, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), ConvertError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(ConvertError::Io)?;
    }

    fs::write(path, content).map_err(ConvertError::Io)
}

/// The `.rst` file written next to a markdown input.
///
/// `docs/intro.md` becomes `docs/intro.rst`; a file without an extension
/// simply gains one.
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension(RST_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_dir, create_test_file};

    #[test]
    fn test_read_existing_file() {
        // Given a markdown file on disk
        let dir = create_test_dir();
        let path = create_test_file(&dir, "readme.md", "# Title\n");

        // When reading it
        let content = read_file(&path).unwrap();

        // Then the content comes back unchanged
        assert_eq!(content, "# Title\n");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = create_test_dir();
        let missing = dir.path().join("missing.md");

        let result = read_file(&missing);

        assert!(matches!(result, Err(ConvertError::NotFound(p)) if p == missing));
    }

    #[test]
    fn test_write_creates_parent_directories() {
        // Given a target inside a directory that does not exist yet
        let dir = create_test_dir();
        let target = dir.path().join("out").join("nested").join("doc.rst");

        // When writing to it
        write_file(&target, "text\n").unwrap();

        // Then the file exists with the content
        assert_eq!(fs::read_to_string(&target).unwrap(), "text\n");
    }

    #[test]
    fn test_output_path_replaces_extension() {
        assert_eq!(
            output_path(Path::new("docs/intro.md")),
            PathBuf::from("docs/intro.rst")
        );
        assert_eq!(
            output_path(Path::new("notes.markdown")),
            PathBuf::from("notes.rst")
        );
        assert_eq!(output_path(Path::new("README")), PathBuf::from("README.rst"));
    }
}
