//! Crawl input loading.
//!
//! Accepts either a JSON array of pages or a single page object, since
//! crawlers emit both shapes.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::InputError;
use crate::page::PageData;

/// Loads crawled pages from a JSON file.
///
/// # Errors
///
/// Returns [`InputError`] when the file cannot be read, is not valid
/// crawl JSON, or contains no pages.
pub fn load_pages(path: &Path) -> Result<Vec<PageData>, InputError> {
    let raw = fs::read_to_string(path).map_err(|source| InputError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    let pages = match serde_json::from_str::<Vec<PageData>>(&raw) {
        Ok(pages) => pages,
        Err(array_err) => match serde_json::from_str::<PageData>(&raw) {
            Ok(page) => vec![page],
            // The array error is the more useful diagnostic for anything
            // that is not a plain object.
            Err(_) if !raw.trim_start().starts_with('{') => {
                return Err(InputError::ParseError {
                    path: path.to_path_buf(),
                    source: array_err,
                })
            }
            Err(object_err) => {
                return Err(InputError::ParseError {
                    path: path.to_path_buf(),
                    source: object_err,
                })
            }
        },
    };

    if pages.is_empty() {
        return Err(InputError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    debug!("Loaded {} page(s) from {}", pages.len(), path.display());
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_input(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write input");
        file
    }

    #[test]
    fn test_loads_array_of_pages() {
        let file = write_input(r#"[{"url": "https://a.com"}, {"url": "https://b.com"}]"#);
        let pages = load_pages(file.path()).expect("array input should load");
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].url, "https://b.com");
    }

    #[test]
    fn test_loads_single_page_object() {
        let file = write_input(r#"{"url": "https://a.com", "title": "Home"}"#);
        let pages = load_pages(file.path()).expect("single object should load");
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].title, "Home");
    }

    #[test]
    fn test_empty_array_is_rejected() {
        let file = write_input("[]");
        let err = load_pages(file.path()).expect_err("empty input should fail");
        assert!(matches!(err, InputError::EmptyInput { .. }));
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let file = write_input("not json");
        let err = load_pages(file.path()).expect_err("invalid input should fail");
        assert!(matches!(err, InputError::ParseError { .. }));
    }

    #[test]
    fn test_missing_file_is_rejected() {
        let err = load_pages(Path::new("/nonexistent/pages.json"))
            .expect_err("missing file should fail");
        assert!(matches!(err, InputError::ReadError { .. }));
    }
}
