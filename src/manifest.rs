use crate::error::{Error, Result};
use serde_json::Value;
use std::fs::read_to_string;
use std::path::Path;

/// Default manifest file name, looked up in the working directory.
pub const DEFAULT_MANIFEST: &str = "package.json";

/// Reads the manifest at `path` and returns its `author` value, if any.
///
/// The value is returned raw; validating its shape is the job of
/// [`crate::author::parse_author`].
///
/// # Errors
///
/// * [`Error::ManifestNotFound`] if the file cannot be read.
/// * [`Error::ManifestParse`] if the contents are not valid JSON.
pub fn load_author(path: &Path) -> Result<Option<Value>> {
    log::debug!("reading manifest {}", path.display());
    let body = read_to_string(path).map_err(|e| Error::ManifestNotFound {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut doc: Value = serde_json::from_str(&body).map_err(|e| Error::ManifestParse {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(doc.get_mut("author").map(Value::take))
}

#[cfg(test)]
mod tests {
    use super::load_author;
    use crate::error::Error;
    use serde_json::json;
    use std::io::Write;

    fn manifest(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
        write!(file, "{}", contents).expect("failed to write manifest");
        file
    }

    #[test]
    fn returns_string_author() {
        let file = manifest(r#"{"name": "pkg", "author": "atlassubbed <atlassubbed@gmail.com>"}"#);
        let author = load_author(file.path()).expect("load failed");
        assert_eq!(author, Some(json!("atlassubbed <atlassubbed@gmail.com>")));
    }

    #[test]
    fn returns_object_author() {
        let file = manifest(r#"{"author": {"name": "a", "email": "b", "url": "c"}}"#);
        let author = load_author(file.path()).expect("load failed");
        assert_eq!(author, Some(json!({"name": "a", "email": "b", "url": "c"})));
    }

    #[test]
    fn missing_author_is_none() {
        let file = manifest(r#"{"name": "pkg"}"#);
        assert_eq!(load_author(file.path()).expect("load failed"), None);
    }

    #[test]
    fn non_object_manifest_has_no_author() {
        let file = manifest("[1, 2, 3]");
        assert_eq!(load_author(file.path()).expect("load failed"), None);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let res = load_author(&dir.path().join("package.json"));
        match res {
            Err(e @ Error::ManifestNotFound { .. }) => {
                assert_eq!(e.to_string(), "no package.json found");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let file = manifest("{ not json");
        let res = load_author(file.path());
        assert!(matches!(res, Err(Error::ManifestParse { .. })));
    }
}
