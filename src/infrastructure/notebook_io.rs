//! Reading and writing `.ipynb` files

use crate::domain::Notebook;
use crate::error::{BookprepError, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;

/// Read an nbformat v4 notebook
pub fn read_notebook(path: &Path) -> Result<Notebook> {
    if !path.is_file() {
        return Err(BookprepError::InputNotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    parse_notebook(&contents).map_err(|e| {
        let detail = match e {
            BookprepError::MalformedNotebook(msg) => msg,
            other => other.to_string(),
        };
        BookprepError::MalformedNotebook(format!("{}: {}", path.display(), detail))
    })
}

/// Parse notebook JSON, rejecting anything that is not nbformat 4
pub fn parse_notebook(contents: &str) -> Result<Notebook> {
    let notebook: Notebook = serde_json::from_str(contents)?;

    match notebook.rest.get("nbformat").and_then(|v| v.as_u64()) {
        Some(4) | None => Ok(notebook),
        Some(version) => Err(BookprepError::MalformedNotebook(format!(
            "unsupported nbformat version {}",
            version
        ))),
    }
}

/// Serialize the way Jupyter does: sorted keys, one-space indent, trailing newline
pub fn to_notebook_string(notebook: &Notebook) -> Result<String> {
    // Value maps are BTreeMaps, so every object comes out with sorted keys.
    let value = serde_json::to_value(notebook)?;

    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b" "));
    value.serialize(&mut serializer)?;
    buf.push(b'\n');

    String::from_utf8(buf).map_err(|e| BookprepError::MalformedNotebook(e.to_string()))
}

/// Write a notebook, creating parent directories as needed
pub fn write_notebook(path: &Path, notebook: &Notebook) -> Result<()> {
    let contents = to_notebook_string(notebook)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, contents).map_err(BookprepError::Io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;
    use serde_json::json;
    use tempfile::TempDir;

    const MINIMAL: &str = r##"{
 "cells": [
  {
   "cell_type": "markdown",
   "metadata": {},
   "source": [
    "# Title"
   ]
  }
 ],
 "metadata": {
  "kernelspec": {
   "display_name": "Python 3",
   "language": "python",
   "name": "python3"
  }
 },
 "nbformat": 4,
 "nbformat_minor": 5
}
"##;

    #[test]
    fn test_round_trip_is_byte_identical() {
        let notebook = parse_notebook(MINIMAL).unwrap();
        assert_eq!(to_notebook_string(&notebook).unwrap(), MINIMAL);
    }

    #[test]
    fn test_keys_written_sorted() {
        let input = r#"{"nbformat_minor": 5, "nbformat": 4, "metadata": {},
            "cells": [{"source": "x = 1", "outputs": [], "metadata": {}, "id": "abc",
                       "execution_count": null, "cell_type": "code"}]}"#;
        let expected = r#"{
 "cells": [
  {
   "cell_type": "code",
   "execution_count": null,
   "id": "abc",
   "metadata": {},
   "outputs": [],
   "source": [
    "x = 1"
   ]
  }
 ],
 "metadata": {},
 "nbformat": 4,
 "nbformat_minor": 5
}
"#;
        let notebook = parse_notebook(input).unwrap();
        assert_eq!(to_notebook_string(&notebook).unwrap(), expected);
    }

    #[test]
    fn test_rejects_other_versions() {
        let result = parse_notebook(r#"{"cells": [], "nbformat": 3}"#);
        assert!(matches!(result, Err(BookprepError::MalformedNotebook(_))));
    }

    #[test]
    fn test_rejects_unknown_cell_type() {
        let result = parse_notebook(r#"{"cells": [{"cell_type": "widget", "source": ""}]}"#);
        assert!(matches!(result, Err(BookprepError::Json(_))));
    }

    #[test]
    fn test_read_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = read_notebook(&temp.path().join("missing.ipynb"));
        assert!(matches!(result, Err(BookprepError::InputNotFound(_))));
    }

    #[test]
    fn test_read_corrupt_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.ipynb");
        fs::write(&path, "{ not json").unwrap();

        match read_notebook(&path).unwrap_err() {
            BookprepError::MalformedNotebook(msg) => assert!(msg.contains("broken.ipynb")),
            other => panic!("Expected MalformedNotebook, got {:?}", other),
        }
    }

    #[test]
    fn test_read_unsupported_version_reported_once() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("old.ipynb");
        fs::write(&path, r#"{"cells": [], "nbformat": 3}"#).unwrap();

        let err = read_notebook(&path).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("old.ipynb: unsupported nbformat version 3"));
        assert_eq!(msg.matches("Malformed notebook").count(), 1);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("colab").join("out.ipynb");
        let notebook = Notebook::new(vec![Cell::code("x = 1")]);

        write_notebook(&path, &notebook).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["cells"][0]["source"], json!(["x = 1"]));
        assert_eq!(written["cells"][0]["execution_count"], json!(null));
    }
}
