//! Listing of generated documents directly inside a folder.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// A generated document found in a folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DocumentFile {
    pub name: String,
    pub path: PathBuf,
}

/// List the entries of `folder` whose name ends in `.{extension}`, ordered
/// by file name.
///
/// Regular files and symlinks both count, whatever the link points at;
/// directories never do. Names that are not valid UTF-8 cannot be matched
/// against page records and are skipped with a warning.
pub(crate) fn document_files(folder: &Path, extension: &str) -> io::Result<Vec<DocumentFile>> {
    let suffix = format!(".{}", extension);
    let mut files = Vec::new();

    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(io::Error::other)?;
        if entry.file_type().is_dir() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            if entry
                .file_name()
                .as_encoded_bytes()
                .ends_with(suffix.as_bytes())
            {
                tracing::warn!(
                    "Ignoring {}: file name is not valid UTF-8",
                    entry.path().display()
                );
            }
            continue;
        };

        if name.ends_with(&suffix) {
            files.push(DocumentFile {
                name: name.to_string(),
                path: entry.path().to_path_buf(),
            });
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn names(files: &[DocumentFile]) -> Vec<&str> {
        files.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn lists_matching_files_in_name_order() {
        let temp = tempdir().unwrap();
        let folder = temp.path();
        fs::write(folder.join("b.qmd"), "").unwrap();
        fs::write(folder.join("a.qmd"), "").unwrap();
        fs::write(folder.join("notes.md"), "").unwrap();
        fs::create_dir(folder.join("dir.qmd")).unwrap();

        let files = document_files(folder, "qmd").unwrap();

        assert_eq!(names(&files), vec!["a.qmd", "b.qmd"]);
    }

    #[cfg(unix)]
    #[test]
    fn includes_symlinks() {
        use std::os::unix::fs::symlink;

        let temp = tempdir().unwrap();
        let folder = temp.path().join("site");
        fs::create_dir(&folder).unwrap();
        fs::write(temp.path().join("target.qmd"), "").unwrap();
        symlink(temp.path().join("target.qmd"), folder.join("linked.qmd")).unwrap();
        symlink(temp.path().join("gone.qmd"), folder.join("dangling.qmd")).unwrap();

        let files = document_files(&folder, "qmd").unwrap();

        assert_eq!(names(&files), vec!["dangling.qmd", "linked.qmd"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn skips_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = tempdir().unwrap();
        let folder = temp.path();
        fs::write(folder.join(OsStr::from_bytes(b"bad\xff.qmd")), "").unwrap();
        fs::write(folder.join("good.qmd"), "").unwrap();

        let files = document_files(folder, "qmd").unwrap();

        assert_eq!(names(&files), vec!["good.qmd"]);
    }
}
