//! Starter project embedded in the binary.

use include_dir::{Dir, DirEntry, include_dir};

use crate::domain::AppError;

static SCAFFOLD_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/scaffold");

/// One file of the starter project, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldFile {
    pub path: String,
    pub content: String,
}

/// All starter files, sorted by path.
pub fn scaffold_files() -> Result<Vec<ScaffoldFile>, AppError> {
    let mut files = Vec::new();
    collect_files(&SCAFFOLD_DIR, &mut files)?;
    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

fn collect_files(dir: &Dir<'_>, files: &mut Vec<ScaffoldFile>) -> Result<(), AppError> {
    for entry in dir.entries() {
        match entry {
            DirEntry::Dir(subdir) => collect_files(subdir, files)?,
            DirEntry::File(file) => {
                let path = file.path().to_string_lossy().replace('\\', "/");
                let content = file.contents_utf8().ok_or_else(|| {
                    AppError::InternalError(format!("Scaffold file is not UTF-8: {}", path))
                })?;
                files.push(ScaffoldFile { path, content: content.to_string() });
            }
        }
    }
    Ok(())
}
