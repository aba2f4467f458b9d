use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::ProjectFilesystem;

/// In-memory project filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryProjectFilesystem {
    // Arc<Mutex> so clones observe the same state
    files: Arc<Mutex<BTreeMap<String, String>>>,
    dirs: Arc<Mutex<BTreeSet<String>>>,
    writes: Arc<Mutex<Vec<String>>>,
}

impl MemoryProjectFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, registering its parent directories.
    pub fn add_file(&self, path: &str, content: &str) {
        self.register_parents(path);
        self.files.lock().unwrap().insert(path.to_string(), content.to_string());
    }

    pub fn add_dir(&self, path: &str) {
        let mut dirs = self.dirs.lock().unwrap();
        let mut current = String::new();
        for part in path.split('/') {
            if !current.is_empty() {
                current.push('/');
            }
            current.push_str(part);
            dirs.insert(current.clone());
        }
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    /// Paths passed to `write_file`, in call order.
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }

    fn register_parents(&self, path: &str) {
        if let Some((parent, _)) = path.rsplit_once('/') {
            self.add_dir(parent);
        }
    }
}

impl ProjectFilesystem for MemoryProjectFilesystem {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        self.content(path).ok_or_else(|| {
            AppError::Io(io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path)))
        })
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        if let Some((parent, _)) = path.rsplit_once('/')
            && !self.is_dir(parent)
        {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("parent of {} not found", path),
            )));
        }
        self.writes.lock().unwrap().push(path.to_string());
        self.files.lock().unwrap().insert(path.to_string(), content.to_string());
        Ok(())
    }

    fn remove_file(&self, path: &str) -> Result<bool, AppError> {
        Ok(self.files.lock().unwrap().remove(path).is_some())
    }

    fn list_files(&self, path: &str) -> Result<Vec<String>, AppError> {
        if !self.is_dir(path) {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path),
            )));
        }
        let prefix = format!("{}/", path.trim_end_matches('/'));
        let files = self.files.lock().unwrap();
        Ok(files
            .keys()
            .filter_map(|key| key.strip_prefix(&prefix))
            .filter(|rest| !rest.contains('/'))
            .map(str::to_string)
            .collect())
    }

    fn file_exists(&self, path: &str) -> bool {
        self.files.lock().unwrap().contains_key(path) || self.is_dir(path)
    }

    fn is_dir(&self, path: &str) -> bool {
        self.dirs.lock().unwrap().contains(path.trim_end_matches('/'))
    }

    fn create_dir_all(&self, path: &str) -> Result<(), AppError> {
        self.add_dir(path.trim_end_matches('/'));
        Ok(())
    }
}
