use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::result::DriverError;

/// Where declaration files are read from and generated sources are written to.
pub trait FileSource {
    /// Check if a file with the given path exists
    fn exists(&self, path: &Path) -> bool;
    /// Read the contents of the file at the given path
    fn read_to_string(&mut self, path: &Path) -> Result<String, DriverError>;
    /// Write the contents of the file at the given path, creating missing parent directories
    ///
    /// Depending on the source, this may write to disk or to memory
    fn write_string(&mut self, path: &Path, contents: &str) -> Result<(), DriverError>;
}

/// A file source that reads from and writes to the file system
pub struct FileSystemSource {
    root: PathBuf,
}

impl FileSystemSource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }
}

impl FileSource for FileSystemSource {
    fn exists(&self, path: &Path) -> bool {
        self.root.join(path).exists()
    }

    fn read_to_string(&mut self, path: &Path) -> Result<String, DriverError> {
        let path = self.root.join(path);
        let source = std::fs::read_to_string(&path).map_err(|err| DriverError::io(&path, err))?;
        // Declaration files checked out with Windows line endings are read like any other.
        Ok(source.replace("\r\n", "\n"))
    }

    fn write_string(&mut self, path: &Path, contents: &str) -> Result<(), DriverError> {
        let path = self.root.join(path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|err| DriverError::io(parent, err))?;
        }
        std::fs::write(&path, contents).map_err(|err| DriverError::io(&path, err))
    }
}

/// A file source that keeps files in memory
#[derive(Debug, Default)]
pub struct InMemorySource {
    files: HashMap<PathBuf, String>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into());
    }

    pub fn get(&self, path: &Path) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }
}

impl FileSource for InMemorySource {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn read_to_string(&mut self, path: &Path) -> Result<String, DriverError> {
        self.get(path)
            .map(str::to_owned)
            .ok_or_else(|| DriverError::FileNotFound(path.to_path_buf()))
    }

    fn write_string(&mut self, path: &Path, contents: &str) -> Result<(), DriverError> {
        self.insert(path, contents);
        Ok(())
    }
}
