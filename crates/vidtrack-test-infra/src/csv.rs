use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FILE_NAME: &str = "videos.csv";

/// Test fixture for a disposable CSV data file.
///
/// The file lives in a fresh temporary directory that is removed when the
/// fixture is dropped. The file itself is not created unless asked for.
pub struct CsvFixture {
    dir: TempDir,
    path: PathBuf,
}

impl CsvFixture {
    /// A fixture whose data file does not exist yet.
    pub fn new() -> Result<Self> {
        let dir = TempDir::new()?;
        let path = dir.path().join(FILE_NAME);
        Ok(Self { dir, path })
    }

    /// A fixture whose data file sits under `subdir`, none of which exists yet.
    pub fn nested(subdir: impl AsRef<Path>) -> Result<Self> {
        let dir = TempDir::new()?;
        let path = dir.path().join(subdir).join(FILE_NAME);
        Ok(Self { dir, path })
    }

    /// A fixture whose data file already holds `contents`.
    pub fn with_contents(contents: &str) -> Result<Self> {
        let fixture = Self::new()?;
        fixture.write(contents)?;
        Ok(fixture)
    }

    /// Path of the data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the data file currently exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Raw contents of the data file.
    pub fn read(&self) -> Result<String> {
        Ok(String::from_utf8(fs::read(&self.path)?)?)
    }

    /// Overwrites the data file with `contents`.
    pub fn write(&self, contents: &str) -> Result<()> {
        Ok(fs::write(&self.path, contents)?)
    }

    /// Sorted names of the entries in the fixture's top-level directory.
    pub fn dir_entries(&self) -> Result<Vec<String>> {
        let mut names = fs::read_dir(self.dir.path())?
            .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect::<std::io::Result<Vec<_>>>()?;
        names.sort();
        Ok(names)
    }
}
