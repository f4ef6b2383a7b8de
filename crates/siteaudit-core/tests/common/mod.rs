//! Throwaway site trees for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub struct SiteFixture {
    dir: TempDir,
}

impl SiteFixture {
    /// Empty site root with `css/` and `js/` subdirectories.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("css")).unwrap();
        fs::create_dir(dir.path().join("js")).unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, rel: &str, content: &str) {
        fs::write(self.dir.path().join(rel), content).unwrap();
    }

    /// File of `len` filler bytes, for size assertions.
    pub fn write_bytes(&self, rel: &str, len: usize) {
        fs::write(self.dir.path().join(rel), vec![b'x'; len]).unwrap();
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.dir.path().join(rel)).unwrap()
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.dir.path().join(rel).exists()
    }
}
