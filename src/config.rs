use std::path::{Path, PathBuf};

/// Default resources root, relative to the working directory
pub const DEFAULT_RESOURCES_DIR: &str = "resources";

/// Data partition with its own archive, raw and processed directories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    Train,
    Test,
}

impl Split {
    pub const ALL: [Split; 2] = [Split::Train, Split::Test];
}

/// Fixed directory layout of the staging pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    pub train_zip: PathBuf,
    pub test_zip: PathBuf,
    pub train_raw: PathBuf,
    pub test_raw: PathBuf,
    pub train_processed: PathBuf,
    pub test_processed: PathBuf,
}

impl DirectoryConfig {
    /// Build the conventional layout under `root`
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            train_zip: root.join("train_zip"),
            test_zip: root.join("test_zip"),
            train_raw: root.join("raw_data").join("train_data"),
            test_raw: root.join("raw_data").join("test_data"),
            train_processed: root.join("proc_data").join("train_data"),
            test_processed: root.join("proc_data").join("test_data"),
        }
    }

    pub fn archive_dir(&self, split: Split) -> &Path {
        match split {
            Split::Train => &self.train_zip,
            Split::Test => &self.test_zip,
        }
    }

    pub fn raw_dir(&self, split: Split) -> &Path {
        match split {
            Split::Train => &self.train_raw,
            Split::Test => &self.test_raw,
        }
    }

    pub fn processed_dir(&self, split: Split) -> &Path {
        match split {
            Split::Train => &self.train_processed,
            Split::Test => &self.test_processed,
        }
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_RESOURCES_DIR)
    }
}
