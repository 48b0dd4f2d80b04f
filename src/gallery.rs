// SPDX-License-Identifier: MPL-2.0
//! Gallery folder scanner.
//!
//! This module scans a directory for supported image formats, filters them,
//! and sorts them by file name so the grid order is stable across rescans.

use crate::error::Result;
use crate::media;
use std::path::{Path, PathBuf};

/// The list of images found in the currently opened folder.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageList {
    folder: Option<PathBuf>,
    files: Vec<PathBuf>,
}

impl ImageList {
    /// Creates a new empty list, shown before any folder is opened.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans a directory for supported image files, sorted by file name.
    ///
    /// Returns an error if the directory cannot be read. A readable directory
    /// with no images yields an empty list, not an error.
    pub fn scan_directory(directory: &Path) -> Result<Self> {
        let mut files = Vec::new();

        for entry in std::fs::read_dir(directory)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && media::is_supported_image(&path) {
                files.push(path);
            }
        }

        sort_by_file_name(&mut files);

        Ok(Self {
            folder: Some(directory.to_path_buf()),
            files,
        })
    }

    /// Returns the folder this list was scanned from, if any.
    pub fn folder(&self) -> Option<&Path> {
        self.folder.as_deref()
    }

    /// Returns the scanned image paths in display order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Case-insensitive name order, so `B.png` does not sort before `a.png`.
fn sort_by_file_name(files: &mut [PathBuf]) {
    files.sort_by_key(|path| {
        path.file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    });
}
