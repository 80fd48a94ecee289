/*
 * cache.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Per-file cache of decoded text and extracted template regions.
 */

//! Per-file cache of decoded text and extracted template regions.
//!
//! The cache exclusively owns all decoded and parsed state. Callers get
//! read-only views; the only sanctioned mutation of a region's contents is
//! [`ParseCache::clear_region`].
//!
//! Validity is stat-based: a cached entry is reused only while the file's
//! on-disk modification time equals the recorded one. There is no content
//! hashing, so two writes landing within the filesystem's mtime granularity
//! will not invalidate the entry. That is a known, deliberate coarseness;
//! build tools rewrite files far apart compared to mtime resolution.
//!
//! Everything here is single-threaded and synchronous. Passes over the same
//! file must not interleave or the cleared-sentinel protocol races; the
//! host build tool's one-file-at-a-time invocation provides that ordering.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::Result;
use crate::extractor::TemplateExtractor;
use crate::region::Region;

/// Read-through cache mapping files to decoded text and extracted regions.
pub struct ParseCache {
    extractor: Box<dyn TemplateExtractor>,
    texts: HashMap<PathBuf, String>,
    mtimes: HashMap<PathBuf, SystemTime>,
    regions: HashMap<PathBuf, Vec<Region>>,
    disk_reads: u64,
}

impl std::fmt::Debug for ParseCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParseCache")
            .field("files", &self.texts.len())
            .field("disk_reads", &self.disk_reads)
            .finish()
    }
}

impl ParseCache {
    /// Create a cache backed by the given preprocessor.
    pub fn new(extractor: Box<dyn TemplateExtractor>) -> Self {
        ParseCache {
            extractor,
            texts: HashMap::new(),
            mtimes: HashMap::new(),
            regions: HashMap::new(),
            disk_reads: 0,
        }
    }

    /// The file's decoded text, read from disk at most once per modification.
    ///
    /// Stat failures and read failures propagate to the caller; the cache
    /// neither retries nor falls back to stale text. A failure for one path
    /// leaves every other path's cached state untouched.
    pub fn file_text(&mut self, path: &Path) -> Result<&str> {
        self.ensure_text(path)?;
        Ok(self
            .texts
            .get(path)
            .expect("ensure_text populates the entry it validates"))
    }

    /// The file's extracted regions, in document order.
    ///
    /// Reuses the cached set only while the file cache is valid and at
    /// least one region still holds non-sentinel content. Once every region
    /// has been cleared, the next call re-extracts so that a new traversal
    /// of the same unchanged file starts from fresh contents.
    pub fn regions(&mut self, path: &Path) -> Result<&[Region]> {
        let reuse = self.is_file_cache_valid(path)?
            && self
                .regions
                .get(path)
                .is_some_and(|set| !set.iter().all(Region::is_cleared));

        if !reuse {
            self.ensure_text(path)?;
            let text = self
                .texts
                .get(path)
                .expect("ensure_text populates the entry it validates");
            let set = self.extractor.extract(text);
            tracing::debug!(
                path = %path.display(),
                regions = set.len(),
                "extracted template regions"
            );
            self.regions.insert(path.to_path_buf(), set);
        }

        Ok(self
            .regions
            .get(path)
            .map(Vec::as_slice)
            .unwrap_or_default())
    }

    /// Overwrite a region's contents with the cleared sentinel.
    ///
    /// This is the documented consumption protocol: the caller invokes it
    /// once every element belonging to the region has been visited, so that
    /// a later identical-content region in the same file can match.
    ///
    /// Unknown paths and out-of-range indices are ignored.
    pub fn clear_region(&mut self, path: &Path, index: usize) {
        if let Some(region) = self
            .regions
            .get_mut(path)
            .and_then(|set| set.get_mut(index))
        {
            region.clear();
            tracing::debug!(path = %path.display(), index, "region consumed");
        }
    }

    /// Number of actual disk reads performed so far.
    pub fn disk_reads(&self) -> u64 {
        self.disk_reads
    }

    /// Re-read the file unless the cached text is still valid.
    fn ensure_text(&mut self, path: &Path) -> Result<()> {
        if self.is_file_cache_valid(path)? {
            return Ok(());
        }

        let text = fs::read_to_string(path)?;
        let mtime = fs::metadata(path)?.modified()?;
        self.disk_reads += 1;
        tracing::debug!(
            path = %path.display(),
            bytes = text.len(),
            "read source file"
        );

        self.texts.insert(path.to_path_buf(), text);
        self.mtimes.insert(path.to_path_buf(), mtime);
        Ok(())
    }

    /// Whether the cached text for `path` may still be used.
    ///
    /// False when the path was never cached; stat errors (file removed,
    /// permissions) propagate rather than being treated as "invalid".
    fn is_file_cache_valid(&self, path: &Path) -> Result<bool> {
        let Some(cached_mtime) = self.mtimes.get(path) else {
            return Ok(false);
        };
        if !self.texts.contains_key(path) {
            return Ok(false);
        }

        let modified = fs::metadata(path)?.modified()?;
        Ok(modified == *cached_mtime)
    }
}
