// src/ingest/cache.rs

use crate::config::CourseLayout;
use crate::errors::AppResult;
use crate::ingest::ingestor::{IngestedTables, ingest};
use crate::ingest::workbook::Workbook;
use sha2::{Digest, Sha256};
use std::collections::VecDeque;
use std::sync::Arc;

/// Parsed workbook plus its ingested tables, shared between renders.
#[derive(Debug)]
pub struct LoadedWorkbook {
    pub digest: String,
    pub university: String,
    pub workbook: Workbook,
    pub tables: IngestedTables,
}

/// Hex SHA-256 of the uploaded bytes.
pub fn content_digest(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CacheKey {
    digest: String,
    university: String,
}

/// Bounded, least-recently-used cache keyed by (file content, university label).
///
/// The course layout is fixed for the lifetime of a cache.
pub struct WorkbookCache {
    capacity: usize,
    layout: CourseLayout,
    entries: VecDeque<(CacheKey, Arc<LoadedWorkbook>)>,
    hits: usize,
    misses: usize,
}

impl WorkbookCache {
    pub fn new(capacity: usize, layout: CourseLayout) -> Self {
        Self {
            capacity: capacity.max(1),
            layout,
            entries: VecDeque::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Return the cached load for `bytes`, parsing and ingesting on a miss.
    pub fn get_or_load(&mut self, bytes: &[u8], university: &str) -> AppResult<Arc<LoadedWorkbook>> {
        let key = CacheKey {
            digest: content_digest(bytes),
            university: university.to_string(),
        };

        if let Some(pos) = self.entries.iter().position(|(k, _)| *k == key) {
            self.hits += 1;
            // most recent at the back
            if let Some(entry) = self.entries.remove(pos) {
                let loaded = Arc::clone(&entry.1);
                self.entries.push_back(entry);
                return Ok(loaded);
            }
        }

        self.misses += 1;
        let workbook = Workbook::from_bytes(bytes)?;
        let tables = ingest(&workbook, university, &self.layout);
        let loaded = Arc::new(LoadedWorkbook {
            digest: key.digest.clone(),
            university: university.to_string(),
            workbook,
            tables,
        });

        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back((key, Arc::clone(&loaded)));

        Ok(loaded)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }
}
