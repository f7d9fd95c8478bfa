//! File-backed JSON address book storage.
//!
//! # Responsibility
//! - Read the document from disk and validate it into an aggregate.
//! - Write the document atomically (temp file + rename in the same directory).
//!
//! # Invariants
//! - A missing file reads as `Ok(None)`, not as an error.
//! - A failed save never truncates the previous file.
//! - Log events carry counts and paths only, never contact field values.

use crate::book::address_book::AddressBook;
use crate::storage::document::BookDocument;
use crate::storage::{StorageError, StorageResult};
use log::{error, info};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::NamedTempFile;

/// Storage contract used by services.
pub trait AddressBookStorage {
    fn file_path(&self) -> &Path;
    fn read(&self) -> StorageResult<Option<AddressBook>>;
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}

/// JSON file implementation of [`AddressBookStorage`].
#[derive(Debug, Clone)]
pub struct JsonAddressBookStorage {
    path: PathBuf,
}

impl JsonAddressBookStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_document(&self) -> StorageResult<Option<AddressBook>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        let document: BookDocument = serde_json::from_str(&json)?;
        document.to_book().map(Some)
    }

    fn write_document(&self, book: &AddressBook) -> StorageResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let io_error = |source: std::io::Error| StorageError::Io {
            path: self.path.clone(),
            source,
        };

        fs::create_dir_all(&dir).map_err(io_error)?;
        let mut temp = NamedTempFile::new_in(&dir).map_err(io_error)?;
        serde_json::to_writer_pretty(&mut temp, &BookDocument::from_book(book))?;
        temp.write_all(b"\n").map_err(io_error)?;
        temp.as_file().sync_all().map_err(io_error)?;
        temp.persist(&self.path).map_err(|err| io_error(err.error))?;
        Ok(())
    }
}

impl AddressBookStorage for JsonAddressBookStorage {
    fn file_path(&self) -> &Path {
        &self.path
    }

    /// Reads and validates the document.
    ///
    /// # Side effects
    /// - Emits `storage_read` logging events with duration and status.
    fn read(&self) -> StorageResult<Option<AddressBook>> {
        let started_at = Instant::now();
        info!(
            "event=storage_read module=storage status=start path={}",
            self.path.display()
        );

        match self.read_document() {
            Ok(Some(book)) => {
                info!(
                    "event=storage_read module=storage status=ok duration_ms={} persons={} guests={} vendors={}",
                    started_at.elapsed().as_millis(),
                    book.persons().len(),
                    book.guests().len(),
                    book.vendors().len()
                );
                Ok(Some(book))
            }
            Ok(None) => {
                info!(
                    "event=storage_read module=storage status=missing duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(None)
            }
            Err(err) => {
                error!(
                    "event=storage_read module=storage status=error duration_ms={} error_code={} error={}",
                    started_at.elapsed().as_millis(),
                    err.code(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Writes the document atomically.
    ///
    /// # Side effects
    /// - Creates missing parent directories.
    /// - Emits `storage_save` logging events with duration and status.
    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let started_at = Instant::now();
        match self.write_document(book) {
            Ok(()) => {
                info!(
                    "event=storage_save module=storage status=ok duration_ms={} path={}",
                    started_at.elapsed().as_millis(),
                    self.path.display()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=storage_save module=storage status=error duration_ms={} error_code={} error={}",
                    started_at.elapsed().as_millis(),
                    err.code(),
                    err
                );
                Err(err)
            }
        }
    }
}
