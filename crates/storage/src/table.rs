//! ContactTable: the file-backed table store
//!
//! Holds the live table as an ordered map guarded by a
//! `parking_lot::RwLock`, and rewrites the table file atomically after
//! every successful mutation. Reads take the read lock and never block
//! each other; mutations serialize on the write lock.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::{debug, error, info, warn};

use rolodex_core::{ContactId, ContactPatch, ContactRow, Error, Filter, NewContact, Order, Result};

use crate::format::{self, TableImage};

/// File-backed contact table
///
/// The table file is created lazily on the first mutation; opening a
/// path with no file yields an empty table. Identifier allocation is a
/// persisted high-water mark: ids keep ascending past deleted rows and
/// across restarts.
#[derive(Debug)]
pub struct ContactTable {
    path: PathBuf,
    inner: RwLock<TableInner>,
}

#[derive(Debug, Clone)]
struct TableInner {
    rows: BTreeMap<ContactId, ContactRow>,
    next_id: i64,
}

impl TableInner {
    fn from_image(image: TableImage) -> Self {
        let rows = image
            .rows
            .into_iter()
            .map(|row| (row.id, row))
            .collect::<BTreeMap<_, _>>();
        Self {
            rows,
            next_id: image.next_id,
        }
    }

    fn to_image(&self) -> TableImage {
        TableImage {
            next_id: self.next_id,
            rows: self.rows.values().cloned().collect(),
        }
    }
}

impl ContactTable {
    /// Open the table at the given path, loading persisted state if any
    ///
    /// # Errors
    ///
    /// Returns [`Error::Corruption`] if an existing file fails
    /// verification, or an I/O error if it cannot be read. A missing
    /// file is not an error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let inner = match fs::read(&path) {
            Ok(bytes) => {
                let image = format::decode(&bytes)?;
                info!(
                    path = %path.display(),
                    rows = image.rows.len(),
                    next_id = image.next_id,
                    "contact table loaded"
                );
                TableInner::from_image(image)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "contact table created");
                TableInner::from_image(TableImage::empty())
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            inner: RwLock::new(inner),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rows matching the filter, sorted per `order` (ascending id, the
    /// storage order, when no order is given)
    pub fn select(&self, filter: &Filter, order: Option<&Order>) -> Vec<ContactRow> {
        let inner = self.inner.read();
        let mut rows: Vec<ContactRow> = inner
            .rows
            .values()
            .filter(|row| filter.matches(row))
            .cloned()
            .collect();
        if let Some(order) = order {
            rows.sort_by(|a, b| order.compare(a, b));
        }
        rows
    }

    /// Number of live rows
    pub fn count(&self) -> usize {
        self.inner.read().rows.len()
    }

    /// Persist a new row, assigning the next identifier
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the table file rewrite fails; the
    /// table is left on its pre-insert state.
    pub fn insert(&self, contact: NewContact) -> Result<ContactId> {
        let mut inner = self.inner.write();

        let mut next = inner.clone();
        let id = ContactId::new(next.next_id);
        next.next_id += 1;
        next.rows.insert(
            id,
            ContactRow {
                id,
                name: contact.name,
                email: contact.email,
                gender: contact.gender,
                mobile: contact.mobile,
            },
        );

        self.persist(&next)?;
        debug!(id = %id, "row inserted");
        *inner = next;
        Ok(id)
    }

    /// Apply a patch to every row matching the filter
    ///
    /// Returns the number of rows changed; zero means no row matched and
    /// nothing was written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the table file rewrite fails; no
    /// row is changed in that case.
    pub fn update(&self, filter: &Filter, patch: &ContactPatch) -> Result<usize> {
        let mut inner = self.inner.write();

        let mut next = inner.clone();
        let mut affected = 0;
        for row in next.rows.values_mut() {
            if filter.matches(row) {
                patch.apply(row);
                affected += 1;
            }
        }

        if affected == 0 {
            return Ok(0);
        }

        self.persist(&next)?;
        debug!(rows = affected, "rows updated");
        *inner = next;
        Ok(affected)
    }

    /// Remove every row matching the filter
    ///
    /// Returns the number of rows removed; the identifier high-water
    /// mark is untouched, so deleted ids are never reassigned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the table file rewrite fails; no
    /// row is removed in that case.
    pub fn delete(&self, filter: &Filter) -> Result<usize> {
        let mut inner = self.inner.write();

        let mut next = inner.clone();
        let before = next.rows.len();
        next.rows.retain(|_, row| !filter.matches(row));
        let removed = before - next.rows.len();

        if removed == 0 {
            return Ok(0);
        }

        self.persist(&next)?;
        debug!(rows = removed, "rows deleted");
        *inner = next;
        Ok(removed)
    }

    /// Atomically rewrite the table file with the given state
    ///
    /// Temp file + rename, fsynced before the rename. Failures are
    /// surfaced as [`Error::Storage`] so callers can tell a failed write
    /// apart from plumbing errors raised before the attempt.
    fn persist(&self, state: &TableInner) -> Result<()> {
        let bytes = format::encode(&state.to_image())?;
        let temp_path = self.path.with_extension("tbl.tmp");

        // Stale temp file from a previous failed attempt
        if temp_path.exists() {
            warn!(path = %temp_path.display(), "removing stale temp file");
            let _ = fs::remove_file(&temp_path);
        }

        let result = write_and_sync(&temp_path, &bytes)
            .and_then(|_| fs::rename(&temp_path, &self.path));

        match result {
            Ok(()) => Ok(()),
            Err(e) => {
                error!(
                    path = %self.path.display(),
                    error = %e,
                    "table file rewrite failed"
                );
                let _ = fs::remove_file(&temp_path);
                Err(Error::Storage(e.to_string()))
            }
        }
    }
}

fn write_and_sync(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    use std::io::Write;

    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}
