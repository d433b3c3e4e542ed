//! Table file format
//!
//! The whole table is persisted as a single self-describing file:
//!
//! ```text
//! +----------+---------+------------+------------------+-------+
//! | magic    | version | next_id    | rows (bincode)   | crc32 |
//! | "RLDX"   | u16 le  | i64 le     | length-delimited | u32 le|
//! +----------+---------+------------+------------------+-------+
//! ```
//!
//! The trailing CRC32 covers everything before it. Open verifies magic,
//! version, and checksum; a file that fails any of the three surfaces as
//! [`Error::Corruption`], never as a silently truncated table.

use rolodex_core::{ContactRow, Error, Result};

/// File magic identifying a rolodex table file
pub(crate) const MAGIC: [u8; 4] = *b"RLDX";

/// On-disk format version
pub(crate) const FORMAT_VERSION: u16 = 1;

// magic + version + next_id
const HEADER_LEN: usize = 4 + 2 + 8;
const CRC_LEN: usize = 4;

/// Materialized table state as persisted on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableImage {
    /// Next identifier to assign; high-water mark across all time
    pub next_id: i64,
    /// All live rows
    pub rows: Vec<ContactRow>,
}

impl TableImage {
    /// An empty table, ids starting at 1
    pub fn empty() -> Self {
        Self {
            next_id: 1,
            rows: Vec::new(),
        }
    }
}

/// Encode a table image into the on-disk representation
///
/// # Errors
///
/// Returns [`Error::Serialization`] if row encoding fails.
pub fn encode(image: &TableImage) -> Result<Vec<u8>> {
    let rows = bincode::serialize(&image.rows)?;

    let mut out = Vec::with_capacity(HEADER_LEN + rows.len() + CRC_LEN);
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    out.extend_from_slice(&image.next_id.to_le_bytes());
    out.extend_from_slice(&rows);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(&out);
    out.extend_from_slice(&hasher.finalize().to_le_bytes());

    Ok(out)
}

/// Decode and verify an on-disk table image
///
/// # Errors
///
/// Returns [`Error::Corruption`] on bad magic, unknown version, short
/// file, or checksum mismatch; [`Error::Serialization`] if the row
/// payload does not decode.
pub fn decode(bytes: &[u8]) -> Result<TableImage> {
    if bytes.len() < HEADER_LEN + CRC_LEN {
        return Err(Error::Corruption(format!(
            "table file too short: {} bytes",
            bytes.len()
        )));
    }

    let (body, crc_bytes) = bytes.split_at(bytes.len() - CRC_LEN);
    let stored_crc = u32::from_le_bytes(crc_bytes.try_into().expect("split at CRC_LEN"));
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(body);
    let computed_crc = hasher.finalize();
    if stored_crc != computed_crc {
        return Err(Error::Corruption(format!(
            "table file checksum mismatch: stored {:08x}, computed {:08x}",
            stored_crc, computed_crc
        )));
    }

    if body[0..4] != MAGIC {
        return Err(Error::Corruption("bad table file magic".to_string()));
    }
    let version = u16::from_le_bytes(body[4..6].try_into().expect("fixed header"));
    if version != FORMAT_VERSION {
        return Err(Error::Corruption(format!(
            "unknown table file version: {}",
            version
        )));
    }

    let next_id = i64::from_le_bytes(body[6..HEADER_LEN].try_into().expect("fixed header"));
    let rows: Vec<ContactRow> = bincode::deserialize(&body[HEADER_LEN..])?;

    Ok(TableImage { next_id, rows })
}
