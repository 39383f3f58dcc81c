//! Framing header and trailer that bracket every page.
//!
//! ```text
//! Offset  Size  Field
//! ------  ----  -----
//!   0       4   checksum
//!   4       4   page offset (page number within the space)
//!   8       4   previous page (0xFFFFFFFF = none)
//!  12       4   next page (0xFFFFFFFF = none)
//!  16       8   lsn
//!  24       2   page type code
//!  26       8   flush lsn
//!  34       4   space id
//!
//! size-8    4   checksum
//! size-4    4   low 32 bits of lsn
//! ```

use crate::cursor::ByteCursor;
use crate::page::page_type::PageType;

pub const FRAMING_HEADER_OFFSET: usize = 0;
pub const FRAMING_HEADER_SIZE: usize = 38;
pub const FRAMING_TRAILER_SIZE: usize = 8;

/// Smallest buffer that can hold both framing regions.
pub const MINIMUM_PAGE_SIZE: usize = FRAMING_HEADER_SIZE + FRAMING_TRAILER_SIZE;

const UNDEFINED: u32 = u32::MAX;

/// Normalizes the all-ones link sentinel to `None`.
pub fn maybe_undefined(raw: u32) -> Option<u32> {
    if raw == UNDEFINED {
        None
    } else {
        Some(raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramingHeader {
    pub checksum: u32,
    pub offset: u32,
    pub previous: Option<u32>,
    pub next: Option<u32>,
    pub lsn: u64,
    pub page_type: PageType,
    pub flush_lsn: u64,
    pub space_id: u32,
}

impl FramingHeader {
    /// Reads all header fields in wire order.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `FRAMING_HEADER_SIZE` bytes remain in the cursor.
    pub(crate) fn read_from(cursor: &mut ByteCursor<'_>) -> Self {
        FramingHeader {
            checksum: cursor.read_u32(),
            offset: cursor.read_u32(),
            previous: maybe_undefined(cursor.read_u32()),
            next: maybe_undefined(cursor.read_u32()),
            lsn: cursor.read_u64(),
            page_type: PageType::from(cursor.read_u16()),
            flush_lsn: cursor.read_u64(),
            space_id: cursor.read_u32(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramingTrailer {
    pub checksum: u32,
    pub lsn_low: u32,
}

impl FramingTrailer {
    pub(crate) fn read_from(cursor: &mut ByteCursor<'_>) -> Self {
        FramingTrailer {
            checksum: cursor.read_u32(),
            lsn_low: cursor.read_u32(),
        }
    }
}
