//! B-tree node pages (type code 17855).
//!
//! The index header sits directly after the framing header:
//!
//! ```text
//! Offset  Size  Field
//! ------  ----  -----
//!  38       2   directory slots
//!  40       2   heap top
//!  42       2   heap records (high bit set = compact format)
//!  44       2   first free record
//!  46       2   garbage bytes
//!  48       2   last insert position
//!  50       2   page direction
//!  52       2   inserts in this direction
//!  54       2   user records
//!  56       8   max transaction id
//!  64       2   level (0 = leaf)
//!  66       8   index id
//! ```

use crate::cursor::ByteCursor;
use crate::error::PageResult;
use crate::page::framing::FRAMING_HEADER_SIZE;
use crate::page::{Page, SpecializedPage};
use std::any::Any;

pub const INDEX_HEADER_OFFSET: usize = FRAMING_HEADER_SIZE;
pub const INDEX_HEADER_SIZE: usize = 36;

const COMPACT_FLAG: u16 = 0x8000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexHeader {
    pub directory_slots: u16,
    pub heap_top: u16,
    pub heap_records: u16,
    pub compact: bool,
    pub first_free: u16,
    pub garbage: u16,
    pub last_insert: u16,
    pub direction: u16,
    pub direction_inserts: u16,
    pub records: u16,
    pub max_transaction_id: u64,
    pub level: u16,
    pub index_id: u64,
}

impl IndexHeader {
    fn read_from(cursor: &mut ByteCursor<'_>) -> Self {
        let directory_slots = cursor.read_u16();
        let heap_top = cursor.read_u16();
        let raw_heap_records = cursor.read_u16();
        IndexHeader {
            directory_slots,
            heap_top,
            heap_records: raw_heap_records & !COMPACT_FLAG,
            compact: raw_heap_records & COMPACT_FLAG != 0,
            first_free: cursor.read_u16(),
            garbage: cursor.read_u16(),
            last_insert: cursor.read_u16(),
            direction: cursor.read_u16(),
            direction_inserts: cursor.read_u16(),
            records: cursor.read_u16(),
            max_transaction_id: cursor.read_u64(),
            level: cursor.read_u16(),
            index_id: cursor.read_u64(),
        }
    }
}

#[derive(Debug)]
pub struct IndexPage {
    page: Page,
    header: IndexHeader,
}

impl IndexPage {
    pub fn new(page: Page) -> PageResult<Self> {
        let bytes = page.raw_bytes(INDEX_HEADER_OFFSET, INDEX_HEADER_SIZE)?;
        let header = IndexHeader::read_from(&mut ByteCursor::new(bytes, 0));
        Ok(IndexPage { page, header })
    }

    pub(crate) fn construct(page: Page) -> PageResult<Box<dyn SpecializedPage>> {
        Ok(Box::new(Self::new(page)?))
    }

    pub fn header(&self) -> &IndexHeader {
        &self.header
    }

    pub fn level(&self) -> u16 {
        self.header.level
    }

    pub fn is_leaf(&self) -> bool {
        self.header.level == 0
    }

    pub fn record_count(&self) -> u16 {
        self.header.records
    }

    pub fn index_id(&self) -> u64 {
        self.header.index_id
    }

    pub fn is_compact(&self) -> bool {
        self.header.compact
    }
}

impl SpecializedPage for IndexPage {
    fn page(&self) -> &Page {
        &self.page
    }

    fn describe(&self) -> String {
        format!(
            "{} index={} level={} records={}",
            self.page.describe(),
            self.header.index_id,
            self.header.level,
            self.header.records
        )
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
