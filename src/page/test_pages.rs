use crate::file::space::Space;
use crate::page::framing::FRAMING_HEADER_SIZE;
use byteorder::{BigEndian, ByteOrder};
use std::sync::Arc;

pub(crate) const PAGE_SIZE: usize = 16384;

pub(crate) fn test_space() -> Arc<Space> {
    Arc::new(Space::new(12, "sakila/film.ibd"))
}

/// Builds raw page buffers with a filled-in framing header.
pub(crate) struct PageBytes {
    buffer: Vec<u8>,
}

impl PageBytes {
    pub(crate) fn new(size: usize) -> Self {
        let mut page = PageBytes {
            buffer: vec![0; size],
        };
        page.previous(None).next(None);
        page
    }

    pub(crate) fn checksum(&mut self, checksum: u32) -> &mut Self {
        BigEndian::write_u32(&mut self.buffer[0..4], checksum);
        self
    }

    pub(crate) fn offset(&mut self, offset: u32) -> &mut Self {
        BigEndian::write_u32(&mut self.buffer[4..8], offset);
        self
    }

    pub(crate) fn previous(&mut self, previous: Option<u32>) -> &mut Self {
        BigEndian::write_u32(&mut self.buffer[8..12], previous.unwrap_or(u32::MAX));
        self
    }

    pub(crate) fn next(&mut self, next: Option<u32>) -> &mut Self {
        BigEndian::write_u32(&mut self.buffer[12..16], next.unwrap_or(u32::MAX));
        self
    }

    pub(crate) fn lsn(&mut self, lsn: u64) -> &mut Self {
        BigEndian::write_u64(&mut self.buffer[16..24], lsn);
        self
    }

    pub(crate) fn page_type(&mut self, code: u16) -> &mut Self {
        BigEndian::write_u16(&mut self.buffer[24..26], code);
        self
    }

    pub(crate) fn flush_lsn(&mut self, flush_lsn: u64) -> &mut Self {
        BigEndian::write_u64(&mut self.buffer[26..34], flush_lsn);
        self
    }

    pub(crate) fn space_id(&mut self, space_id: u32) -> &mut Self {
        BigEndian::write_u32(&mut self.buffer[34..FRAMING_HEADER_SIZE], space_id);
        self
    }

    pub(crate) fn trailer(&mut self, checksum: u32, lsn_low: u32) -> &mut Self {
        let size = self.buffer.len();
        BigEndian::write_u32(&mut self.buffer[size - 8..size - 4], checksum);
        BigEndian::write_u32(&mut self.buffer[size - 4..], lsn_low);
        self
    }

    pub(crate) fn write_u16(&mut self, offset: usize, value: u16) -> &mut Self {
        BigEndian::write_u16(&mut self.buffer[offset..], value);
        self
    }

    pub(crate) fn write_u64(&mut self, offset: usize, value: u64) -> &mut Self {
        BigEndian::write_u64(&mut self.buffer[offset..], value);
        self
    }

    pub(crate) fn build(&self) -> Vec<u8> {
        self.buffer.clone()
    }
}
