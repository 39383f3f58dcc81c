use byteorder::{BigEndian, ByteOrder};

/// A positioned reader over a page buffer.
///
/// Every integer is read big-endian, the on-disk convention of the format.
/// Reads advance the position by the width read.
///
/// # Panics
///
/// All `read_*` methods panic if the read would run past the end of the
/// buffer, the same way slice indexing does. The valid range for a read of
/// width `w` is `position() + w <= buffer.len()`.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    buffer: &'a [u8],
    position: usize,
}

macro_rules! generate_fixed_size_reader {
    ($type:ty, $name:ident, $decode_fn:path) => {
        pub fn $name(&mut self) -> $type {
            const SIZE: usize = std::mem::size_of::<$type>();
            let value = $decode_fn(&self.buffer[self.position..self.position + SIZE]);
            self.position += SIZE;
            value
        }
    };
}

impl<'a> ByteCursor<'a> {
    pub fn new(buffer: &'a [u8], position: usize) -> Self {
        ByteCursor { buffer, position }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    pub fn seek(&mut self, position: usize) -> &mut Self {
        self.position = position;
        self
    }

    pub fn skip(&mut self, length: usize) -> &mut Self {
        self.position += length;
        self
    }

    pub fn read_u8(&mut self) -> u8 {
        let value = self.buffer[self.position];
        self.position += 1;
        value
    }

    generate_fixed_size_reader!(u16, read_u16, BigEndian::read_u16);
    generate_fixed_size_reader!(u32, read_u32, BigEndian::read_u32);
    generate_fixed_size_reader!(u64, read_u64, BigEndian::read_u64);

    pub fn read_bytes(&mut self, length: usize) -> &'a [u8] {
        let bytes = &self.buffer[self.position..self.position + length];
        self.position += length;
        bytes
    }
}
