use std::io;
use thiserror::Error;

pub type PageResult<T> = Result<T, PageError>;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("malformed page: {size} bytes, at least {minimum} required")]
    MalformedPage { size: usize, minimum: usize },

    #[error("range {offset}+{length} is outside the page of {size} bytes")]
    OutOfRange {
        offset: usize,
        length: usize,
        size: usize,
    },

    #[error("invalid page size {page_size}")]
    InvalidPageSize { page_size: usize },

    #[error("field {name} is present in both key and row")]
    FieldCollision { name: String },

    #[error("short read of page {page_number}: expected {expected} bytes, got {actual}")]
    ShortRead {
        page_number: u32,
        expected: usize,
        actual: usize,
    },

    #[error("IO Error: {0}")]
    Io(#[from] io::Error),
}
