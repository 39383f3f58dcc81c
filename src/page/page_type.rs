use std::fmt;

/// Symbolic page type, decoded from the framing header's type code.
///
/// Codes outside the known table are kept as `Unrecognized` so pages written
/// by newer format versions still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageType {
    Allocated,
    UndoLog,
    Inode,
    InsertBufferFreeList,
    InsertBufferBitmap,
    System,
    TransactionSystem,
    FileSpaceHeader,
    ExtentDescriptor,
    Blob,
    CompressedBlobFirst,
    CompressedBlobNext,
    Index,
    Unrecognized(u16),
}

impl PageType {
    pub const INDEX_CODE: u16 = 17855;

    pub const fn code(self) -> u16 {
        match self {
            PageType::Allocated => 0,
            PageType::UndoLog => 2,
            PageType::Inode => 3,
            PageType::InsertBufferFreeList => 4,
            PageType::InsertBufferBitmap => 5,
            PageType::System => 6,
            PageType::TransactionSystem => 7,
            PageType::FileSpaceHeader => 8,
            PageType::ExtentDescriptor => 9,
            PageType::Blob => 10,
            PageType::CompressedBlobFirst => 11,
            PageType::CompressedBlobNext => 12,
            PageType::Index => Self::INDEX_CODE,
            PageType::Unrecognized(code) => code,
        }
    }

    pub const fn is_recognized(self) -> bool {
        !matches!(self, PageType::Unrecognized(_))
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            PageType::Allocated => "allocated",
            PageType::UndoLog => "undo-log",
            PageType::Inode => "inode",
            PageType::InsertBufferFreeList => "insert-buffer-free-list",
            PageType::InsertBufferBitmap => "insert-buffer-bitmap",
            PageType::System => "system",
            PageType::TransactionSystem => "transaction-system",
            PageType::FileSpaceHeader => "file-space-header",
            PageType::ExtentDescriptor => "extent-descriptor",
            PageType::Blob => "blob",
            PageType::CompressedBlobFirst => "compressed-blob-first",
            PageType::CompressedBlobNext => "compressed-blob-next",
            PageType::Index => "index",
            PageType::Unrecognized(_) => "unrecognized",
        }
    }
}

impl From<u16> for PageType {
    fn from(value: u16) -> Self {
        match value {
            0 => PageType::Allocated,
            2 => PageType::UndoLog,
            3 => PageType::Inode,
            4 => PageType::InsertBufferFreeList,
            5 => PageType::InsertBufferBitmap,
            6 => PageType::System,
            7 => PageType::TransactionSystem,
            8 => PageType::FileSpaceHeader,
            9 => PageType::ExtentDescriptor,
            10 => PageType::Blob,
            11 => PageType::CompressedBlobFirst,
            12 => PageType::CompressedBlobNext,
            Self::INDEX_CODE => PageType::Index,
            code => PageType::Unrecognized(code),
        }
    }
}

impl From<PageType> for u16 {
    fn from(value: PageType) -> Self {
        value.code()
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageType::Unrecognized(code) => write!(f, "unrecognized({})", code),
            other => f.write_str(other.symbol()),
        }
    }
}
