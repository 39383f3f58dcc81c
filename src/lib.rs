//! Read-only decoder for fixed-size tablespace pages.
//!
//! [`Page::load`] decodes the framing header of a raw page buffer and hands
//! the page to the decoder registered for its type code in a
//! [`PageTypeRegistry`]. Specialized decoders build [`Record`]s out of the
//! bytes between the framing header and trailer.

pub mod cursor;
pub mod error;
pub mod file;
pub mod page;
pub mod record;

pub use cursor::ByteCursor;
pub use error::{PageError, PageResult};
pub use file::space::{Space, SpaceOptions};
pub use file::space_file::SpaceFile;
pub use page::framing::{maybe_undefined, FramingHeader, FramingTrailer};
pub use page::index::IndexPage;
pub use page::page_type::PageType;
pub use page::registry::{PageConstructor, PageTypeRegistry};
pub use page::{Page, PageHandle, SpecializedPage};
pub use record::{Field, FieldValue, Record, RecordKind, RecordPayload};
