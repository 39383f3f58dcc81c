use crate::cursor::ByteCursor;
use crate::error::{PageError, PageResult};
use crate::file::space::Space;
use crate::page::framing::{
    FramingHeader, FramingTrailer, FRAMING_HEADER_OFFSET, FRAMING_HEADER_SIZE,
    FRAMING_TRAILER_SIZE, MINIMUM_PAGE_SIZE,
};
use crate::page::page_type::PageType;
use crate::page::registry::PageTypeRegistry;
use std::any::Any;
use std::fmt;
use std::ops::Deref;
use std::sync::{Arc, OnceLock};

pub mod framing;
pub mod index;
pub mod page_type;
pub mod registry;

#[cfg(test)]
pub(crate) mod test_pages;

/// A page decoded only as far as its framing header and trailer.
///
/// The buffer is never mutated after construction, so derived values are
/// memoized in write-once cells; a racing first read recomputes the same value.
pub struct Page {
    space: Arc<Space>,
    buffer: Vec<u8>,
    size: OnceLock<usize>,
    framing_header: OnceLock<FramingHeader>,
}

/// Behaviour shared by every decoder registered for a page-type code.
///
/// Implementors wrap the generic [`Page`] they were built from and interpret
/// only the bytes between the framing header and trailer.
pub trait SpecializedPage: Any + Send + Sync + fmt::Debug {
    fn page(&self) -> &Page;

    fn describe(&self) -> String {
        self.page().describe()
    }

    fn as_any(&self) -> &dyn Any;
}

/// Result of [`Page::load`]: the generic page, or the decoder registered for its type.
#[derive(Debug)]
pub enum PageHandle {
    Generic(Page),
    Specialized(Box<dyn SpecializedPage>),
}

impl Page {
    /// Wraps `buffer` as a generic page.
    ///
    /// Fails with [`PageError::MalformedPage`] when the buffer cannot hold the
    /// framing header and trailer.
    pub fn new(space: Arc<Space>, buffer: Vec<u8>) -> PageResult<Self> {
        if buffer.len() < MINIMUM_PAGE_SIZE {
            return Err(PageError::MalformedPage {
                size: buffer.len(),
                minimum: MINIMUM_PAGE_SIZE,
            });
        }
        Ok(Page {
            space,
            buffer,
            size: OnceLock::new(),
            framing_header: OnceLock::new(),
        })
    }

    /// Builds a generic page, then hands it to the decoder registered for its
    /// type code, if any.
    pub fn load(
        space: Arc<Space>,
        buffer: Vec<u8>,
        registry: &PageTypeRegistry,
    ) -> PageResult<PageHandle> {
        let page = Page::new(space, buffer)?;
        let page_type = page.page_type();

        match registry.lookup(page_type.code()) {
            Some(constructor) => {
                tracing::debug!(offset = page.offset(), %page_type, "loading specialized page");
                Ok(PageHandle::Specialized(constructor(page)?))
            }
            None => {
                tracing::debug!(offset = page.offset(), %page_type, "no decoder registered, keeping generic page");
                Ok(PageHandle::Generic(page))
            }
        }
    }

    /// [`Page::load`] against the process-wide registry of built-in decoders.
    pub fn load_with_builtin_decoders(
        space: Arc<Space>,
        buffer: Vec<u8>,
    ) -> PageResult<PageHandle> {
        static BUILTIN: OnceLock<PageTypeRegistry> = OnceLock::new();
        let registry = BUILTIN.get_or_init(PageTypeRegistry::with_builtin_decoders);
        Self::load(space, buffer, registry)
    }

    pub fn space(&self) -> &Arc<Space> {
        &self.space
    }

    pub fn size(&self) -> usize {
        *self.size.get_or_init(|| self.buffer.len())
    }

    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Returns `[offset, offset + length)`; valid while `offset + length <= size()`.
    pub fn raw_bytes(&self, offset: usize, length: usize) -> PageResult<&[u8]> {
        let size = self.size();
        match offset.checked_add(length) {
            Some(end) if end <= size => Ok(&self.buffer[offset..end]),
            _ => Err(PageError::OutOfRange {
                offset,
                length,
                size,
            }),
        }
    }

    pub fn cursor_at(&self, offset: usize) -> ByteCursor<'_> {
        ByteCursor::new(&self.buffer, offset)
    }

    pub const fn framing_header_offset() -> usize {
        FRAMING_HEADER_OFFSET
    }

    pub const fn framing_header_size() -> usize {
        FRAMING_HEADER_SIZE
    }

    pub fn framing_trailer_offset(&self) -> usize {
        self.size() - Self::framing_trailer_size()
    }

    pub const fn framing_trailer_size() -> usize {
        FRAMING_TRAILER_SIZE
    }

    pub fn framing_header(&self) -> &FramingHeader {
        self.framing_header.get_or_init(|| {
            tracing::trace!(size = self.size(), "decoding framing header");
            FramingHeader::read_from(&mut self.cursor_at(Self::framing_header_offset()))
        })
    }

    pub fn framing_trailer(&self) -> FramingTrailer {
        FramingTrailer::read_from(&mut self.cursor_at(self.framing_trailer_offset()))
    }

    pub fn page_type(&self) -> PageType {
        self.framing_header().page_type
    }

    pub fn offset(&self) -> u32 {
        self.framing_header().offset
    }

    pub fn previous(&self) -> Option<u32> {
        self.framing_header().previous
    }

    pub fn next(&self) -> Option<u32> {
        self.framing_header().next
    }

    pub fn lsn(&self) -> u64 {
        self.framing_header().lsn
    }

    pub fn describe(&self) -> String {
        let header = self.framing_header();
        format!(
            "page size={} space={} offset={} type={} prev={} next={}",
            self.size(),
            header.space_id,
            header.offset,
            header.page_type,
            describe_link(header.previous),
            describe_link(header.next),
        )
    }
}

fn describe_link(link: Option<u32>) -> String {
    link.map_or_else(|| String::from("none"), |page| page.to_string())
}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("space", &self.space.name())
            .field("size", &self.size())
            .field("framing_header", self.framing_header())
            .finish()
    }
}

impl PageHandle {
    pub fn page(&self) -> &Page {
        match self {
            PageHandle::Generic(page) => page,
            PageHandle::Specialized(specialized) => specialized.page(),
        }
    }

    pub fn is_specialized(&self) -> bool {
        matches!(self, PageHandle::Specialized(_))
    }

    pub fn downcast_ref<T: SpecializedPage>(&self) -> Option<&T> {
        match self {
            PageHandle::Generic(_) => None,
            PageHandle::Specialized(specialized) => specialized.as_any().downcast_ref::<T>(),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            PageHandle::Generic(page) => page.describe(),
            PageHandle::Specialized(specialized) => specialized.describe(),
        }
    }
}

impl Deref for PageHandle {
    type Target = Page;

    fn deref(&self) -> &Page {
        self.page()
    }
}
