use crate::error::{PageError, PageResult};
use crate::page::framing::MINIMUM_PAGE_SIZE;

pub const DEFAULT_PAGE_SIZE: usize = 16384;

/// Settings shared by every page of a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpaceOptions {
    pub(crate) page_size: usize,
}

impl Default for SpaceOptions {
    fn default() -> Self {
        SpaceOptions {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SpaceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn validate(&self) -> PageResult<()> {
        if self.page_size < MINIMUM_PAGE_SIZE || !self.page_size.is_power_of_two() {
            return Err(PageError::InvalidPageSize {
                page_size: self.page_size,
            });
        }
        Ok(())
    }
}

/// Identity of the space a page was read from.
///
/// Pages carry it through for specialized decoders; the framing decoder never
/// looks inside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Space {
    id: u32,
    name: String,
    options: SpaceOptions,
}

impl Space {
    pub fn new(id: u32, name: &str) -> Self {
        Space {
            id,
            name: name.to_owned(),
            options: SpaceOptions::default(),
        }
    }

    pub fn with_options(id: u32, name: &str, options: SpaceOptions) -> PageResult<Self> {
        options.validate()?;
        Ok(Space {
            id,
            name: name.to_owned(),
            options,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn page_size(&self) -> usize {
        self.options.page_size
    }

    pub fn options(&self) -> &SpaceOptions {
        &self.options
    }
}
