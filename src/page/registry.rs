use crate::error::PageResult;
use crate::page::index::IndexPage;
use crate::page::page_type::PageType;
use crate::page::{Page, SpecializedPage};
use std::collections::HashMap;

/// Re-materializes an already-built generic page as a specialized decoder.
pub type PageConstructor = fn(Page) -> PageResult<Box<dyn SpecializedPage>>;

/// Maps raw page-type codes to specialized decoder constructors.
///
/// Registering a code twice replaces the earlier constructor.
#[derive(Debug, Default, Clone)]
pub struct PageTypeRegistry {
    constructors: HashMap<u16, PageConstructor>,
}

impl PageTypeRegistry {
    pub fn new() -> Self {
        PageTypeRegistry {
            constructors: HashMap::new(),
        }
    }

    pub fn with_builtin_decoders() -> Self {
        let mut registry = Self::new();
        registry.register(PageType::INDEX_CODE, IndexPage::construct);
        registry
    }

    /// Returns the constructor this registration replaced, if any.
    pub fn register(
        &mut self,
        type_code: u16,
        constructor: PageConstructor,
    ) -> Option<PageConstructor> {
        self.constructors.insert(type_code, constructor)
    }

    pub fn lookup(&self, type_code: u16) -> Option<PageConstructor> {
        self.constructors.get(&type_code).copied()
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::PageResult;
    use crate::page::page_type::PageType;
    use crate::page::registry::PageTypeRegistry;
    use crate::page::{Page, SpecializedPage};
    use std::any::Any;

    #[derive(Debug)]
    struct BlobPage {
        page: Page,
    }

    impl SpecializedPage for BlobPage {
        fn page(&self) -> &Page {
            &self.page
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn blob(page: Page) -> PageResult<Box<dyn SpecializedPage>> {
        Ok(Box::new(BlobPage { page }))
    }

    #[test]
    fn lookup_an_unregistered_code() {
        let registry = PageTypeRegistry::new();

        assert!(registry.lookup(10).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn register_and_lookup() {
        let mut registry = PageTypeRegistry::new();
        let replaced = registry.register(10, blob);

        assert!(replaced.is_none());
        assert!(registry.lookup(10).is_some());
        assert!(registry.lookup(11).is_none());
        assert_eq!(1, registry.len());
    }

    #[test]
    fn register_twice_for_the_same_code() {
        let mut registry = PageTypeRegistry::new();
        registry.register(10, blob);
        let replaced = registry.register(10, blob);

        assert!(replaced.is_some());
        assert_eq!(1, registry.len());
    }

    #[test]
    fn builtin_decoders_include_index() {
        let registry = PageTypeRegistry::with_builtin_decoders();

        assert!(registry.lookup(PageType::INDEX_CODE).is_some());
        assert!(registry.lookup(PageType::Blob.code()).is_none());
    }
}
