use crate::error::{PageError, PageResult};
use crate::file::space::Space;
use crate::page::registry::PageTypeRegistry;
use crate::page::{Page, PageHandle};
use std::cell::RefCell;
use std::fs::File;
use std::io::{ErrorKind, Read, Seek, SeekFrom};
use std::path::Path;
use std::sync::Arc;

/// Reads whole pages out of a single tablespace file.
pub struct SpaceFile {
    space: Arc<Space>,
    file: RefCell<File>,
}

impl SpaceFile {
    pub fn open<P: AsRef<Path>>(path: P, space: Arc<Space>) -> PageResult<Self> {
        let file = File::options().read(true).open(path.as_ref())?;
        tracing::debug!(
            path = %path.as_ref().display(),
            page_size = space.page_size(),
            "opened space file"
        );
        Ok(SpaceFile {
            space,
            file: RefCell::new(file),
        })
    }

    pub fn space(&self) -> &Arc<Space> {
        &self.space
    }

    pub fn number_of_pages(&self) -> PageResult<u32> {
        let metadata = self.file.borrow().metadata()?;
        Ok((metadata.len() / self.space.page_size() as u64) as u32)
    }

    pub fn read_buffer(&self, page_number: u32) -> PageResult<Vec<u8>> {
        let page_size = self.space.page_size();
        let mut buffer = vec![0; page_size];
        let mut file = self.file.borrow_mut();
        file.seek(SeekFrom::Start(page_number as u64 * page_size as u64))?;

        let bytes_read = Self::read_fully(&mut file, &mut buffer)?;
        if bytes_read != page_size {
            return Err(PageError::ShortRead {
                page_number,
                expected: page_size,
                actual: bytes_read,
            });
        }
        Ok(buffer)
    }

    pub fn read_page(&self, page_number: u32, registry: &PageTypeRegistry) -> PageResult<PageHandle> {
        let buffer = self.read_buffer(page_number)?;
        Page::load(self.space.clone(), buffer, registry)
    }

    fn read_fully(file: &mut File, buffer: &mut [u8]) -> PageResult<usize> {
        let mut total = 0;
        while total < buffer.len() {
            match file.read(&mut buffer[total..]) {
                Ok(0) => break,
                Ok(bytes_read) => total += bytes_read,
                Err(error) if error.kind() == ErrorKind::Interrupted => continue,
                Err(error) => return Err(error.into()),
            }
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::PageError;
    use crate::file::space::{Space, SpaceOptions};
    use crate::file::space_file::SpaceFile;
    use crate::page::index::IndexPage;
    use crate::page::page_type::PageType;
    use crate::page::registry::PageTypeRegistry;
    use crate::page::test_pages::{test_space, PageBytes, PAGE_SIZE};
    use std::io::Write;
    use std::sync::Arc;
    use tempfile::NamedTempFile;

    fn space_file_with(pages: &[Vec<u8>]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        for page in pages {
            file.write_all(page).unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn number_of_pages_in_a_file() {
        let file = space_file_with(&[
            PageBytes::new(PAGE_SIZE).page_type(8).build(),
            PageBytes::new(PAGE_SIZE).page_type(5).offset(1).build(),
            PageBytes::new(PAGE_SIZE).page_type(3).offset(2).build(),
        ]);

        let space_file = SpaceFile::open(file.path(), test_space()).unwrap();
        assert_eq!(3, space_file.number_of_pages().unwrap());
    }

    #[test]
    fn read_pages_by_number() {
        let file = space_file_with(&[
            PageBytes::new(PAGE_SIZE).page_type(8).build(),
            PageBytes::new(PAGE_SIZE).page_type(17855).offset(1).next(Some(2)).build(),
            PageBytes::new(PAGE_SIZE).page_type(17855).offset(2).previous(Some(1)).build(),
        ]);
        let space_file = SpaceFile::open(file.path(), test_space()).unwrap();
        let registry = PageTypeRegistry::with_builtin_decoders();

        let header = space_file.read_page(0, &registry).unwrap();
        assert_eq!(PageType::FileSpaceHeader, header.page_type());
        assert!(!header.is_specialized());

        let last = space_file.read_page(2, &registry).unwrap();
        assert_eq!(2, last.offset());
        assert_eq!(Some(1), last.previous());
        assert!(last.downcast_ref::<IndexPage>().is_some());
    }

    #[test]
    fn read_with_a_smaller_page_size() {
        let file = space_file_with(&[
            PageBytes::new(4096).page_type(8).build(),
            PageBytes::new(4096).page_type(9).offset(1).build(),
        ]);
        let options = SpaceOptions::new().with_page_size(4096);
        let space = Arc::new(Space::with_options(3, "small.ibd", options).unwrap());
        let space_file = SpaceFile::open(file.path(), space).unwrap();

        let page = space_file.read_page(1, &PageTypeRegistry::new()).unwrap();
        assert_eq!(4096, page.size());
        assert_eq!(PageType::ExtentDescriptor, page.page_type());
    }

    #[test]
    fn read_a_page_past_the_end_of_the_file() {
        let file = space_file_with(&[PageBytes::new(PAGE_SIZE).build()]);
        let space_file = SpaceFile::open(file.path(), test_space()).unwrap();

        assert!(matches!(
            space_file.read_buffer(1),
            Err(PageError::ShortRead {
                page_number: 1,
                actual: 0,
                ..
            })
        ));
    }

    #[test]
    fn open_a_missing_file() {
        let result = SpaceFile::open("/nonexistent/ibdata1", test_space());
        assert!(matches!(result, Err(PageError::Io(_))));
    }
}
