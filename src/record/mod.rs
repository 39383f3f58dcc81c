//! Decoded records as presented to callers.
//!
//! Specialized page decoders do the byte-level work and hand over a
//! [`RecordPayload`]; a [`Record`] only presents that structure.

use crate::error::{PageError, PageResult};
use crate::page::Page;
use std::collections::BTreeMap;

pub mod field;

pub use field::{Field, FieldValue};

/// A leaf entry carries a row, an internal entry carries a child pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordKind {
    Leaf { row: Vec<Field> },
    Internal { child_page_number: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPayload {
    pub header: Vec<u8>,
    pub offset: usize,
    pub next: Option<usize>,
    pub key: Vec<Field>,
    pub kind: RecordKind,
}

#[derive(Debug)]
pub struct Record<'a> {
    page: &'a Page,
    payload: RecordPayload,
}

impl<'a> Record<'a> {
    pub fn new(page: &'a Page, payload: RecordPayload) -> Self {
        Record { page, payload }
    }

    pub fn page(&self) -> &'a Page {
        self.page
    }

    pub fn header(&self) -> &[u8] {
        &self.payload.header
    }

    pub fn offset(&self) -> usize {
        self.payload.offset
    }

    pub fn next(&self) -> Option<usize> {
        self.payload.next
    }

    pub fn key(&self) -> &[Field] {
        &self.payload.key
    }

    pub fn row(&self) -> Option<&[Field]> {
        match &self.payload.kind {
            RecordKind::Leaf { row } => Some(row),
            RecordKind::Internal { .. } => None,
        }
    }

    pub fn child_page_number(&self) -> Option<u32> {
        match self.payload.kind {
            RecordKind::Leaf { .. } => None,
            RecordKind::Internal { child_page_number } => Some(child_page_number),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.payload.kind, RecordKind::Leaf { .. })
    }

    /// Key and row fields by name.
    ///
    /// A row column sharing a key column's name replaces it. Well-formed
    /// schemas never do this, so debug builds assert against it; use
    /// [`Record::try_fields`] to get an error instead.
    pub fn fields(&self) -> BTreeMap<&str, &FieldValue> {
        let mut fields = BTreeMap::new();
        for field in self.all_fields() {
            let replaced = fields.insert(field.name.as_str(), &field.value);
            if replaced.is_some() {
                tracing::warn!(name = %field.name, offset = self.offset(), "row field overrides key field");
            }
            debug_assert!(
                replaced.is_none(),
                "field {} is present in both key and row",
                field.name
            );
        }
        fields
    }

    pub fn try_fields(&self) -> PageResult<BTreeMap<&str, &FieldValue>> {
        let mut fields = BTreeMap::new();
        for field in self.all_fields() {
            if fields.insert(field.name.as_str(), &field.value).is_some() {
                return Err(PageError::FieldCollision {
                    name: field.name.clone(),
                });
            }
        }
        Ok(fields)
    }

    pub fn describe_key(&self) -> String {
        describe_fields(self.key())
    }

    pub fn describe_row(&self) -> String {
        self.row().map(describe_fields).unwrap_or_default()
    }

    pub fn describe(&self) -> String {
        match &self.payload.kind {
            RecordKind::Internal { child_page_number } => {
                format!("({}) → #{}", self.describe_key(), child_page_number)
            }
            RecordKind::Leaf { row } => {
                format!("({}) → ({})", self.describe_key(), describe_fields(row))
            }
        }
    }

    fn all_fields(&self) -> impl Iterator<Item = &Field> {
        self.payload
            .key
            .iter()
            .chain(self.row().into_iter().flatten())
    }
}

fn describe_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
