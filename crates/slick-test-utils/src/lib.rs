//! Test utilities and mock types for slick development.
//!
//! Provides mock implementations of the field access traits
//! ([`FieldReader`], [`FieldWriter`]) plus small stage fixtures for
//! pipeline tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashMap;

use slick_core::{FieldId, FieldReader, FieldWriter};

mod fixtures;

pub use fixtures::{ConstStage, FailingStage, IdentityStage};

/// Mock implementation of [`FieldReader`].
///
/// Backed by a `HashMap<FieldId, Vec<f32>>` for flexible test setup.
/// Pre-populate fields with [`set_field`](MockFieldReader::set_field)
/// before passing to code under test.
pub struct MockFieldReader {
    fields: HashMap<FieldId, Vec<f32>>,
}

impl MockFieldReader {
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Pre-populate a field with data for testing.
    pub fn set_field(&mut self, field: FieldId, data: Vec<f32>) {
        self.fields.insert(field, data);
    }
}

impl Default for MockFieldReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldReader for MockFieldReader {
    fn read(&self, field: FieldId) -> Option<&[f32]> {
        self.fields.get(&field).map(|v| v.as_slice())
    }
}

/// Mock implementation of [`FieldWriter`].
///
/// Pre-allocate field buffers with [`add_field`](MockFieldWriter::add_field)
/// (zero-initialized) or seed them with
/// [`seed_field`](MockFieldWriter::seed_field) to emulate incremental write
/// mode, then inspect results with [`get_field`](MockFieldWriter::get_field).
pub struct MockFieldWriter {
    fields: HashMap<FieldId, Vec<f32>>,
}

impl MockFieldWriter {
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Pre-allocate a field buffer with the given size, initialized to zero.
    pub fn add_field(&mut self, field: FieldId, size: usize) {
        self.fields.insert(field, vec![0.0; size]);
    }

    /// Pre-populate a field buffer with data, as the runner does for
    /// incremental writes.
    pub fn seed_field(&mut self, field: FieldId, data: Vec<f32>) {
        self.fields.insert(field, data);
    }

    /// Read back the current field data for test assertions.
    pub fn get_field(&self, field: FieldId) -> Option<&[f32]> {
        self.fields.get(&field).map(|v| v.as_slice())
    }
}

impl Default for MockFieldWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldWriter for MockFieldWriter {
    fn write(&mut self, field: FieldId) -> Option<&mut [f32]> {
        self.fields.get_mut(&field).map(|v| v.as_mut_slice())
    }
}
