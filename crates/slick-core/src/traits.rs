//! Core abstraction traits for field access.

use crate::id::FieldId;

/// Read-only access to field data within a solver step.
///
/// Implemented by the field store to give stages read access to committed
/// field buffers. Returns `None` if the field is not readable in the
/// current context.
pub trait FieldReader {
    /// Read the data for a field as a flat f32 slice.
    ///
    /// Returns `None` if the field ID is invalid or not readable.
    fn read(&self, field: FieldId) -> Option<&[f32]>;
}

/// Mutable access to field data within a solver step.
///
/// Implemented by staging buffers to give stages write access to their
/// declared output fields. Returns `None` if the field is not writable
/// in the current context.
pub trait FieldWriter {
    /// Get a mutable slice for writing field data.
    ///
    /// Returns `None` if the field ID is invalid or not writable.
    fn write(&mut self, field: FieldId) -> Option<&mut [f32]>;
}
