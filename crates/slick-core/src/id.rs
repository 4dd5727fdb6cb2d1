//! Strongly-typed identifiers.

use std::fmt;

/// Identifies a field within a field store.
///
/// Fields are registered at module setup and assigned sequential IDs.
/// `FieldId(n)` corresponds to the n-th registered field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub u32);

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for FieldId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Monotonically increasing solver step counter.
///
/// Incremented by the host each time the simulation advances one step.
/// `StepId(0)` is the setup step; the transport solver has not produced
/// meaningful fraction fields before `StepId(2)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub u64);

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_plain_number() {
        assert_eq!(FieldId(7).to_string(), "7");
        assert_eq!(StepId(42).to_string(), "42");
    }

    #[test]
    fn from_conversions() {
        assert_eq!(FieldId::from(3), FieldId(3));
        assert_eq!(StepId::from(9), StepId(9));
    }
}
