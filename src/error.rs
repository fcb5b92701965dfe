//! Error types for checked slot access.

/// The error type returned by checked access to an empty slot.
///
/// This is a contract-violation signal, not a recoverable runtime
/// condition: the caller asked for a value that was never installed (or was
/// already reset away). It is only ever produced by [`Slot::value`] and
/// [`Slot::value_mut`]; the unchecked accessors perform no validation and
/// never report it.
///
/// [`Slot::value`]: crate::Slot::value
/// [`Slot::value_mut`]: crate::Slot::value_mut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyAccessError;

impl core::fmt::Display for EmptyAccessError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("access to empty slot")
    }
}

impl std::error::Error for EmptyAccessError {}
