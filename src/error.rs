use thiserror::Error;

/// Faults raised by an inspected value while it is being described.
///
/// The renderer never propagates these; it turns them into an
/// inspection-error placeholder where the faulting value would have been.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InspectError {
    #[error("field `{field}` could not be read: {reason}")]
    FieldAccess { field: String, reason: String },

    #[error("result cursor failed: {0}")]
    Cursor(String),
}

impl InspectError {
    pub fn field_access(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::FieldAccess {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
