/// Failures of binding and assembly.
///
/// They travel inside [`crate::Error`], recover the kind with
/// `error.downcast_ref::<BindError>()`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    /// Parameter index outside `1..=slots`.
    #[error("Parameter index {index} is out of range, the statement has {slots} parameters")]
    IndexOutOfRange { index: u64, slots: usize },

    /// Placeholder that was never bound.
    #[error("Parameter {index} was never bound")]
    MissingBinding { index: usize },

    /// Bound value with no literal representation.
    #[error("Unsupported parameter type `{type_name}`")]
    UnsupportedType { type_name: &'static str },

    /// Template and parameter store disagree on the number of placeholders.
    #[error("Template has {placeholders} placeholders but {slots} parameter slots were provided")]
    SlotCountMismatch { placeholders: usize, slots: usize },

    /// A template needs at least one fragment, even when it is empty.
    #[error("Template must contain at least one fragment")]
    EmptyTemplate,
}
