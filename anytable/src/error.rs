use miette::Diagnostic;
use thiserror::Error;

/// Errors raised by table access.
///
/// The operations in [`crate::ops`] do not validate the callbacks they are
/// handed: a predicate or fold function that panics propagates that panic to
/// the caller untouched.
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum Error {
    /// A write was attempted through a [`crate::RawView`].
    #[error("attempt to update a read-only table")]
    #[diagnostic(code(anytable::read_only))]
    ReadOnly,

    /// `nil` can never be used as a table index.
    #[error("table index is nil")]
    #[diagnostic(code(anytable::nil_key))]
    NilKey,

    /// NaN can never be used as a table index.
    #[error("table index is NaN")]
    #[diagnostic(code(anytable::nan_key))]
    NanKey,

    /// The class fallback chain was followed for too many hops.
    #[error("fallback chain longer than {hops} hops; possibly a loop")]
    #[diagnostic(
        code(anytable::fallback_loop),
        help("a class fallback table eventually points back to itself")
    )]
    FallbackLoop { hops: usize },
}
