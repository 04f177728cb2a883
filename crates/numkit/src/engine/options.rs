//! Per-call options for `DataProcessor::process`.

/// Operation-specific parameters for a single `process` call.
///
/// No built-in operation takes parameters yet, so the struct carries no
/// fields. It is `#[non_exhaustive]`: options can be added without breaking
/// callers, and an option that does not exist cannot be passed at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub struct ProcessOptions {}

impl ProcessOptions {
    /// Create options with every parameter at its default.
    pub fn new() -> Self {
        Self {}
    }
}
