//! Error type for placeholder substitution.

/// Error type for placeholder substitution.
///
/// All failures are fatal for the whole substitution call: a document
/// with one bad placeholder fails to build rather than rendering a
/// partially substituted page.
#[derive(Debug, thiserror::Error)]
pub enum PlaceholderError {
    /// A matched pseudo-tag did not parse to exactly one self-closing
    /// `Placeholder` element.
    #[error("Invalid placeholder element.")]
    InvalidElement,
    /// The gray palette does not define a shade needed for default
    /// colors.
    #[error("Gray palette has no shade {0}")]
    MissingShade(u16),
}
