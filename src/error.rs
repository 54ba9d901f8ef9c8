/// Errors raised at the boundaries of the crate.
///
/// Evaluating a curve never fails. These only come up when turning outside
/// data (a persisted ordinal, a name, a preview configuration) into the
/// crate's types.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EaseError {
    /// The ordinal does not name any curve.
    #[error("no easing curve has ordinal {0}")]
    UnknownOrdinal(u8),
    /// The name does not match any curve.
    #[error("unknown easing curve name: {0:?}")]
    UnknownName(String),
    /// A preview configuration value is out of range.
    #[error("invalid preview configuration: {0}")]
    InvalidConfig(&'static str),
}
