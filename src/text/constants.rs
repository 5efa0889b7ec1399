//! Tag length limits

/// Empty text value
pub const EMPTY: &str = "";

/// Maximum length of a produced tag, in chars
pub const MAX_TAG_LENGTH: usize = 23;

/// Maximum raw length of a tag prefix, in chars
pub const MAX_PREFIX_LENGTH: usize = 5;
