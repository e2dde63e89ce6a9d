//! Domain errors for the Yggdrasil settings registry.

use thiserror::Error;

/// Errors raised when parsing line codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineCodeError {
    /// Not one of L, G, T, M
    #[error("Unknown line tag: '{0}'. Must be one of: L, G, T, M")]
    UnknownTag(String),

    /// Not one of AC, CN, DB, LN, SY
    #[error("Unknown line attribute: '{0}'. Must be one of: AC, CN, DB, LN, SY")]
    UnknownAttr(String),
}

/// Raised when a name does not match any registry key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Unknown setting: '{0}'. Must be one of: DEBUG, INTENT_LIB, XIGT_LIB, SLEIPNIR_LIB, USER_DB, LINE_TAGS, LINE_ATTRS"
)]
pub struct SettingKeyError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_include_offending_value() {
        assert!(LineCodeError::UnknownTag("X".into()).to_string().contains("'X'"));
        assert!(LineCodeError::UnknownAttr("QQ".into()).to_string().contains("'QQ'"));
        assert!(SettingKeyError("PORT".into()).to_string().contains("'PORT'"));
    }
}
