//! Static text coder.

use crate::strategy::CoderStrategy;
use markkit_core::{CoderConfiguration, CoderError, ConfigReader};

/// Emits user-supplied text verbatim
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoCodeCoder {
    pub user_text: String,
}

impl NoCodeCoder {
    pub const TYPE_NAME: &'static str = "No Code";
    pub const PLACEHOLDER: &'static str = "[Enter text...]";

    pub fn new(user_text: impl Into<String>) -> Self {
        Self {
            user_text: user_text.into(),
        }
    }
}

impl CoderStrategy for NoCodeCoder {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn generate_code(&mut self) -> String {
        self.user_text.clone()
    }

    fn preview(&self) -> String {
        if self.user_text.is_empty() {
            Self::PLACEHOLDER.to_string()
        } else {
            self.user_text.clone()
        }
    }

    fn configuration(&self) -> CoderConfiguration {
        CoderConfiguration::new().with("userText", self.user_text.as_str())
    }

    fn set_configuration(&mut self, config: &CoderConfiguration) -> Result<(), CoderError> {
        let mut reader = ConfigReader::new(config);
        if let Some(text) = reader.text("userText") {
            self.user_text = text.to_string();
        }
        reader.finish()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough() {
        let mut coder = NoCodeCoder::default();
        coder
            .set_configuration(&CoderConfiguration::new().with("userText", "ABC"))
            .unwrap();
        assert_eq!(coder.generate_code(), "ABC");
        assert_eq!(coder.generate_code(), "ABC");
        assert_eq!(coder.preview(), "ABC");
    }

    #[test]
    fn test_empty_preview_placeholder() {
        let mut coder = NoCodeCoder::default();
        assert_eq!(coder.preview(), "[Enter text...]");
        assert_eq!(coder.generate_code(), "");
    }

    #[test]
    fn test_wrong_type_is_skipped() {
        let mut coder = NoCodeCoder::new("keep");
        let err = coder
            .set_configuration(&CoderConfiguration::new().with("userText", 5))
            .unwrap_err();
        assert!(err.is_import());
        assert_eq!(coder.user_text, "keep");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut coder = NoCodeCoder::new("keep");
        coder
            .set_configuration(&CoderConfiguration::new().with("font", "Arial"))
            .unwrap();
        assert_eq!(coder.user_text, "keep");
    }
}
