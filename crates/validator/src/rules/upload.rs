//! Uploaded file rule
//!
//! Checks the descriptors that [`collect_input`](crate::request::collect_input)
//! places in the value tree.

use crate::foundation::{ConfigurationError, Message, Rule, RuleFailure, Value};
use crate::request::{UploadStatus, UploadedFile};

/// Accepts an upload that completed, fits the size limit and has an allowed
/// MIME type.
///
/// Checks run in that order and the first failing one is reported.
///
/// # Examples
///
/// ```
/// use vigil_validator::foundation::Rule;
/// use vigil_validator::request::UploadedFile;
/// use vigil_validator::rules::uploaded_file;
///
/// let avatar = uploaded_file(Some(1024), ["image/png", "image/jpeg"]);
/// let file = UploadedFile::new("me.png", "image/png", 4096).to_value()?;
/// assert_eq!(
///     avatar.validate(&file).unwrap_err().message(),
///     Some("The file is too large (4096 bytes). Allowed maximum size is 1024 bytes.")
/// );
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFileRule {
    max_size: Option<u64>,
    mime_types: Vec<String>,
    invalid_message: Message,
    error_message: Message,
    max_size_message: Message,
    mime_types_message: Message,
}

impl UploadedFileRule {
    /// Template for values that are not upload descriptors.
    pub const INVALID_MESSAGE: &'static str = "{{ value }} is not a valid uploaded file.";
    /// Template for uploads that did not complete.
    pub const ERROR_MESSAGE: &'static str = "An error occurred while uploading the file.";
    /// Template for files over the size limit.
    pub const MAX_SIZE_MESSAGE: &'static str =
        "The file is too large ({{ size }} bytes). Allowed maximum size is {{ limit }} bytes.";
    /// Template for files with a MIME type outside the allow-list.
    pub const MIME_TYPES_MESSAGE: &'static str =
        "The mime type of the file is invalid ({{ type }}). Allowed mime types are {{ types }}.";

    /// Creates the rule.
    pub fn new<I>(max_size: Option<u64>, mime_types: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            max_size,
            mime_types: mime_types.into_iter().map(Into::into).collect(),
            invalid_message: Message::from_static(Self::INVALID_MESSAGE),
            error_message: Message::from_static(Self::ERROR_MESSAGE),
            max_size_message: Message::from_static(Self::MAX_SIZE_MESSAGE),
            mime_types_message: Message::from_static(Self::MIME_TYPES_MESSAGE),
        }
    }

    /// Replaces the "not an upload" message.
    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, template: impl Into<String>) -> Self {
        self.invalid_message = Message::custom(template);
        self
    }

    /// Replaces the "upload failed" message.
    #[must_use = "builder methods must be chained or built"]
    pub fn error_message(mut self, template: impl Into<String>) -> Self {
        self.error_message = Message::custom(template);
        self
    }

    /// Replaces the "too large" message.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_size_message(mut self, template: impl Into<String>) -> Self {
        self.max_size_message = Message::custom(template);
        self
    }

    /// Replaces the "wrong MIME type" message.
    #[must_use = "builder methods must be chained or built"]
    pub fn mime_types_message(mut self, template: impl Into<String>) -> Self {
        self.mime_types_message = Message::custom(template);
        self
    }
}

impl Rule for UploadedFileRule {
    fn name(&self) -> &'static str {
        "uploaded_file"
    }

    fn validate(&self, value: &Value) -> Result<(), RuleFailure> {
        if value.is_null() {
            return Ok(());
        }
        let Some(file) = UploadedFile::from_value(value) else {
            return Err(self.invalid_message.failure(value, &[]));
        };

        if file.status != UploadStatus::Ok {
            return Err(self.error_message.failure(value, &[]));
        }

        if let Some(limit) = self.max_size.filter(|&limit| file.size > limit) {
            return Err(self.max_size_message.failure(
                value,
                &[("size", &file.size.to_string()), ("limit", &limit.to_string())],
            ));
        }

        let media_type = file.client_media_type.as_deref().unwrap_or_default();
        if !self.mime_types.iter().any(|allowed| allowed == media_type) {
            return Err(self.mime_types_message.failure(
                value,
                &[("type", media_type), ("types", &self.mime_types.join(", "))],
            ));
        }

        Ok(())
    }

    fn verify(&self) -> Result<(), ConfigurationError> {
        if self.max_size == Some(0) {
            return Err(ConfigurationError::invalid_rule(
                self.name(),
                "maximum size must be greater than zero",
            ));
        }
        if self.mime_types.is_empty() {
            return Err(ConfigurationError::invalid_rule(
                self.name(),
                "at least one mime type is required",
            ));
        }
        Ok(())
    }
}

/// Creates an [`UploadedFileRule`]; `None` disables the size limit.
pub fn uploaded_file<I>(max_size: Option<u64>, mime_types: I) -> UploadedFileRule
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    UploadedFileRule::new(max_size, mime_types)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn images() -> UploadedFileRule {
        uploaded_file(Some(1000), ["image/png", "image/jpeg"])
    }

    #[test]
    fn accepts_a_valid_upload() {
        let file = UploadedFile::new("a.png", "image/png", 1000).to_value().unwrap();
        assert!(images().validate(&file).is_ok());
        assert!(images().validate(&Value::Null).is_ok());
    }

    #[test]
    fn rejects_non_descriptors() {
        let failure = images().validate(&json!("a.png")).unwrap_err();
        assert_eq!(failure.message(), Some("a.png is not a valid uploaded file."));
    }

    #[test]
    fn rejects_failed_uploads() {
        let file = UploadedFile::new("a.png", "image/png", 10)
            .with_status(UploadStatus::Partial)
            .to_value().unwrap();
        assert_eq!(
            images().validate(&file).unwrap_err().message(),
            Some("An error occurred while uploading the file.")
        );
    }

    #[test]
    fn rejects_wrong_mime_type() {
        let file = UploadedFile::new("a.gif", "image/gif", 10).to_value().unwrap();
        assert_eq!(
            images().validate(&file).unwrap_err().message(),
            Some(
                "The mime type of the file is invalid (image/gif). Allowed mime types are image/png, image/jpeg."
            )
        );
    }

    #[test]
    fn size_limit_is_optional() {
        let rule = uploaded_file(None, ["application/pdf"]);
        let file = UploadedFile::new("big.pdf", "application/pdf", u64::MAX).to_value().unwrap();
        assert!(rule.validate(&file).is_ok());
    }

    #[test]
    fn configuration_errors() {
        assert!(uploaded_file(Some(0), ["image/png"]).verify().is_err());
        assert!(uploaded_file(None, Vec::<String>::new()).verify().is_err());
        assert!(images().verify().is_ok());
    }

    #[test]
    fn custom_messages() {
        let rule = images().error_message("upload broke").max_size_message("{{ size }} > {{ limit }}");
        let partial = UploadedFile::new("a.png", "image/png", 5)
            .with_status(UploadStatus::NoFile)
            .to_value().unwrap();
        let big = UploadedFile::new("a.png", "image/png", 5000).to_value().unwrap();
        assert_eq!(rule.validate(&partial).unwrap_err().message(), Some("upload broke"));
        assert_eq!(rule.validate(&big).unwrap_err().message(), Some("5000 > 1000"));
    }
}
