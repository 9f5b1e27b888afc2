//! Request data adapter
//!
//! The engine only needs a `serde_json::Map`. [`RequestData`] is the seam for
//! transports: it exposes the parsed body fields and the uploaded file
//! descriptors of a request, which
//! [`Validation::validate`](crate::engine::Validation::validate) merges before
//! validating.
//!
//! Uploaded files enter the value tree as JSON objects (see
//! [`UploadedFile::to_value`]) and are recognised again by the
//! [`UploadedFileRule`](crate::rules::UploadedFileRule).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// UPLOADED FILE
// ============================================================================

/// Outcome of a file upload as reported by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadStatus {
    /// The file arrived completely.
    #[default]
    Ok,
    /// The file exceeds the server's size limit.
    IniSize,
    /// The file exceeds the form's size limit.
    FormSize,
    /// Only part of the file arrived.
    Partial,
    /// No file was sent.
    NoFile,
    /// The server has no temporary directory.
    NoTmpDir,
    /// The file could not be written.
    CantWrite,
    /// An extension stopped the upload.
    Extension,
}

/// Descriptor of an uploaded file.
///
/// `size` and `status` are mandatory in the serialized form and unknown keys
/// are rejected, which keeps arbitrary objects from passing as uploads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UploadedFile {
    /// File name sent by the client.
    #[serde(default)]
    pub client_filename: Option<String>,
    /// MIME type sent by the client.
    #[serde(default)]
    pub client_media_type: Option<String>,
    /// Size in bytes.
    pub size: u64,
    /// Upload outcome.
    pub status: UploadStatus,
}

impl UploadedFile {
    /// A successfully uploaded file.
    pub fn new(client_filename: impl Into<String>, client_media_type: impl Into<String>, size: u64) -> Self {
        Self {
            client_filename: Some(client_filename.into()),
            client_media_type: Some(client_media_type.into()),
            size,
            status: UploadStatus::Ok,
        }
    }

    /// Sets the upload outcome.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_status(mut self, status: UploadStatus) -> Self {
        self.status = status;
        self
    }

    /// The value-tree form of the descriptor.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    /// Reads a descriptor back from the value tree.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }
}

// ============================================================================
// REQUEST DATA
// ============================================================================

/// A request that can be validated.
pub trait RequestData {
    /// Parsed body fields.
    fn parsed_body(&self) -> Map<String, Value>;

    /// Uploaded files keyed by form field name.
    fn uploaded_files(&self) -> IndexMap<String, UploadedFile>;
}

/// An in-memory request, mostly for tests and non-HTTP callers.
///
/// # Examples
///
/// ```
/// use vigil_validator::request::{FormRequest, RequestData, UploadedFile};
/// use serde_json::json;
///
/// let request = FormRequest::from_value(json!({"title": "Hello"}))
///     .with_file("cover", UploadedFile::new("cover.jpg", "image/jpeg", 2048));
/// assert_eq!(request.parsed_body().len(), 1);
/// assert_eq!(request.uploaded_files().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormRequest {
    body: Map<String, Value>,
    files: IndexMap<String, UploadedFile>,
}

impl FormRequest {
    /// Creates a request from body fields.
    #[must_use]
    pub fn new(body: Map<String, Value>) -> Self {
        Self {
            body,
            files: IndexMap::new(),
        }
    }

    /// Creates a request from a JSON object; any other value gives an empty body.
    #[must_use]
    pub fn from_value(body: Value) -> Self {
        match body {
            Value::Object(map) => Self::new(map),
            _ => Self::default(),
        }
    }

    /// Adds an uploaded file.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_file(mut self, field: impl Into<String>, file: UploadedFile) -> Self {
        self.files.insert(field.into(), file);
        self
    }
}

impl RequestData for FormRequest {
    fn parsed_body(&self) -> Map<String, Value> {
        self.body.clone()
    }

    fn uploaded_files(&self) -> IndexMap<String, UploadedFile> {
        self.files.clone()
    }
}

/// An uploaded file descriptor that could not be put into the value tree.
#[derive(Debug, thiserror::Error)]
#[error("uploaded file `{field}` could not be converted: {source}")]
pub struct InputError {
    /// The field the file was uploaded under.
    pub field: String,
    /// The serializer failure.
    #[source]
    pub source: serde_json::Error,
}

/// Merges body fields and uploaded files into one input mapping.
///
/// Files win on a key collision. When `blank_strings_to_null` is set, every
/// top-level string that is empty after trimming becomes `null`; nested
/// values are left alone.
pub fn collect_input<R: RequestData + ?Sized>(
    request: &R,
    blank_strings_to_null: bool,
) -> Result<Map<String, Value>, InputError> {
    let mut data = request.parsed_body();
    for (field, file) in request.uploaded_files() {
        match file.to_value() {
            Ok(value) => {
                data.insert(field, value);
            }
            Err(source) => return Err(InputError { field, source }),
        }
    }
    if blank_strings_to_null {
        for value in data.values_mut() {
            if crate::foundation::value::is_blank_string(value) {
                *value = Value::Null;
            }
        }
    }
    Ok(data)
}
