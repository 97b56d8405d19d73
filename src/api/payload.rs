use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde_json::Value;

use crate::common::ApiError;

/// A file picked in a form, sent under a resource-specific field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

impl FilePart {
    pub fn new(field: impl Into<String>, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            field: field.into(),
            file_name: file_name.into(),
            mime: None,
            bytes,
        }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }
}

/// Request body of a save: JSON unless a file is attached.
#[derive(Debug, Clone)]
pub enum Payload {
    Json(Value),
    Multipart(MultipartBody),
}

impl Payload {
    pub fn document<T: Serialize>(doc: &T, files: Vec<FilePart>) -> Result<Self, ApiError> {
        let value = serde_json::to_value(doc)?;
        if files.is_empty() {
            Ok(Self::Json(value))
        } else {
            Ok(Self::Multipart(MultipartBody::from_value(value, files)))
        }
    }

    pub fn is_multipart(&self) -> bool {
        matches!(self, Self::Multipart(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct MultipartBody {
    pub fields: Vec<(String, String)>,
    pub files: Vec<FilePart>,
}

impl MultipartBody {
    /// Top-level keys become text fields. Strings go as-is, everything else
    /// (numbers, booleans, nested objects and arrays) as JSON text.
    pub fn from_value(value: Value, files: Vec<FilePart>) -> Self {
        let fields = match value {
            Value::Object(map) => map
                .into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| match v {
                    Value::String(s) => (k, s),
                    other => (k, other.to_string()),
                })
                .collect(),
            _ => Vec::new(),
        };
        Self { fields, files }
    }

    pub fn files_only(files: Vec<FilePart>) -> Self {
        Self {
            fields: Vec::new(),
            files,
        }
    }

    pub fn into_form(self) -> Result<Form, ApiError> {
        let mut form = Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        for file in self.files {
            let mut part = Part::bytes(file.bytes).file_name(file.file_name);
            if let Some(mime) = file.mime {
                part = part.mime_str(&mime)?;
            }
            form = form.part(file.field, part);
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn json_without_files() {
        let payload = Payload::document(&json!({"textEn": "Hi"}), vec![]).unwrap();
        assert!(!payload.is_multipart());
    }

    #[test]
    fn multipart_flattens_top_level_fields() {
        let payload = Payload::document(
            &json!({"titleEn": "Hi", "isActive": true, "order": 3, "skip": null, "rows": [1]}),
            vec![FilePart::new("image", "a.png", vec![1, 2, 3]).with_mime("image/png")],
        )
        .unwrap();

        let Payload::Multipart(body) = payload else {
            panic!("expected multipart");
        };
        let mut fields = body.fields.clone();
        fields.sort();
        assert_eq!(
            fields,
            vec![
                ("isActive".to_string(), "true".to_string()),
                ("order".to_string(), "3".to_string()),
                ("rows".to_string(), "[1]".to_string()),
                ("titleEn".to_string(), "Hi".to_string()),
            ]
        );
        assert_eq!(body.files[0].field, "image");
        assert!(body.into_form().is_ok());
    }
}
