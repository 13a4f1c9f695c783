//! Multipart body construction
//!
//! Every endpoint that accepts files takes a JSON part plus zero or more
//! file parts. The field names are fixed by the backend.

use common::{ClientError, ClientResult};
use reqwest::multipart::{Form, Part};
use serde::Serialize;

/// Field name of the JSON part
pub const PROGRAM_FIELD: &str = "program";

/// Field name of the attached file
pub const ATTACHMENT_FIELD: &str = "attachmentFile";

/// A file to upload alongside a JSON payload
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    fn into_part(self) -> ClientResult<Part> {
        let part = Part::bytes(self.bytes).file_name(self.file_name);
        match self.content_type {
            Some(content_type) => part.mime_str(&content_type).map_err(|e| {
                ClientError::Payload(format!("Invalid content type {}: {}", content_type, e))
            }),
            None => Ok(part),
        }
    }
}

/// Build a multipart body from a JSON payload and named files
pub fn build_form<T, I>(field: &str, payload: &T, files: I) -> ClientResult<Form>
where
    T: Serialize + ?Sized,
    I: IntoIterator<Item = (String, Attachment)>,
{
    let json = serde_json::to_string(payload)
        .map_err(|e| ClientError::Payload(format!("Failed to encode {} part: {}", field, e)))?;
    let json_part = Part::text(json)
        .mime_str("application/json")
        .map_err(|e| ClientError::Payload(e.to_string()))?;

    let mut form = Form::new().part(field.to_string(), json_part);
    for (name, attachment) in files {
        form = form.part(name, attachment.into_part()?);
    }

    Ok(form)
}

/// Build the `program` + optional `attachmentFile` body used by program endpoints
pub fn program_form<T>(payload: &T, attachment: Option<Attachment>) -> ClientResult<Form>
where
    T: Serialize + ?Sized,
{
    build_form(
        PROGRAM_FIELD,
        payload,
        attachment.map(|file| (ATTACHMENT_FIELD.to_string(), file)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_has_a_boundary() {
        let form = program_form(&serde_json::json!({"title": "MOT 입문"}), None)
            .expect("form without attachment");
        assert!(!form.boundary().is_empty());
    }

    #[test]
    fn test_rejects_invalid_content_type() {
        let attachment = Attachment::new("syllabus.pdf", vec![1, 2, 3]).with_content_type("not a mime");
        let result = program_form(&serde_json::json!({}), Some(attachment));
        assert!(matches!(result, Err(ClientError::Payload(_))));
    }
}
