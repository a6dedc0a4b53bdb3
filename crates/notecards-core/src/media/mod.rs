//! Image attachment encoding.
//!
//! Images are not uploaded anywhere: the selected file is embedded in the
//! note itself as a base64 `data:` URL.

use std::path::Path;

use base64::prelude::{Engine as _, BASE64_STANDARD};

use crate::error::Result;

const DATA_URL_PREFIX: &str = "data:";

/// Guess the MIME type of a selected file from its extension, falling back
/// to `application/octet-stream`.
#[must_use]
pub fn infer_image_mime_type(file_name: &str) -> String {
    mime_guess::from_path(file_name)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Encode raw bytes as `data:{mime_type};base64,{payload}`.
#[must_use]
pub fn encode_data_url(mime_type: &str, bytes: &[u8]) -> String {
    let encoded = BASE64_STANDARD.encode(bytes);
    format!("{DATA_URL_PREFIX}{mime_type};base64,{encoded}")
}

/// Encode a selected file's bytes, inferring the MIME type from its name.
#[must_use]
pub fn image_data_url(file_name: &str, bytes: &[u8]) -> String {
    encode_data_url(&infer_image_mime_type(file_name), bytes)
}

/// Read a local file and encode it as a data URL.
///
/// No size or type checks are applied.
pub async fn read_image_data_url(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    tracing::debug!("Encoding {} ({} bytes) as data URL", file_name, bytes.len());
    Ok(image_data_url(&file_name, &bytes))
}

#[must_use]
pub fn is_data_url(value: &str) -> bool {
    value.starts_with(DATA_URL_PREFIX)
}
