//! Document library: multipart uploads, listing and deletion.

use opsdesk_core::{build_query, with_query};
use opsdesk_domain::{ApiResponse, FileUpload, LibraryFile, LibraryFilters};
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::instrument;

use super::{discard, item_path};
use crate::api::{ApiClient, ApiError, MutationToasts};

const LIBRARY_PATH: &str = "/library";

/// Library endpoints. Uploads are multipart, so this does not go through
/// the JSON [`Resource`](super::Resource) contract.
#[derive(Clone)]
pub struct LibraryApi {
    client: ApiClient,
}

impl LibraryApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self, filters))]
    pub async fn list(&self, filters: &LibraryFilters) -> ApiResponse<Vec<LibraryFile>> {
        let failure = "Failed to load library files";
        match build_query(filters) {
            Ok(query) => self.client.read_list(&with_query(LIBRARY_PATH, &query), failure).await,
            Err(err) => {
                self.client.report_failure(&ApiError::Config(err.to_string()), failure);
                ApiResponse::failure()
            }
        }
    }

    /// Upload one file as `multipart/form-data` (`file`, optional `businessId`).
    #[instrument(skip(self, upload), fields(file_name = %upload.file_name, size = upload.bytes.len()))]
    pub async fn upload(&self, upload: FileUpload) -> Result<LibraryFile, ApiError> {
        let toasts = MutationToasts::new("File uploaded successfully", "Failed to upload file")
            .with_loading("Uploading...");
        let path = format!("{LIBRARY_PATH}/upload");
        let call = async {
            let form = upload_form(upload)?;
            self.client.upload(&path, form).await
        };
        self.client.mutate(&toasts, call).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let toasts = MutationToasts::new("File deleted successfully", "Failed to delete file");
        let path = item_path(LIBRARY_PATH, id);
        self.client.mutate(&toasts, discard(self.client.delete::<Value>(&path))).await
    }
}

fn upload_form(upload: FileUpload) -> Result<Form, ApiError> {
    let part = Part::bytes(upload.bytes)
        .file_name(upload.file_name)
        .mime_str(&upload.mime_type)
        .map_err(|err| ApiError::Config(format!("Invalid MIME type '{}': {err}", upload.mime_type)))?;

    let mut form = Form::new().part("file", part);
    if let Some(business_id) = upload.business_id {
        form = form.text("businessId", business_id);
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(mime_type: &str) -> FileUpload {
        FileUpload {
            file_name: "spec-sheet.pdf".into(),
            mime_type: mime_type.into(),
            bytes: b"%PDF-1.7".to_vec(),
            business_id: Some("b-1".into()),
        }
    }

    #[test]
    fn rejects_malformed_mime_type() {
        let err = upload_form(upload("not a mime")).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn builds_form_for_valid_upload() {
        assert!(upload_form(upload("application/pdf")).is_ok());
    }
}
