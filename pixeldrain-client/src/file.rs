//! File operations
//!
//! Uploading, downloading, metadata lookup, thumbnails and deletion for
//! the `/file` and `/user/files` endpoints.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use tokio_util::io::ReaderStream;

use crate::download::{save_response, ProgressCallback};
use crate::error::{bytes_with_limit, PixeldrainError};
use crate::transport::{encode_path_segment, ApiRequest, Transport};
use crate::types::{CreatedResponse, FileInfoBatch, FileRecord, StatusMessage, UserFilesResponse};
use crate::validate::{require, require_dir};

/// Maximum number of ids per batch info lookup.
pub const MAX_INFO_BATCH: usize = 1000;

/// Client for the `/file` and `/user/files` endpoints.
#[derive(Debug, Clone)]
pub struct FileClient {
    transport: Transport,
}

impl FileClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// All files owned by the authenticated user.
    pub async fn user_files(&self) -> Result<Vec<FileRecord>, PixeldrainError> {
        let response: UserFilesResponse = self
            .transport
            .send_json(ApiRequest::get("/user/files").authenticated())
            .await?;
        Ok(response.files)
    }

    /// Upload a file with a raw-body `PUT /file/{name}`.
    ///
    /// The file is streamed from disk, so arbitrarily large uploads run
    /// in constant memory. Returns the id assigned by the server.
    pub async fn upload_file(
        &self,
        path: impl AsRef<Path>,
        name: &str,
    ) -> Result<String, PixeldrainError> {
        require(name, "Please insert a file name.")?;
        let file = tokio::fs::File::open(path.as_ref()).await?;
        let body = reqwest::Body::wrap_stream(ReaderStream::new(file));
        let response: CreatedResponse = self
            .transport
            .send_json(
                ApiRequest::put(format!("/file/{}", encode_path_segment(name)))
                    .authenticated()
                    .stream(body),
            )
            .await?;
        Ok(response.id)
    }

    /// Upload a file with a multipart `POST /file`.
    ///
    /// Same result as [`upload_file`](Self::upload_file); this form
    /// exists for proxies that cannot pass raw PUT bodies through.
    pub async fn upload_file_multipart(
        &self,
        path: impl AsRef<Path>,
        name: &str,
    ) -> Result<String, PixeldrainError> {
        require(name, "Please insert a file name.")?;
        let file = tokio::fs::File::open(path.as_ref()).await?;
        let part = Part::stream(reqwest::Body::wrap_stream(ReaderStream::new(file)))
            .file_name(name.to_string());
        let form = Form::new().text("name", name.to_string()).part("file", part);
        let response: CreatedResponse = self
            .transport
            .send_json(ApiRequest::post("/file").authenticated().multipart(form))
            .await?;
        Ok(response.id)
    }

    /// Download a file into `dest_dir`.
    ///
    /// The file name comes from the response's `Content-Disposition`
    /// header. `attachment` asks the server for a `?download` disposition
    /// instead of an inline one. The file's existence is verified with an
    /// info lookup before any bytes are transferred. Returns the path the
    /// file was written to.
    pub async fn download_file(
        &self,
        id: &str,
        dest_dir: impl AsRef<Path>,
        attachment: bool,
        progress: Option<&ProgressCallback>,
    ) -> Result<PathBuf, PixeldrainError> {
        require(id, "Please insert a file Id.")?;
        let dest_dir = dest_dir.as_ref();
        require_dir(dest_dir).await?;
        let info = self.file_info(id).await?;
        if !info.success {
            return Err(PixeldrainError::Validation("File not found.".to_string()));
        }

        let mut path = format!("/file/{}", encode_path_segment(id));
        if attachment {
            // bare presence flag; the server keys on the name alone
            path.push_str("?download");
        }
        let response = self.transport.send(ApiRequest::get(path)).await?;
        save_response(response, dest_dir, progress).await
    }

    /// Metadata for one file.
    pub async fn file_info(&self, id: &str) -> Result<FileRecord, PixeldrainError> {
        require(id, "Please insert a file Id.")?;
        self.transport
            .send_json(ApiRequest::get(format!(
                "/file/{}/info",
                encode_path_segment(id)
            )))
            .await
    }

    /// Metadata for up to [`MAX_INFO_BATCH`] files in one request.
    ///
    /// Results come back in the order the ids were given. Missing files
    /// are returned with `success: false` rather than failing the batch.
    /// A single id is fine too; the server answers with a lone object in
    /// that case, which comes back as a one-element vec.
    pub async fn file_info_many(&self, ids: &[&str]) -> Result<Vec<FileRecord>, PixeldrainError> {
        if ids.is_empty() {
            return Err(PixeldrainError::Validation(
                "Please insert a file Id.".to_string(),
            ));
        }
        if ids.len() > MAX_INFO_BATCH {
            return Err(PixeldrainError::Validation(format!(
                "A maximum of {MAX_INFO_BATCH} files can be requested at a time."
            )));
        }
        if ids.iter().any(|id| id.trim().is_empty()) {
            return Err(PixeldrainError::Validation(
                "Please insert a file Id.".to_string(),
            ));
        }
        let joined = ids
            .iter()
            .map(|id| encode_path_segment(id))
            .collect::<Vec<_>>()
            .join(",");
        let batch: FileInfoBatch = self
            .transport
            .send_json(ApiRequest::get(format!("/file/{joined}/info")))
            .await?;
        Ok(batch.into_vec())
    }

    /// Thumbnail image bytes for a file.
    ///
    /// Width and height must be equal, multiples of 16, within 16..=128.
    /// When the file has no thumbnail the server redirects to a generic
    /// image for its mime type, which is followed transparently, so the
    /// returned bytes are always an image.
    pub async fn thumbnail(
        &self,
        id: &str,
        width: u32,
        height: u32,
    ) -> Result<Bytes, PixeldrainError> {
        require(id, "Please insert a file Id.")?;
        validate_thumbnail_dimensions(width, height)?;
        let response = self
            .transport
            .send(
                ApiRequest::get(format!("/file/{}/thumbnail", encode_path_segment(id)))
                    .query("width", width.to_string())
                    .query("height", height.to_string()),
            )
            .await?;
        bytes_with_limit(response).await
    }

    /// Delete a file owned by the authenticated user.
    ///
    /// The file is looked up first; when the lookup reports it missing,
    /// no DELETE is dispatched.
    pub async fn delete_file(&self, id: &str) -> Result<StatusMessage, PixeldrainError> {
        require(id, "Please insert a file Id.")?;
        let info = self.file_info(id).await?;
        if !info.success {
            return Err(PixeldrainError::Validation("File not found.".to_string()));
        }
        self.transport
            .send_json(
                ApiRequest::delete(format!("/file/{}", encode_path_segment(id))).authenticated(),
            )
            .await
    }
}

fn validate_thumbnail_dimensions(width: u32, height: u32) -> Result<(), PixeldrainError> {
    if width != height {
        return Err(PixeldrainError::Validation(
            "The width and height must be equal.".to_string(),
        ));
    }
    if !(16..=128).contains(&width) {
        return Err(PixeldrainError::Validation(
            "The value must be between 16 and 128.".to_string(),
        ));
    }
    if width % 16 != 0 {
        return Err(PixeldrainError::Validation(
            "The width and height parameters need to be a multiple of 16.".to_string(),
        ));
    }
    Ok(())
}
