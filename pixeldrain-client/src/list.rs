//! File-list operations
//!
//! Listing, inspection, creation, zip download and deletion for the
//! `/list` and `/user/lists` endpoints.

use std::path::{Path, PathBuf};

use crate::download::{save_response, ProgressCallback};
use crate::error::PixeldrainError;
use crate::transport::{encode_path_segment, ApiRequest, Transport};
use crate::types::{
    CreatedResponse, ListDetail, ListFileEntry, ListSummary, StatusMessage, UserListsResponse,
};
use crate::validate::{require, require_dir};

/// Client for the `/list` and `/user/lists` endpoints.
#[derive(Debug, Clone)]
pub struct ListClient {
    transport: Transport,
}

impl ListClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// All lists owned by the authenticated user.
    pub async fn user_lists(&self) -> Result<Vec<ListSummary>, PixeldrainError> {
        let response: UserListsResponse = self
            .transport
            .send_json(ApiRequest::get("/user/lists").authenticated())
            .await?;
        Ok(response.lists)
    }

    /// A list and the files in it, in list order.
    pub async fn list_info(&self, id: &str) -> Result<ListDetail, PixeldrainError> {
        require(id, "Please insert a list Id.")?;
        self.transport
            .send_json(ApiRequest::get(format!("/list/{}", encode_path_segment(id))))
            .await
    }

    /// Create a list of files.
    ///
    /// The slice order becomes the list order. Anonymous lists hide the
    /// creator's name on the list page. The request is sent without
    /// credentials; anyone may create a list of public files. Returns the
    /// id of the created list.
    pub async fn create_list(
        &self,
        title: &str,
        files: &[ListFileEntry],
        anonymous: bool,
    ) -> Result<String, PixeldrainError> {
        require(title, "Please insert a title.")?;
        let body = serde_json::json!({
            "title": title,
            "anonymous": anonymous,
            "files": files,
        });
        let response: CreatedResponse = self
            .transport
            .send_json(ApiRequest::post("/list").json(body))
            .await?;
        Ok(response.id)
    }

    /// Download every file in a list as one zip archive.
    ///
    /// The archive is streamed into `dest_dir`, named by the response's
    /// `Content-Disposition` header. Returns the path it was written to.
    pub async fn download_list_zip(
        &self,
        id: &str,
        dest_dir: impl AsRef<Path>,
        progress: Option<&ProgressCallback>,
    ) -> Result<PathBuf, PixeldrainError> {
        require(id, "Please insert a list Id.")?;
        let dest_dir = dest_dir.as_ref();
        require_dir(dest_dir).await?;
        let response = self
            .transport
            .send(ApiRequest::get(format!(
                "/list/{}/zip",
                encode_path_segment(id)
            )))
            .await?;
        save_response(response, dest_dir, progress).await
    }

    /// Replace a list's title, contents or anonymous flag.
    ///
    /// The remote API offers this, the client does not support it yet.
    /// Always fails with [`PixeldrainError::NotImplemented`] without
    /// dispatching a request.
    pub async fn update_list(
        &self,
        id: &str,
        title: &str,
        files: &[ListFileEntry],
        anonymous: bool,
    ) -> Result<ListDetail, PixeldrainError> {
        let _ = (id, title, files, anonymous);
        Err(PixeldrainError::NotImplemented("list update"))
    }

    /// Delete a list owned by the authenticated user.
    pub async fn delete_list(&self, id: &str) -> Result<StatusMessage, PixeldrainError> {
        require(id, "Please insert a list Id.")?;
        self.transport
            .send_json(
                ApiRequest::delete(format!("/list/{}", encode_path_segment(id))).authenticated(),
            )
            .await
    }
}
