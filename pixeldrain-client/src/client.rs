//! Pixeldrain client facade
//!
//! One type aggregating every operation of the resource clients. Build
//! one instance per credential and pass it (or clone it, cheaply) to
//! wherever requests are made; instances with different credentials are
//! fully independent.

use std::path::{Path, PathBuf};

use bytes::Bytes;

use crate::download::ProgressCallback;
use crate::error::PixeldrainError;
use crate::file::FileClient;
use crate::list::ListClient;
use crate::misc::MiscClient;
use crate::transport::{Credential, Transport, DEFAULT_BASE_URL};
use crate::types::{
    ApiKeySession, FileRecord, ListDetail, ListFileEntry, ListSummary, StatusMessage,
};
use crate::user::UserClient;

/// Pixeldrain API client.
///
/// # Example
///
/// ```no_run
/// use pixeldrain_client::PixeldrainClient;
///
/// # async fn example() -> Result<(), pixeldrain_client::PixeldrainError> {
/// let client = PixeldrainClient::new("my-api-token");
/// for file in client.user_files().await? {
///     println!("{} {} bytes", file.id, file.size);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PixeldrainClient {
    files: FileClient,
    lists: ListClient,
    user: UserClient,
    misc: MiscClient,
}

impl PixeldrainClient {
    /// Client for the production endpoint.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    /// Client for an explicit endpoint. Primarily a testing seam.
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        let transport = Transport::new(Credential::new(token), base_url);
        Self {
            files: FileClient::new(transport.clone()),
            lists: ListClient::new(transport.clone()),
            user: UserClient::new(transport.clone()),
            misc: MiscClient::new(transport),
        }
    }

    /// File operations as a narrower handle.
    pub fn files(&self) -> &FileClient {
        &self.files
    }

    /// List operations as a narrower handle.
    pub fn lists(&self) -> &ListClient {
        &self.lists
    }

    /// User and session operations as a narrower handle.
    pub fn user(&self) -> &UserClient {
        &self.user
    }

    /// Miscellaneous operations as a narrower handle.
    pub fn misc(&self) -> &MiscClient {
        &self.misc
    }

    /// All files owned by the authenticated user.
    pub async fn user_files(&self) -> Result<Vec<FileRecord>, PixeldrainError> {
        self.files.user_files().await
    }

    /// Upload a file with a raw-body PUT. See [`FileClient::upload_file`].
    pub async fn upload_file(
        &self,
        path: impl AsRef<Path>,
        name: &str,
    ) -> Result<String, PixeldrainError> {
        self.files.upload_file(path, name).await
    }

    /// Upload a file as a multipart form. See
    /// [`FileClient::upload_file_multipart`].
    pub async fn upload_file_multipart(
        &self,
        path: impl AsRef<Path>,
        name: &str,
    ) -> Result<String, PixeldrainError> {
        self.files.upload_file_multipart(path, name).await
    }

    /// Download a file into a directory. See [`FileClient::download_file`].
    pub async fn download_file(
        &self,
        id: &str,
        dest_dir: impl AsRef<Path>,
        attachment: bool,
        progress: Option<&ProgressCallback>,
    ) -> Result<PathBuf, PixeldrainError> {
        self.files.download_file(id, dest_dir, attachment, progress).await
    }

    /// Metadata for one file.
    pub async fn file_info(&self, id: &str) -> Result<FileRecord, PixeldrainError> {
        self.files.file_info(id).await
    }

    /// Metadata for several files in one request. See
    /// [`FileClient::file_info_many`].
    pub async fn file_info_many(&self, ids: &[&str]) -> Result<Vec<FileRecord>, PixeldrainError> {
        self.files.file_info_many(ids).await
    }

    /// Thumbnail image bytes. See [`FileClient::thumbnail`].
    pub async fn thumbnail(
        &self,
        id: &str,
        width: u32,
        height: u32,
    ) -> Result<Bytes, PixeldrainError> {
        self.files.thumbnail(id, width, height).await
    }

    /// Delete a file.
    pub async fn delete_file(&self, id: &str) -> Result<StatusMessage, PixeldrainError> {
        self.files.delete_file(id).await
    }

    /// All lists owned by the authenticated user.
    pub async fn user_lists(&self) -> Result<Vec<ListSummary>, PixeldrainError> {
        self.lists.user_lists().await
    }

    /// A list and the files in it.
    pub async fn list_info(&self, id: &str) -> Result<ListDetail, PixeldrainError> {
        self.lists.list_info(id).await
    }

    /// Create a list of files. See [`ListClient::create_list`].
    pub async fn create_list(
        &self,
        title: &str,
        files: &[ListFileEntry],
        anonymous: bool,
    ) -> Result<String, PixeldrainError> {
        self.lists.create_list(title, files, anonymous).await
    }

    /// Download a whole list as a zip archive. See
    /// [`ListClient::download_list_zip`].
    pub async fn download_list_zip(
        &self,
        id: &str,
        dest_dir: impl AsRef<Path>,
        progress: Option<&ProgressCallback>,
    ) -> Result<PathBuf, PixeldrainError> {
        self.lists.download_list_zip(id, dest_dir, progress).await
    }

    /// Replace a list's contents. Not supported yet; see
    /// [`ListClient::update_list`].
    pub async fn update_list(
        &self,
        id: &str,
        title: &str,
        files: &[ListFileEntry],
        anonymous: bool,
    ) -> Result<ListDetail, PixeldrainError> {
        self.lists.update_list(id, title, files, anonymous).await
    }

    /// Delete a list.
    pub async fn delete_list(&self, id: &str) -> Result<StatusMessage, PixeldrainError> {
        self.lists.delete_list(id).await
    }

    /// Trade a username and password for a fresh API token. See
    /// [`UserClient::request_new_token`].
    pub async fn request_new_token(
        &self,
        username: &str,
        password: &str,
        app_name: Option<&str>,
    ) -> Result<String, PixeldrainError> {
        self.user.request_new_token(username, password, app_name).await
    }

    /// All API-key sessions of the authenticated user.
    pub async fn api_keys(&self) -> Result<Vec<ApiKeySession>, PixeldrainError> {
        self.user.api_keys().await
    }

    /// Revoke an API key, authenticating as that key. See
    /// [`UserClient::revoke_api_key`].
    pub async fn revoke_api_key(&self, api_key: &str) -> Result<StatusMessage, PixeldrainError> {
        self.user.revoke_api_key(api_key).await
    }

    /// Render text as a QR-code image saved to disk. See
    /// [`MiscClient::generate_qr_code`].
    pub async fn generate_qr_code(
        &self,
        text: &str,
        dest_dir: impl AsRef<Path>,
        progress: Option<&ProgressCallback>,
    ) -> Result<PathBuf, PixeldrainError> {
        self.misc.generate_qr_code(text, dest_dir, progress).await
    }
}
