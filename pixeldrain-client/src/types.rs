//! Pixeldrain API Types
//!
//! Typed views of the JSON payloads the API exchanges. Unknown fields are
//! ignored and most fields fall back to their default when absent, so
//! server-side additions do not break deserialization.

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// File metadata from `/file/{id}/info` and `/user/files`.
#[derive(Debug, Clone, Deserialize)]
pub struct FileRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub downloads: u64,
    #[serde(default)]
    pub bandwidth_used: u64,
    #[serde(default)]
    pub date_upload: String,
    #[serde(default)]
    pub date_last_view: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub thumbnail_href: String,
    #[serde(default)]
    pub hash_sha256: String,
    #[serde(default)]
    pub can_edit: bool,
    /// Set to `false` by the server when the record describes a missing
    /// file. Listing endpoints omit the field, which means present.
    #[serde(default = "default_true")]
    pub success: bool,
}

/// List summary from `/user/lists`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListSummary {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date_created: String,
    #[serde(default)]
    pub file_count: u64,
    #[serde(default)]
    pub can_edit: bool,
}

/// Full list contents from `/list/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListDetail {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date_created: String,
    #[serde(default)]
    pub anonymous: bool,
    /// Files in list order.
    #[serde(default)]
    pub files: Vec<ListedFile>,
    #[serde(default = "default_true")]
    pub success: bool,
}

/// One file inside a [`ListDetail`].
#[derive(Debug, Clone, Deserialize)]
pub struct ListedFile {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub date_created: String,
    #[serde(default)]
    pub detail_href: String,
}

/// One file reference when creating a list. Slice order is list order.
#[derive(Debug, Clone, Serialize)]
pub struct ListFileEntry {
    pub id: String,
    pub description: String,
}

impl ListFileEntry {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
        }
    }
}

/// One API key session from `/user/session`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiKeySession {
    pub auth_key: String,
    #[serde(default)]
    pub app_name: String,
    #[serde(default)]
    pub user_agent: String,
    #[serde(default)]
    pub creation_ip_address: String,
    #[serde(default)]
    pub creation_time: String,
    #[serde(default)]
    pub last_used_ip_address: String,
    #[serde(default)]
    pub last_used_time: String,
}

/// Generic status payload. Returned by delete operations, and also the
/// shape of every error body the server emits.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusMessage {
    #[serde(default)]
    pub success: bool,
    /// Machine-readable error token, empty on success responses.
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub message: String,
}

/// Envelope of `/user/files`.
#[derive(Debug, Deserialize)]
pub(crate) struct UserFilesResponse {
    #[serde(default)]
    pub files: Vec<FileRecord>,
}

/// Envelope of `/user/lists`.
#[derive(Debug, Deserialize)]
pub(crate) struct UserListsResponse {
    #[serde(default)]
    pub lists: Vec<ListSummary>,
}

/// Response of `/file/{ids}/info`: a lone object for a single id, an
/// array when several ids were supplied.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum FileInfoBatch {
    Many(Vec<FileRecord>),
    One(FileRecord),
}

impl FileInfoBatch {
    pub fn into_vec(self) -> Vec<FileRecord> {
        match self {
            Self::Many(records) => records,
            Self::One(record) => vec![record],
        }
    }
}

/// Id assigned by an upload or list creation.
#[derive(Debug, Deserialize)]
pub(crate) struct CreatedResponse {
    pub id: String,
}

/// Login response data.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub auth_key: String,
}
