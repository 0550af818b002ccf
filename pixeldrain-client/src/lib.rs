//! Async client for the [pixeldrain](https://pixeldrain.com) file-hosting
//! API.
//!
//! Covers file upload and download, file lists, user sessions and QR-code
//! generation. Uploads and downloads are streamed, so file size is bound
//! by disk, not memory.
//!
//! # Example
//!
//! ```no_run
//! use pixeldrain_client::PixeldrainClient;
//!
//! # async fn example() -> Result<(), pixeldrain_client::PixeldrainError> {
//! let client = PixeldrainClient::new("my-api-token");
//!
//! let id = client.upload_file("holiday.mp4", "holiday.mp4").await?;
//! let info = client.file_info(&id).await?;
//! println!("uploaded {} ({} bytes)", info.name, info.size);
//!
//! client.download_file(&id, ".", true, None).await?;
//! # Ok(())
//! # }
//! ```

// Shared error types and dispatch
pub mod error;
mod transport;
mod validate;

// Resource clients
pub mod download;
pub mod file;
pub mod list;
pub mod misc;
pub mod types;
pub mod user;

// Facade
pub mod client;

// Re-export the commonly used types for convenience
pub use client::PixeldrainClient;
pub use download::{DownloadProgress, ProgressCallback};
pub use error::{status_message, PixeldrainError, MAX_RESPONSE_SIZE};
pub use file::{FileClient, MAX_INFO_BATCH};
pub use list::ListClient;
pub use misc::MiscClient;
pub use transport::{Credential, DEFAULT_BASE_URL};
pub use types::{
    ApiKeySession, FileRecord, ListDetail, ListFileEntry, ListSummary, ListedFile, StatusMessage,
};
pub use user::{UserClient, DEFAULT_APP_NAME};
