//! Miscellaneous operations
//!
//! QR-code generation from the `/misc` endpoints.

use std::path::{Path, PathBuf};

use crate::download::{save_response, ProgressCallback};
use crate::error::PixeldrainError;
use crate::transport::{ApiRequest, Transport};
use crate::validate::{require, require_dir};

/// Client for the `/misc` endpoints.
#[derive(Debug, Clone)]
pub struct MiscClient {
    transport: Transport,
}

impl MiscClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Render `text` as a QR-code image saved under `dest_dir`.
    ///
    /// The text is carried in a query parameter and percent-encoded, so
    /// URLs with `&` or unicode survive the round trip. Returns the path
    /// the image was written to.
    pub async fn generate_qr_code(
        &self,
        text: &str,
        dest_dir: impl AsRef<Path>,
        progress: Option<&ProgressCallback>,
    ) -> Result<PathBuf, PixeldrainError> {
        require(text, "Please insert a text to encode.")?;
        let dest_dir = dest_dir.as_ref();
        require_dir(dest_dir).await?;
        let response = self
            .transport
            .send(ApiRequest::get("/misc/qr").query("text", text))
            .await?;
        save_response(response, dest_dir, progress).await
    }
}
