//! Streaming downloads
//!
//! Persists response bodies to disk chunk by chunk, reporting progress as
//! bytes arrive. File names come from the `Content-Disposition` response
//! header and are reduced to a bare file name before joining them onto
//! the destination directory.

use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use percent_encoding::percent_decode_str;
use reqwest::header::CONTENT_DISPOSITION;
use reqwest::Response;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::PixeldrainError;

/// Byte-level progress of a streaming transfer.
#[derive(Debug, Clone, Copy)]
pub struct DownloadProgress {
    /// Bytes written so far.
    pub received: u64,
    /// Total expected bytes, when the server sent a `Content-Length`.
    pub total: Option<u64>,
}

/// Callback observing [`DownloadProgress`] after every chunk.
pub type ProgressCallback = dyn Fn(DownloadProgress) + Send + Sync;

/// Stream a response body into `sink`, reporting progress after every
/// chunk. The sink is flushed at end of stream and released on every
/// exit path, including mid-transfer failures.
pub(crate) async fn copy_to_sink<W>(
    response: Response,
    sink: &mut W,
    progress: Option<&ProgressCallback>,
) -> Result<u64, PixeldrainError>
where
    W: AsyncWrite + Unpin,
{
    let total = response.content_length();
    let mut received = 0u64;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        sink.write_all(&chunk).await?;
        received += chunk.len() as u64;
        if let Some(callback) = progress {
            callback(DownloadProgress { received, total });
        }
    }
    sink.flush().await?;
    Ok(received)
}

/// Persist a response body under `dir`, named by the response's
/// `Content-Disposition` header.
pub(crate) async fn save_response(
    response: Response,
    dir: &Path,
    progress: Option<&ProgressCallback>,
) -> Result<PathBuf, PixeldrainError> {
    let file_name = response
        .headers()
        .get(CONTENT_DISPOSITION)
        .and_then(|value| value.to_str().ok())
        .and_then(content_disposition_filename)
        .ok_or_else(|| PixeldrainError::Remote {
            value: None,
            message: "The server response did not include a usable file name.".to_string(),
        })?;

    let path = dir.join(file_name);
    let mut file = tokio::fs::File::create(&path).await?;
    let written = copy_to_sink(response, &mut file, progress).await?;
    tracing::debug!(path = %path.display(), bytes = written, "download complete");
    Ok(path)
}

/// Extract the suggested file name from a `Content-Disposition` header.
///
/// Prefers the RFC 5987 `filename*` form over plain `filename`, wherever
/// it appears in the header. The result is reduced to its final path
/// component so a hostile header cannot escape the destination directory.
pub(crate) fn content_disposition_filename(header: &str) -> Option<String> {
    let mut plain = None;
    let mut extended = None;

    for part in header.split(';').skip(1) {
        let part = part.trim();
        if let Some(value) = part.strip_prefix("filename*=") {
            extended = decode_rfc5987(value);
        } else if let Some(value) = part.strip_prefix("filename=") {
            plain = Some(value.trim_matches('"').to_string());
        }
    }

    extended.or(plain).as_deref().and_then(sanitize_file_name)
}

/// Decode an RFC 5987 extended value: `charset'lang'percent-encoded`.
/// Only UTF-8 is supported.
fn decode_rfc5987(value: &str) -> Option<String> {
    let mut segments = value.splitn(3, '\'');
    let charset = segments.next()?;
    let _lang = segments.next()?;
    let encoded = segments.next()?;
    if !charset.eq_ignore_ascii_case("utf-8") {
        return None;
    }
    percent_decode_str(encoded)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}

/// Reduce a name to its final path component. Empty names and pure
/// directory references yield `None`.
fn sanitize_file_name(name: &str) -> Option<String> {
    let name = Path::new(name).file_name()?.to_str()?;
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}
