use std::ops::Deref;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Id;

/// Class given to upload failures that carry no class of their own.
pub const UPLOAD_ERROR_CLASS: &str = "UploadError";
/// Class given to failed files that carry no error fields at all.
pub const UNKNOWN_ERROR_CLASS: &str = "UnknownError";
const UNKNOWN_ERROR_MESSAGE: &str = "unknown error";

/// A video or audio asset: the input of a job or one of its outputs.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MediaFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Container format, e.g. "mpeg4".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_in_ms: Option<u64>,
    /// Channel count as reported by the API, e.g. "2".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_codec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_bitrate_in_kbps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_sample_rate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_codec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_bitrate_in_kbps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_bitrate_in_kbps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md5_checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size_bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_error_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<FixedOffset>>,
}

impl MediaFile {
    /// `state` is "failed".
    pub fn is_failed(&self) -> bool {
        self.state.as_deref() == Some("failed")
    }

    /// Collect every error this file reports.
    ///
    /// Encoding errors come first, then upload errors. A failed file that
    /// carries neither gets a single synthesized [`FileErrorKind::Unknown`]
    /// entry, so callers never need to inspect the raw fields.
    pub fn errors(&self) -> Vec<FileError> {
        let mut errors = Vec::new();

        if self.error_message.is_some() || self.error_class.is_some() {
            errors.push(FileError::new(
                FileErrorKind::Processing,
                self.error_class.clone(),
                self.error_message.clone(),
            ));
        }

        if self.upload_error_message.is_some() || self.upload_error_class.is_some() {
            let class = self
                .upload_error_class
                .clone()
                .unwrap_or_else(|| UPLOAD_ERROR_CLASS.to_string());
            errors.push(FileError::new(
                FileErrorKind::Upload,
                Some(class),
                self.upload_error_message.clone(),
            ));
        }

        if errors.is_empty() && self.is_failed() {
            errors.push(FileError {
                kind: FileErrorKind::Unknown,
                class: Some(UNKNOWN_ERROR_CLASS.to_string()),
                message: UNKNOWN_ERROR_MESSAGE.to_string(),
            });
        }

        errors
    }
}

/// Where a [`FileError`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileErrorKind {
    /// `error_message` / `error_class`.
    Processing,
    /// `upload_error_message` / `upload_error_class`.
    Upload,
    /// The file failed without saying why.
    Unknown,
}

/// One error reported by a [`MediaFile`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FileError {
    pub kind: FileErrorKind,
    pub class: Option<String>,
    pub message: String,
}

impl FileError {
    fn new(kind: FileErrorKind, class: Option<String>, message: Option<String>) -> Self {
        let message = message
            .or_else(|| class.clone())
            .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string());
        Self {
            kind,
            class,
            message,
        }
    }
}

/// `GET inputs/{id}.json`, and the input half of a notification.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct InputMediaFile {
    #[serde(flatten)]
    pub media: MediaFile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size_in_bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<Id>,
}

impl Deref for InputMediaFile {
    type Target = MediaFile;

    fn deref(&self) -> &MediaFile {
        &self.media
    }
}

/// `GET outputs/{id}.json`, and the outputs of a notification.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OutputMediaFile {
    #[serde(flatten)]
    pub media: MediaFile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size_in_bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<Id>,
}

impl Deref for OutputMediaFile {
    type Target = MediaFile;

    fn deref(&self) -> &MediaFile {
        &self.media
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Thumbnail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ThumbnailImage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

/// One rendered image of a [`Thumbnail`] set.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ThumbnailImage {
    /// e.g. "160x120".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size_bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
