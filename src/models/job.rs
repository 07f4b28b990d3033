use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::media::{MediaFile, Thumbnail};
use super::Id;

/// One encoding task tracked by the remote service.
///
/// `state` is passed through as the API reports it: "pending", "waiting",
/// "processing", "finished", "failed" or "cancelled".
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Job {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Opaque string echoed back from job creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_through: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_media_file: Option<MediaFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_media_files: Option<Vec<MediaFile>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<Vec<Thumbnail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<FixedOffset>>,
}

impl Job {
    pub fn is_finished(&self) -> bool {
        self.state.as_deref() == Some("finished")
    }

    pub fn is_failed(&self) -> bool {
        self.state.as_deref() == Some("failed")
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.as_deref() == Some("cancelled")
    }

    /// Terminal = won't change anymore (finished, failed or cancelled).
    pub fn is_terminal(&self) -> bool {
        self.is_finished() || self.is_failed() || self.is_cancelled()
    }
}

/// The `{"job": {...}}` envelope used by the list and detail endpoints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct JobDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<Job>,
}

/// Body of `POST jobs`.
///
/// Only `input` is required by the API; everything else falls back to the
/// account defaults when left unset.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EncodingSettings {
    /// URL of the source file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<OutputSettings>,
    /// Processing region, e.g. "us", "europe".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Integration-mode job: free, watermarked, limited to short clips.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_connections: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_through: Option<String>,
    /// Validate the request without creating a job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mock: Option<bool>,
    /// Report grouping the job's minutes are counted under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouping: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_stream: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
}

/// One rendition requested in [`EncodingSettings::outputs`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OutputSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Destination URL (s3://, ftp://, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// "standard", "segmented", "playlist" or "transfer-only".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub output_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_codec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_codec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// 1 (worst) to 5 (best).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<u8>,
    /// Kbps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_bitrate: Option<u32>,
    /// Kbps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_bitrate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    /// Webhook URLs or email addresses notified when this output finishes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notifications: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub thumbnails: Vec<ThumbnailSettings>,
    /// Extra headers set on the uploaded object.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
}

/// A set of thumbnails to render for an output.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ThumbnailSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    /// Seconds between thumbnails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<f64>,
    /// e.g. "160x120".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// "png" or "jpg".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// Response of `POST jobs`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CreateJobResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<CreatedOutput>>,
}

/// An output created alongside a job.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CreatedOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
