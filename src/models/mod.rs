//! Request and response records for the Zencoder API.
//!
//! Every field the API may omit is an `Option`, so an absent field is never
//! mistaken for a zero value. Lists the API may omit decode as empty.

mod account;
mod job;
mod media;
mod notification;
mod progress;
mod report;

/// Identifier of jobs, inputs, outputs and thumbnails.
pub type Id = i64;

pub use account::{AccountDetails, CreateAccountRequest, CreateAccountResponse};
pub use job::{
    CreateJobResponse, CreatedOutput, EncodingSettings, Job, JobDetails, OutputSettings,
    ThumbnailSettings,
};
pub use media::{
    FileError, FileErrorKind, InputMediaFile, MediaFile, OutputMediaFile, Thumbnail,
    ThumbnailImage, UNKNOWN_ERROR_CLASS, UPLOAD_ERROR_CLASS,
};
pub use notification::Notification;
pub use progress::{FileProgress, JobProgress};
pub use report::{
    CombinedStatistics, CombinedTotals, CombinedUsage, LiveStatistic, LiveTotalStatistics,
    LiveUsage, ReportSettings, VodStatistic, VodTotalStatistics, VodUsage,
};
