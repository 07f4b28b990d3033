use reqwest::StatusCode;

use crate::client::{Client, Query};
use crate::errors::Result;
use crate::models::{CreateJobResponse, EncodingSettings, Id, JobDetails, JobProgress};

impl Client {
    /// Submit a new encoding job.
    pub async fn create_job(&self, settings: &EncodingSettings) -> Result<CreateJobResponse> {
        self.post_json("jobs", settings, StatusCode::CREATED).await
    }

    /// List the account's jobs, most recent first, as returned by one call.
    pub async fn list_jobs(&self) -> Result<Vec<JobDetails>> {
        self.get_json("jobs.json", Query::new()).await
    }

    /// Fetch a job with its input, outputs and thumbnails.
    pub async fn get_job_details(&self, id: Id) -> Result<JobDetails> {
        self.get_json(&format!("jobs/{id}.json"), Query::new()).await
    }

    /// Resubmit a failed or cancelled job.
    pub async fn resubmit_job(&self, id: Id) -> Result<()> {
        self.put_no_body(&format!("jobs/{id}/resubmit.json")).await
    }

    /// Cancel a job that has not finished yet.
    pub async fn cancel_job(&self, id: Id) -> Result<()> {
        self.put_no_body(&format!("jobs/{id}/cancel.json")).await
    }

    /// Signal that a live stream has ended so its job can finish.
    pub async fn finish_live_job(&self, id: Id) -> Result<()> {
        self.put_no_body(&format!("jobs/{id}/finish")).await
    }

    /// Fetch the progress of a job and each of its files.
    pub async fn get_job_progress(&self, id: Id) -> Result<JobProgress> {
        self.get_json(&format!("jobs/{id}/progress.json"), Query::new()).await
    }
}
