use serde::de::DeserializeOwned;

use crate::client::Client;
use crate::errors::Result;
use crate::models::{CombinedUsage, LiveUsage, ReportSettings, VodUsage};

impl Client {
    /// Minutes encoded for on-demand jobs.
    pub async fn get_vod_usage(&self, settings: Option<&ReportSettings>) -> Result<VodUsage> {
        self.report("reports/vod", settings).await
    }

    /// Hours streamed and encoded for live jobs.
    pub async fn get_live_usage(&self, settings: Option<&ReportSettings>) -> Result<LiveUsage> {
        self.report("reports/live", settings).await
    }

    /// VOD and live usage in one report.
    pub async fn get_usage(&self, settings: Option<&ReportSettings>) -> Result<CombinedUsage> {
        self.report("reports/all", settings).await
    }

    async fn report<T: DeserializeOwned>(
        &self,
        path: &str,
        settings: Option<&ReportSettings>,
    ) -> Result<T> {
        let query = settings.map(ReportSettings::query).unwrap_or_default();
        self.get_json(path, query).await
    }
}
