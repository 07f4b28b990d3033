use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Filters for the usage report endpoints. Unset fields are not sent and the
/// API applies its own defaults (last 30 days, no grouping).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSettings {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    /// Restrict the report to one job grouping.
    pub grouping: Option<String>,
}

impl ReportSettings {
    /// Query pairs for the fields that are set, dates as `YYYY-MM-DD`.
    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(from) = self.from {
            query.push(("from", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = self.to {
            query.push(("to", to.format("%Y-%m-%d").to_string()));
        }
        if let Some(grouping) = &self.grouping {
            query.push(("grouping", grouping.clone()));
        }
        query
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct VodTotalStatistics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoded_minutes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable_minutes: Option<u64>,
}

/// VOD minutes for one grouping on one day.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct VodStatistic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouping: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collected_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoded_minutes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable_minutes: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct VodUsage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<VodTotalStatistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Vec<VodStatistic>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LiveTotalStatistics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_hours: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable_stream_hours: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoded_hours: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable_encoded_hours: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_hours: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_billable_hours: Option<u64>,
}

/// Live hours for one grouping on one day.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LiveStatistic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouping: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collected_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_hours: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable_stream_hours: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoded_hours: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable_encoded_hours: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_hours: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_billable_hours: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LiveUsage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<LiveTotalStatistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Vec<LiveStatistic>>,
}

/// `GET reports/all`: VOD and live usage side by side.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CombinedUsage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<CombinedTotals>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<CombinedStatistics>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CombinedTotals {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live: Option<LiveTotalStatistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vod: Option<VodTotalStatistics>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CombinedStatistics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live: Option<Vec<LiveStatistic>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vod: Option<Vec<VodStatistic>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_settings_build_no_query() {
        assert!(ReportSettings::default().query().is_empty());
    }

    #[test]
    fn set_fields_become_query_pairs() {
        let settings = ReportSettings {
            from: NaiveDate::from_ymd_opt(2013, 1, 1),
            to: NaiveDate::from_ymd_opt(2013, 2, 28),
            grouping: Some("interlaced".into()),
        };
        assert_eq!(
            settings.query(),
            vec![
                ("from", "2013-01-01".to_string()),
                ("to", "2013-02-28".to_string()),
                ("grouping", "interlaced".to_string()),
            ]
        );
    }

    #[test]
    fn only_grouping() {
        let settings = ReportSettings {
            grouping: Some("abc".into()),
            ..Default::default()
        };
        assert_eq!(settings.query(), vec![("grouping", "abc".to_string())]);
    }
}
