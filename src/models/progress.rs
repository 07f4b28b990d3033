use serde::{Deserialize, Serialize};

use super::Id;

/// Progress of a single input or output file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FileProgress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Processing phase, e.g. "Transcoding", "Uploading".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_event: Option<String>,
    /// Percentage of `current_event`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_event_progress: Option<f64>,
    /// Overall percentage for the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
}

/// Progress of a job and each of its files.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct JobProgress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<FileProgress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<FileProgress>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_outputs_survive_reserialization() {
        let progress: JobProgress = serde_json::from_str(r#"{"outputs":[]}"#).unwrap();
        assert_eq!(progress.outputs, Some(Vec::new()));
        assert_eq!(
            serde_json::to_value(&progress).unwrap(),
            serde_json::json!({ "outputs": [] })
        );

        let progress: JobProgress = serde_json::from_str("{}").unwrap();
        assert_eq!(progress.outputs, None);
        assert_eq!(serde_json::to_value(&progress).unwrap(), serde_json::json!({}));
    }
}
