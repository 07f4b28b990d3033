use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::job::Job;
use super::media::{InputMediaFile, OutputMediaFile};
use crate::errors::{Result, ZencoderError};

/// Webhook payload the API posts when a job or one of its files changes state.
///
/// This library never sends notifications; decode incoming request bodies
/// with [`Notification::from_slice`] or `str::parse`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Notification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<Job>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<OutputMediaFile>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<InputMediaFile>,
}

impl Notification {
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(ZencoderError::Decode)
    }
}

impl FromStr for Notification {
    type Err = ZencoderError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_slice(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileErrorKind;

    #[test]
    fn decodes_webhook_body() {
        let body = r#"{
          "job": { "id": 1, "state": "failed", "test": true, "pass_through": "order-17" },
          "input": { "id": 10, "job_id": 1, "state": "finished", "format": "mpeg4" },
          "outputs": [
            { "id": 20, "job_id": 1, "label": "web", "state": "failed",
              "error_class": "InvalidOutput", "error_message": "bad codec" }
          ]
        }"#;

        let notification: Notification = body.parse().unwrap();

        let job = notification.job.as_ref().unwrap();
        assert_eq!(job.id, Some(1));
        assert_eq!(job.pass_through.as_deref(), Some("order-17"));
        assert!(job.is_failed());

        let input = notification.input.as_ref().unwrap();
        assert_eq!(input.job_id, Some(1));
        assert_eq!(input.format.as_deref(), Some("mpeg4"));

        let outputs = notification.outputs.as_ref().unwrap();
        assert_eq!(outputs.len(), 1);
        let errors = outputs[0].errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, FileErrorKind::Processing);
        assert_eq!(errors[0].class.as_deref(), Some("InvalidOutput"));
    }

    #[test]
    fn partial_payload_leaves_parts_absent() {
        let notification = Notification::from_slice(br#"{"job":{"id":5}}"#).unwrap();
        assert!(notification.input.is_none());
        assert!(notification.outputs.is_none());
    }

    #[test]
    fn empty_output_list_is_distinct_from_absent() {
        let absent = Notification::from_slice(br#"{"job":{"id":5}}"#).unwrap();
        let empty = Notification::from_slice(br#"{"job":{"id":5},"outputs":[]}"#).unwrap();

        assert_eq!(absent.outputs, None);
        assert_eq!(empty.outputs, Some(Vec::new()));
        assert_ne!(absent, empty);

        let json = serde_json::to_value(&empty).unwrap();
        assert_eq!(json, serde_json::json!({ "job": { "id": 5 }, "outputs": [] }));
        let json = serde_json::to_value(&absent).unwrap();
        assert_eq!(json, serde_json::json!({ "job": { "id": 5 } }));
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = Notification::from_slice(b"not json").unwrap_err();
        assert!(matches!(err, ZencoderError::Decode(_)));
    }
}
