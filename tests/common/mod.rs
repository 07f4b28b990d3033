#![allow(dead_code)]

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zencoder::{Client, ClientBuilder, ZencoderError};

pub const API_KEY: &str = "abc";

/// Nothing listens on port 1, so every request fails at the transport.
const UNREACHABLE: &str = "http://127.0.0.1:1/api/v2";

pub fn client_for(server: &MockServer) -> Client {
    ClientBuilder::new()
        .api_key(API_KEY)
        .base_url(server.uri())
        .build()
        .unwrap()
}

pub fn unreachable_client() -> Client {
    ClientBuilder::new()
        .api_key(API_KEY)
        .base_url(UNREACHABLE)
        .build()
        .unwrap()
}

/// A server answering `verb path` with `response`, only when the API key header is sent.
pub async fn serve(verb: &str, route: &str, response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method(verb))
        .and(path(route))
        .and(header("zencoder-api-key", API_KEY))
        .respond_with(response)
        .mount(&server)
        .await;
    server
}

pub fn reply(status: u16, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body.to_string(), "application/json")
}

pub fn assert_status(err: &ZencoderError, expected: u16) {
    assert_eq!(
        err.status().map(|s| s.as_u16()),
        Some(expected),
        "unexpected error: {err}"
    );
}

pub fn assert_decode(err: &ZencoderError) {
    assert!(matches!(err, ZencoderError::Decode(_)), "unexpected error: {err}");
}

pub fn assert_transport(err: &ZencoderError) {
    assert!(matches!(err, ZencoderError::Http(_)), "unexpected error: {err}");
}

pub const MEDIA_FILE: &str = r#"{
  "format": "mpeg4",
  "created_at": "2010-01-01T00:00:00Z",
  "frame_rate": 29,
  "finished_at": "2010-01-01T00:00:00Z",
  "updated_at": "2010-01-01T00:00:00Z",
  "duration_in_ms": 24883,
  "audio_sample_rate": 48000,
  "url": "s3://bucket/test.mp4",
  "id": 1,
  "job_id": 123,
  "error_message": null,
  "error_class": null,
  "audio_bitrate_in_kbps": 95,
  "audio_codec": "aac",
  "height": 352,
  "file_size_in_bytes": 1862748,
  "video_codec": "h264",
  "test": false,
  "total_bitrate_in_kbps": 593,
  "channels": "2",
  "width": 624,
  "video_bitrate_in_kbps": 498,
  "state": "finished",
  "md5_checksum": "7f106918e02a69466afa0ee014174143"
}"#;

pub const FILE_PROGRESS: &str = r#"{
  "id": 4567,
  "state": "processing",
  "current_event": "Transcoding",
  "current_event_progress": 25.0323,
  "progress": 35.23532
}"#;
