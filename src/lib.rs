//! # Zencoder client for Rust
//!
//! Typed async bindings for the [Zencoder](https://zencoder.com) v2 API:
//! account management, job submission and control, input/output inspection,
//! progress polling and usage reports, plus decoding of webhook
//! notifications. Every method makes exactly one HTTP request; retries and
//! polling loops are left to the caller.
//!
//! ## Quick start
//!
//! ```no_run
//! use zencoder::{Client, EncodingSettings, OutputSettings};
//!
//! #[tokio::main]
//! async fn main() -> zencoder::Result<()> {
//!     let client = Client::new("93h630j1dsyshjef620qlkavnmzui3")?;
//!
//!     let settings = EncodingSettings {
//!         input: Some("s3://zencodertesting/test.mov".into()),
//!         outputs: vec![OutputSettings {
//!             label: Some("web".into()),
//!             url: Some("s3://my-bucket/out.mp4".into()),
//!             ..Default::default()
//!         }],
//!         ..Default::default()
//!     };
//!
//!     let created = client.create_job(&settings).await?;
//!     if let Some(id) = created.id {
//!         let progress = client.get_job_progress(id).await?;
//!         println!("job {id}: {:?}", progress.state);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Builder pattern
//!
//! ```no_run
//! use zencoder::ClientBuilder;
//! use std::time::Duration;
//!
//! # fn example() -> zencoder::Result<()> {
//! // Reads ZENCODER_API_KEY when no key is given.
//! let client = ClientBuilder::new()
//!     .base_url("https://app.zencoder.com/api/v2")
//!     .header("X-Request-Source", "batch")
//!     .timeout(Duration::from_secs(120))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

mod client;
mod errors;
mod models;
mod resources;

pub use client::{Client, ClientBuilder};
pub use errors::{Result, ZencoderError};
pub use models::*;
