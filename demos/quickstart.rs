//! Quick-start examples for the Zencoder Rust client.
//!
//! Run with:
//!   ZENCODER_API_KEY=... RUST_LOG=zencoder=debug cargo run --example quickstart

use chrono::NaiveDate;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use zencoder::{ClientBuilder, EncodingSettings, OutputSettings, ReportSettings};

#[tokio::main]
async fn main() -> zencoder::Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // -----------------------------------------------------------------------
    // 1. Create a client (reads ZENCODER_API_KEY from environment)
    // -----------------------------------------------------------------------
    let client = ClientBuilder::new().build()?;

    // -----------------------------------------------------------------------
    // 2. Check the account
    // -----------------------------------------------------------------------
    let account = client.get_account().await?;
    println!("Plan: {}", account.plan.as_deref().unwrap_or("-"));
    println!(
        "Minutes: {} of {}",
        account.minutes_used.unwrap_or(0),
        account.minutes_included.unwrap_or(0)
    );
    if account.integration_mode == Some(true) {
        println!("Account is in integration mode");
    }
    println!();

    // -----------------------------------------------------------------------
    // 3. Submit a test job
    // -----------------------------------------------------------------------
    let settings = EncodingSettings {
        input: Some("s3://zencodertesting/test.mov".into()),
        test: Some(true),
        outputs: vec![OutputSettings {
            label: Some("web".into()),
            format: Some("mp4".into()),
            width: Some(640),
            ..Default::default()
        }],
        ..Default::default()
    };

    let created = client.create_job(&settings).await?;
    let Some(job_id) = created.id else {
        println!("API returned no job id");
        return Ok(());
    };
    let outputs = created.outputs.as_ref().map_or(0, Vec::len);
    println!("Created job {job_id} with {outputs} outputs");

    // -----------------------------------------------------------------------
    // 4. Check progress once
    // -----------------------------------------------------------------------
    let progress = client.get_job_progress(job_id).await?;
    println!(
        "Job {}: {:.1}%",
        progress.state.as_deref().unwrap_or("unknown"),
        progress.progress.unwrap_or(0.0)
    );
    for output in progress.outputs.iter().flatten() {
        println!(
            "  output {:?}: {} ({:.1}%)",
            output.id,
            output.current_event.as_deref().unwrap_or("-"),
            output.progress.unwrap_or(0.0)
        );
    }
    println!();

    // -----------------------------------------------------------------------
    // 5. Inspect the job and report file errors
    // -----------------------------------------------------------------------
    let details = client.get_job_details(job_id).await?;
    if let Some(job) = details.job {
        for output in job.output_media_files.iter().flatten() {
            for error in output.errors() {
                println!("  {:?} {:?}: {}", error.kind, error.class, error);
            }
        }
    }
    println!();

    // -----------------------------------------------------------------------
    // 6. Usage for January
    // -----------------------------------------------------------------------
    let report = ReportSettings {
        from: NaiveDate::from_ymd_opt(2024, 1, 1),
        to: NaiveDate::from_ymd_opt(2024, 1, 31),
        grouping: None,
    };
    let usage = client.get_vod_usage(Some(&report)).await?;
    if let Some(total) = usage.total {
        println!(
            "Encoded {} minutes, billed {}",
            total.encoded_minutes.unwrap_or(0),
            total.billable_minutes.unwrap_or(0)
        );
    }

    Ok(())
}
