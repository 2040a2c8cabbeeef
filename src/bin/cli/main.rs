use anyhow::{Context, Result};
use clap::Parser;
use s3_restore::{
    adapters::outbound::storage::S3Config,
    app::{run_check, AppBuilder, AppConfig, CheckConfig, StorageBackend},
    domain::models::RestoreTier,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

#[derive(Parser, Debug)]
#[command(name = "s3-restore")]
#[command(
    about = "Download an S3 object, requesting a restore first if it sits in an archive tier",
    long_about = None
)]
struct Cli {
    /// Bucket holding the object
    #[arg(long, env = "S3_BUCKET")]
    bucket: Option<String>,

    /// Object key; the local file takes its final path segment
    #[arg(long, env = "S3_KEY")]
    key: Option<String>,

    /// Days the restored copy stays readable
    #[arg(long, env = "RESTORE_DAYS", default_value = "1")]
    days: u32,

    /// Request a restore when the object is archived
    #[arg(long, env = "S3_RESTORE", default_value = "false")]
    restore: bool,

    /// Replace an existing local file
    #[arg(long, env = "S3_OVERWRITE", default_value = "false")]
    overwrite: bool,

    /// Restore tier: standard, bulk or expedited
    #[arg(long, env = "RESTORE_TIER", default_value = "standard")]
    tier: RestoreTier,

    /// Directory the object is downloaded into
    #[arg(long, env = "OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,

    /// S3 region
    #[arg(long, env = "AWS_REGION")]
    region: Option<String>,

    /// S3 endpoint URL (for S3-compatible services)
    #[arg(long, env = "S3_ENDPOINT")]
    endpoint_url: Option<String>,

    /// Address buckets as path segments instead of subdomains
    #[arg(long, env = "S3_FORCE_PATH_STYLE", default_value = "false")]
    force_path_style: bool,

    /// Total attempts per S3 request
    #[arg(long, env = "S3_MAX_ATTEMPTS", default_value = "1")]
    max_attempts: u32,

    /// Log level: off, error, warn, info, debug or trace. RUST_LOG takes precedence
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: LevelFilter,
}

impl Cli {
    fn to_check_config(&self) -> CheckConfig {
        CheckConfig {
            bucket: self.bucket.clone().unwrap_or_default(),
            key: self.key.clone().unwrap_or_default(),
            restore_days: self.days,
            restore_enabled: self.restore,
            overwrite_enabled: self.overwrite,
            tier: self.tier,
            output_dir: self.output_dir.clone(),
        }
    }

    fn to_app_config(&self) -> AppConfig {
        AppConfig {
            storage_backend: StorageBackend::S3(S3Config {
                region: self.region.clone(),
                endpoint: self.endpoint_url.clone(),
                force_path_style: self.force_path_style,
                max_attempts: self.max_attempts,
            }),
        }
    }

    fn init_logging(&self) -> Result<()> {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::default().add_directive(self.log_level.into()));

        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .context("Failed to initialize logging")?;

        Ok(())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(err) = cli.init_logging() {
        eprintln!("{:#}", err);
        return ExitCode::FAILURE;
    }

    let builder = AppBuilder::new().with_config(cli.to_app_config());
    match run_check(builder, &cli.to_check_config())
        .await
        .context("Restore check failed")
    {
        Ok(outcome) => {
            info!("Finished: {}", outcome);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
