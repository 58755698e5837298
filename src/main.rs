use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use ios_bench_devices::{driver, DriverArgs, IosDriver};

#[derive(Parser)]
#[command(name = "ios-bench-devices")]
#[command(version)]
#[command(about = "Discover iOS devices and build benchmarking platforms", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List connected devices
    Devices {
        /// Target platform
        #[arg(short, long, default_value = "ios")]
        platform: String,

        /// Do not log the probe command line
        #[arg(long, default_value = "false")]
        silent: bool,
    },

    /// Build one platform per selected device and print them
    Platforms {
        /// Working directory handed to every platform
        #[arg(short, long, default_value = ".")]
        tempdir: PathBuf,

        /// YAML file with device/excluded_devices/devices
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// JSON descriptor of one exact device, skips discovery
        #[arg(long)]
        device: Option<String>,

        /// Comma-separated identifiers to restrict to
        #[arg(long)]
        devices: Option<String>,

        /// Comma-separated identifiers to skip
        #[arg(long)]
        excluded_devices: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Devices { platform, silent } => {
            println!(
                "{} Listing {} devices...",
                "🔍".to_string().blue(),
                platform.cyan()
            );
            driver::list_devices(&platform, silent).await?;
        }

        Commands::Platforms {
            tempdir,
            config,
            device,
            devices,
            excluded_devices,
        } => {
            let file_args = match config {
                Some(path) => DriverArgs::from_file(&path)?,
                None => DriverArgs::default(),
            };
            let args = file_args.merge(DriverArgs {
                device,
                excluded_devices,
                devices,
            });

            let ios = IosDriver::new(args, None)
                .await
                .context("Failed to discover iOS devices. Is ios-deploy installed?")?;
            let platforms = ios.get_ios_platforms(&tempdir)?;

            if platforms.is_empty() {
                println!("{} No platforms selected.", "ℹ".blue());
            }
            for platform in &platforms {
                println!("{} {}", "✓".green(), platform);
            }
        }
    }

    Ok(())
}
