use clap::{Parser, Subcommand};
use serde::Serialize;
use signature_dataset::{DatasetStager, DirectoryConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "signature-dataset")]
#[command(about = "Stage signature scans into class-partitioned training data")]
#[command(version)]
pub struct Args {
    /// Root of the resources tree (archives, raw and processed data)
    #[arg(long, env = "SIGNATURE_RESOURCES", default_value = "resources")]
    pub resources: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Print the result as JSON on stdout
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract and crop the training archives into the training pool
    Prepare,
    /// Recreate OUTPUT_DIR and copy training pool indices START..END into it
    Process {
        output_dir: PathBuf,
        start: usize,
        end: usize,
    },
    /// Extract and crop the test archives, then copy indices 0..COUNT
    AddTest {
        output_dir: PathBuf,
        count: usize,
        /// Append to OUTPUT_DIR instead of recreating it
        #[arg(long)]
        keep_existing: bool,
    },
    /// Count files in the class subdirectories of each DIR
    Count {
        #[arg(required = true)]
        dirs: Vec<PathBuf>,
    },
    /// Print the width and height of an image
    Size { image: PathBuf },
}

impl From<&Args> for DirectoryConfig {
    fn from(args: &Args) -> Self {
        DirectoryConfig::new(&args.resources)
    }
}

#[derive(Serialize, Debug)]
struct SizeResponse {
    width: u32,
    height: u32,
}

#[derive(Serialize, Debug)]
struct CountResponse {
    files: usize,
}

fn emit<T: Serialize + std::fmt::Debug>(json: bool, value: &T) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{:#?}", value);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let stager = DatasetStager::new(DirectoryConfig::from(&args));
    tracing::debug!("Using layout {:?}", stager.config());

    match &args.command {
        Command::Prepare => emit(args.json, &stager.prepare_training_data()?),
        Command::Process {
            output_dir,
            start,
            end,
        } => emit(args.json, &stager.process_data(output_dir, *start, *end)?),
        Command::AddTest {
            output_dir,
            count,
            keep_existing,
        } => emit(
            args.json,
            &stager.add_test_data(output_dir, *count, !keep_existing)?,
        ),
        Command::Count { dirs } => {
            let files = stager.count_files(dirs.as_slice())?;
            if args.json {
                emit(true, &CountResponse { files })
            } else {
                println!("{files}");
                Ok(())
            }
        }
        Command::Size { image } => {
            let (width, height) = stager.image_size(image)?;
            if args.json {
                emit(true, &SizeResponse { width, height })
            } else {
                println!("{width}x{height}");
                Ok(())
            }
        }
    }
}
