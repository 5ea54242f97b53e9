use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use visual_factory::format::Format;
use visual_factory::{config, imaging, output};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "visual-factory")]
#[command(about = "Image format descriptors for upload pipelines")]
#[command(long_about = "\
Image format descriptors for upload pipelines

A formats file declares every variant an upload is stored as. Each variant
lands in <directory>/<width>x<height>/, the untransformed original in
<directory>/orig/.

  [defaults]
  directory = \"uploads\"
  flip = true

  [original]
  width = 0
  height = 0

  [formats.thumbnail]
  width = 150
  height = 100
  flip = \"false\"

Flip swaps the declared width and height when the source image's orientation
(portrait/landscape) is the opposite of the declared box.

Run 'visual-factory gen-config' to generate a documented formats.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Formats config file
    #[arg(long, default_value = "formats.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List configured formats and their upload directories
    List {
        /// Print JSON instead of the tree display
        #[arg(long)]
        json: bool,
    },
    /// Validate the formats file
    Check,
    /// Describe a format built from raw dimensions
    Resolve {
        width: u32,
        height: u32,
        /// Flip flag: true/false, any casing
        #[arg(long, default_value = "true")]
        flip: String,
    },
    /// Show the target box and upload directory of every format for an image
    Plan {
        image: PathBuf,
    },
    /// Print a stock formats.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::List { json } => {
            let set = config::load_formats(&cli.config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&output::list_json(&set))?);
            } else {
                output::print_list_output(&set);
            }
        }
        Command::Check => {
            println!("==> Checking {}", cli.config.display());
            let set = config::load_formats(&cli.config)?;
            output::print_check_output(&set);
        }
        Command::Resolve {
            width,
            height,
            flip,
        } => {
            let format = Format::from_dimensions(width, height, flip)?;
            output::print_resolve_output(&format);
        }
        Command::Plan { image } => {
            let set = config::load_formats(&cli.config)?;
            let source = imaging::identify(&image)?;
            let name = image
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| image.display().to_string());
            output::print_plan_output(&name, source, &set);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
