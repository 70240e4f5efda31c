use art_preview::imaging::RustBackend;
use art_preview::{config, output, process, scan};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "art-preview")]
#[command(about = "Composite artwork into frame mockups")]
#[command(long_about = "\
Composite artwork into frame mockups

Run from (or point --dir at) a directory of artwork. Each artwork declares its
shape through its filename suffix; it is previewed in every frame of that shape
found under the frames directory.

Batch structure:

  batch/
  ├── frames/                      # Frame mockups, searched recursively
  │   ├── GW-24-30.png             # <type>[-<color>]-<width>-<height>.png
  │   ├── FMP-02-30-40.png         # Color/variant code 02
  │   └── AC2020.png               # Hyphens between fields are optional
  └── spring/                      # Working directory (--dir)
      ├── config.toml              # Optional
      ├── piece-vertical.png       # Artwork: <name>-<shape>.png
      ├── study-square.png
      └── output/                  # Previews: <name><frame file name>

Artwork shape suffixes:
  horizontal, vertical, square, 3624, 2436, 4020, 4820, 6020

Frame types:
  AC (acrylic), FMP (framed mat print), FTP (framed textured panel),
  GW (gallery wrap), FW (float wrap)

Run 'art-preview gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Working directory holding the artwork
    #[arg(long, default_value = ".", global = true)]
    dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Composite every artwork into its compatible frames
    Generate,
    /// Show what generate would do, and check frame image sizes
    Check,
    /// List the frame catalog
    Frames {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate => {
            let config = config::load_config(&cli.dir)?;
            init_thread_pool(&config.processing);
            let (tx, rx) = std::sync::mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    for line in output::format_process_event(&event) {
                        println!("{}", line);
                    }
                }
            });
            let result = process::composite(&cli.dir, &config, Some(tx))?;
            printer.join().ok();
            output::print_summary(&result);
            if result.has_failures() {
                return Err(format!("{} artwork/frame pairs failed", result.failures.len()).into());
            }
        }
        Command::Check => {
            let config = config::load_config(&cli.dir)?;
            init_thread_pool(&config.processing);
            println!("==> Checking {}", cli.dir.display());
            let plan = process::plan(&cli.dir, &config)?;
            output::print_plan_output(&plan, &cli.dir);
            println!();
            let issues =
                process::check_frame_sizes(&RustBackend::new(), &plan.catalog.frames, config.canvas());
            output::print_frame_size_issues(&issues, config.canvas());
        }
        Command::Frames { json } => {
            let config = config::load_config(&cli.dir)?;
            let frames_dir = config.frames_dir(&cli.dir);
            let catalog = scan::scan_frames(&frames_dir)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&catalog)?);
            } else {
                output::print_frames_output(&catalog, &frames_dir);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores; config can only lower it.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
