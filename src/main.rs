use image_inspector::{MetadataViewer, SourceFile, ViewerError};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: image-inspector [OPTIONS] FILE...

Options:
  --json                  Print each result as JSON
  --exiftool PATH         exiftool executable to use (default: search PATH)
  --probe-timeout-ms N    Give up reading image dimensions after N milliseconds
  -h, --help              Show this help

Set RUST_LOG (e.g. RUST_LOG=debug) to see diagnostics.";

struct Args {
    json: bool,
    exiftool_path: Option<PathBuf>,
    probe_timeout: Option<Duration>,
    files: Vec<PathBuf>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let json = args.contains("--json");
    let exiftool_path = args.opt_value_from_str("--exiftool")?;
    let probe_timeout = args
        .opt_value_from_str::<_, u64>("--probe-timeout-ms")?
        .map(Duration::from_millis);
    let files: Vec<PathBuf> = args.finish().into_iter().map(PathBuf::from).collect();

    Ok((!files.is_empty()).then_some(Args {
        json,
        exiftool_path,
        probe_timeout,
        files,
    }))
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Each file on the command line counts as one selection.
#[tokio::main]
async fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    init_tracing();

    let Some(args) = parse_args()? else {
        eprintln!("{USAGE}");
        return Ok(ExitCode::from(2));
    };

    let viewer = MetadataViewer::builder()
        .maybe_exiftool_path(args.exiftool_path)
        .maybe_probe_timeout(args.probe_timeout)
        .build()?;

    let mut failed = false;
    for path in &args.files {
        let submitted = match SourceFile::open(path).await {
            Ok(file) => viewer.submit(&file).await,
            Err(error) => Err(error),
        };

        match submitted {
            Ok(_) => {
                if let Some(published) = viewer.results().current() {
                    if args.json {
                        println!("{}", serde_json::to_string_pretty(&*published.metadata)?);
                    } else {
                        println!("{}", published.metadata);
                    }
                }
            }
            Err(ViewerError::InvalidFileType(_)) => {
                failed = true;
                eprintln!("Por favor selecciona una imagen: {}", path.display());
            }
            Err(error) => {
                failed = true;
                eprintln!("{}: {error}", path.display());
            }
        }
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
