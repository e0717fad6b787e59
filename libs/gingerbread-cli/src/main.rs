//! gingerbread - generate printable gingerbread house parts.
//!
//! ```text
//! gingerbread house --out parts/            # seven STL files
//! gingerbread house --config mini.toml      # custom dimensions
//! gingerbread sign --text "Seasons Greetings"
//! gingerbread dims                          # print the dimension set
//! ```

mod report;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use config::constants::DEFAULT_SIGN_TEXT;
use gingerbread_house::{
    generate_house, sign_parts, DimensionSpec, Dimensions, GenerationOptions, OpeningStyle,
    SignDimensions,
};
use gingerbread_mesh::{export_stl_file, StlFormat};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gingerbread")]
#[command(version, about = "Generate interlocking gingerbread house parts as STL files", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the seven house parts
    House {
        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
        /// TOML file overriding the default dimensions
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Cut plain rectangular openings instead of arches
        #[arg(long)]
        rectangular: bool,
        /// Leave out tabs and slots
        #[arg(long)]
        no_fasteners: bool,
        /// Write ASCII STL instead of binary
        #[arg(long)]
        ascii: bool,
    },
    /// Generate the holiday sign base and text plate
    Sign {
        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
        /// Sign text
        #[arg(short, long, default_value = DEFAULT_SIGN_TEXT)]
        text: String,
        /// Write ASCII STL instead of binary
        #[arg(long)]
        ascii: bool,
    },
    /// Print the validated dimension set in millimetres
    Dims {
        /// TOML file overriding the default dimensions
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::House {
            out,
            config,
            rectangular,
            no_fasteners,
            ascii,
        } => {
            let options = GenerationOptions {
                opening_style: if rectangular {
                    OpeningStyle::Rectangular
                } else {
                    OpeningStyle::Arched
                },
                fasteners: !no_fasteners,
            };
            run_house(&out, config.as_deref(), &options, stl_format(ascii))
        }
        Commands::Sign { out, text, ascii } => {
            run_sign(&out, &text, stl_format(ascii))?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Dims { config } => {
            let dims = load_dimensions(config.as_deref())?;
            print!("{}", report::dimension_table(&dims));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn stl_format(ascii: bool) -> StlFormat {
    if ascii {
        StlFormat::Ascii
    } else {
        StlFormat::Binary
    }
}

fn load_dimensions(path: Option<&Path>) -> Result<Dimensions> {
    let spec = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            toml::from_str::<DimensionSpec>(&text)
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => DimensionSpec::default(),
    };
    Dimensions::new(&spec).context("invalid dimensions")
}

fn run_house(
    out: &Path,
    config: Option<&Path>,
    options: &GenerationOptions,
    format: StlFormat,
) -> Result<ExitCode> {
    let dims = load_dimensions(config)?;
    fs::create_dir_all(out).with_context(|| format!("failed to create {}", out.display()))?;

    let report = generate_house(&dims, options);
    for (kind, solid) in report.successes() {
        let path = out.join(kind.file_name());
        export_stl_file(solid.mesh(), &path, format)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(part = %kind, path = %path.display(), "exported");
    }

    print!("{}", report::house_summary(&dims, &report, out));
    Ok(if report.is_complete() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run_sign(out: &Path, text: &str, format: StlFormat) -> Result<()> {
    let dims = SignDimensions::default();
    let parts = sign_parts(&dims, text)?;
    fs::create_dir_all(out).with_context(|| format!("failed to create {}", out.display()))?;

    for (name, solid) in &parts {
        let path = out.join(format!("{name}.stl"));
        export_stl_file(solid.mesh(), &path, format)
            .with_context(|| format!("failed to write {}", path.display()))?;
        let size = solid.bounding_box().size();
        println!(
            "{name}: {:.1} x {:.1} x {:.1} mm -> {}",
            size.x,
            size.y,
            size.z,
            path.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_house_flags() {
        let cli = Cli::try_parse_from([
            "gingerbread",
            "-vv",
            "house",
            "--out",
            "parts",
            "--rectangular",
            "--no-fasteners",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::House {
                out,
                rectangular,
                no_fasteners,
                ascii,
                config,
            } => {
                assert_eq!(out, PathBuf::from("parts"));
                assert!(rectangular && no_fasteners);
                assert!(!ascii);
                assert!(config.is_none());
            }
            _ => panic!("expected house command"),
        }
    }

    #[test]
    fn test_sign_text_default() {
        let cli = Cli::try_parse_from(["gingerbread", "sign"]).unwrap();
        match cli.command {
            Commands::Sign { text, .. } => assert_eq!(text, DEFAULT_SIGN_TEXT),
            _ => panic!("expected sign command"),
        }
    }

    #[test]
    fn test_load_dimensions_from_toml() {
        let path = std::env::temp_dir().join(format!("gingerbread_dims_{}.toml", std::process::id()));
        fs::write(&path, "unit = \"inch\"\nhouse_width = 5.0\n").unwrap();
        let dims = load_dimensions(Some(&path));
        fs::remove_file(&path).unwrap();

        assert!((dims.unwrap().house_width() - 127.0).abs() < 1e-9);
    }

    #[test]
    fn test_load_dimensions_reports_invalid_values() {
        let path =
            std::env::temp_dir().join(format!("gingerbread_bad_dims_{}.toml", std::process::id()));
        fs::write(&path, "door_height = 9.0\n").unwrap();
        let err = load_dimensions(Some(&path)).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(format!("{err:#}").contains("door_height"));
    }

    #[test]
    fn test_missing_config_file() {
        assert!(load_dimensions(Some(Path::new("/nonexistent/gingerbread.toml"))).is_err());
    }
}
