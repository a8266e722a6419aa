use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use layout_lab::controls::ControlValues;
use layout_lab::events::Session;

#[derive(Parser)]
#[command(name = "layout-lab", version)]
#[command(about = "Visual CSS layout playground")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate CSS from a JSON file of control values
    Render {
        /// Input .json file (page defaults when omitted)
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Css)]
        format: OutputFormat,

        /// Write output to file instead of stdout
        #[arg(short)]
        o: Option<PathBuf>,
    },

    /// Report values that collapse to unset
    Check {
        /// Input .json file
        file: PathBuf,

        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },

    /// Serve the interactive tool page
    Serve {
        /// Control values to start from; reloaded when the file changes
        #[arg(long)]
        config: Option<PathBuf>,

        /// Server port
        #[arg(long, default_value_t = 4444)]
        port: u16,
    },
}

/// Output format for the render command.
#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// The generated rule block
    Css,
    /// Controls, state, CSS and availability as JSON
    Json,
    /// Self-contained preview page
    Html,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Render { file, format, o } => {
            let controls = read_controls(file.as_ref())?;
            let (output, kind) = match format {
                OutputFormat::Css => {
                    let mut css = layout_lab::render_css(&controls);
                    css.push('\n');
                    (css, "CSS")
                }
                OutputFormat::Json => {
                    let snapshot = Session::new(controls).snapshot();
                    let mut json = serde_json::to_string_pretty(&snapshot)?;
                    json.push('\n');
                    (json, "JSON")
                }
                OutputFormat::Html => (layout_lab::render_html(&controls), "HTML"),
            };

            match o {
                Some(out_path) => {
                    fs::write(&out_path, &output)
                        .with_context(|| format!("cannot write '{}'", out_path.display()))?;
                    log::info!(
                        "wrote {kind} to {} ({} bytes)",
                        out_path.display(),
                        output.len()
                    );
                }
                None => print!("{output}"),
            }
        }

        Commands::Check { file, strict } => {
            let controls = read_controls(Some(&file))?;
            let collapsed = controls.collapsed_fields();
            for id in &collapsed {
                log::warn!(
                    "{}: {id} = {:?} is not a usable length, it will be omitted",
                    file.display(),
                    controls.get(*id)
                );
            }
            if collapsed.is_empty() {
                log::info!("{}: ok", file.display());
            } else if strict {
                anyhow::bail!("{}: {} warning(s)", file.display(), collapsed.len());
            } else {
                log::info!("{}: {} warning(s)", file.display(), collapsed.len());
            }
        }

        Commands::Serve { config, port } => {
            let rt = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
            rt.block_on(layout_lab::server::run_dev_server(config, port))
                .map_err(|e| anyhow::anyhow!("server failed: {e}"))?;
        }
    }
    Ok(())
}

fn read_controls(file: Option<&PathBuf>) -> Result<ControlValues> {
    match file {
        Some(path) => layout_lab::load_controls(path)
            .with_context(|| format!("cannot load '{}'", path.display())),
        None => Ok(ControlValues::default()),
    }
}
