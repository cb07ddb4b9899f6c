//! viewline - Command Line Entry Point
//!
//! Renders tokenized documents to span markup or standalone HTML.

use clap::{Parser, Subcommand};
use log::{error, info};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use viewline::config::{
    get_config_file_path, load_config, load_config_from, save_config_to, Settings,
};
use viewline::export::export_to_html_file;
use viewline::render::{render_document, TokenizedDocument};
use viewline::Result;

#[derive(Parser)]
#[command(name = "viewline")]
#[command(version)]
#[command(about = "Render tokenized lines to span markup")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Use this settings file instead of the platform config location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a tokenized JSON document
    Render(RenderArgs),
    /// Show or initialize the configuration
    Config {
        /// Print the config file location instead
        #[arg(long)]
        path: bool,

        /// Write the effective settings to the config file
        #[arg(long, conflicts_with = "path")]
        init: bool,
    },
}

/// Per-run overrides for the rendering and export settings.
#[derive(clap::Args, Debug, Clone, Default)]
struct RenderArgs {
    /// Path to the JSON document
    input: PathBuf,

    /// Override the configured tab size
    #[arg(long)]
    tab_size: Option<u8>,

    /// Stop rendering each line after this many characters
    #[arg(long, value_name = "N", conflicts_with = "no_limit")]
    stop_after: Option<usize>,

    /// Render every line in full
    #[arg(long)]
    no_limit: bool,

    /// Draw whitespace tokens with visible glyphs
    #[arg(long, conflicts_with = "no_render_whitespace")]
    render_whitespace: bool,

    /// Draw whitespace as plain spaces, even if the config enables glyphs
    #[arg(long)]
    no_render_whitespace: bool,

    /// Print each line's offset table after its markup
    #[arg(long)]
    offsets: bool,

    /// Write a standalone HTML document instead of printing markup
    #[arg(long, value_name = "OUT")]
    html: Option<PathBuf>,

    /// Title for the HTML document
    #[arg(long, requires = "html")]
    title: Option<String>,

    /// Number lines in the HTML document
    #[arg(long, requires = "html")]
    line_numbers: bool,
}

impl RenderArgs {
    /// Layer the command line flags over loaded settings.
    fn apply(&self, settings: &mut Settings) {
        if let Some(tab_size) = self.tab_size {
            settings.tab_size = tab_size;
        }
        if self.no_limit {
            settings.stop_rendering_line_after = None;
        } else if self.stop_after.is_some() {
            settings.stop_rendering_line_after = self.stop_after;
        }
        if self.render_whitespace {
            settings.render_whitespace = true;
        } else if self.no_render_whitespace {
            settings.render_whitespace = false;
        }
        if let Some(title) = &self.title {
            settings.export.title = title.clone();
        }
        if self.line_numbers {
            settings.export.include_line_numbers = true;
        }
        settings.sanitize();
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut settings = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config(),
    };

    match cli.command {
        Commands::Render(args) => {
            args.apply(&mut settings);

            if let Some(output) = &args.html {
                return export_to_html_file(&args.input, output, &settings);
            }

            let json = fs::read_to_string(&args.input)?;
            let document = TokenizedDocument::from_json(&json)?;
            let lines = render_document(&document, &settings.render_options())?;
            info!("Rendered {} lines from {}", lines.len(), args.input.display());

            for line in &lines {
                println!("{}", line.markup());
                if args.offsets {
                    println!("{:?}", line.char_offset_in_part);
                }
            }
        }
        Commands::Config { path, init } => {
            let config_path = match cli.config {
                Some(config_path) => config_path,
                None => get_config_file_path()?,
            };
            if init {
                save_config_to(&settings, &config_path)?;
                println!("{}", config_path.display());
            } else if path {
                println!("{}", config_path.display());
            } else {
                print_settings(&settings)?;
            }
        }
    }

    Ok(())
}

fn print_settings(settings: &Settings) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(settings)?);
    Ok(())
}
