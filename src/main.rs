use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use cost_dashboard::cli::{handle_cities, handle_export, handle_show, ExportFormat, SelectionArgs};
use cost_dashboard::config::{logging, paths::DashboardPaths, settings::Settings};
use cost_dashboard::dataset::Dataset;

#[derive(Parser)]
#[command(
    name = "costdash",
    version,
    about = "Cost of living dashboard for Canadian cities",
    long_about = "costdash compares synthetic monthly rent, grocery and utility \
                  costs across fifteen Canadian cities, in English or French, \
                  as an interactive terminal dashboard or as text and file exports."
)]
struct Cli {
    /// Seed for the synthetic dataset (overrides the configured seed)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Print the dashboard as a text report
    Show {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Export the dashboard to a file
    Export {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// List the available cities
    Cities,

    /// Show current configuration and paths
    Config,

    /// Write a configuration file with startup defaults
    Init {
        #[command(flatten)]
        selection: SelectionArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = DashboardPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let command = cli.command.unwrap_or(Commands::Tui {
        selection: SelectionArgs::default(),
    });

    match &command {
        Commands::Tui { .. } => logging::init_file(&paths, cli.verbose)?,
        _ => logging::init_stderr(cli.verbose)?,
    }

    let seed = cli.seed.or(settings.dataset_seed);

    match command {
        Commands::Tui { selection } => {
            let state = selection.resolve(&settings)?;
            let dataset = Dataset::generate_with(seed);
            cost_dashboard::tui::run_tui(&dataset, &settings, state)?;
        }
        Commands::Show { selection } => {
            let state = selection.resolve(&settings)?;
            let dataset = Dataset::generate_with(seed);
            handle_show(&state, &dataset);
        }
        Commands::Export {
            output,
            format,
            pretty,
            selection,
        } => {
            let state = selection.resolve(&settings)?;
            let dataset = Dataset::generate_with(seed);
            handle_export(&state, &dataset, &output, format, pretty)?;
        }
        Commands::Cities => handle_cities(),
        Commands::Init { selection } => {
            let state = selection.resolve(&settings)?;
            let mut settings = settings;
            settings.default_city = state.selected_city().name().to_string();
            settings.default_locale = state.selected_locale().code().to_string();
            if cli.seed.is_some() {
                settings.dataset_seed = cli.seed;
            }
            settings.save(&paths)?;
            info!(path = %paths.settings_file().display(), "wrote settings");

            println!("Initialized cost dashboard at: {}", paths.base_dir().display());
            println!("  Default city:     {}", settings.default_city);
            println!("  Default language: {}", settings.default_locale);
            match settings.dataset_seed {
                Some(seed) => println!("  Dataset seed:     {}", seed),
                None => println!("  Dataset seed:     (random each run)"),
            }
        }
        Commands::Config => {
            println!("Cost Dashboard Configuration");
            println!("============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!(
                "Initialized:      {}",
                if paths.is_initialized() { "yes" } else { "no" }
            );
            println!();
            println!("Settings:");
            println!("  Default city:     {}", settings.city());
            println!("  Default language: {}", settings.locale().option_label());
            match settings.dataset_seed {
                Some(seed) => println!("  Dataset seed:     {}", seed),
                None => println!("  Dataset seed:     (random each run)"),
            }
            println!("  Tick rate:        {} ms", settings.tick_rate_ms);
        }
    }

    Ok(())
}
