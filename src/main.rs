use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};

use podium::config::Config;
use podium::logging;
use podium::render::{self, OutputFormat};
use podium::summary::summarize;
use podium_core::{CompetitionAggregator, DisplayLocale, GroupingMode, RecordSource, Tier, ViewState};

#[derive(Parser)]
#[command(name = "podium")]
#[command(about = "Competition history for a personal profile page")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SourceArgs {
    /// Config file (defaults to $PODIUM_CONFIG or podium.toml)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Competition data file, overrides the config
    #[arg(long)]
    data: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the competition history
    Show {
        #[command(flatten)]
        source: SourceArgs,
        /// Show every record instead of the first page
        #[arg(long)]
        expanded: bool,
        #[arg(long)]
        page_size: Option<usize>,
        /// pt-BR or en-US
        #[arg(long)]
        locale: Option<DisplayLocale>,
        /// window or whole_years
        #[arg(long)]
        grouping: Option<GroupingMode>,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Summarize the data file and report records with unparsable dates
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },
}

fn load_config(args: &SourceArgs) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            let mut config = Config::load_from(path)?;
            config.apply_env_overrides();
            config
        }
        None => Config::load()?,
    };
    if let Some(data) = &args.data {
        config.competitions.data_path = data.clone();
    }
    Ok(config)
}

fn check(config: &Config) -> Result<()> {
    let source = config.record_source();
    let records = source.load()?;
    let rules = config.aggregator_settings().tier_rules;
    let summary = summarize(&records, &rules);

    for title in &summary.undated {
        warn!(title = %title, "Record date cannot be parsed");
    }

    println!("📊 {} ({} records)", source.describe(), summary.total);
    println!("\nBy year:");
    for (year, count) in summary.years_descending() {
        match year {
            Some(year) => println!("   {}: {}", year, count),
            None => println!("   undated: {}", count),
        }
    }
    println!("\nBy tier:");
    for tier in Tier::ALL {
        println!("   {}: {}", tier, summary.tier_count(tier));
    }

    if summary.undated.is_empty() {
        println!("\n✅ All dates parsed");
    } else {
        println!("\n⚠️  {} record(s) with unparsable dates will be listed last", summary.undated.len());
    }
    Ok(())
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            source,
            expanded,
            page_size,
            locale,
            grouping,
            format,
        } => {
            let config = load_config(&source)?;
            let mut settings = config.aggregator_settings();
            if let Some(locale) = locale {
                // Locale switch also switches the default markers
                settings.tier_rules = config.competitions.tiers.rules_for(locale);
                settings.locale = locale;
            }
            if let Some(page_size) = page_size {
                settings.page_size = page_size;
            }
            if let Some(grouping) = grouping {
                settings.grouping = grouping;
            }

            let aggregator = CompetitionAggregator::from_source(&config.record_source(), settings)?;
            info!(total = aggregator.total(), expanded, "Rendering competition history");

            let view = aggregator.view_for(ViewState::from_expanded(expanded));
            print!("{}", render::render(&view, format)?);
        }
        Commands::Check { source } => {
            let config = load_config(&source)?;
            check(&config)?;
        }
    }
    Ok(())
}
