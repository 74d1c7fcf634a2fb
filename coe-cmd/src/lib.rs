//! Command implementations for the COE CLI.
//!
//! Each subcommand fills one page's filters from flags, runs a single
//! refresh against the analytics API and prints the result.

use clap::{Args, Subcommand};
use coe_core::api::{ApiClient, ClientConfig};
use coe_core::domain::{Aggregation, AnalysisView, VehicleClass, XAxisMode};
use coe_core::pages::{
    AnalysisFilters, AnalysisPage, PremiumFilters, PremiumPage, SeasonalityFilters, SeasonalityPage,
};
use coe_utils::months::is_calendar_ordered;
use std::io::Write;
use std::path::PathBuf;

pub mod config;
pub mod fetch;
pub mod output;

use config::{FileConfig, Overrides, Settings};
use fetch::fetch_page;
use output::OutputFormat;

/// Flags shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// TOML config file (defaults to ./coe.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Analytics API origin, e.g. http://127.0.0.1:8000
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

/// Year range flags shared by every page.
#[derive(Args, Debug, Clone, Default)]
pub struct YearArgs {
    #[arg(long)]
    pub start_year: Option<i32>,

    #[arg(long)]
    pub end_year: Option<i32>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Monthly quota and premium profile for one vehicle class
    Seasonality {
        /// "Category A" .. "Category D" (or just the letter)
        #[arg(long)]
        vehicle_class: Option<VehicleClass>,

        #[command(flatten)]
        years: YearArgs,

        /// mean or median
        #[arg(long)]
        aggregation: Option<Aggregation>,

        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Premium distribution histogram or quota/premium scatter
    Analysis {
        /// "ALL" or "Category A" .. "Category E"
        #[arg(long)]
        vehicle_class: Option<VehicleClass>,

        #[command(flatten)]
        years: YearArgs,

        /// histogram or scatter
        #[arg(long, default_value = "histogram")]
        view: AnalysisView,

        /// Histogram bucket count
        #[arg(long)]
        bins: Option<usize>,

        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Premium against its moving average
    Premium {
        /// "ALL" or "Category A" .. "Category D"
        #[arg(long)]
        vehicle_class: Option<VehicleClass>,

        /// Moving-average window in periods
        #[arg(long, allow_negative_numbers = true)]
        window: Option<i64>,

        /// Year or Month
        #[arg(long)]
        x_axis_mode: Option<XAxisMode>,

        #[command(flatten)]
        years: YearArgs,

        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}

impl Command {
    fn bins(&self) -> Option<usize> {
        match self {
            Command::Analysis { bins, .. } => *bins,
            _ => None,
        }
    }
}

fn apply_years(years: &YearArgs, start_year: &mut i32, end_year: &mut i32) {
    if let Some(start) = years.start_year {
        *start_year = start;
    }
    if let Some(end) = years.end_year {
        *end_year = end;
    }
}

/// Run `command`, printing to stdout.
pub async fn run(global: GlobalArgs, command: Command) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_output(global, command, &mut out).await
}

/// Run `command`, writing the rendered result to `out`.
pub async fn run_with_output(
    global: GlobalArgs,
    command: Command,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let file = FileConfig::discover(global.config.as_deref())?;
    let settings = Settings::resolve(
        file,
        Overrides {
            base_url: global.base_url,
            timeout_secs: global.timeout,
            bins: command.bins(),
        },
    )?;

    let mut client_config = ClientConfig::new(&settings.base_url)?;
    client_config.timeout = Some(settings.timeout);
    let client = ApiClient::new(client_config)?;

    match command {
        Command::Seasonality {
            vehicle_class,
            years,
            aggregation,
            format,
        } => {
            let mut filters = SeasonalityFilters::default();
            if let Some(class) = vehicle_class {
                filters.vehicle_class = class;
            }
            if let Some(aggregation) = aggregation {
                filters.aggregation = aggregation;
            }
            apply_years(&years, &mut filters.start_year, &mut filters.end_year);

            let payload = fetch_page::<SeasonalityPage>(&client, filters).await?;
            if !is_calendar_ordered(payload.data.iter().map(|r| r.month_name.as_str())) {
                log::warn!("[COE] seasonality rows are not in calendar order");
            }
            output::write_seasonality(out, &payload, format)
        }
        Command::Analysis {
            vehicle_class,
            years,
            view,
            format,
            ..
        } => {
            let mut filters = AnalysisFilters::default();
            if let Some(class) = vehicle_class {
                filters.vehicle_class = class;
            }
            apply_years(&years, &mut filters.start_year, &mut filters.end_year);

            let payload = fetch_page::<AnalysisPage>(&client, filters).await?;
            output::write_analysis(out, &payload, view, settings.bins, format)
        }
        Command::Premium {
            vehicle_class,
            window,
            x_axis_mode,
            years,
            format,
        } => {
            let mut filters = PremiumFilters::default();
            if let Some(class) = vehicle_class {
                filters.vehicle_class = class;
            }
            if let Some(window) = window {
                filters.window = window;
            }
            if let Some(mode) = x_axis_mode {
                filters.x_axis_mode = mode;
            }
            apply_years(&years, &mut filters.start_year, &mut filters.end_year);

            let payload = fetch_page::<PremiumPage>(&client, filters).await?;
            output::write_premium(out, &payload, format)
        }
    }
}
