use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use schoolspace::{CampusType, CodeEdition, ComplianceMethod, FlexibilityLevel, ScienceConfig};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Schoolspace - minimum space program estimator for K-12 campuses
#[derive(Parser, Debug)]
#[command(name = "schoolspace")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the minimum space program for a campus
    Compute(ComputeArgs),

    /// Print the regulatory tables the calculators read
    Tables,

    /// Explain the compliance methods and the estimate's limits
    Explain {
        /// Short version (just the essentials)
        #[arg(long)]
        brief: bool,
    },
}

impl Commands {
    /// Command name used in JSON events
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Compute(_) => "compute",
            Commands::Tables => "tables",
            Commands::Explain { .. } => "explain",
        }
    }
}

/// Design criteria; every flag overrides the config file and environment
#[derive(Args, Debug, Default)]
pub struct ComputeArgs {
    /// Explicit config file (default: ./schoolspace.toml, then user config)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Complete program request as JSON
    #[arg(long, conflicts_with = "config")]
    pub request: Option<PathBuf>,

    /// Campus type
    #[arg(long, value_enum)]
    pub campus: Option<CampusType>,

    /// Maximum instructional capacity (students)
    #[arg(short, long, allow_negative_numbers = true)]
    pub enrollment: Option<i64>,

    /// Flexibility level (area-per-student tier)
    #[arg(short, long, value_enum)]
    pub flexibility: Option<FlexibilityLevel>,

    /// Students per classroom (clamped to the campus maximum)
    #[arg(long)]
    pub class_size: Option<u32>,

    /// Class periods per day (secondary campuses)
    #[arg(long)]
    pub periods: Option<u32>,

    /// Room utilization fraction, 0.5 to 1.0
    #[arg(long)]
    pub utilization: Option<f64>,

    /// Special-education share of enrollment, 0 to 0.5
    #[arg(long)]
    pub sped_pct: Option<f64>,

    /// Students per special-education room
    #[arg(long)]
    pub sped_room_cap: Option<u32>,

    /// Science room configuration (secondary campuses)
    #[arg(long, value_enum)]
    pub science: Option<ScienceConfig>,

    /// Elective or specialty rooms
    #[arg(long)]
    pub electives: Option<u32>,

    /// Compliance method
    #[arg(long, value_enum)]
    pub method: Option<ComplianceMethod>,

    /// Count half the cafeteria as instructional (qualitative method only)
    #[arg(long)]
    pub cafeteria_credit: bool,

    /// Drop a cafeteria credit requested by the config or request file
    #[arg(long, conflicts_with = "cafeteria_credit")]
    pub no_cafeteria_credit: bool,

    /// Adopted IBC edition
    #[arg(long, value_enum)]
    pub code_edition: Option<CodeEdition>,

    /// Net-to-gross factor override, 1.1 to 1.7
    #[arg(long)]
    pub net_to_gross: Option<f64>,

    /// Exit with status 2 when instructional area misses the standard
    #[arg(long)]
    pub fail_on_deficit: bool,
}
