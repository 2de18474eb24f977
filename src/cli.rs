use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::costing::{CostModel, EngineConfig, RoundingPolicy, MONEY_DECIMALS, PERCENT_DECIMALS};

/// menu_cost: recipe and technical-sheet costing with yield, portion cost and channel prices.
#[derive(Parser, Debug)]
#[command(name = "menu_cost")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the snapshot JSON file.
    #[arg(short, long, default_value = "snapshot.json", global = true)]
    pub file: PathBuf,

    /// Cost model for ingredients attached directly to a technical sheet.
    #[arg(long, value_enum, default_value_t = CostModel::CleanYield, global = true)]
    pub direct_model: CostModel,

    /// Decimal places for money and weight values.
    #[arg(long, default_value_t = MONEY_DECIMALS, global = true)]
    pub money_decimals: u32,

    /// Decimal places for percentages.
    #[arg(long, default_value_t = PERCENT_DECIMALS, global = true)]
    pub percent_decimals: u32,

    /// Print results as JSON instead of tables.
    #[arg(long, global = true)]
    pub json: bool,

    /// Default log level when RUST_LOG is not set.
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,
}

impl Cli {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            rounding: RoundingPolicy {
                money_decimals: self.money_decimals,
                percent_decimals: self.percent_decimals,
            },
            direct_ingredient_model: self.direct_model,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Cost a recipe (by id or name).
    Recipe {
        /// Recipe id or name.
        reference: String,
    },

    /// Derive yield, portion cost and channel prices of a technical sheet (by id or name).
    Sheet {
        /// Sheet id or name.
        reference: String,
    },

    /// Recompute every recipe and technical sheet.
    Recost {
        /// Write derived values back into the snapshot file.
        #[arg(long)]
        write_back: bool,

        /// Also write one row per entity to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Do not ask before writing the snapshot.
        #[arg(short, long)]
        yes: bool,
    },

    /// Apply ingredient price updates from a CSV file, then recost everything.
    Reprice {
        /// CSV with `ingredient_id,package_cost[,package_quantity]`.
        prices: PathBuf,

        /// Do not ask before writing the snapshot.
        #[arg(short, long)]
        yes: bool,
    },

    /// Check ingredient data and cross-references.
    Check,
}
