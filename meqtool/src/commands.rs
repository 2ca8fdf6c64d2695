use super::{OutputArgs, PathOrStd};
use clap::{Args, Subcommand};
use meq_solver::MarketQuery;

pub mod explain;
pub mod solve;

#[derive(Subcommand)]
pub enum Commands {
    /// Solve the market and report equilibria and the price table
    Solve {
        #[command(flatten)]
        market: MarketArgs,

        #[command(flatten)]
        io: OutputArgs,

        /// Emit the full analysis as JSON instead of a text report
        #[arg(short, long)]
        json: bool,
    },

    /// Emit the plot series as JSON for an external charting surface
    Series {
        #[command(flatten)]
        market: MarketArgs,

        #[command(flatten)]
        io: OutputArgs,
    },

    /// Solve the market and narrate the result in plain language
    Explain {
        #[command(flatten)]
        market: MarketArgs,

        #[command(flatten)]
        io: OutputArgs,
    },
}

// The market itself can be given inline via flags, or as a JSON query file
// for scripted use.
#[derive(Args)]
pub struct MarketArgs {
    /// Read the market query from a JSON file ("-" implies stdin)
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(PathOrStd),
        conflicts_with_all = ["demand", "supply", "demand_shift", "supply_shift"]
    )]
    input: Option<PathOrStd>,

    /// Demand equation, quantity as a function of price (e.g. "-P + 16")
    #[arg(short, long, required_unless_present = "input", allow_hyphen_values = true)]
    demand: Option<String>,

    /// Supply equation, quantity as a function of price (e.g. "P + 4")
    #[arg(short, long, required_unless_present = "input", allow_hyphen_values = true)]
    supply: Option<String>,

    /// Parallel shift applied to the demand intercept
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    demand_shift: f64,

    /// Parallel shift applied to the supply intercept
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    supply_shift: f64,
}

impl MarketArgs {
    pub fn query(&self) -> anyhow::Result<MarketQuery> {
        if let Some(input) = &self.input {
            Ok(serde_json::from_reader(input.read()?)?)
        } else {
            Ok(MarketQuery {
                demand: self.demand.clone().unwrap_or_default(),
                supply: self.supply.clone().unwrap_or_default(),
                demand_shift: self.demand_shift,
                supply_shift: self.supply_shift,
            })
        }
    }
}
