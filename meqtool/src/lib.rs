use clap::Parser;
use meq_core::models::FALLBACK_NARRATIVE;
use meq_core::ports::Narrator as _;
use meq_solver::analyze;
use std::io::Write as _;
use std::path::PathBuf;

mod io;
pub use io::*;

mod commands;
pub use commands::*;

mod config;
pub use config::AppConfig;

// The top-level arguments -- a shared config override plus the subcommand.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    /// A TOML file overriding the series tunables
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl BaseArgs {
    pub async fn evaluate(self) -> anyhow::Result<()> {
        let config = AppConfig::load(self.config.as_deref())?;
        tracing::debug!(?config, "loaded configuration");

        match self.command {
            Commands::Solve { market, io, json } => {
                let query = market.query()?;
                let analysis = analyze(&query, &config.series)?;
                let mut output = io.write()?;
                if json {
                    serde_json::to_writer_pretty(&mut output, &analysis)?;
                    writeln!(output)?;
                } else {
                    solve::render_text(&analysis, &mut output)?;
                }
            }
            Commands::Series { market, io } => {
                let query = market.query()?;
                let analysis = analyze(&query, &config.series)?;
                let mut output = io.write()?;
                serde_json::to_writer_pretty(&mut output, &analysis.plot)?;
                writeln!(output)?;
            }
            Commands::Explain { market, io } => {
                let query = market.query()?;
                let analysis = analyze(&query, &config.series)?;
                let request = analysis.narrative_request(&query);

                // The narrative is a side effect of presentation: if the
                // narrator fails we fall back to a fixed string, never to an
                // error.
                let narrative = explain::LocalNarrator
                    .explain(&request)
                    .await
                    .unwrap_or_else(|_| FALLBACK_NARRATIVE.to_string());

                let mut output = io.write()?;
                solve::render_text(&analysis, &mut output)?;
                writeln!(output)?;
                writeln!(output, "{narrative}")?;
            }
        }

        Ok(())
    }
}
