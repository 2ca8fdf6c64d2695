use super::{MarketQuery, PlotSeries, TableRow};
use meq_core::models::{Equilibrium, EquationError, NarrativeRequest, ParallelSlopes};

/// Everything the presentation layer needs for one market
///
/// Recomputed from scratch on every input change; nothing here carries
/// identity across recomputations.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketAnalysis {
    /// Equilibrium of the market as entered, when one exists
    pub base: Option<Equilibrium>,
    /// Equilibrium after shifts, when one exists. Always computed, even
    /// when both shifts are zero; display is gated separately.
    pub shifted: Option<Equilibrium>,
    /// Whether either shift is non-zero
    pub shifts_active: bool,
    /// A descriptive, non-fatal condition to surface alongside the results
    pub condition: Option<MarketCondition>,
    /// Sampled curve data for charting
    pub plot: PlotSeries,
    /// Display-formatted rows for tabulation
    pub table: Vec<TableRow>,
}

impl MarketAnalysis {
    /// The shifted equilibrium, suppressed when no shift is active
    ///
    /// With both shifts at zero the shifted solve duplicates the base solve,
    /// so presenting it as a distinct result would only be noise.
    pub fn display_shifted(&self) -> Option<&Equilibrium> {
        if self.shifts_active {
            self.shifted.as_ref()
        } else {
            None
        }
    }

    /// Builds the request the narrative service consumes
    pub fn narrative_request(&self, query: &MarketQuery) -> NarrativeRequest {
        NarrativeRequest {
            demand_equation: query.demand.clone(),
            supply_equation: query.supply.clone(),
            demand_shift: query.demand_shift,
            supply_shift: query.supply_shift,
            base: self.base,
            shifted: self.shifted,
        }
    }
}

/// Non-fatal conditions worth explaining to the user
///
/// These accompany an otherwise usable analysis: the curves still sample and
/// plot, but no equilibrium point can be highlighted.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarketCondition {
    /// Demand and supply slopes are equal, so no unique intersection exists
    #[error("demand and supply slopes are equal, so the curves never cross at a single point")]
    ParallelSlopes,
    /// Shifts are active but neither market clears in the valid region
    #[error(
        "neither the original nor the shifted market has an equilibrium at a non-negative price and quantity; try different shifts"
    )]
    NoViableEquilibrium,
}

impl From<ParallelSlopes> for MarketCondition {
    fn from(_: ParallelSlopes) -> Self {
        Self::ParallelSlopes
    }
}

/// Hard errors that prevent any analysis from being produced
///
/// Parse failures take precedence over solving: nothing downstream runs
/// until both equations read as linear curves. These are still user-facing
/// and never fatal to the process; the boundary layer reports the message
/// and accepts corrected input.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum MarketError {
    /// The demand equation (or its shift) did not produce a valid curve
    #[error("demand equation: {0}")]
    Demand(#[source] EquationError),
    /// The supply equation (or its shift) did not produce a valid curve
    #[error("supply equation: {0}")]
    Supply(#[source] EquationError),
}
