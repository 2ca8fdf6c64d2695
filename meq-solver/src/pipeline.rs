use crate::series;
use crate::types::{MarketAnalysis, MarketCondition, MarketError, MarketQuery};
use meq_core::models::{Equilibrium, LinearCurve, SeriesConfig};

/// The four resolved curves of a market: both sides as entered, and both
/// sides with their shifts applied
///
/// Shifting is a pure parallel displacement, so each shifted curve shares
/// its slope with its base curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarketCurves {
    /// Demand as entered
    pub demand: LinearCurve,
    /// Supply as entered
    pub supply: LinearCurve,
    /// Demand with the demand shift applied
    pub shifted_demand: LinearCurve,
    /// Supply with the supply shift applied
    pub shifted_supply: LinearCurve,
}

impl MarketCurves {
    /// Parses both equations and applies both shifts.
    ///
    /// Failures name the side of the market they occurred on, so the user
    /// knows which input to correct.
    pub fn resolve(query: &MarketQuery) -> Result<Self, MarketError> {
        let demand: LinearCurve = query.demand.parse().map_err(MarketError::Demand)?;
        let supply: LinearCurve = query.supply.parse().map_err(MarketError::Supply)?;

        let shifted_demand = demand.shifted(query.demand_shift).map_err(MarketError::Demand)?;
        let shifted_supply = supply.shifted(query.supply_shift).map_err(MarketError::Supply)?;

        Ok(Self {
            demand,
            supply,
            shifted_demand,
            shifted_supply,
        })
    }
}

/// Runs the full pipeline for one set of inputs.
///
/// Parse both equations, solve the base and shifted equilibria (the shifted
/// solve always runs, even with zero shifts), then sample all four curves
/// for plotting and tabulation. The transform is pure and deterministic:
/// identical inputs always produce identical output.
pub fn analyze(query: &MarketQuery, config: &SeriesConfig) -> Result<MarketAnalysis, MarketError> {
    let curves = MarketCurves::resolve(query)?;
    let shifts_active = query.shifts_active();

    let base = Equilibrium::solve(&curves.demand, &curves.supply);
    let shifted = Equilibrium::solve(&curves.shifted_demand, &curves.shifted_supply);

    let (base, shifted, condition) = match (base, shifted) {
        // Shifts never change a slope, so parallel slopes affect both
        // markets at once.
        (Err(parallel), _) | (_, Err(parallel)) => (None, None, Some(parallel.into())),
        (Ok(base), Ok(shifted)) => {
            let condition = if shifts_active && base.is_none() && shifted.is_none() {
                Some(MarketCondition::NoViableEquilibrium)
            } else {
                None
            };
            (base, shifted, condition)
        }
    };

    let q_max = series::quantity_axis(&curves, base, shifted, config);
    tracing::debug!(q_max, ?base, ?shifted, "solved market");

    let plot = series::plot(&curves, q_max, config);
    let table = series::table(&curves, base, shifted, q_max, config);

    Ok(MarketAnalysis {
        base,
        shifted,
        shifts_active,
        condition,
        plot,
        table,
    })
}
