use crate::pipeline::MarketCurves;
use crate::types::{PlotSeries, SamplePoint, TableRow};
use meq_core::models::{Equilibrium, LinearCurve, SeriesConfig};

/// Derives the upper end of the quantity axis.
///
/// Preference order: headroom above the larger solved equilibrium quantity,
/// else headroom above the largest positive quantity intercept (the quantity
/// a curve yields at price zero), floored at the configured minimum either
/// way.
pub(crate) fn quantity_axis(
    curves: &MarketCurves,
    base: Option<Equilibrium>,
    shifted: Option<Equilibrium>,
    config: &SeriesConfig,
) -> f64 {
    let anchor = match (base, shifted) {
        (Some(b), Some(s)) => Some(config.equilibrium_headroom * b.quantity.max(s.quantity)),
        (Some(eq), None) | (None, Some(eq)) => Some(config.equilibrium_headroom * eq.quantity),
        (None, None) => {
            let intercept = [
                &curves.demand,
                &curves.supply,
                &curves.shifted_demand,
                &curves.shifted_supply,
            ]
            .iter()
            .map(|curve| curve.intercept())
            .filter(|q| *q > 0.0)
            .fold(f64::NAN, f64::max);
            intercept
                .is_finite()
                .then(|| config.intercept_headroom * intercept)
        }
    };

    anchor
        .unwrap_or(config.min_quantity_range)
        .max(config.min_quantity_range)
}

// The price a curve implies for a quantity, absent outside the valid region.
fn implied_price(curve: &LinearCurve, quantity: f64) -> Option<f64> {
    curve.price_at(quantity).filter(|price| *price >= 0.0)
}

fn sample(demand: &LinearCurve, supply: &LinearCurve, quantities: &[f64]) -> Vec<SamplePoint> {
    quantities
        .iter()
        .map(|&quantity| SamplePoint {
            quantity,
            demand: implied_price(demand, quantity),
            supply: implied_price(supply, quantity),
        })
        .collect()
}

/// Samples all four curves over `[0, q_max]` on a shared evenly spaced grid.
pub(crate) fn plot(curves: &MarketCurves, q_max: f64, config: &SeriesConfig) -> PlotSeries {
    let quantities = grid(q_max, config.samples);

    PlotSeries {
        base: sample(&curves.demand, &curves.supply, &quantities),
        shifted: sample(&curves.shifted_demand, &curves.shifted_supply, &quantities),
    }
}

fn grid(q_max: f64, samples: usize) -> Vec<f64> {
    let samples = samples.max(2);
    let step = q_max / (samples - 1) as f64;
    (0..samples).map(|i| step * i as f64).collect()
}

/// Builds the sparser tabulation rows.
///
/// Rows are the sampled quantities that read as round numbers, plus every
/// solved equilibrium quantity at full precision. Equilibrium rows keep two
/// decimals and are flagged for distinct rendering.
pub(crate) fn table(
    curves: &MarketCurves,
    base: Option<Equilibrium>,
    shifted: Option<Equilibrium>,
    q_max: f64,
    config: &SeriesConfig,
) -> Vec<TableRow> {
    let equilibria: Vec<f64> = base
        .iter()
        .chain(shifted.iter())
        .map(|eq| eq.quantity)
        .collect();

    let near_equilibrium =
        |q: f64, tol: f64| equilibria.iter().any(|&eq| (q - eq).abs() <= tol);

    let int_tol = config.integer_tolerance();
    let mut quantities: Vec<f64> = grid(q_max, config.samples)
        .into_iter()
        // Keep quantities that read as whole numbers (which covers exact
        // multiples of five as well).
        .filter(|&q| (q - q.round()).abs() <= int_tol)
        // Equilibrium quantities are inserted exactly below; drop any grid
        // value that would collide with one.
        .filter(|&q| !near_equilibrium(q, config.tolerance))
        .collect();

    quantities.extend(equilibria.iter().copied());
    quantities.sort_by(|a, b| a.total_cmp(b));
    quantities.dedup_by(|a, b| (*a - *b).abs() <= config.tolerance);

    quantities
        .into_iter()
        .map(|quantity| {
            let equilibrium = near_equilibrium(quantity, config.tolerance);
            let label = if equilibrium {
                format!("{quantity:.2}")
            } else {
                format!("{}", quantity.round() as i64)
            };
            TableRow {
                quantity,
                label,
                demand: implied_price(&curves.demand, quantity),
                supply: implied_price(&curves.supply, quantity),
                shifted_demand: implied_price(&curves.shifted_demand, quantity),
                shifted_supply: implied_price(&curves.shifted_supply, quantity),
                equilibrium,
            }
        })
        .collect()
}
