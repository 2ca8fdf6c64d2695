use approx::assert_abs_diff_eq;
use meq_core::models::SeriesConfig;
use meq_solver::{MarketCondition, MarketError, MarketQuery, analyze};
use rstest::*;

#[fixture]
fn config() -> SeriesConfig {
    SeriesConfig::default()
}

// The running example: demand 16 - p, supply 4 + p, clearing at (6, 10).
#[fixture]
fn textbook() -> MarketQuery {
    MarketQuery::new("-P + 16", "P + 4")
}

#[rstest]
fn solves_the_textbook_market(textbook: MarketQuery, config: SeriesConfig) {
    let analysis = analyze(&textbook, &config).unwrap();

    let base = analysis.base.unwrap();
    assert_abs_diff_eq!(base.price, 6.0, epsilon = 1e-12);
    assert_abs_diff_eq!(base.quantity, 10.0, epsilon = 1e-12);

    assert!(analysis.condition.is_none());
    assert!(!analysis.shifts_active);
}

#[rstest]
fn shifted_solve_always_runs_but_display_is_gated(textbook: MarketQuery, config: SeriesConfig) {
    let analysis = analyze(&textbook, &config).unwrap();

    // Zero shifts: the shifted equilibrium is still computed...
    assert_eq!(analysis.shifted, analysis.base);
    // ...but not presented as a distinct result.
    assert!(analysis.display_shifted().is_none());
}

#[rstest]
fn applies_a_demand_shift(mut textbook: MarketQuery, config: SeriesConfig) {
    textbook.demand_shift = 4.0;
    let analysis = analyze(&textbook, &config).unwrap();

    let shifted = analysis.display_shifted().unwrap();
    assert_abs_diff_eq!(shifted.price, 8.0, epsilon = 1e-12);
    assert_abs_diff_eq!(shifted.quantity, 12.0, epsilon = 1e-12);

    // The base market is untouched by the shift.
    let base = analysis.base.unwrap();
    assert_abs_diff_eq!(base.price, 6.0, epsilon = 1e-12);
    assert_abs_diff_eq!(base.quantity, 10.0, epsilon = 1e-12);
}

#[rstest]
fn parallel_slopes_surface_a_condition(config: SeriesConfig) {
    let query = MarketQuery::new("P + 10", "P + 4");
    let analysis = analyze(&query, &config).unwrap();

    assert_eq!(analysis.base, None);
    assert_eq!(analysis.shifted, None);
    assert_eq!(analysis.condition, Some(MarketCondition::ParallelSlopes));
    assert!(!analysis.condition.unwrap().to_string().is_empty());

    // The curves still sample; only the intersection is missing.
    assert!(analysis.plot.base.iter().any(|p| p.supply.is_some()));
}

#[rstest]
fn negative_intersection_is_absent_not_negative(config: SeriesConfig) {
    // These cross at a negative price.
    let query = MarketQuery::new("-P + 2", "P + 8");
    let analysis = analyze(&query, &config).unwrap();

    assert_eq!(analysis.base, None);
    assert_eq!(analysis.shifted, None);
    // No shifts, so silence is acceptable here.
    assert_eq!(analysis.condition, None);
}

#[rstest]
fn active_shifts_without_any_equilibrium_are_explained(config: SeriesConfig) {
    let mut query = MarketQuery::new("-P + 2", "P + 8");
    query.supply_shift = 1.0;
    let analysis = analyze(&query, &config).unwrap();

    assert_eq!(
        analysis.condition,
        Some(MarketCondition::NoViableEquilibrium)
    );
}

#[rstest]
fn parse_errors_take_precedence(config: SeriesConfig) {
    // Both sides are malformed; demand is reported first.
    let query = MarketQuery::new("abc", "def");
    assert!(matches!(
        analyze(&query, &config),
        Err(MarketError::Demand(_))
    ));

    let query = MarketQuery::new("-P + 16", "def");
    assert!(matches!(
        analyze(&query, &config),
        Err(MarketError::Supply(_))
    ));
}

#[rstest]
fn non_finite_shift_is_an_input_error(mut textbook: MarketQuery, config: SeriesConfig) {
    textbook.supply_shift = f64::INFINITY;
    assert!(matches!(
        analyze(&textbook, &config),
        Err(MarketError::Supply(_))
    ));
}

#[rstest]
fn analysis_is_idempotent(mut textbook: MarketQuery, config: SeriesConfig) {
    textbook.demand_shift = 4.0;
    let first = analyze(&textbook, &config).unwrap();
    let second = analyze(&textbook, &config).unwrap();
    assert_eq!(first, second);
}

#[rstest]
fn analysis_round_trips_through_json(textbook: MarketQuery, config: SeriesConfig) {
    let analysis = analyze(&textbook, &config).unwrap();
    let raw = serde_json::to_string(&analysis).unwrap();
    let back: meq_solver::MarketAnalysis = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, analysis);
}

#[rstest]
fn narrative_request_mirrors_inputs_and_results(mut textbook: MarketQuery, config: SeriesConfig) {
    textbook.demand_shift = 4.0;
    let analysis = analyze(&textbook, &config).unwrap();
    let request = analysis.narrative_request(&textbook);

    assert_eq!(request.demand_equation, "-P + 16");
    assert_eq!(request.supply_equation, "P + 4");
    assert_eq!(request.demand_shift, 4.0);
    assert_eq!(request.base, analysis.base);
    assert_eq!(request.shifted, analysis.shifted);
}
