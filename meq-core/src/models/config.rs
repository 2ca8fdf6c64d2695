/// Tunables for sampling curves into plot and table data.
///
/// The defaults reproduce the classroom behavior: 50 evenly spaced samples,
/// a quantity axis never shorter than 20 units, and a 0.01 tolerance for
/// matching a table row to an equilibrium quantity. The boundary layer may
/// layer file or environment overrides on top of these defaults.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SeriesConfig {
    /// How many evenly spaced quantity samples to take over `[0, q_max]`
    pub samples: usize,

    /// The smallest allowed quantity axis, guarding against degenerate
    /// ranges when curves sit near the origin
    pub min_quantity_range: f64,

    /// Baseline tolerance: used as-is to decide whether a table row is an
    /// equilibrium row, and scaled ×10 to decide whether a sampled quantity
    /// reads as an integer
    pub tolerance: f64,

    /// Axis headroom above the largest equilibrium quantity
    pub equilibrium_headroom: f64,

    /// Axis headroom above the largest positive quantity intercept, used
    /// when no equilibrium exists
    pub intercept_headroom: f64,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            samples: 50,
            min_quantity_range: 20.0,
            tolerance: 0.01,
            equilibrium_headroom: 1.5,
            intercept_headroom: 1.1,
        }
    }
}

impl SeriesConfig {
    /// The tolerance for "is this quantity visually an integer" checks
    pub fn integer_tolerance(&self) -> f64 {
        self.tolerance * 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SeriesConfig::default();
        assert_eq!(config.samples, 50);
        assert_eq!(config.min_quantity_range, 20.0);
        assert_eq!(config.tolerance, 0.01);
        assert_eq!(config.integer_tolerance(), 0.1);
    }

    #[test]
    fn test_partial_deserialization_falls_back_to_defaults() {
        let config: SeriesConfig = serde_json::from_str(r#"{"samples": 25}"#).unwrap();
        assert_eq!(config.samples, 25);
        assert_eq!(config.min_quantity_range, 20.0);
    }
}
