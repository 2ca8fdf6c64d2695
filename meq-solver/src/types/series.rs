/// Implied prices for one sampled quantity
///
/// A price is `None` when the curve cannot produce that quantity at a
/// non-negative price (or has no inverse at all). Consumers must treat
/// "no data" and "price of zero" differently, so absence is never encoded
/// as `0.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplePoint {
    /// The sampled quantity
    pub quantity: f64,
    /// Implied demand price at this quantity, if in the valid region
    pub demand: Option<f64>,
    /// Implied supply price at this quantity, if in the valid region
    pub supply: Option<f64>,
}

/// Sampled curve data for plotting, covering the base and shifted markets
///
/// Both sequences share the same quantity grid over `[0, q_max]`, so a
/// charting surface can overlay all four curves directly.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlotSeries {
    /// Samples of the curves as entered
    pub base: Vec<SamplePoint>,
    /// Samples of the curves with shifts applied
    pub shifted: Vec<SamplePoint>,
}
