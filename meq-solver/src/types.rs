mod analysis;
pub use analysis::{MarketAnalysis, MarketCondition, MarketError};

mod query;
pub use query::MarketQuery;

mod series;
pub use series::{PlotSeries, SamplePoint};

mod table;
pub use table::TableRow;
