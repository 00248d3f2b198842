pub mod chart;
pub mod export;
pub mod summary;

pub use chart::{ChartData, TypeTotal};
pub use export::CSV_HEADER;
pub use summary::{CategoryTotal, Summary};
