pub mod batch;
pub mod cli;
pub mod costing;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod state;

pub use costing::{cost_recipe, derive_sheet, CostModel, EngineConfig};
pub use error::{CostError, Result};
pub use models::{RecipeCost, SheetCost};
pub use state::{Catalog, Snapshot};
