mod catalog;
mod persistence;

pub use catalog::{Catalog, Snapshot};
pub use persistence::{load_price_updates, load_snapshot, save_snapshot, PriceUpdate};
