pub mod output;
pub mod recost;

pub use output::{print_summary, report_json, write_csv};
pub use recost::{
    apply_price_updates, recost_all, write_back, Outcome, RecostReport, WriteBackSummary,
};
