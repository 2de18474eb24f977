use std::path::Path;

use rust_decimal::Decimal;

use crate::batch::recost::RecostReport;
use crate::error::Result;

fn opt(value: Option<Decimal>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Write one row per recipe and sheet to a CSV file.
pub fn write_csv(report: &RecostReport, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "kind",
        "id",
        "name",
        "status",
        "total_cost",
        "cost_per_portion",
        "finalized_yield",
        "suggested_price",
        "error",
    ])?;

    for outcome in &report.recipes {
        let row = match &outcome.result {
            Ok(cost) => [
                "recipe".to_string(),
                outcome.id.0.to_string(),
                outcome.name.clone(),
                "ok".to_string(),
                cost.total_cost.to_string(),
                cost.cost_per_portion.to_string(),
                String::new(),
                String::new(),
                String::new(),
            ],
            Err(e) => [
                "recipe".to_string(),
                outcome.id.0.to_string(),
                outcome.name.clone(),
                "error".to_string(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                e.to_string(),
            ],
        };
        wtr.write_record(&row)?;
    }

    for outcome in &report.sheets {
        let row = match &outcome.result {
            Ok(cost) => [
                "sheet".to_string(),
                outcome.id.0.to_string(),
                outcome.name.clone(),
                "ok".to_string(),
                cost.total_cost.to_string(),
                cost.cost_per_portion.to_string(),
                opt(cost.finalized_yield),
                opt(cost.suggested_price),
                String::new(),
            ],
            Err(e) => [
                "sheet".to_string(),
                outcome.id.0.to_string(),
                outcome.name.clone(),
                "error".to_string(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                e.to_string(),
            ],
        };
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Serializable view of a report, failures as messages.
pub fn report_json(report: &RecostReport) -> serde_json::Value {
    let entry = |kind: &str, id: u32, name: &str, value: std::result::Result<serde_json::Value, String>| {
        match value {
            Ok(cost) => serde_json::json!({ "kind": kind, "id": id, "name": name, "cost": cost }),
            Err(error) => {
                serde_json::json!({ "kind": kind, "id": id, "name": name, "error": error })
            }
        }
    };

    let recipes = report.recipes.iter().map(|o| {
        let value = match &o.result {
            Ok(cost) => serde_json::to_value(cost).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };
        entry("recipe", o.id.0, &o.name, value)
    });
    let sheets = report.sheets.iter().map(|o| {
        let value = match &o.result {
            Ok(cost) => serde_json::to_value(cost).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };
        entry("sheet", o.id.0, &o.name, value)
    });

    serde_json::Value::Array(recipes.chain(sheets).collect())
}

/// Print a one-line-per-entity summary to stdout.
pub fn print_summary(report: &RecostReport) {
    println!(
        "\n=== Recost: {} ok, {} failed ===\n",
        report.successes(),
        report.failures()
    );

    for outcome in &report.recipes {
        match &outcome.result {
            Ok(cost) => println!(
                "  recipe {:>4}  {:<30} total {:>12}  portion {:>12}",
                outcome.id.0, outcome.name, cost.total_cost, cost.cost_per_portion
            ),
            Err(e) => println!("  recipe {:>4}  {:<30} FAILED: {}", outcome.id.0, outcome.name, e),
        }
    }

    for outcome in &report.sheets {
        match &outcome.result {
            Ok(cost) => println!(
                "  sheet  {:>4}  {:<30} total {:>12}  portion {:>12}",
                outcome.id.0, outcome.name, cost.total_cost, cost.cost_per_portion
            ),
            Err(e) => println!("  sheet  {:>4}  {:<30} FAILED: {}", outcome.id.0, outcome.name, e),
        }
    }

    println!();
}
