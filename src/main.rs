use std::path::Path;

use clap::Parser;

use menu_cost_rs::batch::{
    apply_price_updates, print_summary, recost_all, report_json, write_back, write_csv,
};
use menu_cost_rs::cli::{Cli, Command};
use menu_cost_rs::costing::{cost_recipe, derive_sheet, EngineConfig};
use menu_cost_rs::error::{CostError, Result};
use menu_cost_rs::interface::{display_recipe_cost, display_sheet_cost, prompt_yes_no, suggest_names};
use menu_cost_rs::logging;
use menu_cost_rs::models::{RecipeId, SheetId};
use menu_cost_rs::state::{load_price_updates, load_snapshot, save_snapshot, Catalog};

fn main() {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.engine_config();
    let path = cli.file.as_path();

    if !path.exists() {
        return Err(CostError::InvalidInput(format!(
            "snapshot file not found: {}",
            path.display()
        )));
    }

    let catalog = Catalog::new(load_snapshot(path)?);

    match cli.command {
        Command::Recipe { reference } => cmd_recipe(&catalog, &reference, &config, cli.json),
        Command::Sheet { reference } => cmd_sheet(&catalog, &reference, &config, cli.json),
        Command::Recost {
            write_back,
            csv,
            yes,
        } => cmd_recost(
            catalog,
            path,
            &config,
            write_back,
            csv.as_deref(),
            yes,
            cli.json,
        ),
        Command::Reprice { prices, yes } => cmd_reprice(catalog, path, &prices, &config, yes),
        Command::Check => cmd_check(&catalog),
    }
}

/// Reference error for an unknown name, listing close names if any.
fn not_found<'a>(kind: &str, reference: &str, names: impl Iterator<Item = &'a str>) -> CostError {
    let suggestions = suggest_names(reference, names, 3);
    if suggestions.is_empty() {
        CostError::InvalidReference(format!("{} '{}'", kind, reference))
    } else {
        CostError::InvalidReference(format!(
            "{} '{}' (did you mean: {}?)",
            kind,
            reference,
            suggestions.join(", ")
        ))
    }
}

fn resolve_recipe(catalog: &Catalog, reference: &str) -> Result<RecipeId> {
    if let Ok(id) = reference.parse::<u32>() {
        return Ok(RecipeId(id));
    }
    catalog
        .find_recipe(reference)
        .map(|r| r.id)
        .ok_or_else(|| not_found("recipe", reference, catalog.recipes().map(|r| r.name.as_str())))
}

fn resolve_sheet(catalog: &Catalog, reference: &str) -> Result<SheetId> {
    if let Ok(id) = reference.parse::<u32>() {
        return Ok(SheetId(id));
    }
    catalog
        .find_sheet(reference)
        .map(|s| s.id)
        .ok_or_else(|| not_found("sheet", reference, catalog.sheets().map(|s| s.name.as_str())))
}

/// Cost a single recipe.
fn cmd_recipe(catalog: &Catalog, reference: &str, config: &EngineConfig, json: bool) -> Result<()> {
    let id = resolve_recipe(catalog, reference)?;
    let cost = cost_recipe(catalog, id, config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&cost)?);
    } else {
        display_recipe_cost(&cost);
    }
    Ok(())
}

/// Derive a single technical sheet.
fn cmd_sheet(catalog: &Catalog, reference: &str, config: &EngineConfig, json: bool) -> Result<()> {
    let id = resolve_sheet(catalog, reference)?;
    let cost = derive_sheet(catalog, id, config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&cost)?);
    } else {
        display_sheet_cost(&cost);
    }
    Ok(())
}

/// Recompute everything, optionally persisting derived values.
fn cmd_recost(
    mut catalog: Catalog,
    path: &Path,
    config: &EngineConfig,
    persist: bool,
    csv: Option<&Path>,
    yes: bool,
    json: bool,
) -> Result<()> {
    let report = recost_all(&catalog, config);

    if json {
        println!("{}", serde_json::to_string_pretty(&report_json(&report))?);
    } else {
        print_summary(&report);
    }

    if let Some(csv_path) = csv {
        write_csv(&report, csv_path)?;
        println!("Wrote results to {}", csv_path.display());
    }

    if persist {
        let save = yes || prompt_yes_no("Write derived values back to the snapshot?", true)?;
        if save {
            let summary = write_back(&mut catalog, &report);
            save_snapshot(path, &catalog.to_snapshot())?;
            println!(
                "Snapshot saved ({} recipes, {} sheets updated, {} skipped).",
                summary.recipes_updated, summary.sheets_updated, summary.skipped
            );
        }
    }

    Ok(())
}

/// Apply price updates, recost, and save.
fn cmd_reprice(
    mut catalog: Catalog,
    path: &Path,
    prices: &Path,
    config: &EngineConfig,
    yes: bool,
) -> Result<()> {
    let updates = load_price_updates(prices)?;
    if updates.is_empty() {
        println!("No price updates in {}.", prices.display());
        return Ok(());
    }

    let applied = apply_price_updates(&mut catalog, &updates)?;
    println!("Applied {} price updates.", applied);

    let report = recost_all(&catalog, config);
    print_summary(&report);

    let save = yes || prompt_yes_no("Save updated prices and derived values?", true)?;
    if save {
        write_back(&mut catalog, &report);
        save_snapshot(path, &catalog.to_snapshot())?;
        println!("Snapshot saved.");
    }

    Ok(())
}

/// Report invalid ingredient data and dangling references.
fn cmd_check(catalog: &Catalog) -> Result<()> {
    if catalog.is_empty() {
        println!("Snapshot has no recipes or technical sheets.");
    } else {
        println!(
            "Checking {} recipes and {} technical sheets.",
            catalog.recipe_count(),
            catalog.sheet_count()
        );
    }

    let mut problems: Vec<String> = catalog
        .ingredients()
        .filter_map(|i| i.validate().err())
        .map(|e| e.to_string())
        .collect();
    problems.extend(catalog.dangling_references().iter().map(|e| e.to_string()));

    if problems.is_empty() {
        println!("Snapshot OK.");
        return Ok(());
    }

    println!("Found {} problems:", problems.len());
    for problem in &problems {
        println!("  - {}", problem);
    }

    Err(CostError::InvalidInput(format!(
        "{} problems in snapshot",
        problems.len()
    )))
}
