use dialoguer::Confirm;
use strsim::jaro_winkler;

use crate::error::Result;

/// Minimum Jaro-Winkler similarity for a name suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Up to `limit` names closest to `input`, best first.
pub fn suggest_names<'a, I>(input: &str, names: I, limit: usize) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = input.to_lowercase();

    let mut candidates: Vec<(&str, f64)> = names
        .into_iter()
        .map(|name| (name, jaro_winkler(&name.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.into_iter().take(limit).map(|(n, _)| n).collect()
}
