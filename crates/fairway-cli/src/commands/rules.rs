//! Rules command: list the available game formats.

use anyhow::Result;
use fairway_core::{HandicapPolicy, ScoringMethod};
use owo_colors::OwoColorize;
use strum::IntoEnumIterator;

fn print_policy(policy: HandicapPolicy) {
    println!(
        "  {:<12} {} - {}",
        policy.name().cyan(),
        policy.title(),
        policy.subtitle().dimmed()
    );
}

fn print_method(method: ScoringMethod) {
    let order = if method.lower_is_better() {
        "lower wins"
    } else {
        "higher wins"
    };
    println!(
        "  {:<12} {} ({}) - {}",
        method.name().cyan(),
        method.title(),
        order,
        method.subtitle().dimmed()
    );
}

/// Print every policy and method, or only the one named
pub fn run(policy: Option<&str>, method: Option<&str>) -> Result<()> {
    if let Some(name) = policy {
        print_policy(HandicapPolicy::from_name(name)?);
        return Ok(());
    }
    if let Some(name) = method {
        print_method(ScoringMethod::from_name(name)?);
        return Ok(());
    }

    println!("{}", "Handicap policies".bold());
    HandicapPolicy::iter().for_each(print_policy);
    println!();
    println!("{}", "Scoring methods".bold());
    ScoringMethod::iter().for_each(print_method);
    Ok(())
}
