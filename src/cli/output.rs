//! Output formatting for CLI commands.

use serde::Serialize;

use crate::catalog::scheme::Scheme;
use crate::catalog::village::Village;
use crate::chat::message::{ChatMessage, MessageKind};
use crate::cli::args::{OutputFormat, SahayakArgs};
use crate::error::Result;

/// Result structure for recommendation listings.
#[derive(Debug, Serialize)]
pub struct RecommendationListing<'a> {
    pub village: &'a str,
    pub schemes: &'a [Scheme],
}

/// Result structure for scheme listings.
#[derive(Debug, Serialize)]
pub struct SchemeListing<'a> {
    pub total: usize,
    pub schemes: &'a [&'a Scheme],
}

/// Result structure for village listings.
#[derive(Debug, Serialize)]
pub struct VillageListing<'a> {
    pub total: usize,
    pub villages: &'a [&'a Village],
}

/// Output a serializable result in the configured format.
///
/// Human output prints the message followed by a rendering hook supplied
/// by the caller; JSON output serializes the result as-is.
pub fn output_result<T, F>(message: &str, result: &T, args: &SahayakArgs, render: F) -> Result<()>
where
    T: Serialize,
    F: FnOnce(),
{
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 && !message.is_empty() {
                println!("{message}");
            }
            render();
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
pub fn output_json<T: Serialize>(result: &T, args: &SahayakArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

/// Print one transcript message, with its attached scheme cards.
pub fn print_message(message: &ChatMessage) {
    let prefix = match message.kind {
        MessageKind::User => "you",
        MessageKind::Bot => "sahayak",
        MessageKind::Suggestion => "sahayak",
    };
    println!("[{prefix}] {}", message.content);
    for scheme in &message.schemes {
        print_scheme_card(scheme);
    }
}

/// Print a compact scheme card.
pub fn print_scheme_card(scheme: &Scheme) {
    println!("  - {} ({})", scheme.name, scheme.category);
    if !scheme.full_name.is_empty() {
        println!("    {}", scheme.full_name);
    }
    if !scheme.description.is_empty() {
        println!("    {}", scheme.description);
    }
}

/// Print a detailed scheme entry for catalog listings.
pub fn print_scheme_details(scheme: &Scheme) {
    println!("{} [{}] - {}", scheme.id, scheme.category, scheme.name);
    if !scheme.full_name.is_empty() {
        println!("  {}", scheme.full_name);
    }
    if !scheme.description.is_empty() {
        println!("  {}", scheme.description);
    }
    if !scheme.benefits.is_empty() {
        println!("  Benefits:");
        for benefit in &scheme.benefits {
            println!("    - {benefit}");
        }
    }
    if !scheme.eligibility.is_empty() {
        println!("  Eligibility:");
        for eligibility in &scheme.eligibility {
            println!("    - {eligibility}");
        }
    }
}

/// Print a one-line village summary.
pub fn print_village_summary(village: &Village) {
    println!(
        "{} - {} ({}, {}), population {}, {}% tribal, {}% forest-dependent",
        village.id,
        village.name,
        village.district,
        village.state,
        village.population,
        village.tribal_population,
        village.forest_dependency
    );
}
