//! Command implementations for the Sahayak CLI.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use crate::catalog::catalog::{SchemeCatalog, VillageCatalog};
use crate::catalog::loader;
use crate::catalog::scheme::Scheme;
use crate::catalog::village::Village;
use crate::chat::session::{ChatSession, DEFAULT_PROMPTS};
use crate::classify::classifier::QueryClassifier;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, SahayakError};
use crate::recommend::engine::RecommendationEngine;

/// Execute a CLI command.
pub fn execute_command(args: SahayakArgs) -> Result<()> {
    match &args.command {
        Command::Ask(ask_args) => ask(ask_args.clone(), &args),
        Command::Chat(chat_args) => chat(chat_args.clone(), &args),
        Command::Recommend(recommend_args) => recommend(recommend_args.clone(), &args),
        Command::Schemes(schemes_args) => list_schemes(schemes_args.clone(), &args),
        Command::Villages(villages_args) => list_villages(villages_args.clone(), &args),
    }
}

/// Load both catalogs from the configured paths.
fn load_catalogs(args: &SahayakArgs) -> Result<(Arc<SchemeCatalog>, Arc<VillageCatalog>)> {
    if args.verbosity() > 1 {
        println!("Loading schemes from: {}", args.schemes.display());
        println!("Loading villages from: {}", args.villages.display());
    }
    let schemes = Arc::new(loader::load_schemes_from_file(&args.schemes)?);
    let villages = Arc::new(loader::load_villages_from_file(&args.villages)?);
    Ok((schemes, villages))
}

/// Answer a single question.
fn ask(args: AskArgs, cli_args: &SahayakArgs) -> Result<()> {
    let (schemes, villages) = load_catalogs(cli_args)?;

    if let Some(village_id) = &args.village {
        if villages.get(village_id).is_none() {
            return Err(SahayakError::not_found(format!("village '{village_id}'")));
        }
    }

    let classifier = QueryClassifier::new(schemes, villages);
    let response = classifier.classify(&args.query, args.village.as_deref());

    output_result("", &response, cli_args, || {
        println!("{}", response.text);
        for scheme in &response.schemes {
            print_scheme_card(scheme);
        }
    })
}

/// Run an interactive chat session over stdin.
///
/// Lines are treated as queries; `/village <id>` switches the selected
/// village and `/quit` ends the session.
fn chat(args: ChatArgs, cli_args: &SahayakArgs) -> Result<()> {
    let (schemes, villages) = load_catalogs(cli_args)?;
    let mut session = ChatSession::new(schemes, villages);
    let mut printed = 0;

    if let Some(village_id) = &args.village {
        session.select_village(village_id)?;
    }
    printed = flush_transcript(&session, printed);

    if cli_args.verbosity() > 0 {
        println!();
        println!("Try one of:");
        for prompt in DEFAULT_PROMPTS {
            println!("  {prompt}");
        }
        println!();
    }

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line == "/quit" || line == "/exit" {
            break;
        }
        if let Some(village_id) = line.strip_prefix("/village ") {
            match session.select_village(village_id.trim()) {
                Ok(()) => printed = flush_transcript(&session, printed),
                Err(e) => eprintln!("Error: {e}"),
            }
            continue;
        }

        session.ask(line);
        printed = flush_transcript(&session, printed);
    }

    Ok(())
}

/// Print transcript messages that have not been shown yet.
fn flush_transcript(session: &ChatSession, printed: usize) -> usize {
    let transcript = session.transcript();
    for message in &transcript[printed..] {
        print_message(message);
    }
    transcript.len()
}

/// Recommend schemes for one village.
fn recommend(args: RecommendArgs, cli_args: &SahayakArgs) -> Result<()> {
    let (schemes, villages) = load_catalogs(cli_args)?;

    let village = villages
        .get(&args.village)
        .ok_or_else(|| SahayakError::not_found(format!("village '{}'", args.village)))?;

    let engine = RecommendationEngine::new(Arc::clone(&schemes));
    let mut recommendations = engine.recommend(village);
    if let Some(limit) = args.limit {
        recommendations.truncate(limit);
    }

    let listing = RecommendationListing {
        village: &village.id,
        schemes: &recommendations,
    };
    output_result(
        &format!("Recommended schemes for {}:", village.name),
        &listing,
        cli_args,
        || {
            for scheme in &recommendations {
                print_scheme_card(scheme);
            }
        },
    )
}

/// List schemes, optionally filtered by category.
fn list_schemes(args: SchemesArgs, cli_args: &SahayakArgs) -> Result<()> {
    let schemes = Arc::new(loader::load_schemes_from_file(&cli_args.schemes)?);

    let filtered: Vec<&Scheme> = match &args.category {
        Some(category) => schemes.by_category(category.parse()?).collect(),
        None => schemes.iter().collect(),
    };

    let listing = SchemeListing {
        total: filtered.len(),
        schemes: &filtered,
    };
    output_result(
        &format!("{} schemes:", filtered.len()),
        &listing,
        cli_args,
        || {
            for scheme in &filtered {
                print_scheme_details(scheme);
            }
        },
    )
}

/// List all villages.
fn list_villages(_args: VillagesArgs, cli_args: &SahayakArgs) -> Result<()> {
    let villages = Arc::new(loader::load_villages_from_file(&cli_args.villages)?);

    let all: Vec<&Village> = villages.iter().collect();
    let listing = VillageListing {
        total: all.len(),
        villages: &all,
    };
    output_result(
        &format!("{} villages:", all.len()),
        &listing,
        cli_args,
        || {
            for village in &all {
                print_village_summary(village);
            }
        },
    )
}
