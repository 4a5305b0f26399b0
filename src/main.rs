use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process;

use diglot::alignment::build_grid;
use diglot::config::load_config_from_file;
use diglot::engine::Engine;
use diglot::error::{DiglotError, Result};
use diglot::identity::resolve_all;
use diglot::preprocess::substitute_quotes;
use diglot::render::render;
use diglot::types::scripture::{CvIndex, DocumentMeta, TranslationId};

const USAGE: &str = "diglot <config.json> <output.html>";

/// Merges parsed scripture translations into one side-by-side HTML
/// comparison table, aligned on the first translation in the config.
#[derive(Parser, Debug)]
#[command(name = "diglot")]
struct Cli {
    /// Path to the run configuration (JSON).
    config: PathBuf,
    /// Path the HTML comparison table is written to.
    output: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err)
            if matches!(
                err.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) =>
        {
            err.exit()
        }
        Err(_) => {
            eprintln!("Wrong number of arguments\n{USAGE}");
            process::exit(1);
        }
    };

    if let Err(err) = run(&cli) {
        eprintln!("{err}\n{USAGE}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config_from_file(&cli.config)?;

    let mut engine = Engine::new();
    for translation in &config.translations {
        // Paths resolve relative to the invocation's working directory.
        let raw = fs::read_to_string(&translation.path).map_err(|e| DiglotError::SourceRead {
            path: translation.path.clone(),
            message: e.to_string(),
        })?;
        let content = if config.typographic_quotes {
            substitute_quotes(&raw)
        } else {
            raw
        };
        engine.import_document(
            DocumentMeta {
                lang: translation.lang.clone(),
                abbr: translation.abbr.clone(),
            },
            &content,
        );
    }

    let column_ids = resolve_all(&config.translations, config.id_policy)?;
    let reference_id = &column_ids[0];

    let doc_sets = engine.doc_sets();
    let reference = doc_sets
        .iter()
        .find(|ds| ds.resolved_id(config.id_policy) == *reference_id)
        .ok_or_else(|| DiglotError::ReferenceNotFound(reference_id.clone()))?;
    let others: Vec<(TranslationId, &[CvIndex])> = doc_sets
        .iter()
        .filter(|ds| ds.resolved_id(config.id_policy) != *reference_id)
        .map(|ds| (ds.resolved_id(config.id_policy), ds.cv_indexes.as_slice()))
        .collect();

    let grid = build_grid(reference_id, &reference.cv_indexes, &others);
    let html = render(&grid, &column_ids);

    fs::write(&cli.output, html).map_err(|e| DiglotError::OutputWrite {
        path: cli.output.display().to_string(),
        message: e.to_string(),
    })?;
    println!("Wrote comparison table to {}", cli.output.display());
    Ok(())
}
