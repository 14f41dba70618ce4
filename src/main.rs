//! tfidf-neighbors - find the most similar documents of a corpus
//!
//! Loads a corpus file, builds the TF-IDF similarity model once, then answers
//! one query from the flags or reads identifiers from stdin until an empty
//! line, `quit` or `exit` (a line naming a document exactly is always a query).

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use serde::Serialize;

use tfidf_neighbors::{
    logging, Config, Corpus, CorpusSource, Hits, JsonFileSource, Result, SimilarityError,
    SimilarityModel,
};

#[derive(Parser, Debug)]
#[command(name = "tfidf-neighbors")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Corpus file: JSON array or JSON lines of {Title, Summary} records
    #[arg(long, short)]
    corpus: PathBuf,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of neighbors to list [default: ranking.default_k]
    #[arg(short = 'k', long = "top", value_name = "N")]
    k: Option<usize>,

    /// Identifier (title) of the query document
    #[arg(long, conflicts_with_all = ["index", "text"])]
    id: Option<String>,

    /// Position of the query document in the corpus
    #[arg(long, conflicts_with = "text")]
    index: Option<usize>,

    /// Rank the corpus against free text instead of a corpus document
    #[arg(long)]
    text: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

/// What the user picked
enum Selection {
    Identifier(String),
    Index(usize),
    Text(String),
}

#[derive(Serialize)]
struct NeighborOut<'a> {
    rank: usize,
    index: usize,
    identifier: &'a str,
    score: f64,
}

#[derive(Serialize)]
struct QueryOut<'a> {
    query: String,
    k: usize,
    neighbors: Vec<NeighborOut<'a>>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref()) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let start = Instant::now();
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let k = cli.k.unwrap_or(config.ranking.default_k);

    let corpus = JsonFileSource::new(&cli.corpus).load()?;
    let model: SimilarityModel = SimilarityModel::build_with(&corpus, &config)?;
    tracing::debug!(elapsed = ?start.elapsed(), "ready");

    let selection = if let Some(id) = &cli.id {
        Some(Selection::Identifier(id.clone()))
    } else if let Some(index) = cli.index {
        Some(Selection::Index(index))
    } else {
        cli.text.clone().map(Selection::Text)
    };

    match selection {
        Some(selection) => query(&model, &corpus, selection, k, cli.json),
        None => interactive(&model, &corpus, k, cli.json),
    }
}

/// Answer one query and print the result
fn query(
    model: &SimilarityModel,
    corpus: &Corpus,
    selection: Selection,
    k: usize,
    json: bool,
) -> Result<()> {
    let (label, hits) = match selection {
        Selection::Identifier(id) => {
            let hits = model.neighbors_of(corpus, &id, k)?;
            (id, hits)
        }
        Selection::Index(index) => {
            let hits = model.neighbors(index, k)?;
            (corpus.identifier(index)?.to_string(), hits)
        }
        Selection::Text(text) => {
            let hits = model.query_text(&text, k)?;
            (text, hits)
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        print_json(&mut out, corpus, label, k, &hits)
    } else {
        print_human(&mut out, corpus, &label, k, &hits)
    }
}

fn print_human(
    out: &mut impl Write,
    corpus: &Corpus,
    label: &str,
    k: usize,
    hits: &Hits,
) -> Result<()> {
    writeln!(out, "Top {} Similar Papers to {:?}:", k, label)?;
    for (rank, (identifier, score)) in hits.with_identifiers(corpus)?.into_iter().enumerate() {
        writeln!(out, "{:>3}. {} ({:.4})", rank + 1, identifier, score)?;
    }
    if hits.is_empty() {
        writeln!(out, "  (no other documents)")?;
    }
    Ok(())
}

fn print_json(
    out: &mut impl Write,
    corpus: &Corpus,
    label: String,
    k: usize,
    hits: &Hits,
) -> Result<()> {
    let neighbors = hits
        .iter()
        .enumerate()
        .map(|(rank, e)| {
            corpus.identifier(e.index).map(|identifier| NeighborOut {
                rank: rank + 1,
                index: e.index,
                identifier,
                score: e.score,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    let body = QueryOut {
        query: label,
        k,
        neighbors,
    };
    serde_json::to_writer_pretty(&mut *out, &body)?;
    writeln!(out)?;
    Ok(())
}

/// Read one identifier per line and answer each.
/// Lookup failures are reported and the loop continues.
fn interactive(model: &SimilarityModel, corpus: &Corpus, k: usize, json: bool) -> Result<()> {
    eprintln!(
        "{} papers loaded. Enter a title to find similar papers (empty line, quit or exit to stop).",
        corpus.len()
    );
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        eprint!("> ");
        io::stderr().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let Some(title) = resolve_title(corpus, &line) else { break };
        match query(model, corpus, Selection::Identifier(title.to_string()), k, json) {
            Ok(()) => {}
            Err(e @ SimilarityError::UnknownIdentifier { .. }) => eprintln!("error: {}", e),
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// Title to query for one input line, `None` to stop.
/// An exact identifier match wins over the stop words and over trimming.
fn resolve_title<'a>(corpus: &Corpus, line: &'a str) -> Option<&'a str> {
    if !line.is_empty() && corpus.index_of(line).is_ok() {
        return Some(line);
    }
    let title = line.trim();
    if title.is_empty() || title == "quit" || title == "exit" {
        return None;
    }
    Some(title)
}
