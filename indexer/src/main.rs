use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use newsindex::{Index, Posting, RegisterError};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, EnvFilter};
use walkdir::WalkDir;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct InputArticle {
    url: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    body: String,
}

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Index news articles in memory and rank them by word occurrences", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Source {
    /// Input path (JSON/JSONL file or a directory of them)
    #[arg(long)]
    input: String,
    /// Stop-word file, one word per line
    #[arg(long)]
    stop_words: Option<String>,
    /// Word-table size hint (0 = default)
    #[arg(long, default_value_t = 0)]
    buckets: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank articles for a single word
    Query {
        #[command(flatten)]
        source: Source,
        /// Word to look up
        #[arg(long)]
        word: String,
        /// Number of articles to show
        #[arg(long, default_value_t = 10)]
        top: usize,
        /// Print results as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Read query words from stdin, one per line, until an empty line
    Repl {
        #[command(flatten)]
        source: Source,
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
}

#[derive(Debug, Default, PartialEq, Eq)]
struct IngestStats {
    indexed: usize,
    duplicates: usize,
    invalid: usize,
}

#[derive(Serialize)]
struct Hit<'a> {
    article_id: u32,
    count: u32,
    title: &'a str,
    url: &'a str,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Query { source, word, top, json } => {
            let index = build_index(&source)?;
            let hits = index.query_top_n(&word, top);
            let stdout = io::stdout();
            let mut out = stdout.lock();
            if json {
                serde_json::to_writer_pretty(&mut out, &render_hits(&index, &hits))?;
                writeln!(out)?;
            } else {
                print_hits(&mut out, &index, &word, &hits)?;
            }
            Ok(())
        }
        Commands::Repl { source, top } => {
            let index = build_index(&source)?;
            let stdin = io::stdin();
            repl(&index, stdin.lock(), io::stdout().lock(), top)
        }
    }
}

fn build_index(source: &Source) -> Result<Index> {
    let mut index = Index::with_capacity(source.buckets);
    if let Some(path) = &source.stop_words {
        index
            .load_stop_words(path)
            .with_context(|| format!("loading stop words from {path}"))?;
    }
    let stats = ingest_path(&mut index, Path::new(&source.input))?;
    tracing::info!(
        indexed = stats.indexed,
        duplicates = stats.duplicates,
        invalid = stats.invalid,
        words = index.num_words(),
        "ingested articles"
    );
    Ok(index)
}

fn ingest_path(index: &mut Index, input: &Path) -> Result<IngestStats> {
    let mut files: Vec<PathBuf> = Vec::new();
    if input.is_dir() {
        for entry in WalkDir::new(input).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() && matches!(p.extension().and_then(|s| s.to_str()), Some("json" | "jsonl")) {
                files.push(p.to_path_buf());
            }
        }
    } else if input.is_file() {
        files.push(input.to_path_buf());
    } else {
        anyhow::bail!("input path {} does not exist", input.display());
    }

    let mut stats = IngestStats::default();
    for file in files {
        let articles = if file.extension().and_then(|s| s.to_str()) == Some("jsonl") {
            read_jsonl(&file)?
        } else {
            read_json(&file)?
        };
        for article in articles {
            ingest_article(index, article, &mut stats);
        }
    }
    Ok(stats)
}

fn read_jsonl(file: &Path) -> Result<Vec<InputArticle>> {
    let reader = BufReader::new(File::open(file).with_context(|| format!("opening {}", file.display()))?);
    let mut out = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let article = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: malformed article", file.display(), lineno + 1))?;
        out.push(article);
    }
    Ok(out)
}

fn read_json(file: &Path) -> Result<Vec<InputArticle>> {
    let reader = BufReader::new(File::open(file).with_context(|| format!("opening {}", file.display()))?);
    let json: serde_json::Value = serde_json::from_reader(reader)?;
    let articles: Vec<InputArticle> = match json {
        serde_json::Value::Array(arr) => arr
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<_>, _>>()?,
        v @ serde_json::Value::Object(_) => vec![serde_json::from_value(v)?],
        _ => Vec::new(),
    };
    Ok(articles)
}

fn ingest_article(index: &mut Index, article: InputArticle, stats: &mut IngestStats) {
    match index.ingest(&article.url, article.title.as_deref(), &article.body) {
        Ok(_) => stats.indexed += 1,
        Err(RegisterError::MissingUrl | RegisterError::TooManyArticles) => stats.invalid += 1,
        Err(_) => stats.duplicates += 1,
    }
}

fn render_hits<'a>(index: &'a Index, hits: &[Posting]) -> Vec<Hit<'a>> {
    hits.iter()
        .map(|p| Hit {
            article_id: p.article_id,
            count: p.count,
            title: index.article_title(p.article_id).unwrap_or(""),
            url: index.article_url(p.article_id).unwrap_or(""),
        })
        .collect()
}

fn print_hits<W: Write>(out: &mut W, index: &Index, word: &str, hits: &[Posting]) -> io::Result<()> {
    if hits.is_empty() {
        if index.is_stop_word(word) {
            writeln!(out, "\"{word}\" is a stop word and is not indexed.")?;
        } else {
            writeln!(out, "No articles contain \"{word}\".")?;
        }
        return Ok(());
    }
    writeln!(out, "Top {} article(s) for \"{word}\":", hits.len())?;
    for (rank, hit) in render_hits(index, hits).iter().enumerate() {
        let title = if hit.title.is_empty() { "[no title]" } else { hit.title };
        let times = if hit.count == 1 { "time" } else { "times" };
        writeln!(out, "{:>3}.) \"{}\" [appears {} {}]", rank + 1, title, hit.count, times)?;
        writeln!(out, "      \"{}\"", hit.url)?;
    }
    Ok(())
}

fn repl<R: BufRead, W: Write>(index: &Index, input: R, mut out: W, top: usize) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            break;
        }
        let hits = index.query_top_n(word, top);
        print_hits(&mut out, index, word, &hits)?;
        out.flush()?;
    }
    Ok(())
}
