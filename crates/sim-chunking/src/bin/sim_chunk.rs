//! Chunk documents from the command line
//!
//! Run with: cargo run -p sim-chunking --bin sim-chunk -- --strategy semantic notes.md

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sim_chunking::processing::BatchChunker;
use sim_chunking::{ChunkedDocument, ChunkingStrategy, SimChunkingConfig, SourceDocument};

/// Split documents into chunks ready for embedding.
#[derive(Parser, Debug)]
#[command(name = "sim-chunk", version, about = "Split documents into chunks ready for embedding")]
struct Args {
    /// Files to chunk ("-" or nothing reads stdin)
    files: Vec<PathBuf>,

    /// Path to a TOML config file with [chunking] and [processing] sections
    #[arg(long)]
    config: Option<PathBuf>,

    /// Chunking strategy: fixed, sliding, semantic or adaptive (unknown names use fixed)
    #[arg(long)]
    strategy: Option<String>,

    /// Maximum chunk size in characters
    #[arg(long)]
    max_chunk_size: Option<usize>,

    /// Overlap between consecutive chunks in characters
    #[arg(long)]
    overlap_size: Option<usize>,

    /// Drop sliding-window chunks shorter than this
    #[arg(long)]
    min_chunk_size: Option<usize>,

    /// Snap chunk ends to sentence boundaries
    #[arg(long)]
    sentence_boundary: bool,

    /// Number of documents chunked in parallel
    #[arg(long, short = 'j')]
    jobs: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One array of documents with their chunks
    Json,
    /// One embedding metadata record per line
    Jsonl,
    /// Per-document statistics
    Summary,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sim_chunking=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(exit_status(&err))
        }
    }
}

/// Configuration problems exit with 2, everything else with 1
fn exit_status(err: &anyhow::Error) -> u8 {
    let is_configuration = err.chain().any(|cause| {
        cause
            .downcast_ref::<sim_chunking::Error>()
            .is_some_and(sim_chunking::Error::is_configuration)
    });
    if is_configuration {
        2
    } else {
        1
    }
}

fn run(args: Args) -> Result<()> {
    let config = resolve_config(&args)?;

    let documents = read_documents(&args.files)?;
    let chunker = BatchChunker::new(config.chunking, &config.processing)
        .context("Invalid chunking configuration")?;
    let results = chunker.chunk_all(&documents)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_output(&mut out, &results, args.format, args.pretty)?;
    out.flush()?;

    Ok(())
}

/// Load the config file, then apply command line overrides
fn resolve_config(args: &Args) -> Result<SimChunkingConfig> {
    let mut config = match &args.config {
        Some(path) => SimChunkingConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SimChunkingConfig::default(),
    };

    if let Some(strategy) = &args.strategy {
        config.chunking.strategy = ChunkingStrategy::parse_lossy(strategy);
    }
    if let Some(max_chunk_size) = args.max_chunk_size {
        config.chunking.max_chunk_size = max_chunk_size;
    }
    if let Some(overlap_size) = args.overlap_size {
        config.chunking.overlap_size = overlap_size;
    }
    if let Some(min_chunk_size) = args.min_chunk_size {
        config.chunking.min_chunk_size = Some(min_chunk_size);
    }
    if args.sentence_boundary {
        config.chunking.sentence_boundary = true;
    }
    if let Some(jobs) = args.jobs {
        config.processing.parallelism = Some(jobs);
    }

    config.validate().context("Invalid chunking configuration")?;
    Ok(config)
}

fn read_documents(files: &[PathBuf]) -> Result<Vec<SourceDocument>> {
    if files.is_empty() {
        return Ok(vec![read_stdin()?]);
    }

    files
        .iter()
        .map(|path| {
            if path.as_os_str() == "-" {
                return read_stdin();
            }
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok(SourceDocument::new(path.display().to_string(), text))
        })
        .collect()
}

fn read_stdin() -> Result<SourceDocument> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read stdin")?;
    Ok(SourceDocument::new("stdin", text))
}

fn write_output(
    out: &mut impl Write,
    results: &[ChunkedDocument],
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            if pretty {
                serde_json::to_writer_pretty(&mut *out, results)?;
            } else {
                serde_json::to_writer(&mut *out, results)?;
            }
            writeln!(out)?;
        }
        OutputFormat::Jsonl => {
            for record in results.iter().flat_map(ChunkedDocument::embedding_records) {
                serde_json::to_writer(&mut *out, &record)?;
                writeln!(out)?;
            }
        }
        OutputFormat::Summary => {
            for result in results {
                let summary = result.summary();
                let types: Vec<String> = summary
                    .by_type
                    .iter()
                    .map(|(kind, count)| format!("{}={}", kind, count))
                    .collect();
                writeln!(
                    out,
                    "{}: {} chunks, avg {:.1} chars (min {}, max {}), {} words [{}]",
                    result.document_id,
                    summary.chunk_count,
                    summary.avg_chars,
                    summary.min_chars,
                    summary.max_chars,
                    summary.total_words,
                    types.join(", ")
                )?;
            }
        }
    }

    Ok(())
}
