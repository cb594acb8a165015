//! Folio CLI: chunk documents, inspect their structure, and query them
//! through the in-memory index.

mod config;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use folio_chunk::classifier::is_tabular;
use folio_chunk::sections::split_sections;
use folio_chunk::{ChunkerConfig, DocumentChunker};
use folio_index::PageLoader;
#[cfg(feature = "mock")]
use folio_index::{IngestionPipeline, MemoryIndex, Retriever, build_context, clause_references};

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Document chunking and retrieval for extracted text")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true, default_value = "folio.toml")]
    config: PathBuf,

    /// Verbose logging (debug level unless RUST_LOG is set)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Chunk a document and print a per-chunk summary
    Chunk {
        /// Input text or markdown file
        file: PathBuf,

        /// Write the full chunk records as pretty JSON
        #[arg(long)]
        output: Option<PathBuf>,

        /// Character bound per prose chunk
        #[arg(long)]
        max_chars: Option<usize>,

        /// Data-row bound per table chunk
        #[arg(long)]
        max_rows: Option<usize>,
    },

    /// List detected sections per page without chunking
    Outline {
        /// Input text or markdown file
        file: PathBuf,
    },

    /// Ingest into the in-memory index and ask questions against it
    #[cfg(feature = "mock")]
    Ask {
        /// Input text or markdown file
        file: PathBuf,

        /// Questions to ask about the document
        #[arg(required = true)]
        questions: Vec<String>,

        /// Number of chunks to retrieve per question
        #[arg(long)]
        top_k: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::load(&cli.config)?;

    match cli.command {
        Commands::Chunk {
            file,
            output,
            max_chars,
            max_rows,
        } => {
            let bounds = ChunkerConfig {
                max_chars: max_chars.unwrap_or(config.chunking.max_chars),
                max_rows: max_rows.unwrap_or(config.chunking.max_rows),
            };
            chunk_command(&config, &file, output.as_deref(), bounds).await
        }
        Commands::Outline { file } => outline_command(&config, &file).await,
        #[cfg(feature = "mock")]
        Commands::Ask {
            file,
            questions,
            top_k,
        } => {
            let top_k = top_k.unwrap_or(config.retrieval.top_k);
            ask_command(&config, &file, &questions, top_k).await
        }
    }
}

async fn chunk_command(
    config: &Config,
    file: &Path,
    output: Option<&Path>,
    bounds: ChunkerConfig,
) -> anyhow::Result<()> {
    let loader = PageLoader {
        max_file_size: config.loader.max_file_size,
    };
    let pages = loader.load(file).await?;
    let records = DocumentChunker::new(bounds).chunk_document(&pages, Some(file));
    tracing::info!(
        pages = pages.len(),
        chunks = records.len(),
        "chunked {}",
        file.display()
    );

    for record in &records {
        println!(
            "{:<26} {:<5} p{:<3} {:>6} chars  {}",
            record.chunk_id,
            record.kind,
            record.page_number,
            record.text.chars().count(),
            clip(&record.title, 40),
        );
    }
    println!("{} chunk(s) from {} page(s)", records.len(), pages.len());

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(&records)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!("wrote {} chunk record(s) to {}", records.len(), path.display());
    }
    Ok(())
}

async fn outline_command(config: &Config, file: &Path) -> anyhow::Result<()> {
    let loader = PageLoader {
        max_file_size: config.loader.max_file_size,
    };
    let pages = loader.load(file).await?;

    for (idx, page) in pages.iter().enumerate() {
        println!("Page {}", idx + 1);
        for section in split_sections(page) {
            let shape = if is_tabular(&section.content) {
                "table"
            } else {
                "prose"
            };
            println!(
                "  {:<5} {:>6} chars  {}",
                shape,
                section.content.chars().count(),
                clip(&section.title, 60),
            );
        }
    }
    Ok(())
}

#[cfg(feature = "mock")]
async fn ask_command(
    config: &Config,
    file: &Path,
    questions: &[String],
    top_k: usize,
) -> anyhow::Result<()> {
    let loader = PageLoader {
        max_file_size: config.loader.max_file_size,
    };
    let chunker = DocumentChunker::new(ChunkerConfig {
        max_chars: config.chunking.max_chars,
        max_rows: config.chunking.max_rows,
    });
    let pipeline = IngestionPipeline::new(loader, chunker, MemoryIndex::new());

    let report = pipeline.ingest_file(file).await?;
    if report.chunks_created == 0 {
        anyhow::bail!("no chunks produced from {}", file.display());
    }
    tracing::info!(
        pages = report.pages,
        chunks = report.chunks_created,
        "document ingested"
    );
    println!(
        "Ingested {} ({} chunks from {} pages)\n",
        report.document_name, report.chunks_created, report.pages
    );

    let retriever = Retriever::new(pipeline.index());
    for question in questions {
        println!("Q: {question}");
        let hits = retriever
            .retrieve(&report.document_id, question, top_k)
            .await?;
        if hits.is_empty() {
            println!("  no matching chunks\n");
            continue;
        }
        println!("{}", build_context(&hits));
        println!("References:");
        for reference in clause_references(&hits) {
            println!(
                "  - {} (page {}): {}",
                reference.title,
                reference.page_number,
                clip(&reference.text_snippet, 80),
            );
        }
        println!();
    }
    Ok(())
}

/// Clips `text` to at most `max_chars` chars for single-line display.
fn clip(text: &str, max_chars: usize) -> String {
    let flat = text.replace('\n', " ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let cut: String = flat.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{cut}...")
}
