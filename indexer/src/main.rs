use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indexer::{load_corpus_dir, read_word_list, write_report, OutputFormat};
use sentindex_core::{build_index, IndexConfig, LanguageModels, NoiseConfig};
use tracing_subscriber::{fmt, EnvFilter};

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Build a sentence-level inverted index over a directory of numbered text files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Index every numbered text file in a directory
    Build {
        /// Corpus directory
        #[arg(long)]
        input: PathBuf,
        /// Report file, or `-` for stdout
        #[arg(long, default_value = "output.csv")]
        output: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
        /// Extension that marks a file as text
        #[arg(long, default_value = "txt")]
        extension: String,
        /// How many of the most common English words to treat as noise
        #[arg(long, default_value_t = 1000)]
        common_words: usize,
        /// File with additional noise words, one per line
        #[arg(long)]
        extra_stopwords: Option<PathBuf>,
        /// Run on a single thread
        #[arg(long, default_value_t = false)]
        sequential: bool,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { input, output, format, extension, common_words, extra_stopwords, sequential } => {
            let extra_words = match extra_stopwords {
                Some(path) => read_word_list(&path).with_context(|| format!("reading stopwords from {}", path.display()))?,
                None => Vec::new(),
            };
            let noise = NoiseConfig { common_words, extra_words };
            let config = IndexConfig { text_extension: extension, parallel: !sequential };
            run_build(&input, &output, format, &noise, &config)
        }
    }
}

fn run_build(input: &Path, output: &str, format: OutputFormat, noise: &NoiseConfig, config: &IndexConfig) -> Result<()> {
    let files = load_corpus_dir(input).with_context(|| format!("loading corpus from {}", input.display()))?;
    let models = LanguageModels::english().with_noise_config(noise);
    let report = build_index(&files, &models, config).context("building index")?;

    if output == "-" {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_report(&report, format, &mut out)?;
        out.flush()?;
    } else {
        let file = File::create(output).with_context(|| format!("creating {output}"))?;
        let mut out = BufWriter::new(file);
        write_report(&report, format, &mut out)?;
        out.flush()?;
    }

    tracing::info!(output, rows = report.rows.len(), "report written");
    Ok(())
}
