use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::info;

use mathlib_divider::config::parse_word_list;
use mathlib_divider::output::{write_json, write_text};
use mathlib_divider::{divide_file, DivideError, DivideSummary, KeywordSets, Selection};

#[derive(Parser)]
#[command(
    name = "mathlib-divider",
    about = "Split mathlib source into sentences and extract commented theorems"
)]
struct Cli {
    /// Source file to divide
    input: PathBuf,

    /// Output file ("-" for stdout)
    #[arg(short, long, default_value = "mathlib_divided.txt")]
    output: PathBuf,

    /// JSON file with "whitelist" and/or "blacklist" arrays
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Theorem keywords, shell-quoted (e.g. "lemma theorem def")
    #[arg(long)]
    whitelist: Option<String>,

    /// Non-theorem keywords, shell-quoted (e.g. "meta add_tactic_doc")
    #[arg(long)]
    blacklist: Option<String>,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Keep every sentence, not just commented theorems
    #[arg(long)]
    all: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), DivideError> {
    let keywords = resolve_keywords(cli)?;
    let selection = if cli.all {
        Selection::All
    } else {
        Selection::TheoremsWithComments
    };

    let sentences = divide_file(&cli.input, &keywords)?;
    let summary = DivideSummary::of(&sentences, selection);
    info!(
        sentences = summary.sentences,
        theorems = summary.theorems,
        commented = summary.commented,
        retained = summary.retained,
        "divided {}",
        cli.input.display()
    );

    let write_err = |source| DivideError::Write {
        path: cli.output.clone(),
        source,
    };

    let mut out: Box<dyn Write> = if cli.output == Path::new("-") {
        Box::new(BufWriter::new(io::stdout().lock()))
    } else {
        Box::new(BufWriter::new(File::create(&cli.output).map_err(write_err)?))
    };

    let written = match cli.format {
        Format::Text => write_text(&mut out, &sentences, selection),
        Format::Json => write_json(&mut out, &sentences, selection),
    }
    .map_err(write_err)?;

    info!("wrote {} sentences to {}", written, cli.output.display());
    Ok(())
}

/// Defaults, then the config file, then explicit word lists.
fn resolve_keywords(cli: &Cli) -> Result<KeywordSets, DivideError> {
    let mut keywords = match &cli.config {
        Some(path) => KeywordSets::load(path)?,
        None => KeywordSets::default(),
    };
    if let Some(words) = &cli.whitelist {
        keywords = keywords.with_whitelist(parse_word_list(words)?);
    }
    if let Some(words) = &cli.blacklist {
        keywords = keywords.with_blacklist(parse_word_list(words)?);
    }
    Ok(keywords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::fs;

    fn words(list: &[&str]) -> BTreeSet<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn cli_lists_override_config_file() {
        let config = std::env::temp_dir().join("mathlib_divider_cli_keywords.json");
        fs::write(&config, r#"{"whitelist": ["example"], "blacklist": ["meta"]}"#)
            .expect("Failed to write config");

        let cli = Cli::try_parse_from([
            "mathlib-divider",
            "input.lean",
            "--config",
            config.to_str().unwrap(),
            "--blacklist",
            "sorry 'private def'",
        ])
        .unwrap();
        let keywords = resolve_keywords(&cli).unwrap();

        assert_eq!(keywords.blacklist, words(&["sorry", "private def"]));
        assert_eq!(keywords.whitelist, words(&["example"]));

        let _ = fs::remove_file(&config);
    }

    #[test]
    fn cli_list_without_config_keeps_other_default() {
        let cli = Cli::try_parse_from(["mathlib-divider", "input.lean", "--whitelist", "axiom"])
            .unwrap();
        let keywords = resolve_keywords(&cli).unwrap();

        assert_eq!(keywords.whitelist, words(&["axiom"]));
        assert_eq!(keywords.blacklist, KeywordSets::default().blacklist);
    }

    #[test]
    fn unbalanced_word_list_is_rejected() {
        let cli = Cli::try_parse_from(["mathlib-divider", "input.lean", "--whitelist", "a 'b"])
            .unwrap();
        assert!(matches!(resolve_keywords(&cli), Err(DivideError::WordList(_))));
    }
}
