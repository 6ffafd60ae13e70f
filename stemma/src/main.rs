use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use stemma_lib::languages::{self, Language};
use stemma_lib::registry::ResearchDataKey;
use stemma_lib::Registry;

#[derive(Parser)]
#[command(name = "stemma", about = "Multi-language morphological analyzer")]
struct Cli {
    /// Text to analyze. If omitted, reads lines from stdin.
    input: Option<String>,

    /// Analysis language.
    #[arg(short, long, default_value = "fr")]
    language: String,

    /// Output basic word forms instead of stems.
    #[arg(long)]
    forms: bool,

    /// Check whether each line is a passive sentence.
    #[arg(long)]
    passive: bool,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Serialize)]
struct StemmedWord {
    word: String,
    stem: String,
}

#[derive(Serialize)]
#[serde(untagged)]
enum LineAnalysis {
    Stems(Vec<StemmedWord>),
    Forms(Vec<String>),
    Passive { sentence: String, passive: bool },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let language: Language = match cli.language.parse() {
        Ok(language) => language,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let registry = match languages::registry(language) {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("failed to build {language} registry: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(data) = languages::morphology_data(language) {
        if let Err(err) = registry.attach_research_data(ResearchDataKey::Morphology, data) {
            eprintln!("failed to attach morphology data: {err}");
            return ExitCode::FAILURE;
        }
    }

    match cli.input {
        Some(ref text) => process_line(text, &registry, &cli),
        None => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                if !line.trim().is_empty() {
                    process_line(&line, &registry, &cli);
                }
            }
        }
    }
    ExitCode::SUCCESS
}

fn process_line(line: &str, registry: &Registry, cli: &Cli) {
    let analysis = analyze(line, registry, cli);
    let json = if cli.pretty {
        serde_json::to_string_pretty(&analysis)
    } else {
        serde_json::to_string(&analysis)
    };
    match json {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("failed to serialize analysis: {err}"),
    }
}

fn analyze(line: &str, registry: &Registry, cli: &Cli) -> LineAnalysis {
    if cli.passive {
        let passive = registry
            .passive_test()
            .map(|is_passive| is_passive(line))
            .unwrap_or(false);
        return LineAnalysis::Passive {
            sentence: line.to_string(),
            passive,
        };
    }

    if cli.forms {
        let forms = registry
            .word_forms()
            .map(|builder| {
                stemma_lib::text::words(line)
                    .iter()
                    .flat_map(|w| builder(w))
                    .collect()
            })
            .unwrap_or_default();
        return LineAnalysis::Forms(forms);
    }

    let stems = match registry.stemmer() {
        Some(stemmer) => stemma_lib::text::words(line)
            .into_iter()
            .map(|word| {
                let stem = stemmer(&word);
                StemmedWord { word, stem }
            })
            .collect(),
        None => vec![],
    };
    LineAnalysis::Stems(stems)
}
