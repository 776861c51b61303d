// TRUVOICE text detection CLI
// Usage: truvoice <text> [subjectId] [itemId] [--config <path>] [--compact]
// Prints a single JSON verdict to stdout; exit 0 on success (including the
// too-short neutral verdict), exit 1 on missing arguments.

use anyhow::Result;
use truvoice::services::config_store::{ConfigStore, ScorerConfig};
use truvoice::{init_logging, LexicalRiskScorer};

fn parse_arg_value(args: &[String], key: &str) -> Option<String> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn has_flag(args: &[String], key: &str) -> bool {
    args.iter().any(|a| a == key)
}

/// Arguments that are not flags or flag values, in order.
fn positionals(args: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "--config" {
            skip_next = true;
            continue;
        }
        if arg.starts_with("--") {
            continue;
        }
        out.push(arg.clone());
    }
    out
}

fn load_config(args: &[String]) -> Result<ScorerConfig> {
    if let Some(path) = parse_arg_value(args, "--config") {
        return ConfigStore::with_file(path.into()).load();
    }
    match ConfigStore::default_config_dir() {
        Some(dir) => ConfigStore::new(dir).load(),
        None => Ok(ScorerConfig::default()),
    }
}

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let positional = positionals(&args);

    if positional.is_empty() {
        eprintln!("Usage: truvoice <text> [subjectId] [itemId] [--config <path>] [--compact]");
        std::process::exit(1);
    }

    let text = positional[0].as_str();
    let subject_id = positional.get(1).map(|s| s.as_str());
    let item_id = positional.get(2).map(|s| s.as_str());

    let config = load_config(&args)?;
    let scorer = LexicalRiskScorer::new(config);
    let verdict = scorer.score(text, subject_id, item_id);

    let json = if has_flag(&args, "--compact") {
        serde_json::to_string(&verdict)?
    } else {
        serde_json::to_string_pretty(&verdict)?
    };
    println!("{}", json);

    Ok(())
}
