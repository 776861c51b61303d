// TRUVOICE media placeholder CLI
// Usage: detect_media <file_path> <media_type> [--fixed-trust <value>]
// The score is a labeled placeholder (file-size heuristic or a fixed value),
// not inference. Prints one JSON object to stdout; exit 1 on usage or
// analysis errors, matching the legacy contract.

use std::time::Instant;
use truvoice::init_logging;
use truvoice::models::{MediaKind, MediaVerdict};
use truvoice::services::media::{MediaAssessor, TrustMode};

fn parse_arg_value(args: &[String], key: &str) -> Option<String> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let fixed_trust = parse_arg_value(&args, "--fixed-trust").and_then(|v| v.parse::<f64>().ok());

    let mut positional: Vec<&String> = Vec::new();
    let mut skip_next = false;
    for arg in &args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "--fixed-trust" {
            skip_next = true;
            continue;
        }
        if arg.starts_with("--") {
            continue;
        }
        positional.push(arg);
    }

    if positional.len() < 2 {
        eprintln!("Usage: detect_media <file_path> <media_type> [--fixed-trust <value>]");
        std::process::exit(1);
    }

    let started = Instant::now();
    let path = std::path::Path::new(positional[0].as_str());
    let media_type = positional[1].as_str();

    let Some(kind) = MediaKind::parse(media_type) else {
        let verdict = MediaVerdict::from_error(
            media_type,
            started.elapsed().as_secs_f64() * 1000.0,
            format!("Unknown media type: {}", media_type),
        );
        println!("{}", serde_json::to_string(&verdict).unwrap_or_default());
        std::process::exit(1);
    };

    let mode = match fixed_trust {
        Some(value) => TrustMode::Fixed(value),
        None => TrustMode::FileSize,
    };

    match MediaAssessor::new(mode).assess(path, kind) {
        Ok(verdict) => match serde_json::to_string(&verdict) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("failed to serialize verdict: {}", err);
                std::process::exit(1);
            }
        },
        Err(err) => {
            let verdict = MediaVerdict::from_error(
                kind.as_str(),
                started.elapsed().as_secs_f64() * 1000.0,
                err.to_string(),
            );
            println!("{}", serde_json::to_string(&verdict).unwrap_or_default());
            std::process::exit(1);
        }
    }
}
