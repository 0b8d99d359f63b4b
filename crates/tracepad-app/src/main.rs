//! TracePad trace-replay entry point (native).

use std::process::ExitCode;
use std::sync::Arc;

use tracepad_core::storage::FileStorage;
use tracepad_core::{builtin_catalog, encouragement, ProgressRecord, ProgressTracker, Verdict};

mod replay;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting TracePad replay");

    let mut args = std::env::args().skip(1);
    let trace_path = args.next();
    let learner = args.next().unwrap_or_else(|| "demo".to_string());

    let outcome = match trace_path {
        Some(path) => replay::run_file(&path),
        None => replay::run_demo(),
    };

    let summary = match outcome {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("tracepad: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("Practicing {}", summary.glyph);
    let Some(result) = summary.last() else {
        println!("  trace ended with the pen down; nothing was scored");
        return ExitCode::SUCCESS;
    };

    for scored in &summary.results {
        let verdict = match scored.verdict {
            Verdict::Pass => "pass",
            Verdict::Fail => "fail",
        };
        println!("  accuracy {:>3}% ({})", scored.accuracy, verdict);
    }
    println!("{}", encouragement(result.accuracy));

    match update_progress(&summary.glyph, result.accuracy, &learner) {
        Ok((record, completion)) => {
            println!(
                "{} earned {} star(s) on {} — {}% of the catalog practiced",
                learner, record.stars, summary.glyph, completion
            );
        }
        Err(e) => log::warn!("could not save progress for {}: {}", learner, e),
    }

    ExitCode::SUCCESS
}

/// Record the completed attempt in the learner's progress book.
fn update_progress(
    glyph: &str,
    accuracy: u8,
    learner: &str,
) -> Result<(ProgressRecord, u8), Box<dyn std::error::Error>> {
    let catalog_size = builtin_catalog()?.len();

    let storage = Arc::new(FileStorage::default_location()?);
    let mut tracker = pollster::block_on(ProgressTracker::load_or_new(storage, learner));
    let record = tracker.record_completion(glyph, accuracy);
    pollster::block_on(tracker.save())?;

    Ok((record, tracker.book().completion(catalog_size)))
}
