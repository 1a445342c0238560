mod cli;
mod logging;
mod report;

use std::env;
use std::process::ExitCode;

use keycount_core::{summarize, KeywordTable};
use keycount_engine::{console, open_file, scan};

use crate::cli::Mode;

fn main() -> ExitCode {
    logging::initialize(logging::LogDestination::Terminal);

    let program = env::args().next().unwrap_or_else(|| "keycount".to_string());
    let mode = match cli::parse(env::args().skip(1)) {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("[ERROR] {err}");
            print!("{}", cli::help_text(&program));
            return ExitCode::FAILURE;
        }
    };

    match run(&mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[ERROR] {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// The success path: header, one scan over the selected source, summary.
/// Validation already happened; any error out of here is an I/O failure.
fn run(mode: &Mode) -> anyhow::Result<()> {
    print!("{}", report::render_header(mode));

    let mut table = KeywordTable::c_keywords();
    let stats = match mode {
        Mode::Command => scan(&mut console(), &mut table)?,
        Mode::File(path) => {
            // The handle lives exactly as long as the scan loop.
            let mut source = open_file(path)?;
            scan(&mut source, &mut table)?
        }
    };
    count_logging::count_info!(
        "{}: {} words, {} keyword hits",
        mode.flag_value(),
        stats.words,
        stats.keyword_hits
    );

    print!("{}", report::render_summary(&summarize(&table)));
    Ok(())
}
