use chain_map::{format_report_line, WordCountError, WordCounter};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::Level;

const DEFAULT_PATH: &str = "book.txt";
// Table size used by the original word-count run; a prime.
const DEFAULT_TABLE_SIZE: usize = 6007;
const TOP_N: usize = 10;
const LOG_ENV: &str = "WORDFREQ_LOG";

fn log_level() -> Level {
    match std::env::var(LOG_ENV).as_deref() {
        Ok("error") => Level::ERROR,
        Ok("info") => Level::INFO,
        Ok("debug") => Level::DEBUG,
        Ok("trace") => Level::TRACE,
        _ => Level::WARN,
    }
}

fn run() -> Result<(), WordCountError> {
    let mut args = std::env::args().skip(1);
    let path = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_PATH.to_string()));
    let table_size = match args.next() {
        Some(s) => s
            .parse::<usize>()
            .map_err(|_| WordCountError::InvalidTableSize(s))?,
        None => DEFAULT_TABLE_SIZE,
    };

    let text = std::fs::read_to_string(&path).map_err(|source| WordCountError::Io {
        path: path.clone(),
        source,
    })?;

    let start = Instant::now();
    let mut counter = WordCounter::with_table_size(table_size)?;
    counter.count_words(&text);
    println!("Map size: {}", counter.distinct());
    let top = counter.top(TOP_N);
    println!("time in ms: {}", start.elapsed().as_millis());
    tracing::info!(path = %path.display(), table_size, "report ready");

    for (word, count) in top {
        println!("{}", format_report_line(&word, count));
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(log_level())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
