use std::io::{self, BufRead, Write};

use clap::Parser;
use keycalc::{
    Settings,
    error::EvalResult,
    evaluate_with,
    keypad::{ERROR_INDICATOR, Keypad},
    util::format::format_result,
};

/// keycalc evaluates calculator expressions with `+ - * /`, parentheses and
/// the functions sin, cos, tan (degrees), sqrt and log (base 10).
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treats the input as whitespace-separated keypad labels, e.g.
    /// `5 + 3 ± =`, instead of an expression.
    #[arg(short, long)]
    keys: bool,

    /// Reports NaN and infinite results as errors.
    #[arg(short, long)]
    strict: bool,

    /// Increases log output; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression to evaluate. Reads one expression per line from stdin
    /// when omitted.
    expression: Option<String>,
}

fn init_logging(verbosity: u8) {
    let filter_level = match verbosity {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Warn,
        2 => log::LevelFilter::Info,
        3 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::builder().format(|buf, record| {
                             writeln!(buf, "keycalc : {} : {}", record.level(), record.args())
                         })
                         .filter_level(filter_level)
                         .init();
}

/// Runs one line of input and returns the text to print.
fn run_line(line: &str, args: &Args, settings: Settings) -> EvalResult<String> {
    if args.keys {
        let mut keypad = Keypad::with_settings(settings);
        keypad.press_labels(line)?;
        match keypad.last_result() {
            Some(Err(e)) => Err(e.clone()),
            _ => Ok(keypad.display().to_string()),
        }
    } else {
        evaluate_with(line, &settings).map(format_result)
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let settings = Settings { reject_non_finite: args.strict };

    if let Some(expression) = &args.expression {
        match run_line(expression, &args, settings) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("{ERROR_INDICATOR}: {e}");
                std::process::exit(1);
            },
        }
        return;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            eprintln!("Failed to read from stdin.");
            std::process::exit(1);
        };
        if line.trim().is_empty() {
            continue;
        }
        match run_line(&line, &args, settings) {
            Ok(text) => println!("{text}"),
            Err(e) => println!("{ERROR_INDICATOR}: {e}"),
        }
    }
}
