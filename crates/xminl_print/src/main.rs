//! Print the token stream of an XML-like file.
//!
//! Usage: `xminl-print <file> [--strings N] [--tokens N]`
//!
//! Logging is off unless `RUST_LOG` is set, e.g. `RUST_LOG=xminl=trace`.

use std::process::ExitCode;

use xminl::{Document, Handler, Token};

/// Default string arena size in bytes.
const DATA_SIZE: usize = 0xfff;
/// Default token arena size in slots.
const TOKEN_SIZE: usize = 0xfff;

struct Options {
    path: String,
    strings: usize,
    tokens: usize,
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}");
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    let source = match std::fs::read(&options.path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("error: failed to open '{}': {e}", options.path);
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(
        path = %options.path,
        len = source.len(),
        strings = options.strings,
        tokens = options.tokens,
        "lexing file"
    );

    let mut data = vec![0u8; options.strings];
    let mut tokens = vec![Token::default(); options.tokens];
    let mut handler = Handler::new(&mut data, &mut tokens);

    if let Err(error) = handler.lex(&Document::new(&source)) {
        match error.location() {
            Some(at) => eprintln!("error: {error} at byte {at}"),
            None => eprintln!("error: {error}"),
        }
        return ExitCode::FAILURE;
    }

    for token in handler.tokens() {
        println!("{:>12} | {}", token.kind, String::from_utf8_lossy(token.value));
    }
    ExitCode::SUCCESS
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut path = None;
    let mut strings = DATA_SIZE;
    let mut tokens = TOKEN_SIZE;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            flag @ ("--strings" | "--tokens") => {
                let Some(value) = args.get(i + 1) else {
                    return Err(format!("{flag} needs a value"));
                };
                let n: usize = value
                    .parse()
                    .map_err(|_| format!("{flag}: '{value}' is not a size"))?;
                if flag == "--strings" {
                    strings = n;
                } else {
                    tokens = n;
                }
                i += 2;
            }
            arg if !arg.starts_with('-') && path.is_none() => {
                path = Some(arg.to_owned());
                i += 1;
            }
            other => return Err(format!("unexpected argument '{other}'")),
        }
    }

    let path = path.ok_or_else(|| "missing file path".to_owned())?;
    Ok(Options {
        path,
        strings,
        tokens,
    })
}

fn print_usage() {
    eprintln!("Usage: xminl-print <file> [--strings N] [--tokens N]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --strings N   String arena size in bytes (default {DATA_SIZE})");
    eprintln!("  --tokens N    Token arena size in slots (default {TOKEN_SIZE})");
}

/// Initialize tracing, only if `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

#[cfg(test)]
mod tests;
