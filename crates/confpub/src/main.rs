//! confpub CLI - publish a templated page to Confluence.
//!
//! Reads `conf.json`, renders each page record through the template and
//! creates the page, or updates it when a page with the same title already
//! exists in the configured space.

mod commands;
mod error;
mod logging;
mod output;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use tracing::error;

use commands::PublishArgs;
use output::Output;

/// confpub - publish a templated page to Confluence.
#[derive(Parser)]
#[command(name = "confpub", version, about)]
struct Cli {
    #[command(flatten)]
    publish: PublishArgs,

    /// Enable verbose output (request-level debug logs).
    #[arg(short, long, alias = "Verbose")]
    verbose: bool,

    /// Append diagnostics to this file instead of standard output.
    #[arg(long, alias = "logFile", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

/// Single-dash long flags accepted in addition to their `--` forms.
const SINGLE_DASH_FLAGS: &[&str] = &["-verbose", "-Verbose", "-logFile"];

/// Rewrite `-verbose` and `-logFile[=PATH]` to their `--` spelling.
fn normalize_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| {
            let Some(text) = arg.to_str() else {
                return arg;
            };
            let flag = text.split_once('=').map_or(text, |(flag, _)| flag);
            if SINGLE_DASH_FLAGS.contains(&flag) {
                OsString::from(format!("-{text}"))
            } else {
                arg
            }
        })
        .collect()
}

fn main() {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    let output = Output::new();

    logging::init(cli.verbose, cli.log_file.as_deref(), &output);

    if let Err(err) = cli.publish.execute() {
        error!("{err}");
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["confpub"]).unwrap();
        assert!(!cli.verbose);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_log_file_and_verbose() {
        let cli =
            Cli::try_parse_from(["confpub", "--verbose", "--log-file", "publish.log"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.log_file.as_deref(), Some(Path::new("publish.log")));
    }

    #[test]
    fn test_camel_case_aliases() {
        let cli = Cli::try_parse_from(["confpub", "--Verbose", "--logFile", "out.log"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.log_file.as_deref(), Some(Path::new("out.log")));
    }

    fn parse_normalized(args: &[&str]) -> Cli {
        Cli::try_parse_from(normalize_args(args.iter().map(OsString::from))).unwrap()
    }

    #[test]
    fn test_single_dash_flags() {
        let cli = parse_normalized(&["confpub", "-verbose", "-logFile", "out.log"]);
        assert!(cli.verbose);
        assert_eq!(cli.log_file.as_deref(), Some(Path::new("out.log")));

        let cli = parse_normalized(&["confpub", "-logFile=run/publish.log"]);
        assert!(!cli.verbose);
        assert_eq!(cli.log_file.as_deref(), Some(Path::new("run/publish.log")));
    }

    #[test]
    fn test_normalize_leaves_other_args() {
        let args = normalize_args(
            ["confpub", "-v", "--config", "-verbose.json", "--dry-run"].map(OsString::from),
        );
        assert_eq!(
            args,
            ["confpub", "-v", "--config", "-verbose.json", "--dry-run"].map(OsString::from)
        );
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["confpub", "--force"]).is_err());
    }
}
