//! vm - minimal terminal text viewer
//!
//! Loads a file (or standard input) into memory and pages through it on the
//! controlling terminal.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use vmless::file_handler::{Document, DocumentSource, FileSource, StdinSource};
use vmless::{Tty, Viewer, ViewerConfig, HELP_TEXT};

/// Positional argument meaning "read standard input"
const STDIN_ARG: &str = "-";

fn cli() -> Command {
    Command::new("vm")
        .about("A minimal terminal text viewer")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .help("Print version")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("help")
                .short('h')
                .long("help")
                .help("Print usage")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("interactive-help")
                .short('H')
                .help("Show usage in the viewer")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("file")
                .help("File to view; standard input when absent or \"-\"")
                .index(1),
        )
}

fn source_for(matches: &ArgMatches) -> Box<dyn DocumentSource> {
    match matches.get_one::<String>("file").map(String::as_str) {
        None | Some(STDIN_ARG) => Box::new(StdinSource::new()),
        Some(path) => Box::new(FileSource::new(path)),
    }
}

/// Run the blocking viewer; `None` views the help text.
fn run_viewer(config: ViewerConfig, document: Option<Document>) -> Result<()> {
    let tty = Tty::open(&config.tty_path)?;
    let stdout = std::io::stdout();
    let mut viewer = Viewer::new(&tty, stdout.lock(), config);

    match document {
        Some(document) => viewer.run(&document)?,
        None => viewer.run_help()?,
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logging stays off unless RUST_LOG is set
    env_logger::init();

    let matches = match cli().try_get_matches() {
        Ok(matches) => matches,
        Err(err) => {
            log::debug!("argument error: {}", err);
            eprint!("{HELP_TEXT}");
            std::process::exit(2);
        }
    };

    if matches.get_flag("version") {
        println!("vm: version - {}", vmless::VERSION);
        return Ok(());
    }
    if matches.get_flag("help") {
        print!("{HELP_TEXT}");
        return Ok(());
    }

    let (config, document) = if matches.get_flag("interactive-help") {
        (ViewerConfig::new(vmless::app::HELP_NAME), None)
    } else {
        let source = source_for(&matches);
        let document = source
            .load()
            .await
            .with_context(|| format!("failed to load {}", source.display_name()))?;
        (ViewerConfig::new(source.display_name()), Some(document))
    };

    tokio::task::spawn_blocking(move || run_viewer(config, document))
        .await
        .context("viewer task panicked")?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!vmless::VERSION.is_empty());
    }

    #[test]
    fn test_flags_parse() {
        let matches = cli().try_get_matches_from(["vm", "-H"]).unwrap();
        assert!(matches.get_flag("interactive-help"));
        assert!(!matches.get_flag("help"));

        let matches = cli().try_get_matches_from(["vm", "-v"]).unwrap();
        assert!(matches.get_flag("version"));
    }

    #[test]
    fn test_file_argument_selects_source() {
        let matches = cli().try_get_matches_from(["vm", "notes.txt"]).unwrap();
        assert_eq!(source_for(&matches).display_name(), "notes.txt");

        let matches = cli().try_get_matches_from(["vm", "-"]).unwrap();
        assert_eq!(source_for(&matches).display_name(), "STDIN");

        let matches = cli().try_get_matches_from(["vm"]).unwrap();
        assert_eq!(source_for(&matches).display_name(), "STDIN");
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(cli().try_get_matches_from(["vm", "-x"]).is_err());
    }
}
