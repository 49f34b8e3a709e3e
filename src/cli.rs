//! Command-line parsing.
//!
//! Flags are only recognized before the first name; the first argument that
//! does not start with `--` and everything after it are names. Unknown `--`
//! flags are accepted and ignored.

use crate::query::{resolve, LookupMode};
use crate::registry::build_indexes;
use crate::render::Sink;
use crate::source::PluginSource;
use std::io;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub mode: LookupMode,
    pub verbose: bool,
    pub names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Query(Options),
    Help,
}

/// Parses arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> Command
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into).peekable();

    if matches!(args.peek().map(String::as_str), Some("--help")) {
        return Command::Help;
    }

    let mut options = Options::default();
    while let Some(flag) = args.next_if(|arg| arg.starts_with("--")) {
        match flag.as_str() {
            "--elements" => options.mode = LookupMode::ByElement,
            "--plugins" => options.mode = LookupMode::ByPlugin,
            "--verbose" => options.verbose = true,
            _ => {}
        }
    }
    options.names = args.collect();

    Command::Query(options)
}

/// Indexes `source`, resolves the requested names and hands everything to
/// `sink`: indexing diagnostics, lookup diagnostics, then the path line.
pub fn execute<S, K>(source: &S, options: &Options, sink: &mut K) -> io::Result<()>
where
    S: PluginSource + ?Sized,
    K: Sink + ?Sized,
{
    let indexed = build_indexes(source);
    for diagnostic in &indexed.diagnostics {
        sink.diagnostic(diagnostic)?;
    }

    let resolution = resolve(options.names.as_slice(), options.mode, &indexed.index);
    for diagnostic in &resolution.diagnostics {
        sink.diagnostic(diagnostic)?;
    }
    sink.paths(&resolution.paths)
}

pub fn usage() -> &'static str {
    concat!(
        "Usage: gst-which [--elements | --plugins] [--verbose] NAME...\n",
        "\n",
        "Print the plugin files that provide the named elements or plugins.\n",
        "\n",
        "Options:\n",
        "  --elements   NAMEs are element names (default)\n",
        "  --plugins    NAMEs are plugin names\n",
        "  --verbose    Print the registry listing and lookup details\n",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn options(args: &[&str]) -> Options {
        match parse_args(args.iter().copied()) {
            Command::Query(options) => options,
            Command::Help => panic!("unexpected help for {args:?}"),
        }
    }

    #[test]
    fn defaults_to_element_lookup() {
        let parsed = options(&["videoconvert"]);
        assert_eq!(parsed.mode, LookupMode::ByElement);
        assert!(!parsed.verbose);
        assert_eq!(parsed.names, vec!["videoconvert"]);
    }

    #[test]
    fn last_mode_flag_wins() {
        assert_eq!(options(&["--elements", "--plugins", "x"]).mode, LookupMode::ByPlugin);
        assert_eq!(options(&["--plugins", "--elements", "x"]).mode, LookupMode::ByElement);
    }

    #[test]
    fn flags_after_first_name_are_names() {
        let parsed = options(&["--verbose", "queue", "--plugins", "tee"]);
        assert_eq!(parsed.mode, LookupMode::ByElement);
        assert!(parsed.verbose);
        assert_eq!(parsed.names, vec!["queue", "--plugins", "tee"]);
    }

    #[test]
    fn unknown_flags_are_ignored() {
        let parsed = options(&["--color", "--plugins", "--", "coreelements"]);
        assert_eq!(parsed.mode, LookupMode::ByPlugin);
        assert_eq!(parsed.names, vec!["coreelements"]);
    }

    #[test]
    fn no_arguments_means_no_names() {
        assert_eq!(options(&[]), Options::default());
    }

    #[test]
    fn single_dash_arguments_are_names() {
        let parsed = options(&["-h", "queue"]);
        assert_eq!(parsed.mode, LookupMode::ByElement);
        assert_eq!(parsed.names, vec!["-h", "queue"]);
        assert_eq!(options(&["--plugins", "-v"]).names, vec!["-v"]);
    }

    #[test]
    fn help_only_as_first_argument() {
        assert_eq!(parse_args(["--help"]), Command::Help);
        assert_eq!(options(&["--verbose", "--help", "queue"]).names, vec!["queue"]);
        assert_eq!(options(&["queue", "-h"]).names, vec!["queue", "-h"]);
    }
}
