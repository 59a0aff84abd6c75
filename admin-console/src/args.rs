//! Command-line argument parsing.

use std::{error::Error, fmt::Display, path::PathBuf, process};

/// Parsed command-line argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    ConfigPath(PathBuf),
}

/// Parse command-line arguments.
///
/// # Arguments
/// - `args`: Command-line arguments (including program name at args[0])
/// - `version`: Version to display for --version flag
pub fn parse_args(args: Vec<String>, version: impl Display) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    let app_name = args
        .first()
        .and_then(|a| std::path::Path::new(a).file_name())
        .and_then(|s| s.to_str())
        .unwrap_or("admin-console");

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", version);
        process::exit(0);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: {app_name} [OPTIONS]

Options:
    --config <PATH>     Path of the configuration file
    -v, --version       Display {app_name} version
    -h, --help          Print help

Environment:
    LOG_LEVEL           Overrides the configured log level
        "#
        );
        process::exit(0);
    }

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--config" {
            if let Some(a) = iter.next() {
                res.push(Arg::ConfigPath(PathBuf::from(a)));
            } else {
                return Err("missing arg to --config".into());
            }
        } else {
            return Err(format!("unknown argument {}", arg).into());
        }
    }

    Ok(res)
}

/// Path of the configuration file given on the command line, if any.
pub fn config_path(args: &[Arg]) -> Option<PathBuf> {
    args.iter().rev().find_map(|a| match a {
        Arg::ConfigPath(p) => Some(p.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERSION: &str = "0.1.0";

    fn args(line: &str) -> Vec<String> {
        line.split(' ').map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(Some(vec![]), parse_args(args("app"), VERSION).ok());
        assert!(parse_args(args("app --config"), VERSION).is_err());
        assert!(parse_args(args("app --meth"), VERSION).is_err());
        assert!(parse_args(args("app hello"), VERSION).is_err());
        assert_eq!(
            Some(vec![Arg::ConfigPath(PathBuf::from("hello.toml"))]),
            parse_args(args("app --config hello.toml"), VERSION).ok()
        );
    }

    #[test]
    fn test_config_path() {
        assert_eq!(config_path(&[]), None);
        assert_eq!(
            config_path(&[
                Arg::ConfigPath(PathBuf::from("a.toml")),
                Arg::ConfigPath(PathBuf::from("b.toml")),
            ]),
            Some(PathBuf::from("b.toml"))
        );
    }
}
