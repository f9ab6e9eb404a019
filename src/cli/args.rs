//! Command-line argument parsing.

use crate::error::{BizcardError, BizcardResult};

pub const USAGE: &str = "\
Usage: bizcard [OPTIONS]

Options:
  --dark            Start in dark mode
  --preview         Print a static expanded frame and exit
  --size WxH        Frame size for --preview (default 60x48)
  -V, --version     Print version
  -h, --help        Print this help

Keys:
  t                 Toggle theme
  Enter, Space, p   Show or hide fruit projects
  Up/Down, k/j      Scroll the list
  q, Esc, Ctrl+C    Quit";

/// Largest width or height accepted by `--size`.
pub const MAX_PREVIEW_SIDE: u16 = 1000;

/// Options for a normal or preview run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub dark: bool,
    pub preview: bool,
    pub size: Option<(u16, u16)>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Version,
    Help,
    Run(RunOptions),
}

/// Parse command-line arguments, skipping the program name.
///
/// `--version` and `--help` win over everything else on the line.
pub fn parse_args<I>(args: I) -> BizcardResult<CliCommand>
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1);
    let mut early = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => early = early.or(Some(CliCommand::Version)),
            "--help" | "-h" => early = early.or(Some(CliCommand::Help)),
            "--dark" => options.dark = true,
            "--preview" => options.preview = true,
            "--size" => {
                let value = args
                    .next()
                    .ok_or_else(|| BizcardError::invalid_argument("--size", "missing value"))?;
                options.size = Some(parse_size(&value)?);
            }
            other => {
                if let Some(value) = other.strip_prefix("--size=") {
                    options.size = Some(parse_size(value)?);
                } else {
                    return Err(BizcardError::UnknownArgument(other.to_string()));
                }
            }
        }
    }

    Ok(early.unwrap_or(CliCommand::Run(options)))
}

/// Parse `WIDTHxHEIGHT`, e.g. `80x40`.
fn parse_size(value: &str) -> BizcardResult<(u16, u16)> {
    let invalid = || BizcardError::invalid_argument("--size", format!("expected WIDTHxHEIGHT, got '{}'", value));

    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(invalid)?;
    let width: u16 = width.trim().parse().map_err(|_| invalid())?;
    let height: u16 = height.trim().parse().map_err(|_| invalid())?;

    if width == 0 || height == 0 {
        return Err(BizcardError::invalid_argument("--size", "dimensions must be non-zero"));
    }
    if width > MAX_PREVIEW_SIDE || height > MAX_PREVIEW_SIDE {
        return Err(BizcardError::invalid_argument(
            "--size",
            format!("dimensions must be at most {}", MAX_PREVIEW_SIDE),
        ));
    }
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> BizcardResult<CliCommand> {
        let mut all = vec!["bizcard".to_string()];
        all.extend(args.iter().map(|a| a.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_no_args_runs_tui() {
        assert_eq!(parse(&[]).unwrap(), CliCommand::Run(RunOptions::default()));
    }

    #[test]
    fn test_version_flags() {
        assert_eq!(parse(&["--version"]).unwrap(), CliCommand::Version);
        assert_eq!(parse(&["-V"]).unwrap(), CliCommand::Version);
    }

    #[test]
    fn test_help_flags() {
        assert_eq!(parse(&["--help"]).unwrap(), CliCommand::Help);
        assert_eq!(parse(&["-h"]).unwrap(), CliCommand::Help);
    }

    #[test]
    fn test_first_early_flag_wins() {
        assert_eq!(parse(&["--dark", "-h", "-V"]).unwrap(), CliCommand::Help);
    }

    #[test]
    fn test_run_options() {
        let command = parse(&["--dark", "--preview", "--size", "80x40"]).unwrap();
        assert_eq!(
            command,
            CliCommand::Run(RunOptions {
                dark: true,
                preview: true,
                size: Some((80, 40)),
            })
        );
    }

    #[test]
    fn test_size_equals_form() {
        let command = parse(&["--size=100X30"]).unwrap();
        assert_eq!(
            command,
            CliCommand::Run(RunOptions {
                size: Some((100, 30)),
                ..RunOptions::default()
            })
        );
    }

    #[test]
    fn test_bad_size() {
        for bad in ["80", "x40", "80x", "0x10", "axb", "70000x10"] {
            let err = parse(&["--size", bad]).unwrap_err();
            assert!(err.is_usage_error(), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_size_upper_bound() {
        assert!(parse(&["--size", "1000x1000"]).is_ok());
        for huge in ["1001x40", "80x1001", "65535x65535"] {
            let err = parse(&["--size", huge]).unwrap_err();
            assert!(err.is_usage_error(), "{} should be rejected", huge);
            assert!(err.to_string().contains("at most 1000"));
        }
    }

    #[test]
    fn test_missing_size_value() {
        let err = parse(&["--size"]).unwrap_err();
        assert!(matches!(err, BizcardError::InvalidArgument { .. }));
    }

    #[test]
    fn test_unknown_argument() {
        let err = parse(&["--frobnicate"]).unwrap_err();
        assert!(matches!(err, BizcardError::UnknownArgument(ref a) if a == "--frobnicate"));
    }
}
