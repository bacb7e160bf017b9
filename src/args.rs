use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};

use crate::version::Version;

pub const PROJECT_URL: &str = "https://github.com/nunoachenriques/basics-qa-python";

const USAGE_EXAMPLES: &str = "Usage examples:

  Demonstration of the usage examples with verbose and argument:
    basics-qa -v argument1

  Demonstration of the usage examples with option and argument:
    basics-qa -o option1 argument1";

#[derive(Debug, Parser)]
#[command(name = "basics-qa", after_help = USAGE_EXAMPLES)]
pub struct CliArgs {
    /// Output verbosity: none, info (-v), debug (-vv).
    #[arg(short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    /// The option1 help description.
    #[arg(short = 'o', value_name = "OPTION1")]
    pub option1: Option<String>,

    /// The argument1 help description.
    #[arg(value_name = "argument1")]
    pub argument1: String,
}

impl CliArgs {
    /// The derived command with the description and `--version` taken from
    /// the version file.
    pub fn command_for(version: &Version) -> clap::Command {
        Self::command()
            .about(format!(
                "Basics on Quality Assurance in Python {}\n\n{}",
                version.trimmed(),
                PROJECT_URL
            ))
            .version(version.trimmed().to_string())
    }

    pub fn try_parse_with<I, T>(version: &Version, argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut matches = Self::command_for(version).try_get_matches_from(argv)?;
        Self::from_arg_matches_mut(&mut matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(argv: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_with(&Version::from("1.2.3\n"), argv)
    }

    #[test]
    fn command_is_well_formed() {
        CliArgs::command_for(&Version::from("1.2.3")).debug_assert();
    }

    #[test]
    fn positional_only() {
        let args = parse(&["basics-qa", "ARGUMENT1"]).unwrap();
        assert_eq!(args.argument1, "ARGUMENT1");
        assert_eq!(args.option1, None);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn flags_anywhere_on_the_line() {
        let args = parse(&["basics-qa", "-o", "OPTION1", "ARGUMENT1", "-vv"]).unwrap();
        assert_eq!(args.option1.as_deref(), Some("OPTION1"));
        assert_eq!(args.argument1, "ARGUMENT1");
        assert_eq!(args.verbose, 2);

        let args = parse(&["basics-qa", "-v", "-v", "-v", "x"]).unwrap();
        assert_eq!(args.verbose, 3);
    }

    #[test]
    fn missing_positional_is_a_usage_error() {
        let err = parse(&["basics-qa", "-v"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn help_and_version_come_from_the_version_file() {
        let err = parse(&["basics-qa", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        assert!(err.to_string().contains("1.2.3"));

        let err = parse(&["basics-qa", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        let help = err.to_string();
        assert!(help.contains("Basics on Quality Assurance in Python 1.2.3"));
        assert!(help.contains(PROJECT_URL));
        assert!(help.contains("Usage examples:"));
    }
}
