//! The resolved configuration of one invocation.
use crate::args::CliArgs;
use crate::types::Verbosity;
use crate::version::Version;

const PRODUCT: &str = "Basics QA Python";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfiguration {
    pub version: Version,
    pub option1: Option<String>,
    pub argument1: String,
    pub verbosity: Verbosity,
}

impl RunConfiguration {
    pub fn from_args(version: Version, args: CliArgs) -> Self {
        Self {
            version,
            option1: args.option1,
            argument1: args.argument1,
            verbosity: Verbosity::from_count(args.verbose),
        }
    }

    /// One line naming the version and both inputs; an unset option reads `None`.
    pub fn summary(&self) -> String {
        format!(
            "{PRODUCT} {} | option1: {} | argument1: {}",
            self.version,
            self.option1.as_deref().unwrap_or("None"),
            self.argument1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(option1: Option<&str>) -> RunConfiguration {
        RunConfiguration {
            version: Version::from("1.2.3"),
            option1: option1.map(str::to_string),
            argument1: "ARGUMENT1".to_string(),
            verbosity: Verbosity::Quiet,
        }
    }

    #[test]
    fn summary_with_option() {
        assert_eq!(
            config(Some("OPTION1")).summary(),
            "Basics QA Python 1.2.3 | option1: OPTION1 | argument1: ARGUMENT1"
        );
    }

    #[test]
    fn summary_without_option() {
        assert!(config(None).summary().contains("option1: None | argument1: ARGUMENT1"));
    }

    #[test]
    fn version_is_reproduced_verbatim() {
        let mut cfg = config(None);
        cfg.version = Version::from("1.2.3\n");
        assert!(cfg.summary().starts_with("Basics QA Python 1.2.3\n | option1"));
    }
}
