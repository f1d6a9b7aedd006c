//! TOML config file and option precedence.
//!
//! ```toml
//! [graph]
//! title = "my program"
//! minlen = 3
//! nodesep = 0.5
//! ```

use std::path::Path;

use serde::Deserialize;

use callvis_dot::GraphOptions;
use callvis_error::{Error, Result};

use crate::input::OptionsSpec;
use crate::options::GraphArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub graph: GraphSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphSection {
    pub title: Option<String>,
    pub minlen: Option<u32>,
    pub nodesep: Option<f64>,
}

impl ConfigFile {
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|err| Error::deserialization_failed("config file", err))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|err| {
            Error::from(err)
                .with_operation("config::load")
                .with_context("path", path.display().to_string())
        })?;
        Self::parse(&text).map_err(|err| err.with_context("path", path.display().to_string()))
    }
}

/// Resolve graph options: command line, then config file, then the input
/// document, then defaults. The result is validated.
pub fn resolve_options(
    args: &GraphArgs,
    config: &GraphSection,
    input: &OptionsSpec,
) -> Result<GraphOptions> {
    let defaults = GraphOptions::default();
    let options = GraphOptions {
        minlen: args
            .minlen
            .or(config.minlen)
            .or(input.minlen)
            .unwrap_or(defaults.minlen),
        nodesep: args
            .nodesep
            .or(config.nodesep)
            .or(input.nodesep)
            .unwrap_or(defaults.nodesep),
    };
    options.validate()?;
    Ok(options)
}

/// Resolve the title with the same precedence as [`resolve_options`].
pub fn resolve_title(args: &GraphArgs, config: &GraphSection, input: String) -> String {
    args.title
        .clone()
        .or_else(|| config.title.clone())
        .unwrap_or(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use callvis_error::ErrorKind;

    #[test]
    fn test_parse_config() {
        let config = ConfigFile::parse("[graph]\nminlen = 3\nnodesep = 0.5\n").unwrap();
        assert_eq!(config.graph.minlen, Some(3));
        assert_eq!(config.graph.nodesep, Some(0.5));
        assert_eq!(config.graph.title, None);
    }

    #[test]
    fn test_empty_config() {
        let config = ConfigFile::parse("").unwrap();
        assert!(config.graph.minlen.is_none());
    }

    #[test]
    fn test_bad_config() {
        let err = ConfigFile::parse("[graph]\nminlen = \"two\"\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DeserializationFailed);
    }

    #[test]
    fn test_precedence() {
        let input = OptionsSpec {
            minlen: Some(5),
            nodesep: Some(2.0),
        };
        let config = GraphSection {
            title: Some("from config".into()),
            minlen: Some(4),
            nodesep: None,
        };
        let args = GraphArgs {
            minlen: None,
            nodesep: Some(0.1),
            title: None,
        };

        let opts = resolve_options(&args, &config, &input).unwrap();
        assert_eq!(opts.minlen, 4);
        assert_eq!(opts.nodesep, 0.1);
        assert_eq!(resolve_title(&args, &config, "input".into()), "from config");

        let defaults =
            resolve_options(&GraphArgs::default(), &GraphSection::default(), &OptionsSpec::default())
                .unwrap();
        assert_eq!(defaults, GraphOptions::default());
    }

    #[test]
    fn test_invalid_nodesep_rejected() {
        let args = GraphArgs {
            nodesep: Some(-1.0),
            ..GraphArgs::default()
        };
        let err =
            resolve_options(&args, &GraphSection::default(), &OptionsSpec::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }
}
