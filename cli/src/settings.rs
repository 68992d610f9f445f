use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use memora_core::Coord;
use serde::Deserialize;

/// Everything that can be decided before play. Unset values are asked for interactively.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Settings {
    pub symbols: Option<PathBuf>,
    pub size: Option<Coord>,
    pub players: Option<Vec<String>>,
    pub seed: Option<u64>,
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read settings file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid settings file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Values set in `overrides` win over the ones in `self`.
    pub fn merge(self, overrides: Settings) -> Self {
        Self {
            symbols: overrides.symbols.or(self.symbols),
            size: overrides.size.or(self.size),
            players: overrides.players.or(self.players),
            seed: overrides.seed.or(self.seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_key() {
        let settings = Settings::parse(
            r#"
            symbols = "animals.txt"
            size = 6
            players = ["ann", "bo"]
            seed = 42
            "#,
        )
        .unwrap();

        assert_eq!(settings.symbols, Some(PathBuf::from("animals.txt")));
        assert_eq!(settings.size, Some(6));
        assert_eq!(settings.players, Some(vec!["ann".into(), "bo".into()]));
        assert_eq!(settings.seed, Some(42));
    }

    #[test]
    fn empty_file_leaves_everything_unset() {
        assert_eq!(Settings::parse("").unwrap(), Settings::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Settings::parse("colour = \"red\"").is_err());
    }

    #[test]
    fn overrides_win() {
        let file = Settings {
            size: Some(4),
            seed: Some(1),
            ..Default::default()
        };
        let flags = Settings {
            size: Some(8),
            ..Default::default()
        };

        let merged = file.merge(flags);

        assert_eq!(merged.size, Some(8));
        assert_eq!(merged.seed, Some(1));
        assert_eq!(merged.players, None);
    }
}
