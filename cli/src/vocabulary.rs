use std::fs;
use std::path::Path;

use anyhow::Context;
use memora_core::Symbol;

/// Emoji set used when no symbol file is configured.
pub(crate) const BUILTIN: &str = include_str!("../assets/emojis.txt");

/// One symbol per line, surrounding whitespace trimmed and blank lines skipped.
pub(crate) fn parse(text: &str) -> Vec<Symbol> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Symbol::from)
        .collect()
}

pub(crate) fn load(path: Option<&Path>) -> anyhow::Result<Vec<Symbol>> {
    let symbols = match path {
        Some(path) => {
            let text = fs::read_to_string(path).with_context(|| {
                format!(
                    "Could not read symbol file {}, please provide it before running the game",
                    path.display()
                )
            })?;
            parse(&text)
        }
        None => parse(BUILTIN),
    };
    log::debug!("Loaded {} symbols", symbols.len());
    Ok(symbols)
}
