//! History mode selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown history mode `{0}` (expected `hash` or `path`)")]
pub struct UnknownHistoryMode(pub String);

/// How logical paths appear in the external address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// `/#/image`: the logical path lives in the fragment.
    #[default]
    Hash,

    /// `/app/image`: the logical path is the document path under a base.
    #[serde(alias = "history")]
    Path,
}

impl HistoryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryMode::Hash => "hash",
            HistoryMode::Path => "path",
        }
    }
}

impl fmt::Display for HistoryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HistoryMode {
    type Err = UnknownHistoryMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hash" => Ok(HistoryMode::Hash),
            "path" | "history" => Ok(HistoryMode::Path),
            _ => Err(UnknownHistoryMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modes() {
        assert_eq!("hash".parse::<HistoryMode>().unwrap(), HistoryMode::Hash);
        assert_eq!("PATH".parse::<HistoryMode>().unwrap(), HistoryMode::Path);
        assert_eq!("history".parse::<HistoryMode>().unwrap(), HistoryMode::Path);
        assert!("memory".parse::<HistoryMode>().is_err());
    }

    #[test]
    fn test_default_is_hash() {
        assert_eq!(HistoryMode::default(), HistoryMode::Hash);
    }
}
