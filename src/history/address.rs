//! Mapping between logical paths and external addresses.

use url::Url;

use crate::history::mode::HistoryMode;

/// Represents logical paths in the address shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    mode: HistoryMode,
    base: String,
}

impl History {
    /// Create a history for `mode`.
    ///
    /// In path mode `base` anchors every path (`/app/` → `/app/image`). In
    /// hash mode it is the document path in front of the `#` (default `/`).
    pub fn new(mode: HistoryMode, base: Option<&str>) -> Self {
        let base = match mode {
            HistoryMode::Hash => normalize_hash_base(base.unwrap_or("/")),
            HistoryMode::Path => normalize_path_base(base.unwrap_or("")),
        };
        Self { mode, base }
    }

    pub fn mode(&self) -> HistoryMode {
        self.mode
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// External address for a logical path.
    pub fn href(&self, path: &str) -> String {
        match self.mode {
            HistoryMode::Hash => format!("{}#{}", self.base, path),
            HistoryMode::Path => format!("{}{}", self.base, path),
        }
    }

    /// Logical path for an external address, or `None` when the address is
    /// outside the base. Accepts absolute URLs as well as bare addresses.
    ///
    /// Only path mode checks the base. In hash mode the logical path is read
    /// from the fragment whatever document path precedes the `#`, so
    /// `/elsewhere/#/video` yields `/video`.
    pub fn location(&self, address: &str) -> Option<String> {
        let relative = match Url::parse(address) {
            Ok(url) => relative_part(&url),
            Err(_) => address.to_string(),
        };

        match self.mode {
            HistoryMode::Hash => Some(match relative.split_once('#') {
                Some((_, "")) | None => "/".to_string(),
                Some((_, fragment)) if fragment.starts_with('/') => fragment.to_string(),
                Some((_, fragment)) => format!("/{}", fragment),
            }),
            HistoryMode::Path => {
                let rest = strip_prefix_ignore_case(&relative, &self.base)?;
                if rest.is_empty() {
                    Some("/".to_string())
                } else if rest.starts_with('/') {
                    Some(rest.to_string())
                } else if rest.starts_with('?') || rest.starts_with('#') {
                    Some(format!("/{}", rest))
                } else {
                    // `/appx` is not under `/app`.
                    None
                }
            }
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(HistoryMode::default(), None)
    }
}

fn relative_part(url: &Url) -> String {
    let mut relative = url.path().to_string();
    if let Some(query) = url.query() {
        relative.push('?');
        relative.push_str(query);
    }
    if let Some(fragment) = url.fragment() {
        relative.push('#');
        relative.push_str(fragment);
    }
    relative
}

/// Leading `/`, no trailing `/`; the root base becomes empty.
fn normalize_path_base(base: &str) -> String {
    let trimmed = base.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Leading `/`, anything from an embedded `#` dropped.
fn normalize_hash_base(base: &str) -> String {
    let base = base.trim();
    let base = base.split('#').next().unwrap_or_default();
    if base.starts_with('/') {
        base.to_string()
    } else {
        format!("/{}", base)
    }
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}
