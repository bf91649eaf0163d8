//! Path-based browser history under a configurable base path.

/// In-memory model of the browser's session history.
///
/// Entries are app-relative full paths (`/about?x=1`); the base path is
/// added by [`WebHistory::href`] and removed by [`WebHistory::strip_base`].
#[derive(Debug, Clone)]
pub struct WebHistory {
    base: String,
    entries: Vec<String>,
    index: usize,
}

impl WebHistory {
    /// Create a history rooted at `base`.
    ///
    /// The base is normalized: an origin (`https://host`) is dropped, a
    /// leading `/` is ensured and a trailing `/` removed, so `/app/` and
    /// `app` both become `/app` and `/` becomes the empty string.
    pub fn new(base: &str) -> Self {
        Self {
            base: normalize_base(base),
            entries: Vec::new(),
            index: 0,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Browser URL for an app-relative path.
    pub fn href(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// App-relative path for a browser URL. URLs outside the base are
    /// returned unchanged.
    pub fn strip_base(&self, url: &str) -> String {
        strip_base(&self.base, url)
    }

    /// Current entry, if any navigation has happened.
    pub fn location(&self) -> Option<&str> {
        self.entries.get(self.index).map(String::as_str)
    }

    /// Add an entry after the current one, discarding forward entries.
    pub fn push(&mut self, path: impl Into<String>) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        self.entries.push(path.into());
        self.index = self.entries.len() - 1;
    }

    /// Replace the current entry (or add the first one).
    pub fn replace(&mut self, path: impl Into<String>) {
        match self.entries.get_mut(self.index) {
            Some(entry) => *entry = path.into(),
            None => self.push(path),
        }
    }

    /// Entry `delta` steps away from the current one, without moving.
    pub fn peek(&self, delta: isize) -> Option<&str> {
        let target = self.index.checked_add_signed(delta)?;
        self.entries.get(target).map(String::as_str)
    }

    /// Move `delta` steps and replace that entry with `path` (a traversal
    /// may land on a redirected location). Returns false when out of range.
    pub fn go(&mut self, delta: isize, path: impl Into<String>) -> bool {
        let Some(target) = self
            .index
            .checked_add_signed(delta)
            .filter(|&t| t < self.entries.len())
        else {
            return false;
        };
        self.index = target;
        self.entries[target] = path.into();
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize_base(base: &str) -> String {
    let base = match base.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("", |i| &rest[i..]),
        None => base,
    };
    let trimmed = base.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

pub(crate) fn strip_base(base: &str, url: &str) -> String {
    let rest = match url.strip_prefix(base) {
        Some(rest) if !base.is_empty() && (rest.is_empty() || rest.starts_with(['/', '?', '#'])) => {
            rest
        }
        _ => url,
    };
    if rest.starts_with('/') {
        rest.to_string()
    } else {
        format!("/{rest}")
    }
}
