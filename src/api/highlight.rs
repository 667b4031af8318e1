use std::sync::{Arc, PoisonError, RwLock};

use tracing::trace;

/// Shared handle to the highlighted-series state.
///
/// The root composition owns one and hands clones to the series composer
/// (reader) and, wrapped as [`HighlightSetter`], to the legend (writer). All
/// clones observe the same value.
#[derive(Debug, Clone, Default)]
pub struct HighlightState {
    inner: Arc<RwLock<Option<String>>>,
}

impl HighlightState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently highlighted series key, if any.
    #[must_use]
    pub fn highlighted_area(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Toggle mutator: a key equal to the current one clears the highlight,
    /// any other key replaces it, `None` clears.
    pub fn set_highlighted_area(&self, key: Option<&str>) {
        let mut current = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let next = next_highlight(current.as_deref(), key);
        trace!(previous = ?current.as_deref(), next = ?next.as_deref(), "highlight transition");
        *current = next;
    }

    /// Independent state seeded with the current value; later writes on
    /// either side are not seen by the other.
    #[must_use]
    pub fn detached(&self) -> Self {
        Self {
            inner: Arc::new(RwLock::new(self.highlighted_area())),
        }
    }

    pub fn clear(&self) {
        self.set_highlighted_area(None);
    }

    /// Write-side capability handed to the legend.
    #[must_use]
    pub fn setter(&self) -> HighlightSetter {
        HighlightSetter {
            state: self.clone(),
        }
    }
}

/// Write capability over a [`HighlightState`].
#[derive(Debug, Clone)]
pub struct HighlightSetter {
    state: HighlightState,
}

impl HighlightSetter {
    pub fn set_highlighted_area(&self, key: Option<&str>) {
        self.state.set_highlighted_area(key);
    }

    #[must_use]
    pub fn highlighted_area(&self) -> Option<String> {
        self.state.highlighted_area()
    }
}

/// Pure toggle rule behind [`HighlightState::set_highlighted_area`].
#[must_use]
pub fn next_highlight(current: Option<&str>, requested: Option<&str>) -> Option<String> {
    match requested {
        Some(key) if current == Some(key) => None,
        Some(key) => Some(key.to_owned()),
        None => None,
    }
}

/// Opacity of one series under the given highlight.
///
/// No highlight or a matching key yields full opacity, anything else `dimmed`.
#[must_use]
pub fn series_opacity(highlighted: Option<&str>, key: &str, dimmed: f64) -> f64 {
    match highlighted {
        Some(active) if active != key => dimmed,
        _ => 1.0,
    }
}
