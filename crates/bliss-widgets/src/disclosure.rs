#![forbid(unsafe_code)]

//! Multi-panel disclosure state for the FAQ page.
//!
//! Every question is addressed by a [`PanelId`] composed of its section index
//! and its index within that section, rendered as `"{section}-{item}"`. Ids
//! depend only on the static content layout, so they stay stable across
//! re-renders. Any number of panels may be open at once.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use bliss_core::debug;

/// Stable identifier of a disclosure panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId {
    /// Section index.
    pub section: u16,
    /// Item index within the section.
    pub item: u16,
}

impl PanelId {
    /// Create an id from section and item indices.
    #[must_use]
    pub const fn new(section: u16, item: u16) -> Self {
        Self { section, item }
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.section, self.item)
    }
}

impl FromStr for PanelId {
    type Err = DisclosureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DisclosureError::MalformedId(s.to_owned());
        let (section, item) = s.split_once('-').ok_or_else(malformed)?;
        let section = section.parse().map_err(|_| malformed())?;
        let item = item.parse().map_err(|_| malformed())?;
        Ok(Self { section, item })
    }
}

/// Errors raised by [`DisclosureGroup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisclosureError {
    /// The id does not belong to the rendered panel set.
    UnknownPanel(PanelId),
    /// The id string is not `"{section}-{item}"`.
    MalformedId(String),
}

impl fmt::Display for DisclosureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPanel(id) => write!(f, "unknown panel {id}"),
            Self::MalformedId(raw) => write!(f, "malformed panel id {raw:?}"),
        }
    }
}

impl std::error::Error for DisclosureError {}

/// Set of independently toggleable panels.
#[derive(Debug, Clone, Default)]
pub struct DisclosureGroup {
    known: HashSet<PanelId>,
    open: HashSet<PanelId>,
}

impl DisclosureGroup {
    /// Build the known panel set from per-section item counts.
    ///
    /// `&[4, 3]` yields `0-0..0-3` and `1-0..1-2`. Indices are `u16`: sections
    /// past `u16::MAX` are dropped and item counts are capped at `u16::MAX`.
    #[must_use]
    pub fn from_section_sizes(sizes: &[usize]) -> Self {
        let known = sizes
            .iter()
            .zip(0..=u16::MAX)
            .flat_map(|(&count, section)| {
                let count = u16::try_from(count).unwrap_or(u16::MAX);
                (0..count).map(move |item| PanelId::new(section, item))
            })
            .collect();
        Self {
            known,
            open: HashSet::new(),
        }
    }

    /// Build from an explicit list of panel ids.
    #[must_use]
    pub fn with_panels(panels: impl IntoIterator<Item = PanelId>) -> Self {
        Self {
            known: panels.into_iter().collect(),
            open: HashSet::new(),
        }
    }

    /// Flip a panel. Returns whether it is open afterwards.
    pub fn toggle(&mut self, id: PanelId) -> Result<bool, DisclosureError> {
        if !self.known.contains(&id) {
            debug!(panel = %id, "toggle for unknown panel rejected");
            return Err(DisclosureError::UnknownPanel(id));
        }
        let now_open = if self.open.remove(&id) {
            false
        } else {
            self.open.insert(id);
            true
        };
        debug!(panel = %id, open = now_open, "panel toggled");
        Ok(now_open)
    }

    /// Parse a rendered id and flip it.
    pub fn toggle_str(&mut self, raw: &str) -> Result<bool, DisclosureError> {
        let id = raw.parse::<PanelId>()?;
        self.toggle(id)
    }

    /// Whether `id` is open.
    #[must_use]
    pub fn is_open(&self, id: PanelId) -> bool {
        self.open.contains(&id)
    }

    /// Whether `id` belongs to the panel set.
    #[must_use]
    pub fn contains(&self, id: PanelId) -> bool {
        self.known.contains(&id)
    }

    /// Number of open panels.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Number of known panels.
    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.known.len()
    }

    /// Open panels in section/item order.
    #[must_use]
    pub fn open_ids(&self) -> Vec<PanelId> {
        let mut ids: Vec<_> = self.open.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Collapse every panel.
    pub fn close_all(&mut self) {
        self.open.clear();
    }
}
