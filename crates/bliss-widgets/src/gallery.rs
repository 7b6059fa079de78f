#![forbid(unsafe_code)]

//! Gallery filter and lightbox selection.
//!
//! The catalog itself is owned by the content layer and passed in by
//! reference on every call; [`GalleryState`] only keeps the active
//! [`Category`] and the selected [`ItemId`]. Because the catalog is supplied
//! at render time, a selection can go stale if the catalog changes. The
//! lightbox then resolves to [`Lightbox::NoImage`] instead of failing.

use std::fmt;
use std::str::FromStr;

use bliss_core::debug;

/// Image shown in the lightbox when a selection no longer resolves.
pub const FALLBACK_IMAGE: &str = "/Images/logo.jpeg";

/// Closed set of gallery filter categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// Catch-all filter; never assigned to an item.
    #[default]
    All,
    /// Filled and chunky cookies.
    Cookies,
    /// Custom, fruit and cheese cakes.
    Cakes,
    /// Brownies and blondies.
    Brownies,
    /// French macarons.
    Macarons,
    /// Cream pastries.
    Pastries,
    /// Cupcakes.
    Cupcakes,
    /// Bomboloni and filled donuts.
    Donuts,
    /// Madeleines, financiers and other one-offs.
    Specialty,
}

impl Category {
    /// Every category in filter-bar order.
    pub const ALL: [Category; 9] = [
        Category::All,
        Category::Cookies,
        Category::Cakes,
        Category::Brownies,
        Category::Macarons,
        Category::Pastries,
        Category::Cupcakes,
        Category::Donuts,
        Category::Specialty,
    ];

    /// Chip label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Cookies => "Cookies",
            Self::Cakes => "Cakes",
            Self::Brownies => "Brownies",
            Self::Macarons => "Macarons",
            Self::Pastries => "Pastries",
            Self::Cupcakes => "Cupcakes",
            Self::Donuts => "Donuts",
            Self::Specialty => "Specialty",
        }
    }

    /// Whether an item in `item_category` passes this filter.
    #[must_use]
    pub fn admits(self, item_category: Category) -> bool {
        self == Category::All || self == item_category
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| GalleryError::InvalidCategory(s.to_owned()))
    }
}

/// Catalog item identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable gallery entry supplied by the content layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryItem {
    /// Unique id within the catalog.
    pub id: ItemId,
    /// Category the item is filed under.
    pub category: Category,
    /// Alt text.
    pub alt: &'static str,
    /// Image path.
    pub src: &'static str,
}

impl GalleryItem {
    /// Convenience constructor for static catalogs.
    #[must_use]
    pub const fn new(id: u32, category: Category, alt: &'static str, src: &'static str) -> Self {
        Self {
            id: ItemId(id),
            category,
            alt,
            src,
        }
    }
}

/// Errors raised by [`GalleryState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    /// Category string outside the closed set.
    InvalidCategory(String),
    /// Item id not present in the catalog.
    UnknownItem(ItemId),
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCategory(raw) => write!(f, "invalid gallery category {raw:?}"),
            Self::UnknownItem(id) => write!(f, "unknown gallery item {id}"),
        }
    }
}

impl std::error::Error for GalleryError {}

/// What the lightbox overlay should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lightbox<'a> {
    /// No selection; render nothing.
    Closed,
    /// Selection resolved to a catalog entry.
    Image(&'a GalleryItem),
    /// Selection no longer resolves.
    NoImage {
        /// The unresolved id.
        id: ItemId,
        /// Image a renderer may show in place of the item.
        fallback_src: &'static str,
    },
}

impl Lightbox<'_> {
    /// Whether the overlay is rendered at all.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// One filter chip in the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterChip {
    /// Category the chip selects.
    pub category: Category,
    /// Whether it is the active filter.
    pub active: bool,
}

/// Current filter and lightbox selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryState {
    category: Category,
    selected: Option<ItemId>,
}

impl GalleryState {
    /// Start on `All` with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Active filter.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Selected item id, if any.
    #[must_use]
    pub fn selected(&self) -> Option<ItemId> {
        self.selected
    }

    /// Parse a chip label and make it the active filter.
    ///
    /// Labels outside the closed set leave the state unchanged.
    pub fn set_category(&mut self, raw: &str) -> Result<Category, GalleryError> {
        let category = raw.parse::<Category>().inspect_err(|_| {
            debug!(input = raw, "gallery category rejected");
        })?;
        self.set_category_to(category);
        Ok(category)
    }

    /// Make `category` the active filter.
    pub fn set_category_to(&mut self, category: Category) {
        if self.category != category {
            debug!(from = %self.category, to = %category, "gallery filter");
        }
        self.category = category;
    }

    /// Items passing the active filter, in catalog order.
    #[must_use]
    pub fn filtered<'a>(&self, catalog: &'a [GalleryItem]) -> Vec<&'a GalleryItem> {
        catalog
            .iter()
            .filter(|item| self.category.admits(item.category))
            .collect()
    }

    /// Select an item from the full catalog.
    ///
    /// Ids missing from `catalog` are rejected and leave the selection as is.
    pub fn select(&mut self, catalog: &[GalleryItem], id: ItemId) -> Result<(), GalleryError> {
        if !catalog.iter().any(|item| item.id == id) {
            debug!(%id, "selection of unknown gallery item rejected");
            return Err(GalleryError::UnknownItem(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    /// Close the lightbox. Returns `true` if something was selected.
    pub fn clear_selection(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// Resolve the selection against the catalog being rendered.
    #[must_use]
    pub fn lightbox<'a>(&self, catalog: &'a [GalleryItem]) -> Lightbox<'a> {
        let Some(id) = self.selected else {
            return Lightbox::Closed;
        };
        match catalog.iter().find(|item| item.id == id) {
            Some(item) => Lightbox::Image(item),
            None => {
                debug!(%id, "stale gallery selection");
                Lightbox::NoImage {
                    id,
                    fallback_src: FALLBACK_IMAGE,
                }
            }
        }
    }

    /// Filter bar chips with the active one flagged.
    #[must_use]
    pub fn filter_chips(&self) -> [FilterChip; 9] {
        Category::ALL.map(|category| FilterChip {
            category,
            active: category == self.category,
        })
    }
}
