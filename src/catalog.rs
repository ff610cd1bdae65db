//! The fixed, ordered list of desserts that can be sold.

use thiserror::Error;

/// One sellable dessert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    /// Display identifier (e.g. "cupcake").
    pub name: String,
    /// Visual shown in the body of the screen.
    pub glyph: String,
    /// Revenue earned per sale while this item is active.
    pub unit_price: u64,
    /// Cumulative sold count at which this item becomes active.
    pub activation_threshold: u64,
}

impl CatalogItem {
    pub fn new(
        name: impl Into<String>,
        glyph: impl Into<String>,
        unit_price: u64,
        activation_threshold: u64,
    ) -> Self {
        Self {
            name: name.into(),
            glyph: glyph.into(),
            unit_price,
            activation_threshold,
        }
    }
}

/// Errors raised when a catalog breaks its startup invariant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Catalog must contain at least one item")]
    Empty,

    #[error("First catalog item '{name}' must have threshold 0, found {threshold}")]
    FirstThresholdNotZero { name: String, threshold: u64 },

    #[error("Catalog item '{name}' has threshold {threshold}, which must be greater than {previous}")]
    NotAscending {
        name: String,
        threshold: u64,
        previous: u64,
    },

    #[error("Catalog item '{name}' must have a positive price")]
    ZeroPrice { name: String },
}

/// Non-empty list of items ordered by strictly increasing threshold,
/// starting at threshold 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Build a catalog, checking the ordering invariant once.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        let first = items.first().ok_or(CatalogError::Empty)?;
        if first.activation_threshold != 0 {
            return Err(CatalogError::FirstThresholdNotZero {
                name: first.name.clone(),
                threshold: first.activation_threshold,
            });
        }

        for item in &items {
            if item.unit_price == 0 {
                return Err(CatalogError::ZeroPrice {
                    name: item.name.clone(),
                });
            }
        }

        for pair in items.windows(2) {
            let (previous, item) = (&pair[0], &pair[1]);
            if item.activation_threshold <= previous.activation_threshold {
                return Err(CatalogError::NotAscending {
                    name: item.name.clone(),
                    threshold: item.activation_threshold,
                    previous: previous.activation_threshold,
                });
            }
        }

        Ok(Self { items })
    }

    /// The built-in dessert line-up.
    pub fn desserts() -> Self {
        let items = vec![
            CatalogItem::new("cupcake", "🧁", 5, 0),
            CatalogItem::new("donut", "🍩", 10, 5),
            CatalogItem::new("eclair", "🥖", 15, 20),
            CatalogItem::new("froyo", "🍦", 30, 50),
            CatalogItem::new("gingerbread", "🍪", 50, 100),
            CatalogItem::new("honeycomb", "🍯", 100, 200),
            CatalogItem::new("ice cream sandwich", "🍨", 500, 500),
            CatalogItem::new("jellybean", "🫘", 1000, 1000),
            CatalogItem::new("kitkat", "🍫", 2000, 2000),
            CatalogItem::new("lollipop", "🍭", 3000, 4000),
            CatalogItem::new("marshmallow", "☁️", 4000, 8000),
            CatalogItem::new("nougat", "🥜", 5000, 16000),
            CatalogItem::new("oreo", "⚫", 6000, 20000),
        ];
        Self { items }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&CatalogItem> {
        self.items.get(index)
    }

    pub fn first(&self) -> &CatalogItem {
        &self.items[0]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the item that is active once `sold_count` sales have happened.
    ///
    /// Scans in order and stops at the first threshold that is not yet met;
    /// ascending thresholds mean nothing later can qualify.
    pub fn active_index(&self, sold_count: u64) -> usize {
        let mut candidate = 0;
        for (index, item) in self.items.iter().enumerate() {
            if sold_count >= item.activation_threshold {
                candidate = index;
            } else {
                break;
            }
        }
        candidate
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::desserts()
    }
}
