//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use dessert_clicker::catalog::{Catalog, CatalogItem};
use dessert_clicker::share::{ShareError, ShareTarget};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

/// Catalog with thresholds 0, 5, 10, 15, 20, 25 and prices 1..=6.
pub fn stepped_catalog() -> Arc<Catalog> {
    let items = (0..6)
        .map(|i| CatalogItem::new(format!("item{i}"), "*", i + 1, i * 5))
        .collect();
    Arc::new(Catalog::new(items).expect("valid catalog"))
}

/// The two-item catalog: img0 at price 1, img1 at price 2 from 3 sales.
pub fn two_item_catalog() -> Arc<Catalog> {
    Arc::new(
        Catalog::new(vec![
            CatalogItem::new("img0", "0", 1, 0),
            CatalogItem::new("img1", "1", 2, 3),
        ])
        .expect("valid catalog"),
    )
}

/// Share target that records what it was given, or refuses everything.
#[derive(Clone, Default)]
pub struct RecordingShareTarget {
    pub shared: Rc<RefCell<Vec<String>>>,
    pub unavailable: bool,
}

impl RecordingShareTarget {
    pub fn unavailable() -> Self {
        Self {
            shared: Rc::default(),
            unavailable: true,
        }
    }
}

impl ShareTarget for RecordingShareTarget {
    fn share(&mut self, text: &str) -> Result<(), ShareError> {
        if self.unavailable {
            return Err(ShareError::NoDestination {
                reason: "no receiver".to_string(),
            });
        }
        self.shared.borrow_mut().push(text.to_string());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recorder"
    }
}
