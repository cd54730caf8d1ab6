//! Path routing between the gallery corridor and product pages.

use crate::constants::EXHIBIT_COUNT;
use crate::error::{GalleryError, Result};
use crate::Catalog;
use std::fmt;

/// Map an exhibit id onto the catalog's product id range (`1..=10`).
///
/// Id 0 has no product and maps to 0, which no catalog entry uses.
#[inline]
pub fn product_for_exhibit(exhibit_id: u32) -> u32 {
    if exhibit_id == 0 {
        return 0;
    }
    (exhibit_id - 1) % EXHIBIT_COUNT as u32 + 1
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Gallery,
    Product(u32),
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Route::Gallery;
        }
        match trimmed.strip_prefix("/product/") {
            Some(id) => match id.parse::<u32>() {
                Ok(id) => Route::Product(id),
                Err(_) => Route::NotFound,
            },
            None => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Gallery => "/".to_string(),
            Route::Product(id) => format!("/product/{id}"),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Check a product route against the catalog, turning unknown ids into `NotFound`.
    pub fn resolve(self, catalog: &Catalog) -> Self {
        match self {
            Route::Product(id) if catalog.product(id).is_err() => {
                log::warn!("[route] product {id} not in catalog");
                Route::NotFound
            }
            other => other,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// A navigation request fired when the user selects an exhibit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    pub exhibit_id: u32,
    pub route: Route,
}

impl NavigationRequest {
    pub fn for_exhibit(exhibit_id: u32) -> Result<Self> {
        let product = product_for_exhibit(exhibit_id);
        if product == 0 {
            return Err(GalleryError::UnknownExhibit(exhibit_id));
        }
        Ok(Self {
            exhibit_id,
            route: Route::Product(product),
        })
    }

    pub fn path(&self) -> String {
        self.route.path()
    }
}
