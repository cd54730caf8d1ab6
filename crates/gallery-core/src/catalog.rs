//! Read-only product catalog consumed by the product viewer.
//!
//! Catalogs come from JSON. Every constructor runs [`Catalog::validate`], so
//! the tour and viewer never see a product without variants or a variant
//! without colors.

use crate::error::{GalleryError, Result};
use serde::{Deserialize, Serialize};

static BUILTIN_CATALOG_JSON: &str = include_str!("../assets/catalog.json");

/// One selectable color of a variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorOption {
    pub name: String,
    pub hex: String,
    pub bg: String,
    #[serde(rename = "textColor")]
    pub text_color: String,
}

impl ColorOption {
    /// Parse `hex` (`#rrggbb`) into 0..1 RGB components.
    pub fn rgb(&self) -> Option<[f32; 3]> {
        parse_hex_rgb(&self.hex)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpecEntry {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub name: String,
    pub model: String,
    #[serde(default = "unit_scale")]
    pub scale: [f32; 3],
    #[serde(default)]
    pub offset: f32,
    #[serde(default)]
    pub rotation: [f32; 3],
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub accent: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    pub colors: Vec<ColorOption>,
    #[serde(default)]
    pub specs: Vec<SpecEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    pub variants: Vec<Variant>,
}

impl Product {
    /// Number of colors per variant, in catalog order.
    pub fn color_layout(&self) -> Vec<usize> {
        self.variants.iter().map(|v| v.colors.len()).collect()
    }

    pub fn variant(&self, index: usize) -> Result<&Variant> {
        self.variants
            .get(index)
            .ok_or(GalleryError::VariantOutOfRange {
                index,
                len: self.variants.len(),
            })
    }

    pub fn color(&self, variant: usize, color: usize) -> Result<&ColorOption> {
        let v = self.variant(variant)?;
        v.colors.get(color).ok_or(GalleryError::ColorOutOfRange {
            index: color,
            len: v.colors.len(),
        })
    }

    fn validate(&self) -> Result<()> {
        if self.variants.is_empty() {
            return Err(GalleryError::EmptyVariants { product: self.id });
        }
        for (i, v) in self.variants.iter().enumerate() {
            if v.colors.is_empty() {
                return Err(GalleryError::EmptyColors {
                    product: self.id,
                    variant: i,
                });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from already-constructed products, rejecting malformed entries.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let catalog = Self { products };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog =
            serde_json::from_str(json).map_err(|e| GalleryError::CatalogParse(e.to_string()))?;
        catalog.validate()?;
        log::info!("[catalog] loaded {} product(s)", catalog.products.len());
        Ok(catalog)
    }

    /// The catalog bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG_JSON)
    }

    pub fn validate(&self) -> Result<()> {
        if self.products.is_empty() {
            return Err(GalleryError::EmptyCatalog);
        }
        for p in &self.products {
            p.validate()?;
        }
        Ok(())
    }

    pub fn product(&self, id: u32) -> Result<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(GalleryError::UnknownProduct(id))
    }
}

fn unit_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

/// Parse `#rrggbb` (leading `#` optional) into 0..1 RGB.
pub fn parse_hex_rgb(hex: &str) -> Option<[f32; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some([
        channel(0)? as f32 / 255.0,
        channel(2)? as f32 / 255.0,
        channel(4)? as f32 / 255.0,
    ])
}
