use thiserror::Error;

/// Errors surfaced by the control core.
///
/// Catalog problems are load-time errors: a session can only be built from a
/// catalog that passed [`crate::Catalog::validate`], so nothing here is
/// raised from inside a tick.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GalleryError {
    #[error("unknown product id {0}")]
    UnknownProduct(u32),
    #[error("unknown exhibit id {0}")]
    UnknownExhibit(u32),
    #[error("catalog has no products")]
    EmptyCatalog,
    #[error("product {product} has no variants")]
    EmptyVariants { product: u32 },
    #[error("product {product} variant {variant} has no colors")]
    EmptyColors { product: u32, variant: usize },
    #[error("variant index {index} out of range (product has {len})")]
    VariantOutOfRange { index: usize, len: usize },
    #[error("color index {index} out of range (variant has {len})")]
    ColorOutOfRange { index: usize, len: usize },
    #[error("catalog parse error: {0}")]
    CatalogParse(String),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
