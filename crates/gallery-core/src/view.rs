//! Product viewer selection consumed by the external renderer.

use crate::catalog::{ColorOption, Product, Variant};

/// Who made the most recent selection change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionOrigin {
    #[default]
    Initial,
    User,
    Tour,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub variant_index: usize,
    pub color_index: usize,
    pub origin: SelectionOrigin,
}

impl ViewState {
    #[inline]
    pub fn selection(&self) -> (usize, usize) {
        (self.variant_index, self.color_index)
    }

    pub(crate) fn apply_tour_step(&mut self, variant_index: usize, color_index: usize) {
        self.variant_index = variant_index;
        self.color_index = color_index;
        self.origin = SelectionOrigin::Tour;
    }

    pub fn variant<'a>(&self, product: &'a Product) -> Option<&'a Variant> {
        product.variants.get(self.variant_index)
    }

    pub fn color<'a>(&self, product: &'a Product) -> Option<&'a ColorOption> {
        self.variant(product)
            .and_then(|v| v.colors.get(self.color_index))
    }
}
