//! Derivation of the available skip list.

use crate::skip::SkipOption;

/// Skips offered for the current selection, smallest first.
///
/// Any declared heavy waste restricts the list to skips that accept it.
/// The sort is stable, so equal sizes keep catalog order.
#[must_use]
pub fn available_skips(catalog: &[SkipOption], has_heavy_waste: bool) -> Vec<SkipOption> {
    let mut skips: Vec<SkipOption> = catalog
        .iter()
        .filter(|skip| !has_heavy_waste || skip.allows_heavy_waste)
        .cloned()
        .collect();
    skips.sort_by(|a, b| a.size.total_cmp(&b.size));
    skips
}

/// Total price including VAT, rounded to pence for display.
#[must_use]
pub fn format_total(skip: &SkipOption) -> String {
    format!("{:.2}", skip.total_price())
}
