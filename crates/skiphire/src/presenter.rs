//! Headless output for listings and checkout hand-off.

use std::io::{self, Write};

use skiphire_core::{format_total, CatalogError, SkipOption, WasteType};

/// CLI presenter for the listing mode and the post-popup summary.
pub struct CliPresenter {
    json: bool,
}

impl CliPresenter {
    #[must_use]
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print available skips as a table, or as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if writing or serializing fails.
    pub fn present_skips(
        &self,
        out: &mut impl Write,
        skips: &[SkipOption],
        waste_types: &[WasteType],
    ) -> anyhow::Result<()> {
        if self.json {
            serde_json::to_writer_pretty(&mut *out, skips)?;
            writeln!(out)?;
            return Ok(());
        }

        if waste_types.is_empty() {
            writeln!(out, "Heavy waste: none")?;
        } else {
            let names: Vec<&str> = waste_types.iter().map(|w| w.name()).collect();
            writeln!(out, "Heavy waste: {}", names.join(", "))?;
        }

        if skips.is_empty() {
            writeln!(out, "No skips available")?;
            return Ok(());
        }

        writeln!(
            out,
            "{:>6}  {:>8}  {:>10}  {:>6}  {:>9}",
            "Size", "Hire", "Total", "VAT", "Placement"
        )?;
        for skip in skips {
            writeln!(out, "{}", format_row(skip))?;
        }
        Ok(())
    }

    /// Print the skip chosen in the popup.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn present_checkout(&self, out: &mut impl Write, skip: &SkipOption) -> io::Result<()> {
        if self.json {
            let value = serde_json::to_string(skip).map_err(io::Error::other)?;
            return writeln!(out, "{value}");
        }
        writeln!(
            out,
            "Selected: {} Yard Skip ({} day hire)",
            skip.size, skip.hire_period_days
        )?;
        writeln!(out, "Total: £{}", format_total(skip))
    }

    /// Print a fetch failure on stderr.
    pub fn present_error(&self, err: &CatalogError) {
        eprintln!("Error: {}", err.user_message());
        eprintln!("  {err}");
        if err.is_retryable() {
            eprintln!("  The pricing service may be busy, try again shortly.");
        }
    }
}

/// One table row for a skip.
#[must_use]
pub fn format_row(skip: &SkipOption) -> String {
    format!(
        "{:>5}y  {:>7}d  {:>10}  {:>5}%  {:>9}",
        skip.size,
        skip.hire_period_days,
        format!("£{}", format_total(skip)),
        skip.vat,
        skip.placement()
    )
}
