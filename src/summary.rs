use std::fmt;

use crate::data::Layout;

/// Plain text rendering of a layout, one block per page.
pub struct Summary<'a>(pub &'a Layout);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = self.0;
        let (page_width, page_height) = layout.page_size;

        for page in &layout.pages {
            writeln!(
                f,
                "Page {} ({}x{}, {:.0}% used)",
                page.number,
                page_width,
                page_height,
                page.utilization * 100.0
            )?;

            for piece in &page.items {
                writeln!(
                    f,
                    "  {}: {} x {} at ({}, {})",
                    piece.label, piece.width, piece.height, piece.x, piece.y
                )?;
            }
        }

        if !layout.unplaceable.is_empty() {
            writeln!(
                f,
                "Larger than the {}x{} page, not placed:",
                page_width, page_height
            )?;

            for piece in &layout.unplaceable {
                writeln!(f, "  {}: {} x {}", piece.label, piece.width, piece.height)?;
            }
        }

        Ok(())
    }
}
