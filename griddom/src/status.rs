//! Status indicator - a colored marker plus label.

use crate::element::Element;
use crate::types::{Style, Theme};

const STATUS_AVAILABLE: &str = "available";
const LABEL_AVAILABLE: &str = "Available";
const LABEL_FALLBACK: &str = "Scheduled";

/// Pure presentational mapping from a status value to a marker + label.
///
/// `"available"` gets the marker and its own label; every other value
/// renders without a marker and with the fixed fallback label.
#[derive(Clone, Copy, Debug)]
pub struct Status<'a> {
    status: &'a str,
}

impl<'a> Status<'a> {
    pub fn new(status: &'a str) -> Self {
        Self { status }
    }

    pub fn build(self, theme: &Theme) -> Element {
        let available = self.status == STATUS_AVAILABLE;

        let mut row = Element::row().gap(1);

        if available {
            row = row.child(Element::text("●").style(Style::new().foreground(theme.success)));
        }

        let label = if available {
            LABEL_AVAILABLE
        } else {
            LABEL_FALLBACK
        };

        row.child(Element::text(label))
    }
}
