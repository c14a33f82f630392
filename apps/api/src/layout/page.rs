//! Fixed page geometry of the exported CV.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Portrait,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaperSize {
    Letter,
}

impl PaperSize {
    /// CSS `@page size` keyword.
    pub fn css_name(&self) -> &'static str {
        match self {
            PaperSize::Letter => "letter",
        }
    }
}

/// Page layout handed to the print/PDF step along with the markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub paper: PaperSize,
    pub orientation: Orientation,
    /// Top, right, bottom, left, in inches.
    pub margins_in: [f32; 4],
}

/// US letter, portrait, 0.5" margins on every side.
pub fn default_page_geometry() -> PageGeometry {
    PageGeometry {
        paper: PaperSize::Letter,
        orientation: Orientation::Portrait,
        margins_in: [0.5, 0.5, 0.5, 0.5],
    }
}

impl PageGeometry {
    /// The `@page` rule reproducing this geometry.
    pub fn css_page_rule(&self) -> String {
        let orientation = match self.orientation {
            Orientation::Portrait => "portrait",
        };
        let [top, right, bottom, left] = self.margins_in;
        format!(
            "@page {{ size: {} {}; margin: {top}in {right}in {bottom}in {left}in; }}",
            self.paper.css_name(),
            orientation
        )
    }
}
