//! Render requests for the visualization collaborator.
//!
//! A plot carries no numeric result. Each point gets a label (its display
//! form) and a color chosen by index from a fixed four-color palette.

use serde::{Deserialize, Serialize};

use crate::format::format_complex;
use crate::types::ComplexValue;

/// Marker colors, cycled by point index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteColor {
    Red,
    Blue,
    Green,
    Purple,
}

pub const PALETTE: [PaletteColor; 4] = [
    PaletteColor::Red,
    PaletteColor::Blue,
    PaletteColor::Green,
    PaletteColor::Purple,
];

impl PaletteColor {
    /// Palette entry for the point at `index`.
    pub fn for_index(index: usize) -> PaletteColor {
        PALETTE[index % PALETTE.len()]
    }

    /// Position of this color in `PALETTE`.
    pub fn index(self) -> usize {
        match self {
            PaletteColor::Red => 0,
            PaletteColor::Blue => 1,
            PaletteColor::Green => 2,
            PaletteColor::Purple => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    #[serde(flatten)]
    pub value: ComplexValue,
    pub label: String,
    pub color: PaletteColor,
}

/// Points to draw on an Argand diagram, in input order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderRequest {
    pub points: Vec<PlotPoint>,
}

impl RenderRequest {
    pub fn values(&self) -> impl Iterator<Item = ComplexValue> + '_ {
        self.points.iter().map(|p| p.value)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|p| p.label.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Build a render request with one point per value.
pub fn plot(values: &[ComplexValue]) -> RenderRequest {
    let points = values
        .iter()
        .enumerate()
        .map(|(i, v)| PlotPoint {
            value: *v,
            label: format_complex(*v),
            color: PaletteColor::for_index(i),
        })
        .collect();
    RenderRequest { points }
}
