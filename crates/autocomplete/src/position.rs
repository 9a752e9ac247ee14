//! Anchor geometry for the results list.

use core_types::{Rect, Viewport};
use std::fmt;

/// Which edge of the viewport the list is offset from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VerticalAnchor {
    /// Distance from the viewport top; the list grows downward below the input.
    Top(f32),
    /// Distance from the viewport bottom; the list grows upward above the input.
    Bottom(f32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResultsPosition {
    pub vertical: VerticalAnchor,
    pub left: f32,
    pub width: f32,
}

impl ResultsPosition {
    pub fn below(top: f32, left: f32, width: f32) -> Self {
        Self {
            vertical: VerticalAnchor::Top(top),
            left,
            width,
        }
    }

    pub fn above(bottom: f32, left: f32, width: f32) -> Self {
        Self {
            vertical: VerticalAnchor::Bottom(bottom),
            left,
            width,
        }
    }

    pub fn is_above(&self) -> bool {
        matches!(self.vertical, VerticalAnchor::Bottom(_))
    }
}

/// CSS pixel length, printed without a fractional part when it has none.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Px(pub f32);

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Place the list below the input unless it would overflow the viewport bottom,
/// there is more room above than below, and it fits above without leaving the
/// document.
pub fn default_results_position(input: Rect, results: Rect, viewport: Viewport) -> ResultsPosition {
    let overflows_below = input.bottom() + results.height > viewport.height;
    let more_room_above = viewport.height - input.bottom() < input.y;
    let fits_above = viewport.scroll_y + input.y - results.height > 0.0;

    if overflows_below && more_room_above && fits_above {
        ResultsPosition::above(viewport.height - input.y, input.x, input.width)
    } else {
        ResultsPosition::below(input.bottom(), input.x, input.width)
    }
}
