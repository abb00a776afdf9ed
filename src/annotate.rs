//! Marker placement for the top ranked candidates
//!
//! Candidates are handled best first. A candidate whose box touches an already
//! placed marker is skipped; there is no search for an alternative position.

use crate::glyphs;
use crate::scan::Candidate;
use image::{Rgb, RgbImage};
use imageproc::{drawing::draw_hollow_rect_mut, rect::Rect};

/// Distance from the marked pixel to each edge of its box.
pub const MARKER_RADIUS: i64 = 5;

/// Offset of the label's top-left corner from the marked pixel, on both axes.
pub const LABEL_OFFSET: i64 = 15;

/// Axis-aligned box with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkedRect {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl MarkedRect {
    /// The 11x11 box centered on (`x`, `y`). May extend past the image edges.
    pub fn around(x: u32, y: u32) -> Self {
        let (x, y) = (i64::from(x), i64::from(y));
        Self {
            left: x - MARKER_RADIUS,
            top: y - MARKER_RADIUS,
            right: x + MARKER_RADIUS,
            bottom: y + MARKER_RADIUS,
        }
    }

    /// Closed-interval intersection test; touching edges count as overlap.
    pub fn overlaps(&self, other: &MarkedRect) -> bool {
        !(self.right < other.left
            || self.left > other.right
            || self.bottom < other.top
            || self.top > other.bottom)
    }

    pub fn width(&self) -> u32 {
        (self.right - self.left + 1) as u32
    }

    pub fn height(&self) -> u32 {
        (self.bottom - self.top + 1) as u32
    }
}

/// Drawing primitives the annotator needs from an image surface.
pub trait Surface {
    fn outline_rect(&mut self, rect: &MarkedRect, color: Rgb<u8>);
    fn draw_text(&mut self, x: i64, y: i64, text: &str, color: Rgb<u8>);
}

impl Surface for RgbImage {
    fn outline_rect(&mut self, rect: &MarkedRect, color: Rgb<u8>) {
        let outline = Rect::at(rect.left as i32, rect.top as i32).of_size(rect.width(), rect.height());
        draw_hollow_rect_mut(self, outline, color);
    }

    fn draw_text(&mut self, x: i64, y: i64, text: &str, color: Rgb<u8>) {
        glyphs::draw_text(self, x, y, text, color);
    }
}

/// Draws a labelled box for every candidate that does not collide with a box
/// placed before it, and returns the boxes that were drawn.
///
/// `candidates` must be ordered best first, as produced by the scanner.
pub fn mark_top_candidates<S: Surface + ?Sized>(
    surface: &mut S,
    candidates: &[Candidate],
    color: Rgb<u8>,
) -> Vec<MarkedRect> {
    let mut placed: Vec<MarkedRect> = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let rect = MarkedRect::around(candidate.x, candidate.y);

        if placed.iter().any(|other| rect.overlaps(other)) {
            log::debug!(
                "Skipping pixel #{} at {},{}: marker would overlap",
                candidate.index,
                candidate.x,
                candidate.y
            );
            continue;
        }

        surface.outline_rect(&rect, color);
        surface.draw_text(
            i64::from(candidate.x) + LABEL_OFFSET,
            i64::from(candidate.y) + LABEL_OFFSET,
            &candidate.index.to_string(),
            color,
        );
        log::debug!(
            "Marked pixel #{} at {},{} (red = {})",
            candidate.index,
            candidate.x,
            candidate.y,
            candidate.red
        );
        placed.push(rect);
    }

    placed
}
