//! Pixel scanning: red dominance classification and top candidate tracking
//!
//! The scanner walks the image column by column (outer `x`, inner `y`) so the
//! sequence numbers handed out to dominant pixels are reproducible between runs.

use image::{Rgb, RgbImage};
use std::fmt;

/// Minimum share of the total intensity the red channel must hold.
pub const DOMINANCE_THRESHOLD: f64 = 0.51;

/// Number of candidates kept for marking.
pub const TOP_K: usize = 3;

/// Returns true when red holds at least [`DOMINANCE_THRESHOLD`] of `r + g + b`.
///
/// Black pixels are never dominant.
pub fn is_dominant_red(r: u8, g: u8, b: u8) -> bool {
    let total = u32::from(r) + u32::from(g) + u32::from(b);
    total > 0 && f64::from(r) / f64::from(total) >= DOMINANCE_THRESHOLD
}

/// One line of the pixel log, created for every dominant pixel in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRecord {
    /// 1-based position in discovery order
    pub index: usize,
    pub color: [u8; 3],
    pub x: u32,
    pub y: u32,
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.color;
        write!(f, "{} - [{},{},{}] - {},{}", self.index, r, g, b, self.x, self.y)
    }
}

/// A dominant pixel competing for a marker.
///
/// Field order is the ranking order: the derived `Ord` compares red first,
/// then `x`, `y` and finally the sequence index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Candidate {
    pub red: u8,
    pub x: u32,
    pub y: u32,
    pub index: usize,
}

/// Bounded set of the highest ranked candidates, kept sorted in descending order.
#[derive(Debug, Clone, Default)]
pub struct TopCandidates {
    items: Vec<Candidate>,
}

impl TopCandidates {
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(TOP_K + 1),
        }
    }

    /// Inserts a candidate and drops whatever falls below the top [`TOP_K`].
    pub fn push(&mut self, candidate: Candidate) {
        let pos = self
            .items
            .iter()
            .position(|kept| candidate > *kept)
            .unwrap_or(self.items.len());
        if pos < TOP_K {
            self.items.insert(pos, candidate);
            self.items.truncate(TOP_K);
        }
    }

    pub fn as_slice(&self) -> &[Candidate] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<Candidate> {
        self.items
    }
}

/// Everything the later stages need from a finished scan.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub records: Vec<LogRecord>,
    /// Highest ranked first
    pub top: Vec<Candidate>,
}

impl ScanOutcome {
    /// Number of dominant pixels found.
    pub fn count(&self) -> usize {
        self.records.len()
    }
}

/// Accumulates scan state one pixel at a time.
#[derive(Debug, Default)]
pub struct Scanner {
    records: Vec<LogRecord>,
    top: TopCandidates,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, x: u32, y: u32, pixel: Rgb<u8>) {
        let [r, g, b] = pixel.0;
        if !is_dominant_red(r, g, b) {
            return;
        }

        let index = self.records.len() + 1;
        self.records.push(LogRecord {
            index,
            color: pixel.0,
            x,
            y,
        });
        self.top.push(Candidate { red: r, x, y, index });
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn top(&self) -> &[Candidate] {
        self.top.as_slice()
    }

    pub fn finish(self) -> ScanOutcome {
        ScanOutcome {
            records: self.records,
            top: self.top.into_vec(),
        }
    }
}

/// Scans every pixel of `img`, outer loop over columns.
pub fn scan_image(img: &RgbImage) -> ScanOutcome {
    let (width, height) = img.dimensions();
    let mut scanner = Scanner::new();

    for x in 0..width {
        for y in 0..height {
            scanner.observe(x, y, *img.get_pixel(x, y));
        }
    }

    scanner.finish()
}
