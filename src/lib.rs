//! Count red-dominant pixels in an image and mark the strongest ones.
//!
//! A pixel is red-dominant when its red channel holds at least 51% of
//! `r + g + b`. Every such pixel is logged; the three with the highest red
//! value get a box and a label on a copy of the image.

pub mod annotate;
pub mod error;
pub mod glyphs;
pub mod log_file;
pub mod pipeline;
pub mod scan;

pub use error::MarkError;
pub use pipeline::{count_and_mark, Job, Summary};
