use crate::{
    annotate::mark_top_candidates,
    error::MarkError,
    log_file::write_log,
    scan::scan_image,
};
use anyhow::Context;
use image::{ImageError, Rgb, RgbImage};
use std::{
    io,
    path::{Path, PathBuf},
    str::FromStr,
};

pub const DEFAULT_INPUT: &str = "no-red.png";
pub const DEFAULT_OUTPUT: &str = "no-red-marked.png";
pub const DEFAULT_LOG: &str = "red-pixels-log.txt";
pub const DEFAULT_MARKER_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Paths and styling for one run.
#[derive(Debug, Clone)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
    pub log: PathBuf,
    pub marker_color: Rgb<u8>,
}

impl Job {
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        log: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            log: log.into(),
            marker_color: DEFAULT_MARKER_COLOR,
        }
    }

    pub fn with_marker_color(mut self, color: Rgb<u8>) -> Self {
        self.marker_color = color;
        self
    }
}

impl Default for Job {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT, DEFAULT_OUTPUT, DEFAULT_LOG)
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Number of dominant red pixels
    pub count: usize,
    /// Number of markers drawn (at most 3)
    pub marked: usize,
    pub output: PathBuf,
    pub log: PathBuf,
}

/// Counts the dominant red pixels of `job.input`, saves a marked copy to
/// `job.output` and the pixel log to `job.log`.
///
/// Failures are logged at error level before being returned. Nothing is
/// written unless the image was decoded successfully.
pub fn count_and_mark(job: &Job) -> Result<Summary, MarkError> {
    let result = run(job);
    if let Err(err) = &result {
        log::error!("{}", err);
    }
    result
}

fn run(job: &Job) -> Result<Summary, MarkError> {
    let mut img = load_rgb(&job.input)?;
    log::debug!(
        "Loaded {} ({}x{})",
        job.input.display(),
        img.width(),
        img.height()
    );

    let outcome = scan_image(&img);
    let placed = mark_top_candidates(&mut img, &outcome.top, job.marker_color);

    img.save(&job.output)
        .with_context(|| format!("Failed to save marked image {}", job.output.display()))?;
    write_log(&job.log, &outcome.records)?;

    Ok(Summary {
        count: outcome.count(),
        marked: placed.len(),
        output: job.output.clone(),
        log: job.log.clone(),
    })
}

fn load_rgb(path: &Path) -> Result<RgbImage, MarkError> {
    match image::open(path) {
        Ok(img) => Ok(img.into_rgb8()),
        Err(ImageError::IoError(err)) if err.kind() == io::ErrorKind::NotFound => {
            Err(MarkError::SourceNotFound(path.to_path_buf()))
        }
        Err(err) => Err(anyhow::Error::new(err)
            .context(format!("Failed to load image {}", path.display()))
            .into()),
    }
}

/// Parses a CSS color (name, hex or functional notation) into an opaque RGB value.
pub fn parse_marker_color(s: &str) -> Result<Rgb<u8>, String> {
    let color = css_color::Srgb::from_str(s).map_err(|_| format!("invalid CSS color: {}", s))?;
    Ok(Rgb([
        (color.red * 255.).round() as u8,
        (color.green * 255.).round() as u8,
        (color.blue * 255.).round() as u8,
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn job_in(dir: &Path) -> Job {
        Job::new(
            dir.join("input.png"),
            dir.join("marked.png"),
            dir.join("log.txt"),
        )
    }

    #[test]
    fn test_default_job_paths() {
        let job = Job::default();
        assert_eq!(job.input, PathBuf::from("no-red.png"));
        assert_eq!(job.output, PathBuf::from("no-red-marked.png"));
        assert_eq!(job.log, PathBuf::from("red-pixels-log.txt"));
        assert_eq!(job.marker_color, Rgb([255, 0, 0]));
    }

    #[test]
    fn test_missing_source() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let job = job_in(temp_dir.path());

        let err = count_and_mark(&job).unwrap_err();

        assert!(err.is_source_not_found());
        assert!(err.to_string().contains("input.png"));
        assert!(!job.output.exists());
        assert!(!job.log.exists());
    }

    #[test]
    fn test_corrupt_source_is_processing_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let job = job_in(temp_dir.path());
        fs::write(&job.input, b"definitely not a png").unwrap();

        let err = count_and_mark(&job).unwrap_err();

        assert!(matches!(err, MarkError::Processing(_)));
        assert!(!job.output.exists());
        assert!(!job.log.exists());
    }

    #[test]
    fn test_single_red_pixel() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let job = job_in(temp_dir.path());
        RgbImage::from_pixel(1, 1, Rgb([255, 0, 0]))
            .save(&job.input)
            .unwrap();

        let summary = count_and_mark(&job).unwrap();

        assert_eq!(summary.count, 1);
        assert_eq!(summary.marked, 1);
        assert_eq!(fs::read_to_string(&job.log).unwrap(), "1 - [255,0,0] - 0,0");
        let marked = image::open(&job.output).unwrap().into_rgb8();
        assert_eq!(marked.dimensions(), (1, 1));
    }

    #[test]
    fn test_black_image_is_left_untouched() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let job = job_in(temp_dir.path());
        let source = RgbImage::new(2, 2);
        source.save(&job.input).unwrap();

        let summary = count_and_mark(&job).unwrap();

        assert_eq!(summary.count, 0);
        assert_eq!(summary.marked, 0);
        assert_eq!(fs::read_to_string(&job.log).unwrap(), "");
        assert_eq!(image::open(&job.output).unwrap().into_rgb8(), source);
    }

    #[test]
    fn test_parse_marker_color() {
        assert_eq!(parse_marker_color("red"), Ok(Rgb([255, 0, 0])));
        assert_eq!(parse_marker_color("#00ff00"), Ok(Rgb([0, 255, 0])));
        assert_eq!(parse_marker_color("#fff"), Ok(Rgb([255, 255, 255])));
        assert!(parse_marker_color("not-a-color").is_err());
    }
}
