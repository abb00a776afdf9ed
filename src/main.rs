use clap::Parser;
use image::Rgb;
use red_mark::pipeline::{
    parse_marker_color, DEFAULT_INPUT, DEFAULT_LOG, DEFAULT_OUTPUT,
};
use red_mark::{count_and_mark, Job};
use std::{path::PathBuf, process::ExitCode};

#[derive(Debug, Parser)]
#[clap(
    name = "red-mark",
    about = "Count red-dominant pixels and mark the three strongest ones"
)]
struct Args {
    /// Path to the source image.
    #[clap(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Where to save the marked copy of the image.
    #[clap(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Where to write the pixel log.
    #[clap(short, long, value_name = "FILE", default_value = DEFAULT_LOG)]
    log: PathBuf,

    /// Marker and label color (CSS color format)
    #[clap(long, default_value = "red", value_parser = parse_marker_color)]
    color: Rgb<u8>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let job = Job::new(args.input, args.output, args.log).with_marker_color(args.color);

    match count_and_mark(&job) {
        Ok(summary) => {
            log::info!(
                "The number of pixels with dominant red color: {}",
                summary.count
            );
            log::info!("Marked image saved to: {}", summary.output.display());
            log::info!("Log file saved to: {}", summary.log.display());
            ExitCode::SUCCESS
        }
        // already logged by count_and_mark
        Err(_) => ExitCode::FAILURE,
    }
}
