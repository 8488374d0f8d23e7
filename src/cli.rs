use crate::types::Size;
use clap::Parser;
use clap::builder::ArgAction;
use std::ffi::OsString;
use std::path::PathBuf;

/// Generate a snapshot and a thumbnail from a NIfTI file
#[derive(Parser, Debug, Clone)]
#[command(name = "nithumb", author, version, about, long_about = None)]
pub struct Args {
    /// Input NIfTI file
    #[arg(value_name = "INPUTFILE")]
    pub inputfile: PathBuf,

    /// Output snapshot; the extension picks the image format
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Output thumbnail; the extension picks the image format
    #[arg(value_name = "THUMBNAIL")]
    pub thumbnail: PathBuf,

    /// Size of the snapshot [alias: -ss]
    #[arg(
        long = "snapshot-size",
        visible_alias = "snapshot_size",
        num_args = 2,
        value_names = ["W", "H"],
        action = ArgAction::Set,
        default_values_t = [128u32, 128],
        value_parser = clap::value_parser!(u32).range(1..),
    )]
    pub snapshot_size: Vec<u32>,

    /// Size of the thumbnail [alias: -ts]
    #[arg(
        long = "thumbnail-size",
        visible_alias = "thumbnail_size",
        num_args = 2,
        value_names = ["W", "H"],
        action = ArgAction::Set,
        default_values_t = [64u32, 64],
        value_parser = clap::value_parser!(u32).range(1..),
    )]
    pub thumbnail_size: Vec<u32>,

    /// Percentile to exclude at each end of the intensity histogram
    #[arg(
        short,
        long,
        default_value_t = 0,
        value_parser = clap::value_parser!(u8).range(0..=100),
    )]
    pub percentile: u8,

    /// Show volume metadata and debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    #[must_use]
    pub fn snapshot_size(&self) -> Size {
        size_from(&self.snapshot_size)
    }

    #[must_use]
    pub fn thumbnail_size(&self) -> Size {
        size_from(&self.thumbnail_size)
    }
}

fn size_from(values: &[u32]) -> Size {
    match values {
        [width, height] => Size::new(*width, *height),
        _ => unreachable!("clap enforces exactly two size values"),
    }
}

/// Two-letter short flags clap cannot declare
const LEGACY_FLAGS: [(&str, &str); 2] = [
    ("-ss", "--snapshot-size"),
    ("-ts", "--thumbnail-size"),
];

/// Rewrite `-ss` / `-ts` to their long forms. Arguments after `--` are left alone.
pub fn expand_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut positional_only = false;

    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if positional_only {
                return arg;
            }
            if arg == "--" {
                positional_only = true;
                return arg;
            }
            match LEGACY_FLAGS.iter().find(|(short, _)| arg == *short) {
                Some((_, long)) => OsString::from(*long),
                None => arg,
            }
        })
        .collect()
}

/// Parse the process arguments, exiting with clap's usage error on failure
#[must_use]
pub fn parse_args() -> Args {
    Args::parse_from(expand_legacy_flags(std::env::args_os()))
}

/// Parse an explicit argument list (first item is the program name)
///
/// # Errors
///
/// Returns clap's error for invalid or missing arguments
pub fn parse_args_from<I, T>(args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    Args::try_parse_from(expand_legacy_flags(args))
}
