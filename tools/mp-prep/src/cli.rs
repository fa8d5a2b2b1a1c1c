//! 命令行参数.

use clap::{Parser, ValueEnum};
use mp_berry::archive::ArchiveKind;
use mp_berry::consts::{DEFAULT_JPEG_QUALITY, DEFAULT_VALIDATION};
use std::path::PathBuf;

/// 命令行参数.
#[derive(Debug, Parser)]
#[command(name = "mp-prep")]
#[command(version)]
#[command(
    about = "Unpacks multipoint dataset into folder form usable by pix2pix (domain A = optical, domain B = thermal)"
)]
pub struct Cli {
    /// Path to multipoint dataset. Falls back to $MULTIPOINT_DIR, then $HOME/dataset/multipoint
    pub input_path: Option<PathBuf>,

    /// Path to output folder. Default is current working directory
    #[arg(short = 'o', value_name = "OUTPUT_PATH")]
    pub output_path: Option<PathBuf>,

    /// Portion of train set to use as validation
    #[arg(short = 'v', value_name = "VALIDATION", default_value_t = DEFAULT_VALIDATION)]
    pub validation: f64,

    /// Use raw thermal images
    #[arg(short = 'r')]
    pub thermal_raw: bool,

    /// Archive format of the dataset. `hdf5` needs a build with the `hdf5` feature
    /// (on by default, links the system libhdf5)
    #[arg(long, value_enum, default_value_t = Format::Hdf5)]
    pub format: Format,

    /// JPEG quality (1-100)
    #[arg(short = 'q', long, default_value_t = DEFAULT_JPEG_QUALITY,
          value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: u8,

    /// Log every written image
    #[arg(long)]
    pub verbose: bool,
}

/// 归档格式.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Format {
    /// test.hdf5 / training.hdf5
    Hdf5,
    /// test.npz / training.npz
    Npz,
}

impl From<Format> for ArchiveKind {
    fn from(f: Format) -> Self {
        match f {
            Format::Hdf5 => ArchiveKind::Hdf5,
            Format::Npz => ArchiveKind::Npz,
        }
    }
}
