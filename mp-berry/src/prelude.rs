//! 🍇欢迎光临🍓
//!
//! 涵盖了本 crate 一系列常用的功能.

pub use crate::Shape2d;

pub use crate::archive::{open_archive, ArchiveKind, RecordArchive};
pub use crate::config::PrepConfig;
pub use crate::consts::{DEFAULT_JPEG_QUALITY, DEFAULT_VALIDATION, MULTIPOINT_DIR_NAME};
pub use crate::dataset::home_dataset_dir_with;
pub use crate::domain::{Domain, DomainMap};
pub use crate::frame::{GrayFrame, UnitWindow};
pub use crate::layout::{Layout, Split};
pub use crate::pipeline::run;
pub use crate::split::Partition;
pub use crate::summary::RunSummary;
pub use crate::{PrepError, PrepResult};
