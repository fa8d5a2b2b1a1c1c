//! 运行时错误.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 数据集展开的运行时错误. 所有错误都会终止整次运行.
#[derive(Debug, Error)]
pub enum PrepError {
    /// 输出目录 `multipoint/` 已存在. 为避免覆盖旧结果, 拒绝继续.
    #[error("multipoint directory already exists: {}", .0.display())]
    OutputExists(PathBuf),

    /// 归档文件不存在或不可读.
    #[error("I/O error({}): {}: {}", os_code(.source), os_message(.source), file_name(.path))]
    ArchiveUnavailable {
        /// 归档路径.
        path: PathBuf,
        /// 底层 I/O 错误.
        source: io::Error,
    },

    /// 文件可读, 但不是合法的归档.
    #[error("invalid archive {}: {reason}", .path.display())]
    ArchiveFormat {
        /// 归档路径.
        path: PathBuf,
        /// 底层原因.
        reason: String,
    },

    /// 记录或其中的数组无法解码.
    #[error("failed to read record `{record}`: {reason}")]
    ArchiveRead {
        /// 记录名.
        record: String,
        /// 底层原因.
        reason: String,
    },

    /// 记录名不是单个普通路径分量 (如含 `/`、`..` 或为空), 不能用作输出文件名.
    #[error("invalid record name `{0}`")]
    InvalidRecordName(String),

    /// 记录中不存在请求的域.
    #[error("record `{record}` has no domain `{key}`")]
    MissingDomain {
        /// 记录名.
        record: String,
        /// 归档内的域键名.
        key: String,
    },

    /// 数组无法压缩成二维.
    #[error("unexpected array shape {shape:?} in record `{record}`")]
    UnexpectedShape {
        /// 记录名.
        record: String,
        /// 原始形状.
        shape: Vec<usize>,
    },

    /// 验证集比例为 NaN 或不在 `[0, 1]` 内.
    #[error("validation ratio must be within [0, 1], got {0}")]
    InvalidValidation(f64),

    /// 创建输出目录失败.
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        /// 目录路径.
        path: PathBuf,
        /// 底层 I/O 错误.
        source: io::Error,
    },

    /// 写出图像失败.
    #[error("failed to write image {}: {source}", .path.display())]
    WriteImage {
        /// 图像路径.
        path: PathBuf,
        /// 底层编码或 I/O 错误.
        source: image::ImageError,
    },
}

/// 运行时结果.
pub type PrepResult<T> = Result<T, PrepError>;

fn os_code(e: &io::Error) -> String {
    e.raw_os_error()
        .map_or_else(|| "?".to_string(), |c| c.to_string())
}

/// 去掉 `io::Error` 显示文本末尾的 ` (os error N)`, 只保留系统描述.
fn os_message(e: &io::Error) -> String {
    let msg = e.to_string();
    match msg.rfind(" (os error ") {
        Some(i) if e.raw_os_error().is_some() && msg.ends_with(')') => msg[..i].to_string(),
        _ => msg,
    }
}

fn file_name(p: &Path) -> String {
    p.file_name()
        .unwrap_or(p.as_os_str())
        .to_string_lossy()
        .into_owned()
}

impl PrepError {
    /// 从任意可显示的底层错误构造 [`PrepError::ArchiveRead`].
    pub(crate) fn read<E: std::fmt::Display>(record: &str, e: E) -> Self {
        Self::ArchiveRead {
            record: record.to_string(),
            reason: e.to_string(),
        }
    }

    /// 从任意可显示的底层错误构造 [`PrepError::ArchiveFormat`].
    pub(crate) fn format<E: std::fmt::Display>(path: &Path, e: E) -> Self {
        Self::ArchiveFormat {
            path: path.to_owned(),
            reason: e.to_string(),
        }
    }
}
