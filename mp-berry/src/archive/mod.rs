//! 归档读取.
//!
//! 归档是一个 "记录名 -> 记录" 的映射, 每条记录按域键名保存一个单通道浮点数组.
//! 各后端都保证记录名迭代顺序稳定; 训练/验证集的切分边界就由该顺序决定.

use crate::consts::{TEST_ARCHIVE_STEM, TRAIN_ARCHIVE_STEM};
use crate::{PrepError, PrepResult};
use ndarray::ArrayD;
use std::fs::OpenOptions;
use std::path::Path;

mod npz;

pub use npz::NpzArchive;

cfg_if::cfg_if! {
    if #[cfg(feature = "hdf5")] {
        mod h5;

        pub use h5::Hdf5Archive;
    }
}

/// 只读记录归档.
pub trait RecordArchive {
    /// 所有记录名, 按归档自身的稳定顺序排列.
    fn names(&mut self) -> PrepResult<Vec<String>>;

    /// 读取记录 `record` 中键为 `key` 的数组.
    ///
    /// 数组按 `f64` 返回; 以更窄浮点存储的数据会被无损扩展, 不做任何舍入.
    /// 记录存在但缺少 `key` 时返回 [`PrepError::MissingDomain`].
    fn read(&mut self, record: &str, key: &str) -> PrepResult<ArrayD<f64>>;
}

/// 归档格式.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ArchiveKind {
    /// HDF5 (`*.hdf5`). 记录为顶层 group, 域为 group 内的 dataset.
    #[default]
    Hdf5,

    /// NumPy npz (`*.npz`). 数组以 `<record>/<domain>` 命名.
    Npz,
}

impl ArchiveKind {
    /// 文件扩展名.
    #[inline]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Hdf5 => "hdf5",
            Self::Npz => "npz",
        }
    }

    /// 测试集归档文件名.
    pub fn test_file_name(&self) -> String {
        format!("{TEST_ARCHIVE_STEM}.{}", self.extension())
    }

    /// 训练集归档文件名.
    pub fn train_file_name(&self) -> String {
        format!("{TRAIN_ARCHIVE_STEM}.{}", self.extension())
    }
}

/// 以只读方式打开 `path` 处的归档.
///
/// 文件缺失或不可读时返回 [`PrepError::ArchiveUnavailable`] (带 OS 错误码);
/// 文件可读但格式不对时返回 [`PrepError::ArchiveFormat`].
pub fn open_archive<P: AsRef<Path>>(
    kind: ArchiveKind,
    path: P,
) -> PrepResult<Box<dyn RecordArchive>> {
    let path = path.as_ref();
    match kind {
        ArchiveKind::Hdf5 => open_hdf5(path),
        ArchiveKind::Npz => Ok(Box::new(NpzArchive::open(path)?)),
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "hdf5")] {
        fn open_hdf5(path: &Path) -> PrepResult<Box<dyn RecordArchive>> {
            Ok(Box::new(Hdf5Archive::open(path)?))
        }
    } else {
        fn open_hdf5(path: &Path) -> PrepResult<Box<dyn RecordArchive>> {
            check_readable(path)?;
            Err(PrepError::format(
                path,
                "built without the `hdf5` feature; rebuild with default features (needs libhdf5)",
            ))
        }
    }
}

/// 先经由操作系统打开一次, 以便拿到带错误码的 I/O 错误.
pub(crate) fn check_readable(path: &Path) -> PrepResult<std::fs::File> {
    OpenOptions::new()
        .read(true)
        .open(path)
        .map_err(|source| PrepError::ArchiveUnavailable {
            path: path.to_owned(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::{open_archive, ArchiveKind};
    use crate::PrepError;

    #[test]
    fn test_file_names() {
        assert_eq!(ArchiveKind::Hdf5.test_file_name(), "test.hdf5");
        assert_eq!(ArchiveKind::Hdf5.train_file_name(), "training.hdf5");
        assert_eq!(ArchiveKind::Npz.train_file_name(), "training.npz");
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        for kind in [ArchiveKind::Hdf5, ArchiveKind::Npz] {
            let p = dir.path().join(kind.test_file_name());
            match open_archive(kind, &p) {
                Err(PrepError::ArchiveUnavailable { path, source }) => {
                    assert_eq!(path, p);
                    assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
                }
                Err(e) => panic!("unexpected error: {e}"),
                Ok(_) => panic!("missing archive opened"),
            }
        }
    }

    #[cfg(not(feature = "hdf5"))]
    #[test]
    fn test_hdf5_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("test.hdf5");
        std::fs::write(&p, b"\x89HDF").unwrap();
        assert!(matches!(
            open_archive(ArchiveKind::Hdf5, &p),
            Err(PrepError::ArchiveFormat { .. })
        ));
    }
}
