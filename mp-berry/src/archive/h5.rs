use super::{check_readable, RecordArchive};
use crate::{PrepError, PrepResult};
use ndarray::ArrayD;
use std::path::Path;

/// HDF5 文件归档.
///
/// 每条记录是一个顶层 group, 其中每个域是一个浮点 dataset.
/// 记录名按 HDF5 名称索引升序迭代, 与 `h5py` 的 `keys()` 一致.
pub struct Hdf5Archive {
    file: hdf5::File,
}

impl Hdf5Archive {
    /// 以只读方式打开.
    pub fn open<P: AsRef<Path>>(p: P) -> PrepResult<Self> {
        let path = p.as_ref();
        // 只用来拿到 OS 错误码, 立即关闭.
        drop(check_readable(path)?);
        let file = hdf5::File::open(path).map_err(|e| PrepError::format(path, e))?;
        Ok(Self { file })
    }
}

impl RecordArchive for Hdf5Archive {
    fn names(&mut self) -> PrepResult<Vec<String>> {
        self.file
            .member_names()
            .map_err(|e| PrepError::read("/", e))
    }

    fn read(&mut self, record: &str, key: &str) -> PrepResult<ArrayD<f64>> {
        let group = self
            .file
            .group(record)
            .map_err(|e| PrepError::read(record, e))?;
        let members = group
            .member_names()
            .map_err(|e| PrepError::read(record, e))?;
        if !members.iter().any(|m| m == key) {
            return Err(PrepError::MissingDomain {
                record: record.to_string(),
                key: key.to_string(),
            });
        }
        group
            .dataset(key)
            .and_then(|ds| ds.read_dyn::<f64>())
            .map_err(|e| PrepError::read(record, e))
    }
}
