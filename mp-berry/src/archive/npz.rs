use super::{check_readable, RecordArchive};
use crate::layout::check_record_name;
use crate::{PrepError, PrepResult};
use ndarray::{ArrayD, IxDyn, OwnedRepr};
use ndarray_npy::{NpzReader, ReadNpyError, ReadNpzError};
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

const NPY_SUFFIX: &str = ".npy";

/// 一条记录在 npz 中的所有域. `(域键名, zip 条目名)`.
type Entries = Vec<(String, String)>;

/// Npz 文件归档.
///
/// 每个数组以 `<record>/<domain>` (可带 `.npy` 后缀) 命名.
/// 记录名顺序为其在 zip 目录中首次出现的顺序.
pub struct NpzArchive {
    reader: NpzReader<File>,
    records: Vec<(String, Entries)>,
    lookup: HashMap<String, usize>,
}

impl NpzArchive {
    /// 以只读方式打开, 并建立记录索引.
    pub fn open<P: AsRef<Path>>(p: P) -> PrepResult<Self> {
        let path = p.as_ref();
        let file = check_readable(path)?;
        let mut reader = NpzReader::new(file).map_err(|e| PrepError::format(path, e))?;
        let names = reader.names().map_err(|e| PrepError::format(path, e))?;

        let mut records: Vec<(String, Entries)> = Vec::new();
        let mut lookup: HashMap<String, usize> = HashMap::new();
        for entry in names {
            let stem = entry.strip_suffix(NPY_SUFFIX).unwrap_or(&entry);
            let Some((record, key)) = stem.rsplit_once('/') else {
                return Err(PrepError::format(
                    path,
                    format!("entry `{entry}` is not named `<record>/<domain>`"),
                ));
            };
            check_record_name(record)?;
            let item = (key.to_string(), entry.clone());
            match lookup.get(record) {
                Some(&i) => records[i].1.push(item),
                None => {
                    lookup.insert(record.to_string(), records.len());
                    records.push((record.to_string(), vec![item]));
                }
            }
        }
        log::debug!("indexed {} records in {}", records.len(), path.display());

        Ok(Self {
            reader,
            records,
            lookup,
        })
    }

    /// 记录条数.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// 是否没有任何记录.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordArchive for NpzArchive {
    fn names(&mut self) -> PrepResult<Vec<String>> {
        Ok(self.records.iter().map(|(r, _)| r.clone()).collect())
    }

    fn read(&mut self, record: &str, key: &str) -> PrepResult<ArrayD<f64>> {
        let &i = self
            .lookup
            .get(record)
            .ok_or_else(|| PrepError::read(record, "no such record"))?;
        let (_, entries) = &self.records[i];
        let (_, entry) =
            entries
                .iter()
                .find(|(k, _)| k == key)
                .ok_or_else(|| PrepError::MissingDomain {
                    record: record.to_string(),
                    key: key.to_string(),
                })?;

        match self.reader.by_name::<OwnedRepr<f64>, IxDyn>(entry) {
            Ok(a) => Ok(a),
            // 按 f32 存储的数组, 无损扩展为 f64.
            Err(ReadNpzError::Npy(ReadNpyError::WrongDescriptor(_))) => self
                .reader
                .by_name::<OwnedRepr<f32>, IxDyn>(entry)
                .map(|a| a.mapv(f64::from))
                .map_err(|e| PrepError::read(record, e)),
            Err(e) => Err(PrepError::read(record, e)),
        }
    }
}
