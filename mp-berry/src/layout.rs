//! 输出目录布局.
//!
//! ```text
//! multipoint/
//!  |--- A/
//!     |--- test/
//!     |--- train/
//!     |--- val/
//!  |--- B/
//!     |--- test/
//!     |--- train/
//!     |--- val/
//! ```

use crate::consts::{IMAGE_EXT, MULTIPOINT_DIR_NAME};
use crate::{Domain, PrepError, PrepResult};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// 数据集划分.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Split {
    /// 测试集, 全部来自测试归档.
    Test,

    /// 训练集, 训练归档的前缀部分.
    Train,

    /// 验证集, 训练归档的剩余部分.
    Val,
}

impl Split {
    /// 所有划分.
    pub const ALL: [Split; 3] = [Split::Test, Split::Train, Split::Val];

    /// 输出目录名.
    #[inline]
    pub const fn dir_name(&self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::Train => "train",
            Self::Val => "val",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// 已创建的输出目录树.
#[derive(Clone, Debug)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    /// 在 `output_root` 下创建 `multipoint/{A,B}/{test,train,val}`.
    ///
    /// `output_root` 不存在时会被逐级创建. 若 `multipoint/` 已存在,
    /// 返回 [`PrepError::OutputExists`], 并且不会在其中创建或修改任何内容.
    /// 其余子目录假定父目录刚刚创建, 不再单独检查.
    pub fn build<P: AsRef<Path>>(output_root: P) -> PrepResult<Self> {
        let output_root = output_root.as_ref();
        let root = output_root.join(MULTIPOINT_DIR_NAME);
        if root.exists() {
            return Err(PrepError::OutputExists(root));
        }

        fs::create_dir_all(output_root).map_err(|source| PrepError::CreateDir {
            path: output_root.to_owned(),
            source,
        })?;
        fs::create_dir(&root).map_err(|source| match source.kind() {
            io::ErrorKind::AlreadyExists => PrepError::OutputExists(root.clone()),
            _ => PrepError::CreateDir {
                path: root.clone(),
                source,
            },
        })?;

        let layout = Self { root };
        for domain in Domain::ALL {
            mkdir(&layout.domain_dir(domain))?;
            for split in Split::ALL {
                mkdir(&layout.split_dir(domain, split))?;
            }
        }
        log::info!("created output layout at {}", layout.root.display());
        Ok(layout)
    }

    /// `multipoint/` 目录.
    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `multipoint/{domain}` 目录.
    #[inline]
    pub fn domain_dir(&self, domain: Domain) -> PathBuf {
        self.root.join(domain.letter())
    }

    /// `multipoint/{domain}/{split}` 目录.
    #[inline]
    pub fn split_dir(&self, domain: Domain, split: Split) -> PathBuf {
        let mut p = self.domain_dir(domain);
        p.push(split.dir_name());
        p
    }

    /// 记录 `record` 的输出图像路径, 即 `multipoint/{domain}/{split}/{record}.jpg`.
    ///
    /// 记录名不合法时 (见 [`check_record_name`]) 返回 [`PrepError::InvalidRecordName`],
    /// 输出永远不会落到 `{split}` 目录之外.
    pub fn image_path(&self, domain: Domain, split: Split, record: &str) -> PrepResult<PathBuf> {
        check_record_name(record)?;
        let mut p = self.split_dir(domain, split);
        p.push(format!("{record}.{IMAGE_EXT}"));
        Ok(p)
    }
}

/// 记录名必须恰好是一个普通路径分量: 非空, 不含分隔符, 不是 `.` 或 `..`.
pub fn check_record_name(record: &str) -> PrepResult<()> {
    let mut it = Path::new(record).components();
    match (it.next(), it.next()) {
        (Some(Component::Normal(c)), None) if c == record => Ok(()),
        _ => Err(PrepError::InvalidRecordName(record.to_string())),
    }
}

fn mkdir(p: &Path) -> PrepResult<()> {
    fs::create_dir(p).map_err(|source| PrepError::CreateDir {
        path: p.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::{check_record_name, Layout, Split};
    use crate::{Domain, PrepError};
    use std::fs;

    #[test]
    fn test_build_layout() {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::build(dir.path()).unwrap();
        assert_eq!(layout.root(), dir.path().join("multipoint"));

        for letter in ["A", "B"] {
            for split in ["test", "train", "val"] {
                assert!(dir.path().join("multipoint").join(letter).join(split).is_dir());
            }
        }
        assert_eq!(fs::read_dir(layout.root()).unwrap().count(), 2);
        assert_eq!(
            layout.image_path(Domain::B, Split::Val, "0042").unwrap(),
            dir.path().join("multipoint/B/val/0042.jpg")
        );
    }

    #[test]
    fn test_missing_output_root_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested/out");
        Layout::build(&out).unwrap();
        assert!(out.join("multipoint/A/test").is_dir());
    }

    #[test]
    fn test_existing_root_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("multipoint");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("keep.txt"), b"old").unwrap();

        match Layout::build(dir.path()) {
            Err(PrepError::OutputExists(p)) => assert_eq!(p, root),
            other => panic!("unexpected: {other:?}"),
        }
        let entries: Vec<_> = fs::read_dir(&root).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(fs::read(root.join("keep.txt")).unwrap(), b"old");
    }

    #[test]
    fn test_second_build_fails() {
        let dir = tempfile::tempdir().unwrap();
        Layout::build(dir.path()).unwrap();
        assert!(matches!(
            Layout::build(dir.path()),
            Err(PrepError::OutputExists(_))
        ));
    }

    #[test]
    fn test_record_names() {
        for ok in ["1", "0042", "t.00", "a b", "..a"] {
            assert!(check_record_name(ok).is_ok(), "{ok}");
        }
        for bad in ["", ".", "..", "a/b", "../x", "/abs", "a/", "./a", "../../../escaped"] {
            assert!(
                matches!(check_record_name(bad), Err(PrepError::InvalidRecordName(n)) if n == bad),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_image_path_rejects_escape() {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::build(dir.path()).unwrap();
        assert!(matches!(
            layout.image_path(Domain::A, Split::Test, "../../x"),
            Err(PrepError::InvalidRecordName(_))
        ));
    }
}
