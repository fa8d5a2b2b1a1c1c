//! 数据集操作.

use std::path::{Path, PathBuf};

mod loader;

pub use loader::{frame_loader, FrameLoader};

/// 获取 `{用户主目录}/dataset` 目录.
pub fn home_dataset_dir() -> Option<PathBuf> {
    let mut ans = dirs::home_dir()?;
    ans.push("dataset");
    Some(ans)
}

/// 获取 `{用户主目录}/dataset` 目录下给定继续项组成的全路径.
pub fn home_dataset_dir_with<P: AsRef<Path>, I: IntoIterator<Item = P>>(it: I) -> Option<PathBuf> {
    let mut ans = home_dataset_dir()?;
    ans.extend(it);
    Some(ans)
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_home_dataset_dir_with() {
        if let Some(base) = super::home_dataset_dir() {
            let p = super::home_dataset_dir_with(["multipoint"]).unwrap();
            assert_eq!(p, base.join("multipoint"));
            assert!(p.ends_with("dataset/multipoint"));
        }
    }
}
