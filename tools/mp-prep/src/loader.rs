//! 输入数据集目录的定位.

use std::env;
use std::path::PathBuf;

/// 获取 multipoint 数据集目录.
///
/// 1. 若命令行给出了路径, 则返回之;
/// 2. 若环境变量 `$MULTIPOINT_DIR` 非空, 则返回其值;
/// 3. 否则, 返回 `$HOME/dataset/multipoint`. 主目录未知时返回 `None`.
pub fn input_dir_from_env_or_home(arg: Option<PathBuf>) -> Option<PathBuf> {
    if arg.is_some() {
        return arg;
    }
    match env::var("MULTIPOINT_DIR") {
        Ok(d) if !d.is_empty() => Some(PathBuf::from(d)),
        _ => mp_berry::dataset::home_dataset_dir_with(["multipoint"]),
    }
}

#[cfg(test)]
mod tests {
    use super::input_dir_from_env_or_home;
    use std::path::PathBuf;

    #[test]
    fn test_explicit_path_wins() {
        let p = PathBuf::from("somewhere");
        assert_eq!(input_dir_from_env_or_home(Some(p.clone())), Some(p));
    }
}
