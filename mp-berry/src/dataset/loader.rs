//! 迭代器风格的记录加载器.

use crate::archive::RecordArchive;
use crate::{GrayFrame, PrepResult, UnitWindow};

/// 从归档 `archive` 中按 `names` 的顺序加载键为 `key` 的图像.
///
/// 每次迭代返回 `(记录名, 归一化结果)`. 单条记录出错不会中断迭代器本身,
/// 是否继续由调用方决定.
pub fn frame_loader<'a, I: IntoIterator<Item = String>>(
    archive: &'a mut dyn RecordArchive,
    names: I,
    key: &'a str,
    window: UnitWindow,
) -> FrameLoader<'a> {
    let mut names: Vec<String> = names.into_iter().collect();
    names.reverse();

    FrameLoader {
        archive,
        key,
        window,
        names_rev: names,
    }
}

/// 单域图像加载器. 不缓存任何数组, 每条记录在迭代时才读取.
pub struct FrameLoader<'a> {
    archive: &'a mut dyn RecordArchive,
    key: &'a str,
    window: UnitWindow,
    names_rev: Vec<String>,
}

impl Iterator for FrameLoader<'_> {
    type Item = (String, PrepResult<GrayFrame>);

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.names_rev.pop()?;
        let frame = self
            .archive
            .read(&name, self.key)
            .and_then(|raw| GrayFrame::from_raw(&name, raw, &self.window));

        Some((name, frame))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.names_rev.len();
        (n, Some(n))
    }
}

impl ExactSizeIterator for FrameLoader<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.names_rev.len()
    }
}
