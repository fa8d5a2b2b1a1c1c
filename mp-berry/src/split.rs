//! 训练/验证集切分.

use crate::{PrepError, PrepResult};

/// 按记录名顺序的确定性切分, 不打乱.
///
/// 对 `len` 条记录和验证集比例 `v`, 训练集为前 `floor(len * (1 - v))` 条,
/// 验证集为其余部分.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Partition {
    len: usize,
    num_train: usize,
}

impl Partition {
    /// 构建切分. `validation` 为 NaN 或不在 `[0, 1]` 内时返回错误.
    pub fn new(len: usize, validation: f64) -> PrepResult<Self> {
        if !(0.0..=1.0).contains(&validation) {
            return Err(PrepError::InvalidValidation(validation));
        }
        let num_train = ((len as f64 * (1.0 - validation)) as usize).min(len);
        Ok(Self { len, num_train })
    }

    /// 记录总数.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// 是否没有记录.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 训练集条数.
    #[inline]
    pub fn num_train(&self) -> usize {
        self.num_train
    }

    /// 验证集条数.
    #[inline]
    pub fn num_val(&self) -> usize {
        self.len - self.num_train
    }

    /// 将 `items` 切成 (训练集, 验证集).
    ///
    /// # 注意
    ///
    /// `items.len()` 必须等于 [`Partition::len`], 否则程序 panic.
    pub fn apply<'a, T>(&self, items: &'a [T]) -> (&'a [T], &'a [T]) {
        assert_eq!(items.len(), self.len, "切分长度与构建时不一致");
        items.split_at(self.num_train)
    }
}
