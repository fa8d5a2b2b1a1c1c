//! 输出域与归档键名的映射.

use crate::consts::key;
use std::fmt;

/// 输出域. pix2pix 约定成对图像分别放在 `A` 和 `B` 目录下.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Domain {
    /// 可见光.
    A,

    /// 热成像.
    B,
}

impl Domain {
    /// 所有域, 按处理顺序排列.
    pub const ALL: [Domain; 2] = [Domain::A, Domain::B];

    /// 输出目录名.
    #[inline]
    pub const fn letter(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// 域字母到归档键名的映射.
///
/// `A` 总是 `optical`; `B` 为 `thermal`, 或在请求原始热成像时为 `thermal_raw`.
/// 无论读哪个键, 输出目录名都保持为 `B`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DomainMap {
    thermal_raw: bool,
}

impl DomainMap {
    /// 构建映射.
    #[inline]
    pub const fn new(thermal_raw: bool) -> Self {
        Self { thermal_raw }
    }

    /// 是否读取原始热成像.
    #[inline]
    pub fn thermal_raw(&self) -> bool {
        self.thermal_raw
    }

    /// 获取 `domain` 对应的归档键名.
    #[inline]
    pub const fn key(&self, domain: Domain) -> &'static str {
        match domain {
            Domain::A => key::OPTICAL,
            Domain::B if self.thermal_raw => key::THERMAL_RAW,
            Domain::B => key::THERMAL,
        }
    }

    /// 按处理顺序迭代 `(域, 键名)`.
    pub fn iter(&self) -> impl Iterator<Item = (Domain, &'static str)> + '_ {
        Domain::ALL.into_iter().map(move |d| (d, self.key(d)))
    }
}

impl Default for DomainMap {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::{Domain, DomainMap};

    #[test]
    fn test_default_mapping() {
        let m = DomainMap::default();
        assert_eq!(m.key(Domain::A), "optical");
        assert_eq!(m.key(Domain::B), "thermal");
    }

    #[test]
    fn test_thermal_raw_keeps_letter() {
        let m = DomainMap::new(true);
        let v: Vec<_> = m.iter().map(|(d, k)| (d.letter(), k)).collect();
        assert_eq!(v, [("A", "optical"), ("B", "thermal_raw")]);
    }
}
