//! 运行结果统计.

use crate::{Domain, Split};
use std::collections::BTreeMap;
use std::io::{self, Write};

const SEP: &str = "--------------------------------------------------------";

/// 一次运行写出的图像数量, 按域和划分统计.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RunSummary {
    keys: BTreeMap<Domain, &'static str>,
    counts: BTreeMap<(Domain, Split), usize>,
}

impl RunSummary {
    /// 记录 `domain` 实际读取的归档键名.
    pub(crate) fn set_key(&mut self, domain: Domain, key: &'static str) {
        self.keys.insert(domain, key);
    }

    /// 为 `(domain, split)` 计数加一.
    pub(crate) fn bump(&mut self, domain: Domain, split: Split) {
        *self.counts.entry((domain, split)).or_default() += 1;
    }

    /// `(domain, split)` 写出的图像数量.
    #[inline]
    pub fn count(&self, domain: Domain, split: Split) -> usize {
        self.counts.get(&(domain, split)).copied().unwrap_or(0)
    }

    /// `domain` 读取的归档键名. 尚未处理该域时为 `None`.
    #[inline]
    pub fn key(&self, domain: Domain) -> Option<&'static str> {
        self.keys.get(&domain).copied()
    }

    /// 写出的图像总数.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// 将统计结果以人类可读的形式写进 `w` 中.
    pub fn describe_into<W: Write>(&self, w: &mut W) -> io::Result<()> {
        const S4: &str = "    ";

        writeln!(w, "{SEP}")?;
        for domain in Domain::ALL {
            let key = self.key(domain).unwrap_or("/");
            writeln!(w, "Domain `{domain}` ({key}):")?;
            for split in Split::ALL {
                writeln!(w, "{S4}{split}: {}", self.count(domain, split))?;
            }
        }
        writeln!(w, "{SEP}")?;
        write!(w, "Total images: {}", self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::RunSummary;
    use crate::{Domain, Split};

    #[test]
    fn test_counts_and_describe() {
        let mut s = RunSummary::default();
        s.set_key(Domain::A, "optical");
        s.bump(Domain::A, Split::Test);
        s.bump(Domain::A, Split::Test);
        s.bump(Domain::A, Split::Val);

        assert_eq!(s.count(Domain::A, Split::Test), 2);
        assert_eq!(s.count(Domain::B, Split::Train), 0);
        assert_eq!(s.total(), 3);

        let mut buf = Vec::new();
        s.describe_into(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Domain `A` (optical):\n    test: 2\n    train: 0\n    val: 1"));
        assert!(text.contains("Domain `B` (/):"));
        assert!(text.ends_with("Total images: 3"));
    }
}
