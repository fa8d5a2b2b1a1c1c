//! 运行配置解析.

use crate::archive::ArchiveKind;
use crate::consts::{DEFAULT_JPEG_QUALITY, DEFAULT_VALIDATION, MULTIPOINT_DIR_NAME};
use crate::{DomainMap, PrepError, PrepResult};
use std::path::{Path, PathBuf};

/// 一次运行的完整配置.
///
/// 所有路径均已解析为绝对路径. 该结构只读; 若要修改参数, 应重新解析.
#[derive(Clone, Debug)]
pub struct PrepConfig {
    input_dir: PathBuf,
    output_root: PathBuf,
    validation: f64,
    domains: DomainMap,
    format: ArchiveKind,
    quality: u8,
}

impl PrepConfig {
    /// 解析配置.
    ///
    /// `cwd` 为当前工作目录. 相对的 `input` / `output` 会拼接到 `cwd` 上,
    /// 绝对路径保持不变. 该函数本身不访问文件系统;
    /// 路径不存在等问题会在后续 I/O 中暴露.
    ///
    /// `validation` 为 NaN 或不在 `[0, 1]` 内时返回 [`PrepError::InvalidValidation`].
    pub fn resolve<P: AsRef<Path>, Q: AsRef<Path>, R: AsRef<Path>>(
        cwd: P,
        input: Q,
        output: R,
        validation: f64,
        thermal_raw: bool,
    ) -> PrepResult<Self> {
        if !(0.0..=1.0).contains(&validation) {
            return Err(PrepError::InvalidValidation(validation));
        }
        let cwd = cwd.as_ref();
        Ok(Self {
            input_dir: cwd.join(input),
            output_root: cwd.join(output),
            validation,
            domains: DomainMap::new(thermal_raw),
            format: ArchiveKind::default(),
            quality: DEFAULT_JPEG_QUALITY,
        })
    }

    /// 以默认验证集比例、默认域映射解析配置.
    #[inline]
    pub fn with_defaults<P: AsRef<Path>, Q: AsRef<Path>, R: AsRef<Path>>(
        cwd: P,
        input: Q,
        output: R,
    ) -> PrepResult<Self> {
        Self::resolve(cwd, input, output, DEFAULT_VALIDATION, false)
    }

    /// 指定归档格式.
    #[inline]
    pub fn format(mut self, format: ArchiveKind) -> Self {
        self.format = format;
        self
    }

    /// 指定 JPEG 质量, 会被限制在 `1..=100` 内.
    #[inline]
    pub fn quality(mut self, quality: u8) -> Self {
        self.quality = quality.clamp(1, 100);
        self
    }

    /// 输入数据集目录.
    #[inline]
    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// 用户指定的输出路径.
    #[inline]
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// 实际的输出根目录, 即 `{output_root}/multipoint`.
    #[inline]
    pub fn multipoint_dir(&self) -> PathBuf {
        self.output_root.join(MULTIPOINT_DIR_NAME)
    }

    /// 验证集比例.
    #[inline]
    pub fn validation(&self) -> f64 {
        self.validation
    }

    /// 域映射.
    #[inline]
    pub fn domains(&self) -> DomainMap {
        self.domains
    }

    /// 归档格式.
    #[inline]
    pub fn archive_kind(&self) -> ArchiveKind {
        self.format
    }

    /// JPEG 质量.
    #[inline]
    pub fn jpeg_quality(&self) -> u8 {
        self.quality
    }

    /// 测试集归档的完整路径.
    #[inline]
    pub fn test_archive(&self) -> PathBuf {
        self.input_dir.join(self.format.test_file_name())
    }

    /// 训练集归档的完整路径.
    #[inline]
    pub fn train_archive(&self) -> PathBuf {
        self.input_dir.join(self.format.train_file_name())
    }
}
