//! 通用常量.

/// 归档内的域键名.
pub mod key {
    /// 可见光图像.
    pub const OPTICAL: &str = "optical";

    /// 经过处理的热成像图像.
    pub const THERMAL: &str = "thermal";

    /// 原始热成像图像.
    pub const THERMAL_RAW: &str = "thermal_raw";
}

/// 输出根目录名. 位于用户指定的输出路径之下.
pub const MULTIPOINT_DIR_NAME: &str = "multipoint";

/// 默认验证集比例.
pub const DEFAULT_VALIDATION: f64 = 0.2;

/// 默认 JPEG 质量.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// 输出图像扩展名.
pub const IMAGE_EXT: &str = "jpg";

/// 测试集归档主干名.
pub const TEST_ARCHIVE_STEM: &str = "test";

/// 训练/验证集归档主干名.
pub const TRAIN_ARCHIVE_STEM: &str = "training";
