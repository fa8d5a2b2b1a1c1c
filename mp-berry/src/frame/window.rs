/// `[0.0, 1.0]` 灰度窗口. multipoint 数据集的像素名义上就在该范围内.
///
/// 窗口内的值线性映射到 `[0, 255]` 并向零截断, 窗外的值被裁剪到端点.
/// 运算以 `f64` 进行, 与源数据的存储精度一致.
#[derive(Copy, Clone, Debug, Default)]
pub struct UnitWindow;

impl UnitWindow {
    /// 构建窗口.
    #[inline]
    pub const fn unit() -> UnitWindow {
        UnitWindow
    }

    /// 求 `v` 对应的灰度图像素整数值 (0 <= value <= 255).
    ///
    /// 即 `trunc(clip(v, 0, 1) * 255)`. NaN 映射为 0.
    #[inline]
    pub fn eval(&self, v: f64) -> u8 {
        if v.is_nan() {
            return u8::MIN;
        }
        // 255, not 256.
        (v.clamp(0.0, 1.0) * 255.0) as u8
    }
}
