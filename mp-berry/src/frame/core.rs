use super::{squeeze_2d, UnitWindow};
use crate::{PrepResult, Shape2d};
use ndarray::{Array2, ArrayD, ArrayView2};

/// 拥有所有权的 8-bit 单通道图像, 按 `(height, width)` 存储.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GrayFrame(pub(crate) Array2<u8>);

impl GrayFrame {
    /// 将归档中读出的原始浮点数组转换为灰度图.
    ///
    /// 数组先被压缩为二维 ([`squeeze_2d`]), 再逐像素经 `window` 映射.
    pub fn from_raw(record: &str, raw: ArrayD<f64>, window: &UnitWindow) -> PrepResult<Self> {
        let a = squeeze_2d(record, raw)?;
        Ok(Self::from_view(a.view(), window))
    }

    /// 将二维浮点视图逐像素经 `window` 映射为灰度图.
    pub fn from_view(a: ArrayView2<'_, f64>, window: &UnitWindow) -> Self {
        Self(a.mapv(|v| window.eval(v)))
    }

    /// 图像形状 `(height, width)`.
    #[inline]
    pub fn shape(&self) -> Shape2d {
        self.0.dim()
    }

    /// 底层像素.
    #[inline]
    pub fn pixels(&self) -> ArrayView2<'_, u8> {
        self.0.view()
    }

    /// 复制单通道到三个通道 (gray -> RGB).
    pub fn to_rgb(&self) -> image::RgbImage {
        let (height, width) = self.shape();
        let mut buf = image::RgbImage::new(width as u32, height as u32);
        for ((h, w), &pix) in self.0.indexed_iter() {
            buf.put_pixel(w as u32, h as u32, image::Rgb([pix; 3]));
        }
        buf
    }
}
