//! 图像的持久化存储.

use super::GrayFrame;
use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, ImageResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

impl GrayFrame {
    /// 以三通道 JPEG 格式保存到 `path`. `quality` 取值 `1..=100`.
    ///
    /// 目标文件已存在时会被覆盖; 是否允许覆盖由调用方 (目录布局) 决定.
    pub fn save_jpeg<P: AsRef<Path>>(&self, path: P, quality: u8) -> ImageResult<()> {
        let mut w = BufWriter::new(File::create(path)?);
        self.write_jpeg(&mut w, quality)?;
        w.flush()?;
        Ok(())
    }

    /// 以三通道 JPEG 格式编码到任意输出.
    pub fn write_jpeg<W: Write>(&self, w: &mut W, quality: u8) -> ImageResult<()> {
        let rgb = self.to_rgb();
        let mut encoder = JpegEncoder::new_with_quality(w, quality);
        encoder.encode(rgb.as_raw(), rgb.width(), rgb.height(), ColorType::Rgb8)
    }
}

#[cfg(test)]
mod tests {
    use crate::GrayFrame;
    use ndarray::Array2;

    #[test]
    fn test_save_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("7.jpg");
        let f = GrayFrame(Array2::from_shape_fn((12, 20), |(h, w)| (h * 10 + w) as u8));
        f.save_jpeg(&p, 95).unwrap();

        let img = image::open(&p).unwrap();
        assert_eq!(img.color(), image::ColorType::Rgb8);
        assert_eq!((img.width(), img.height()), (20, 12));
    }

    #[test]
    fn test_write_jpeg_header() {
        let f = GrayFrame(Array2::zeros((4, 4)));
        let mut buf = Vec::new();
        f.write_jpeg(&mut buf, 75).unwrap();
        assert_eq!(&buf[..3], &[0xFF, 0xD8, 0xFF]);
    }
}
