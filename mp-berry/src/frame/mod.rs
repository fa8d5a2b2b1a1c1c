//! 单通道浮点图像到 8-bit 三通道图像的归一化与存储.

mod core;
mod save;
mod squeeze;
mod window;

pub use self::core::GrayFrame;
pub use squeeze::squeeze_2d;
pub use window::UnitWindow;
