#![warn(missing_docs)]

//! 核心库. 将 multipoint 数据集 (optical / thermal 成对图像) 的 HDF5 归档
//! 展开为 pix2pix 训练流程可直接读取的目录结构:
//!
//! ```text
//! <output>/multipoint/{A,B}/{test,train,val}/<record>.jpg
//! ```
//!
//! 其中域 `A` 为 optical, 域 `B` 为 thermal (或 thermal_raw).
//!
//! # 流程
//!
//! 1. [`PrepConfig::resolve`] 解析输入输出路径、验证集比例和域映射.
//! 2. [`Layout::build`] 创建输出目录树. 若 `multipoint/` 已存在则直接失败,
//!   不会覆盖已有结果.
//! 3. 对每个域, 依次打开测试归档和训练归档 ([`archive::open_archive`]),
//!   逐条读取记录, 经 [`UnitWindow`] 归一化为 8-bit 三通道图像后写入对应目录.
//! 4. 训练归档按记录名顺序切分 ([`Partition`]), 前缀进 `train/`, 其余进 `val/`.
//!
//! 整个过程是单线程、顺序、阻塞 I/O 的. 任何错误都会终止运行,
//! 输出目录可能因此只完成了一部分.
//!
//! # 注意
//!
//! 1. 默认启用 `full` (含 `hdf5`) feature, 需要系统安装 libhdf5.
//!   没有 libhdf5 的机器可用 `--no-default-features` 构建, 此时仍可使用 `npz` 归档;
//!   打开 HDF5 归档会返回格式错误.
//! 2. 归一化是纯线性的 clip-and-scale, 没有 gamma 校正或伪彩色映射.

/// 二维形状 `(height, width)`.
pub type Shape2d = (usize, usize);

pub mod archive;
pub mod config;
pub mod consts;
pub mod dataset;
pub mod domain;
mod error;
pub mod frame;
pub mod layout;
pub mod pipeline;
pub mod prelude;
pub mod split;
pub mod summary;

pub use config::PrepConfig;
pub use domain::{Domain, DomainMap};
pub use error::{PrepError, PrepResult};
pub use frame::{GrayFrame, UnitWindow};
pub use layout::{Layout, Split};
pub use split::Partition;
pub use summary::RunSummary;
