//! 完整的展开流程.
//!
//! 构建目录 -> {对每个域: 读测试归档 -> 写测试集 -> 读训练归档 -> 写训练/验证集} -> 结束.
//!
//! 每个域都会重新打开两个归档, 处理完立即关闭, 不在域之间共享任何句柄.

use crate::archive::open_archive;
use crate::dataset::{frame_loader, FrameLoader};
use crate::{
    Domain, Layout, Partition, PrepConfig, PrepError, PrepResult, RunSummary, Split, UnitWindow,
};

/// 按 `config` 执行一次完整的数据集展开.
///
/// 任何错误都会立即终止运行, 已写出的文件保持原样.
pub fn run(config: &PrepConfig) -> PrepResult<RunSummary> {
    let layout = Layout::build(config.output_root())?;
    let window = UnitWindow::unit();
    let mut summary = RunSummary::default();

    for (domain, key) in config.domains().iter() {
        log::info!("processing domain `{domain}` from key `{key}`");
        summary.set_key(domain, key);

        let mut writer = SplitWriter {
            layout: &layout,
            domain,
            quality: config.jpeg_quality(),
            summary: &mut summary,
        };

        let path = config.test_archive();
        let mut test = open_archive(config.archive_kind(), &path)?;
        let names = test.names()?;
        log::info!("{}: {} test records", path.display(), names.len());
        writer.write(Split::Test, frame_loader(test.as_mut(), names, key, window))?;
        drop(test);

        let path = config.train_archive();
        let mut train = open_archive(config.archive_kind(), &path)?;
        let names = train.names()?;
        let part = Partition::new(names.len(), config.validation())?;
        log::info!(
            "{}: {} records, {} train / {} val",
            path.display(),
            part.len(),
            part.num_train(),
            part.num_val()
        );
        let (train_names, val_names) = part.apply(&names);
        writer.write(
            Split::Train,
            frame_loader(train.as_mut(), train_names.to_vec(), key, window),
        )?;
        writer.write(
            Split::Val,
            frame_loader(train.as_mut(), val_names.to_vec(), key, window),
        )?;
        drop(train);

        log::info!("domain `{domain}` done");
    }

    Ok(summary)
}

/// 单个域的图像写出器.
struct SplitWriter<'a> {
    layout: &'a Layout,
    domain: Domain,
    quality: u8,
    summary: &'a mut RunSummary,
}

impl SplitWriter<'_> {
    fn write(&mut self, split: Split, loader: FrameLoader<'_>) -> PrepResult<()> {
        for (name, frame) in loader {
            let frame = frame?;
            let path = self.layout.image_path(self.domain, split, &name)?;
            frame
                .save_jpeg(&path, self.quality)
                .map_err(|source| PrepError::WriteImage {
                    path: path.clone(),
                    source,
                })?;
            log::debug!("wrote {}", path.display());
            self.summary.bump(self.domain, split);
        }
        Ok(())
    }
}
