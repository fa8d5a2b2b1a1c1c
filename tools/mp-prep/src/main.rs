//! multipoint 数据集展开工具.
//!
//! 读取 `<input>/test.hdf5` 和 `<input>/training.hdf5`, 输出
//! `<output>/multipoint/{A,B}/{test,train,val}/<record>.jpg`.

mod cli;
mod loader;

use clap::Parser;
use cli::Cli;
use mp_berry::PrepConfig;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    if let Err(e) = simple_logger::SimpleLogger::new().with_level(level).init() {
        eprintln!("failed to initialise logger: {e}");
    }

    let Some(input) = loader::input_dir_from_env_or_home(cli.input_path.clone()) else {
        log::error!("no input path given and home directory is unknown");
        return ExitCode::FAILURE;
    };
    let cwd = match std::env::current_dir() {
        Ok(d) => d,
        Err(e) => {
            log::error!("cannot read current directory: {e}");
            return ExitCode::FAILURE;
        }
    };

    let config = match PrepConfig::resolve(
        cwd,
        input,
        cli.output_path.clone().unwrap_or_default(),
        cli.validation,
        cli.thermal_raw,
    ) {
        Ok(c) => c.format(cli.format.into()).quality(cli.quality),
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "unpacking {} into {}",
        config.input_dir().display(),
        config.multipoint_dir().display()
    );

    match mp_berry::pipeline::run(&config) {
        Ok(summary) => {
            let mut buf = Vec::with_capacity(512);
            if summary.describe_into(&mut buf).is_ok() {
                for line in String::from_utf8_lossy(&buf).lines() {
                    log::info!("{line}");
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
