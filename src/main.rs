//! # PWA 图标生成工具 — 应用入口
//!
//! 无参数运行：以当前工作目录为项目根，读取 `icon.png`，
//! 生成到 `public/icons`。业务逻辑见 `icon_batch` 模块。

use std::process::ExitCode;

use pwa_icon_generator::error::AppError;
use pwa_icon_generator::icon_batch::{self, GenerationReport, IconBatchConfig};

fn run() -> Result<GenerationReport, AppError> {
    let project_root = std::env::current_dir()?;
    let config = IconBatchConfig::for_project_root(&project_root);

    log::info!("🎨 从 PNG 源图生成 PWA 图标...");
    log::info!("📁 源图标: {}", config.source_path.display());
    log::info!("📁 输出目录: {}", config.output_dir.display());

    Ok(icon_batch::generate_icons(config)?)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(report) => {
            log::info!("🚀 全部图标生成成功（{} 个文件）", report.artifacts.len());
            log::info!("📝 现在可以更新 manifest.json 等文件");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("❌ 图标生成失败: {err}");
            if let Some(hint) = err.hint() {
                log::error!("💡 {hint}");
            }
            ExitCode::FAILURE
        }
    }
}
