//! # 配置模块
//!
//! ## 设计思路
//!
//! 将源路径、输出目录、尺寸列表与 touch icon 尺寸等“固定常量”集中到
//! `IconBatchConfig`，由调用方显式传入，便于脱离项目目录结构做单元测试。
//!
//! ## 实现思路
//!
//! - `for_project_root` 按约定目录结构构建默认配置。
//! - `validate` 在任何文件系统副作用之前拒绝非法尺寸与限制值。
//! - 规范图标（`icon.png` / `icon.svg`）路径由输出目录的上一级推导。

use image::imageops::FilterType;
use std::path::{Path, PathBuf};

use super::IconError;

/// PWA manifest 约定的图标尺寸。
pub const PWA_ICON_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

/// Apple touch icon 固定尺寸。
pub const APPLE_TOUCH_ICON_SIZE: u32 = 180;

/// 规范矢量包装的默认画布尺寸。
pub const CANONICAL_VECTOR_SIZE: u32 = 512;

pub(crate) const CANONICAL_ICON_FILE: &str = "icon.png";
pub(crate) const CANONICAL_VECTOR_FILE: &str = "icon.svg";
pub(crate) const TOUCH_ICON_STEM: &str = "apple-touch-icon";

/// 图标批量生成配置。
#[derive(Debug, Clone)]
pub struct IconBatchConfig {
    /// 源 PNG 路径。
    pub source_path: PathBuf,
    /// 尺寸图标输出目录（不存在时递归创建）。
    pub output_dir: PathBuf,
    /// 按顺序生成的方形边长；允许重复，后写覆盖先写。
    pub sizes: Vec<u32>,
    /// touch icon 边长。
    pub touch_icon_size: u32,
    /// 规范 `icon.svg` 的画布尺寸，`None` 表示不生成。
    pub canonical_vector_size: Option<u32>,
    /// 重采样滤镜。
    pub resize_filter: FilterType,
    /// 是否以最高压缩等级编码 PNG。
    pub optimize_png: bool,
    /// 源文件体积上限（字节）。
    pub max_file_size: u64,
    /// 源图片像素上限（`width * height`），在完整解码前按 header 校验。
    pub max_decoded_pixels: u64,
}

impl Default for IconBatchConfig {
    fn default() -> Self {
        Self::for_project_root(".")
    }
}

impl IconBatchConfig {
    /// 按约定目录结构构建配置：
    /// 源文件 `<root>/icon.png`，输出目录 `<root>/public/icons`。
    pub fn for_project_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            source_path: root.join(CANONICAL_ICON_FILE),
            output_dir: root.join("public").join("icons"),
            sizes: PWA_ICON_SIZES.to_vec(),
            touch_icon_size: APPLE_TOUCH_ICON_SIZE,
            canonical_vector_size: Some(CANONICAL_VECTOR_SIZE),
            resize_filter: FilterType::Lanczos3,
            optimize_png: true,
            max_file_size: 50 * 1024 * 1024,
            max_decoded_pixels: 40_000_000,
        }
    }

    /// 校验配置。
    ///
    /// 仅做纯内存检查，不触碰文件系统。
    pub fn validate(&self) -> Result<(), IconError> {
        if let Some((index, &size)) = self.sizes.iter().enumerate().find(|(_, s)| **s == 0) {
            return Err(IconError::InvalidSize { size, index });
        }
        if self.touch_icon_size == 0 {
            return Err(IconError::InvalidConfig("touch_icon_size 必须大于 0".to_string()));
        }
        if self.canonical_vector_size == Some(0) {
            return Err(IconError::InvalidConfig(
                "canonical_vector_size 必须大于 0".to_string(),
            ));
        }
        if self.max_file_size == 0 {
            return Err(IconError::InvalidConfig("max_file_size 必须大于 0".to_string()));
        }
        if self.max_decoded_pixels == 0 {
            return Err(IconError::InvalidConfig(
                "max_decoded_pixels 必须大于 0".to_string(),
            ));
        }
        self.canonical_dir()?;
        Ok(())
    }

    /// 输出目录的上一级，规范图标放在这里。
    pub fn canonical_dir(&self) -> Result<&Path, IconError> {
        self.output_dir.parent().ok_or_else(|| {
            IconError::InvalidConfig(format!(
                "输出目录没有上级目录：{}",
                self.output_dir.display()
            ))
        })
    }

    pub fn canonical_icon_path(&self) -> Result<PathBuf, IconError> {
        Ok(self.canonical_dir()?.join(CANONICAL_ICON_FILE))
    }

    pub fn canonical_vector_path(&self) -> Result<PathBuf, IconError> {
        Ok(self.canonical_dir()?.join(CANONICAL_VECTOR_FILE))
    }

    /// `icon-{N}x{N}.png`
    pub fn raster_file_name(size: u32) -> String {
        format!("icon-{size}x{size}.png")
    }

    /// `icon-{N}x{N}.svg`
    pub fn vector_file_name(size: u32) -> String {
        format!("icon-{size}x{size}.svg")
    }

    pub fn touch_raster_file_name() -> String {
        format!("{TOUCH_ICON_STEM}.png")
    }

    pub fn touch_vector_file_name() -> String {
        format!("{TOUCH_ICON_STEM}.svg")
    }
}
