//! # 数据模型
//!
//! ## 设计思路
//!
//! 将“加载阶段输出”和“批处理结果”解耦：
//! - `SourceImage` 表示已解码并统一为 RGBA 的源图
//! - `IconArtifact` 表示一次写盘产物及其角色
//! - `GenerationReport` 汇总整次批处理结果

use image::RgbaImage;
use std::path::{Path, PathBuf};

/// 加载阶段输出：统一为 RGBA 的源图。
pub(crate) struct SourceImage {
    /// 带 alpha 通道的像素数据。
    pub(crate) rgba: RgbaImage,
    /// 原始文件是否自带 alpha 通道。
    pub(crate) had_alpha: bool,
}

impl SourceImage {
    pub(crate) fn dimensions(&self) -> (u32, u32) {
        self.rgba.dimensions()
    }
}

/// 产物角色。携带的数值为该产物声明的边长。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactRole {
    /// `icon-{N}x{N}.png`
    SizedRaster(u32),
    /// `icon-{N}x{N}.svg`
    SizedVector(u32),
    /// 输出目录上一级的 `icon.png`，与源文件逐字节一致。
    ///
    /// 目标就是源文件本身时跳过复制，也不记录该产物。
    CanonicalCopy,
    /// 输出目录上一级的 `icon.svg`。
    CanonicalVector(u32),
    /// `apple-touch-icon.png`
    TouchRaster(u32),
    /// `apple-touch-icon.svg`
    TouchVector(u32),
}

impl ArtifactRole {
    pub fn is_raster(self) -> bool {
        matches!(self, Self::SizedRaster(_) | Self::TouchRaster(_))
    }

    pub fn is_vector(self) -> bool {
        matches!(
            self,
            Self::SizedVector(_) | Self::CanonicalVector(_) | Self::TouchVector(_)
        )
    }
}

/// 单个写盘产物。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconArtifact {
    pub role: ArtifactRole,
    pub path: PathBuf,
}

/// 批处理结果，产物按写入顺序排列。
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub source_width: u32,
    pub source_height: u32,
    pub source_had_alpha: bool,
    pub artifacts: Vec<IconArtifact>,
}

impl GenerationReport {
    pub(crate) fn new(source: &SourceImage) -> Self {
        let (source_width, source_height) = source.dimensions();
        Self {
            source_width,
            source_height,
            source_had_alpha: source.had_alpha,
            artifacts: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, role: ArtifactRole, path: &Path) {
        self.artifacts.push(IconArtifact {
            role,
            path: path.to_path_buf(),
        });
    }

    pub fn rasters(&self) -> impl Iterator<Item = &IconArtifact> {
        self.artifacts.iter().filter(|a| a.role.is_raster())
    }

    pub fn vectors(&self) -> impl Iterator<Item = &IconArtifact> {
        self.artifacts.iter().filter(|a| a.role.is_vector())
    }

    pub fn find(&self, role: ArtifactRole) -> Option<&IconArtifact> {
        self.artifacts.iter().rev().find(|a| a.role == role)
    }
}
