//! # 缩放与编码流水线模块
//!
//! ## 设计思路
//!
//! 缩放优先走 `fast_image_resize`（SIMD 卷积），失败时回退 `image::imageops::resize`，
//! 两条路径都使用同一种高质量滤镜，保证放大/缩小时的抗锯齿效果。
//! 输出始终为 RGBA8，相同输入必然得到相同像素。
//!
//! ## 实现思路
//!
//! 1. RGBA 源图 → `fr::images::Image`
//! 2. 卷积缩放到 `size x size`
//! 3. 按配置选择 PNG 压缩等级编码

use fast_image_resize as fr;
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::imageops::FilterType;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use std::path::Path;

use super::IconError;

/// 将 RGBA 源图缩放为 `size x size` 方形图。
pub(crate) fn resize_square(source: &RgbaImage, size: u32, filter: FilterType) -> RgbaImage {
    match resize_with_fast_image_resize(source, size, size, filter) {
        Ok(resized) => resized,
        Err(err) => {
            log::warn!("⚠️ fast_image_resize 缩放失败，回退 image::imageops::resize：{}", err);
            image::imageops::resize(source, size, size, filter)
        }
    }
}

fn resize_with_fast_image_resize(
    source: &RgbaImage,
    target_width: u32,
    target_height: u32,
    filter: FilterType,
) -> Result<RgbaImage, IconError> {
    let (src_width, src_height) = source.dimensions();

    let src_image = fr::images::Image::from_vec_u8(
        src_width,
        src_height,
        source.as_raw().clone(),
        fr::PixelType::U8x4,
    )
    .map_err(|e| IconError::Resize(format!("构建源图像缓冲失败：{}", e)))?;

    let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

    let mut resizer = fr::Resizer::new();
    let options =
        fr::ResizeOptions::new().resize_alg(fr::ResizeAlg::Convolution(to_fast_filter(filter)));

    resizer
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| IconError::Resize(format!("fast_image_resize 执行失败：{}", e)))?;

    RgbaImage::from_raw(target_width, target_height, dst_image.into_vec())
        .ok_or_else(|| IconError::Resize("fast_image_resize 输出缓冲长度异常".to_string()))
}

fn to_fast_filter(filter: FilterType) -> fr::FilterType {
    match filter {
        FilterType::Nearest => fr::FilterType::Box,
        FilterType::Triangle => fr::FilterType::Bilinear,
        FilterType::CatmullRom => fr::FilterType::CatmullRom,
        FilterType::Gaussian => fr::FilterType::Mitchell,
        FilterType::Lanczos3 => fr::FilterType::Lanczos3,
    }
}

/// 将 RGBA 图像编码为 PNG 字节。
///
/// `path` 仅用于错误信息。
pub(crate) fn encode_png(
    image: &RgbaImage,
    optimize: bool,
    path: &Path,
) -> Result<Vec<u8>, IconError> {
    let (width, height) = image.dimensions();
    let mut buffer = Vec::new();

    let compression = if optimize {
        CompressionType::Best
    } else {
        CompressionType::Default
    };
    log::debug!("🗜️ PNG 编码 {}x{} compression={:?}", width, height, compression);

    PngEncoder::new_with_quality(&mut buffer, compression, PngFilterType::Adaptive)
        .write_image(image.as_raw(), width, height, ExtendedColorType::Rgba8)
        .map_err(|e| IconError::Encode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(buffer)
}
