//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 在“尽可能早”的阶段完成源文件校验，尽快失败：
//! 存在性检查属于预检，必须在创建输出目录之前完成。
//!
//! ## 实现思路
//!
//! 1. 存在性 + metadata 体积限制
//! 2. 读取字节并通过文件签名（magic bytes）拒绝明确的非图片内容
//! 3. 按内容（回退扩展名）确定格式，读取 header 尺寸，按像素上限快速拒绝
//! 4. 完整解码
//! 5. 缺少 alpha 通道时统一转换为 RGBA

use image::{DynamicImage, ImageFormat, ImageReader};
use std::io::Cursor;
use std::path::Path;

use super::source::SourceImage;
use super::{IconBatchConfig, IconError};

/// 预检：源文件必须存在。
///
/// 不产生任何文件系统写入。
pub(crate) fn ensure_source_exists(path: &Path) -> Result<(), IconError> {
    match path.try_exists() {
        Ok(true) => Ok(()),
        Ok(false) => Err(IconError::SourceNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(IconError::fs(path, e)),
    }
}

/// 读取、校验并解码源图。
pub(crate) fn load_source(config: &IconBatchConfig) -> Result<SourceImage, IconError> {
    let path = config.source_path.as_path();
    log::info!("📁 开始读取源图标 - 路径: {}", path.display());

    ensure_source_exists(path)?;

    let metadata = std::fs::metadata(path).map_err(|e| IconError::fs(path, e))?;
    if metadata.len() > config.max_file_size {
        return Err(IconError::ResourceLimit(format!(
            "文件过大：{:.2} MB（限制：{:.2} MB）",
            metadata.len() as f64 / 1024.0 / 1024.0,
            config.max_file_size as f64 / 1024.0 / 1024.0
        )));
    }

    let bytes = std::fs::read(path).map_err(|e| IconError::fs(path, e))?;
    decode_source(&bytes, ImageFormat::from_path(path).ok(), config)
}

/// 从内存字节解码源图。
///
/// `extension_hint` 仅在内容无法识别格式时生效（例如没有 magic bytes 的 TGA）。
pub(crate) fn decode_source(
    bytes: &[u8],
    extension_hint: Option<ImageFormat>,
    config: &IconBatchConfig,
) -> Result<SourceImage, IconError> {
    validate_image_signature(bytes)?;

    let (header_width, header_height) = reader_for(bytes, extension_hint)?
        .into_dimensions()
        .map_err(|e| IconError::InvalidFormat(format!("无法读取图片尺寸：{}", e)))?;
    validate_pixel_limits(config, header_width, header_height)?;

    let decoded = reader_for(bytes, extension_hint)?
        .decode()
        .map_err(|e| IconError::Decode(format!("图片解码失败：{}", e)))?;

    let source = normalize_alpha(decoded);
    let (width, height) = source.dimensions();
    log::info!(
        "✅ 已加载源图标：{}x{} 像素（alpha: {}）",
        width,
        height,
        if source.had_alpha { "原生" } else { "已补齐" }
    );

    Ok(source)
}

/// 统一转换为带 alpha 通道的 RGBA8。已有 alpha 时不改变像素。
pub(crate) fn normalize_alpha(image: DynamicImage) -> SourceImage {
    let had_alpha = image.color().has_alpha();
    let rgba = match image {
        DynamicImage::ImageRgba8(rgba) => rgba,
        other => {
            log::debug!("🎨 转换颜色格式 {:?} -> Rgba8", other.color());
            other.to_rgba8()
        }
    };
    SourceImage { rgba, had_alpha }
}

/// 按内容猜测格式，猜不出时回退扩展名提示。
fn reader_for(
    bytes: &[u8],
    extension_hint: Option<ImageFormat>,
) -> Result<ImageReader<Cursor<&[u8]>>, IconError> {
    let mut reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| IconError::InvalidFormat(format!("无法识别图片格式：{}", e)))?;

    if reader.format().is_none() {
        match extension_hint {
            Some(format) => reader.set_format(format),
            None => return Err(IconError::InvalidFormat("无法识别图片格式".to_string())),
        }
    }

    Ok(reader)
}

fn validate_pixel_limits(
    config: &IconBatchConfig,
    width: u32,
    height: u32,
) -> Result<(), IconError> {
    let pixels = (width as u64)
        .checked_mul(height as u64)
        .ok_or_else(|| IconError::ResourceLimit("图片像素数溢出".to_string()))?;

    if pixels > config.max_decoded_pixels {
        return Err(IconError::ResourceLimit(format!(
            "图片像素过大：{} 像素（限制：{} 像素）",
            pixels, config.max_decoded_pixels
        )));
    }

    Ok(())
}

/// 通过文件签名拒绝明确的非图片内容。
///
/// `infer` 不认识的签名（TGA / PNM / QOI 等）交给解码器判断。
fn validate_image_signature(bytes: &[u8]) -> Result<(), IconError> {
    if bytes.is_empty() {
        return Err(IconError::InvalidFormat("图片内容为空".to_string()));
    }

    match infer::get(bytes) {
        Some(kind) if kind.matcher_type() != infer::MatcherType::Image => {
            Err(IconError::InvalidFormat(format!(
                "文件签名不是图片类型：{}",
                kind.mime_type()
            )))
        }
        _ => Ok(()),
    }
}
