//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconBatchGenerator` 只负责流程编排，整批视为一次尝试，只有一个成功/失败结果：
//! 1. 加载源图（含“源文件不存在”预检，先于任何写入）
//! 2. 确保输出目录存在
//! 3. 按尺寸顺序写出 PNG + SVG 包装
//! 4. 复制规范图标（及其 SVG 包装）到输出目录上一级
//! 5. 写出固定尺寸的 touch icon + SVG 包装
//!
//! ## 实现思路
//!
//! - 配置在构造时校验，非法尺寸不会产生任何副作用。
//! - 中途失败不回滚，已写文件保留在磁盘上。
//! - 记录 `load/sizes/total` 阶段耗时，便于诊断。

use image::RgbaImage;
use std::path::Path;
use std::time::Instant;

use super::config::CANONICAL_ICON_FILE;
use super::source::{ArtifactRole, GenerationReport};
use super::vector::VectorWrapper;
use super::{IconBatchConfig, IconError, loader, pipeline, writer};

/// 图标批量生成器。
pub struct IconBatchGenerator {
    config: IconBatchConfig,
}

impl IconBatchGenerator {
    /// 根据配置创建生成器。
    ///
    /// # 示例
    /// ```rust,no_run
    /// use pwa_icon_generator::icon_batch::{IconBatchConfig, IconBatchGenerator};
    ///
    /// let generator = IconBatchGenerator::new(IconBatchConfig::for_project_root("."))?;
    /// let report = generator.run()?;
    /// println!("{} files", report.artifacts.len());
    /// # Ok::<(), pwa_icon_generator::icon_batch::IconError>(())
    /// ```
    pub fn new(config: IconBatchConfig) -> Result<Self, IconError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// 构造时已校验过的配置。
    pub fn config(&self) -> &IconBatchConfig {
        &self.config
    }

    /// 执行整批生成。
    pub fn run(&self) -> Result<GenerationReport, IconError> {
        let config = &self.config;
        let total_start = Instant::now();

        let load_start = Instant::now();
        let source = loader::load_source(config)?;
        let load_elapsed = load_start.elapsed();

        writer::ensure_dir(&config.output_dir)?;

        let mut report = GenerationReport::new(&source);

        let sizes_start = Instant::now();
        for &size in &config.sizes {
            let resized = pipeline::resize_square(&source.rgba, size, config.resize_filter);
            self.write_pair(
                &resized,
                size,
                &IconBatchConfig::raster_file_name(size),
                &IconBatchConfig::vector_file_name(size),
                (ArtifactRole::SizedRaster(size), ArtifactRole::SizedVector(size)),
                &mut report,
            )?;
        }
        let sizes_elapsed = sizes_start.elapsed();

        self.write_canonical(&mut report)?;

        let touch_size = config.touch_icon_size;
        let touch = pipeline::resize_square(&source.rgba, touch_size, config.resize_filter);
        self.write_pair(
            &touch,
            touch_size,
            &IconBatchConfig::touch_raster_file_name(),
            &IconBatchConfig::touch_vector_file_name(),
            (
                ArtifactRole::TouchRaster(touch_size),
                ArtifactRole::TouchVector(touch_size),
            ),
            &mut report,
        )?;

        log::info!(
            "✅ 图标生成完成 - 产物: {} load={}ms sizes={}ms total={}ms",
            report.artifacts.len(),
            load_elapsed.as_millis(),
            sizes_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(report)
    }

    /// 写出一对 PNG + SVG 包装，SVG 通过文件名引用刚写出的 PNG。
    fn write_pair(
        &self,
        image: &RgbaImage,
        size: u32,
        raster_name: &str,
        vector_name: &str,
        roles: (ArtifactRole, ArtifactRole),
        report: &mut GenerationReport,
    ) -> Result<(), IconError> {
        let raster_path = self.config.output_dir.join(raster_name);
        let png = pipeline::encode_png(image, self.config.optimize_png, &raster_path)?;
        writer::write_file(&raster_path, png)?;
        report.record(roles.0, &raster_path);
        log::info!("✅ 已创建 {} ({}x{})", raster_name, size, size);

        let vector_path = self.config.output_dir.join(vector_name);
        writer::write_file(&vector_path, VectorWrapper::new(size, raster_name).to_string())?;
        report.record(roles.1, &vector_path);
        log::info!("✅ 已创建 {}", vector_name);

        Ok(())
    }

    /// 复制规范 `icon.png`，并按配置写出 `icon.svg`。
    fn write_canonical(&self, report: &mut GenerationReport) -> Result<(), IconError> {
        let canonical_path = self.config.canonical_icon_path()?;
        if writer::copy_canonical(&self.config.source_path, &canonical_path)? {
            report.record(ArtifactRole::CanonicalCopy, &canonical_path);
            log::info!("✅ 已更新规范图标：{}", canonical_path.display());
        }

        let Some(size) = self.config.canonical_vector_size else {
            log::debug!("跳过规范 SVG 包装");
            return Ok(());
        };

        let vector_path = self.config.canonical_vector_path()?;
        writer::write_file(
            &vector_path,
            VectorWrapper::new(size, CANONICAL_ICON_FILE).to_string(),
        )?;
        report.record(ArtifactRole::CanonicalVector(size), &vector_path);
        log::info!("✅ 已创建规范 SVG 包装：{}", display_name(&vector_path));

        Ok(())
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// 便捷入口：校验配置并执行整批生成。
pub fn generate_icons(config: IconBatchConfig) -> Result<GenerationReport, IconError> {
    IconBatchGenerator::new(config)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
    use std::io::Cursor;
    use std::path::PathBuf;

    fn create_rgb_png(width: u32, height: u32) -> Vec<u8> {
        let img = ImageBuffer::from_fn(width, height, |x, y| {
            Rgb([(x % 255) as u8, (y % 255) as u8, ((x + y) % 255) as u8])
        });
        let mut cursor = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut cursor, ImageFormat::Png)
            .expect("failed to encode test image");
        cursor.into_inner()
    }

    fn project_with_source(bytes: &[u8]) -> (tempfile::TempDir, IconBatchConfig) {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("icon.png"), bytes).expect("write source");
        let mut config = IconBatchConfig::for_project_root(dir.path());
        config.sizes = vec![16, 32];
        config.touch_icon_size = 24;
        (dir, config)
    }

    #[test]
    fn new_rejects_invalid_sizes_without_side_effects() {
        let (_dir, mut config) = project_with_source(&create_rgb_png(8, 8));
        config.sizes = vec![16, 0];
        let output_dir = config.output_dir.clone();

        let result = IconBatchGenerator::new(config);

        assert!(matches!(
            result,
            Err(IconError::InvalidSize { size: 0, index: 1 })
        ));
        assert!(!output_dir.exists());
    }

    #[test]
    fn run_records_artifacts_in_write_order() {
        let (dir, config) = project_with_source(&create_rgb_png(64, 64));

        let report = generate_icons(config).expect("generation should succeed");

        let roles: Vec<ArtifactRole> = report.artifacts.iter().map(|a| a.role).collect();
        assert_eq!(
            roles,
            vec![
                ArtifactRole::SizedRaster(16),
                ArtifactRole::SizedVector(16),
                ArtifactRole::SizedRaster(32),
                ArtifactRole::SizedVector(32),
                ArtifactRole::CanonicalCopy,
                ArtifactRole::CanonicalVector(512),
                ArtifactRole::TouchRaster(24),
                ArtifactRole::TouchVector(24),
            ]
        );
        assert!(report.artifacts.iter().all(|a| a.path.is_file()));
        assert_eq!(
            report.find(ArtifactRole::CanonicalCopy).map(|a| a.path.clone()),
            Some(dir.path().join("public").join("icon.png"))
        );
        assert!(!report.source_had_alpha);
    }

    #[test]
    fn canonical_vector_can_be_disabled() {
        let (dir, mut config) = project_with_source(&create_rgb_png(32, 32));
        config.canonical_vector_size = None;

        let report = generate_icons(config).expect("generation should succeed");

        assert!(report.find(ArtifactRole::CanonicalVector(512)).is_none());
        assert!(!dir.path().join("public").join("icon.svg").exists());
    }

    #[test]
    fn missing_source_fails_before_creating_output_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = IconBatchConfig::for_project_root(dir.path());
        let output_dir = config.output_dir.clone();

        let result = generate_icons(config);

        match result {
            Err(err @ IconError::SourceNotFound { .. }) => assert!(err.is_preflight()),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(!output_dir.exists());
        assert!(!dir.path().join("public").exists());
    }

    #[test]
    fn undecodable_source_is_not_preflight() {
        let (_dir, config) = project_with_source(b"\x89PNG\r\n\x1a\n garbage");

        let err = generate_icons(config).expect_err("garbage should fail");

        assert!(!err.is_preflight());
    }

    #[test]
    fn write_failure_keeps_earlier_outputs() {
        let (_dir, mut config) = project_with_source(&create_rgb_png(32, 32));
        config.sizes = vec![16, 20];
        std::fs::create_dir_all(&config.output_dir).expect("create output dir");
        // A directory squatting on the second raster path makes that write fail.
        let blocked = config.output_dir.join(IconBatchConfig::raster_file_name(20));
        std::fs::create_dir_all(&blocked).expect("create blocker");
        let first: PathBuf = config.output_dir.join(IconBatchConfig::raster_file_name(16));

        let err = generate_icons(config).expect_err("blocked write should fail");

        assert!(matches!(err, IconError::FileSystem { ref path, .. } if *path == blocked));
        assert!(first.is_file());
    }

    #[test]
    fn new_keeps_the_validated_config() {
        let (_dir, config) = project_with_source(&create_rgb_png(8, 8));
        let expected_output = config.output_dir.clone();

        let generator = IconBatchGenerator::new(config).expect("valid config");

        assert_eq!(generator.config().sizes, vec![16, 32]);
        assert_eq!(generator.config().touch_icon_size, 24);
        assert_eq!(generator.config().output_dir, expected_output);
    }

    #[test]
    fn canonical_copy_onto_source_is_skipped_and_not_recorded() {
        let source_bytes = create_rgb_png(32, 32);
        let (dir, mut config) = project_with_source(&source_bytes);
        // canonical icon.png now resolves to the source file itself
        config.output_dir = dir.path().join("icons");

        let report = generate_icons(config).expect("generation should succeed");

        assert!(report.find(ArtifactRole::CanonicalCopy).is_none());
        assert!(report.find(ArtifactRole::CanonicalVector(512)).is_some());
        assert_eq!(
            std::fs::read(dir.path().join("icon.png")).expect("read source"),
            source_bytes
        );
    }
}
