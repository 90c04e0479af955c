//! # 图标批量生成模块（icon_batch）
//!
//! ## 设计思路
//!
//! 该模块将“源图加载校验 → 统一 RGBA → 方形缩放 → PNG 编码 → SVG 包装 → 写盘”
//! 按职责拆分为多个子模块，避免单文件膨胀与耦合。
//!
//! - `generator`：编排整条批处理流水线
//! - `loader`：源文件预检、签名校验、像素限制、解码与 alpha 补齐
//! - `pipeline`：缩放与 PNG 编码
//! - `vector`：引用 PNG 的极简 SVG 包装
//! - `writer`：目录创建、覆盖写入、规范图标复制
//! - `config/error/source`：配置、错误、数据模型
//!
//! ## 新同事快速上手
//!
//! ```text
//! main.rs（约定目录 → IconBatchConfig）
//!    ↓
//! generator.rs（统一编排 + 阶段耗时日志）
//!    ├─ loader.rs（预检 + 解码 + RGBA）
//!    ├─ pipeline.rs（缩放 + 编码）
//!    ├─ vector.rs（SVG 包装）
//!    └─ writer.rs（写盘）
//!    ↓
//! GenerationReport / IconError
//! ```

mod config;
mod error;
mod generator;
mod loader;
mod pipeline;
mod source;
mod vector;
mod writer;

pub use config::{APPLE_TOUCH_ICON_SIZE, CANONICAL_VECTOR_SIZE, IconBatchConfig, PWA_ICON_SIZES};
pub use error::IconError;
pub use generator::{IconBatchGenerator, generate_icons};
pub use source::{ArtifactRole, GenerationReport, IconArtifact};
pub use vector::VectorWrapper;
