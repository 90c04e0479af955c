//! # PWA 图标生成工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  main.rs   约定目录 → IconBatchConfig         │
//! └───────┬──────────────────────────────────────┘
//!         ↓ Result<GenerationReport, AppError>
//! ┌───────┼──────────────────────────────────────┐
//! │  ┌─ error ────── AppError (统一错误类型)      │
//! │  │                                           │
//! │  └─ icon_batch   源图 → 尺寸 PNG/SVG           │
//! │      ├─ loader     预检·签名·解码·RGBA         │
//! │      ├─ pipeline   缩放·PNG 编码              │
//! │      ├─ vector     SVG 包装                   │
//! │      └─ writer     写盘·规范图标复制           │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## 产物
//!
//! | 文件 | 位置 |
//! |------|------|
//! | `icon-{N}x{N}.png` / `.svg` | 输出目录，每个尺寸一对 |
//! | `apple-touch-icon.png` / `.svg` | 输出目录，固定 180x180 |
//! | `icon.png` / `icon.svg` | 输出目录上一级 |

pub mod error;
pub mod icon_batch;
