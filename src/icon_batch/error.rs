//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载图标生成链路中的所有失败原因，避免字符串匹配式错误处理。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可以区分
//! “预检失败（无任何副作用）”与“批处理中途失败（已写文件保留）”。

use std::path::PathBuf;

/// 图标批量生成统一错误类型。
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("源图标不存在：{}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("尺寸无效：第 {index} 项为 {size}（必须大于 0）")]
    InvalidSize { size: u32, index: usize },

    #[error("配置错误：{0}")]
    InvalidConfig(String),

    #[error("格式错误：{0}")]
    InvalidFormat(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("缩放错误：{0}")]
    Resize(String),

    #[error("编码错误（{}）：{message}", path.display())]
    Encode { path: PathBuf, message: String },

    #[error("文件错误（{}）：{source}", path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IconError {
    pub(crate) fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }

    /// 是否为预检阶段错误。
    ///
    /// 预检错误发生在任何文件系统写入之前。
    pub fn is_preflight(&self) -> bool {
        matches!(
            self,
            Self::SourceNotFound { .. } | Self::InvalidSize { .. } | Self::InvalidConfig(_)
        )
    }
}
