//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 入口层统一返回 `AppError`，将图标流水线错误与入口自身的 I/O 错误
//! （例如无法获取当前工作目录）收敛到一个类型，避免 `.map_err(|e| e.to_string())`。

use crate::icon_batch::IconError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 图标生成流水线错误（预检 / 解码 / 写盘）
    #[error("{0}")]
    Icon(#[from] IconError),

    /// 入口层文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// 源文件缺失时给出操作提示。
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Icon(IconError::SourceNotFound { .. }) => {
                Some("请确认 icon.png 位于项目根目录")
            }
            Self::Icon(IconError::InvalidSize { .. }) => Some("图标尺寸必须为正整数"),
            _ => None,
        }
    }
}
