//! 写盘辅助：目录创建、覆盖写入、规范图标复制。
//!
//! 所有 I/O 错误都带上目标路径，统一映射为 `IconError::FileSystem`。

use std::fs;
use std::path::Path;

use super::IconError;

/// 递归创建目录，已存在时无副作用。
pub(crate) fn ensure_dir(dir: &Path) -> Result<(), IconError> {
    fs::create_dir_all(dir).map_err(|e| IconError::fs(dir, e))
}

/// 覆盖写入文件。
pub(crate) fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<(), IconError> {
    fs::write(path, contents).map_err(|e| IconError::fs(path, e))
}

/// 逐字节复制源文件到规范位置。
///
/// 返回 `false` 表示目标就是源文件本身，未执行复制。
pub(crate) fn copy_canonical(source: &Path, dest: &Path) -> Result<bool, IconError> {
    if is_same_file(source, dest) {
        log::warn!(
            "⚠️ 规范图标与源文件为同一文件，跳过复制：{}",
            dest.display()
        );
        return Ok(false);
    }

    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }

    fs::copy(source, dest).map_err(|e| IconError::fs(dest, e))?;
    Ok(true)
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
