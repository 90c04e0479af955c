//! 矢量包装：仅通过文件名引用对应 PNG 的极简 SVG。

use std::fmt;

/// 一个方形 SVG 画布，内含单个 `<image>` 引用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorWrapper<'a> {
    pub size: u32,
    pub href: &'a str,
}

impl<'a> VectorWrapper<'a> {
    pub fn new(size: u32, href: &'a str) -> Self {
        Self { size, href }
    }
}

impl fmt::Display for VectorWrapper<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size;
        let href = escape_attr(self.href);
        write!(
            f,
            "<svg width=\"{size}\" height=\"{size}\" xmlns=\"http://www.w3.org/2000/svg\">\n  \
             <image href=\"{href}\" width=\"{size}\" height=\"{size}\"/>\n\
             </svg>"
        )
    }
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
