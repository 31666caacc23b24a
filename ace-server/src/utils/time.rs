//! 时间工具函数
//!
//! 持久化文档统一使用 RFC3339 字符串时间戳。

/// Current UTC time as an RFC3339 string
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}
