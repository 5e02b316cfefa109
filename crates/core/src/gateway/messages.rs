//! User-facing failure texts

use labelprint_domain::Locale;

/// Texts used for notifications and rejection messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageCatalog {
    /// Fallback when the server supplies no message
    pub request_failed: &'static str,
    pub access_denied: &'static str,
    pub not_found: &'static str,
    pub server_error: &'static str,
    pub timeout: &'static str,
    pub network_error: &'static str,
}

impl MessageCatalog {
    pub const ENGLISH: Self = Self {
        request_failed: "Request failed",
        access_denied: "Access denied",
        not_found: "Resource not found",
        server_error: "Internal server error",
        timeout: "Request timed out",
        network_error: "Network error",
    };

    pub const SIMPLIFIED_CHINESE: Self = Self {
        request_failed: "请求失败",
        access_denied: "无权限访问",
        not_found: "资源不存在",
        server_error: "服务器内部错误",
        timeout: "请求超时",
        network_error: "网络错误",
    };

    #[must_use]
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::English => Self::ENGLISH,
            Locale::SimplifiedChinese => Self::SIMPLIFIED_CHINESE,
        }
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::ENGLISH
    }
}
