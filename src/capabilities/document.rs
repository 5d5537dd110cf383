//! Document and response metadata capability

use crate::utils::error::Result;
use async_trait::async_trait;

/// A cookie as observed on the current document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieInfo {
    /// Cookie name
    pub name: String,
    /// Whether the Secure attribute is set
    pub secure: bool,
    /// Whether the HttpOnly attribute is set
    pub http_only: bool,
}

/// Access to the ambient document, its response headers, and its DOM posture
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentCapability: Send + Sync {
    /// The named response header, if present. Names are matched
    /// case-insensitively.
    async fn response_header(&self, name: &str) -> Result<Option<String>>;

    /// The effective Content-Security-Policy string, if one is served.
    async fn csp_policy(&self) -> Result<Option<String>>;

    /// Cookies visible on the current document.
    async fn cookies(&self) -> Result<Vec<CookieInfo>>;

    /// Count of sensitive input fields on the document.
    async fn input_count(&self) -> Result<u32>;

    /// Count of sensitive input fields with skimming guards attached.
    async fn guarded_input_count(&self) -> Result<u32>;

    /// Origins of scripts loaded from outside the document's own origin.
    async fn foreign_script_origins(&self) -> Result<Vec<String>>;
}
