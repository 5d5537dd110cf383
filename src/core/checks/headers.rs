//! Response header hygiene check

use super::SecurityCheck;
use crate::capabilities::Capabilities;
use crate::core::types::{CheckDetail, CheckKind, Verdict};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Checks the response for the standard protective headers.
pub struct HeadersCheck;

#[async_trait]
impl SecurityCheck for HeadersCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Headers
    }

    async fn probe(&self, caps: &Capabilities) -> Result<Verdict> {
        let Some(document) = caps.document() else {
            return Ok(Verdict::fail(CheckDetail::Headers {
                frame_options: false,
                content_type_options: false,
                referrer_policy: false,
            }));
        };

        let frame_options = document.response_header("x-frame-options").await?.is_some();
        let content_type_options = document
            .response_header("x-content-type-options")
            .await?
            .map(|v| v.eq_ignore_ascii_case("nosniff"))
            .unwrap_or(false);
        let referrer_policy = document.response_header("referrer-policy").await?.is_some();

        Ok(Verdict::from_outcome(
            frame_options && content_type_options && referrer_policy,
            CheckDetail::Headers {
                frame_options,
                content_type_options,
                referrer_policy,
            },
        ))
    }
}
