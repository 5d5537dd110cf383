//! Transport security check

use super::SecurityCheck;
use crate::capabilities::Capabilities;
use crate::core::types::{CheckDetail, CheckKind, Verdict};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Probes the active connection for TLS, HSTS, certificate validity, and
/// cookie transport hygiene.
pub struct TlsCheck;

#[async_trait]
impl SecurityCheck for TlsCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Tls
    }

    async fn probe(&self, caps: &Capabilities) -> Result<Verdict> {
        let Some(transport) = caps.transport() else {
            return Ok(Verdict::fail(CheckDetail::Tls {
                has_hsts: false,
                has_secure_cookies: false,
                has_valid_certificate: false,
            }));
        };

        let protocol = transport.protocol().await?;
        let secure_scheme =
            protocol.eq_ignore_ascii_case("https") || protocol.eq_ignore_ascii_case("wss");
        let has_hsts = transport.hsts_enabled().await?;
        let has_valid_certificate = transport
            .certificate()
            .await?
            .map(|cert| cert.valid)
            .unwrap_or(false);

        // Without document metadata the cookie posture is unknowable, which
        // counts against the verdict rather than for it.
        let has_secure_cookies = match caps.document() {
            Some(document) => document.cookies().await?.iter().all(|c| c.secure),
            None => false,
        };

        Ok(Verdict::from_outcome(
            secure_scheme && has_hsts && has_secure_cookies && has_valid_certificate,
            CheckDetail::Tls {
                has_hsts,
                has_secure_cookies,
                has_valid_certificate,
            },
        ))
    }
}
