//! Scripted capability providers
//!
//! Deterministic stand-ins for the platform capabilities: a fully secure
//! bundle, a crypto subsystem that fails a scripted number of times, and a
//! gated provider for exercising cancellation mid-probe.

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use tokio::sync::Semaphore;
use wallet_sentinel::{
    BiometricCapability, Capabilities, CertificateInfo, ComplianceCapability, ControlAttestation,
    CookieInfo, CryptoCapability, DeviceCapability, DocumentCapability, Result, ScreenInfo,
    SentinelError, StorageCapability, TransportCapability,
};

/// Crypto subsystem that fails its first `fail_first` calls per method
/// family, then behaves; `sleep_on` optionally makes one method hang far
/// beyond any probe budget.
pub struct FlakyCrypto {
    fail_first: u32,
    calls: AtomicU32,
    hang_random: bool,
}

impl FlakyCrypto {
    pub fn new(fail_first: u32) -> Self {
        Self {
            fail_first,
            calls: AtomicU32::new(0),
            hang_random: false,
        }
    }

    pub fn working() -> Self {
        Self::new(0)
    }

    /// A subsystem whose `random_bytes` never answers within a probe budget.
    pub fn hanging_random() -> Self {
        Self {
            fail_first: 0,
            calls: AtomicU32::new(0),
            hang_random: true,
        }
    }

    fn trip(&self) -> Result<()> {
        if self.calls.fetch_add(1, Ordering::SeqCst) < self.fail_first {
            return Err(SentinelError::Capability(
                "crypto subsystem not yet ready".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl CryptoCapability for FlakyCrypto {
    async fn random_bytes(&self, len: usize) -> Result<Vec<u8>> {
        if self.hang_random {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
        self.trip()?;
        Ok((0..len).map(|i| (i as u8).wrapping_add(1)).collect())
    }

    async fn generate_key(&self) -> Result<String> {
        self.trip()?;
        Ok("test-key".to_string())
    }

    async fn sign(&self, _key_handle: &str, data: &[u8]) -> Result<Vec<u8>> {
        self.trip()?;
        Ok(data.iter().rev().copied().collect())
    }

    async fn verify(&self, _key_handle: &str, _data: &[u8], _signature: &[u8]) -> Result<bool> {
        self.trip()?;
        Ok(true)
    }

    async fn digest(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.trip()?;
        Ok(data.iter().map(|b| b.wrapping_mul(31)).collect())
    }

    async fn hardware_modules(&self) -> Result<Vec<String>> {
        self.trip()?;
        Ok(vec!["tpm2".to_string()])
    }

    async fn proof_system(&self) -> Result<Option<String>> {
        self.trip()?;
        Ok(Some("groth16".to_string()))
    }
}

/// Crypto subsystem whose `hardware_modules` call signals entry and then
/// waits for an explicit release, so a test can act while the probe is in
/// flight.
pub struct GatedCrypto {
    pub entered: Arc<Semaphore>,
    pub release: Arc<Semaphore>,
}

impl GatedCrypto {
    pub fn new() -> Self {
        Self {
            entered: Arc::new(Semaphore::new(0)),
            release: Arc::new(Semaphore::new(0)),
        }
    }
}

#[async_trait]
impl CryptoCapability for GatedCrypto {
    async fn random_bytes(&self, len: usize) -> Result<Vec<u8>> {
        Ok(vec![7; len])
    }

    async fn generate_key(&self) -> Result<String> {
        Ok("gated-key".to_string())
    }

    async fn sign(&self, _key_handle: &str, _data: &[u8]) -> Result<Vec<u8>> {
        Ok(vec![1])
    }

    async fn verify(&self, _key_handle: &str, _data: &[u8], _signature: &[u8]) -> Result<bool> {
        Ok(true)
    }

    async fn digest(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(data.to_vec())
    }

    async fn hardware_modules(&self) -> Result<Vec<String>> {
        self.entered.add_permits(1);
        self.release.acquire().await.unwrap().forget();
        Ok(vec!["tpm2".to_string()])
    }

    async fn proof_system(&self) -> Result<Option<String>> {
        Ok(Some("groth16".to_string()))
    }
}

/// Biometric provider with sensor and platform authenticator present.
pub struct WorkingBiometric;

#[async_trait]
impl BiometricCapability for WorkingBiometric {
    async fn is_available(&self) -> Result<bool> {
        Ok(true)
    }

    async fn has_platform_authenticator(&self) -> Result<bool> {
        Ok(true)
    }
}

/// Device metadata provider exposing every source.
pub struct WorkingDevice;

#[async_trait]
impl DeviceCapability for WorkingDevice {
    async fn user_agent(&self) -> Result<Option<String>> {
        Ok(Some("Mozilla/5.0 (test)".to_string()))
    }

    async fn screen(&self) -> Result<Option<ScreenInfo>> {
        Ok(Some(ScreenInfo {
            width: 2560,
            height: 1440,
            color_depth: 24,
        }))
    }

    async fn hardware_concurrency(&self) -> Result<Option<u32>> {
        Ok(Some(8))
    }
}

/// Storage provider with both stores reachable and isolated.
pub struct WorkingStorage;

#[async_trait]
impl StorageCapability for WorkingStorage {
    async fn local_available(&self) -> Result<bool> {
        Ok(true)
    }

    async fn session_available(&self) -> Result<bool> {
        Ok(true)
    }

    async fn is_isolated(&self) -> Result<bool> {
        Ok(true)
    }
}

/// Compliance provider with everything attested.
pub struct WorkingCompliance;

#[async_trait]
impl ComplianceCapability for WorkingCompliance {
    async fn consent_recorded(&self) -> Result<bool> {
        Ok(true)
    }

    async fn retention_policy_defined(&self) -> Result<bool> {
        Ok(true)
    }

    async fn data_minimization_enabled(&self) -> Result<bool> {
        Ok(true)
    }

    async fn attested_controls(&self) -> Result<ControlAttestation> {
        Ok(ControlAttestation {
            attested: 12,
            total: 12,
        })
    }
}

/// Document with strict CSP, protective headers, hardened cookies, guarded
/// inputs, and only https script origins.
pub struct CleanDocument;

#[async_trait]
impl DocumentCapability for CleanDocument {
    async fn response_header(&self, name: &str) -> Result<Option<String>> {
        let value = match name.to_ascii_lowercase().as_str() {
            "x-frame-options" => "DENY",
            "x-content-type-options" => "nosniff",
            "referrer-policy" => "no-referrer",
            _ => return Ok(None),
        };
        Ok(Some(value.to_string()))
    }

    async fn csp_policy(&self) -> Result<Option<String>> {
        Ok(Some(
            "default-src 'self'; script-src 'self'; object-src 'none'".to_string(),
        ))
    }

    async fn cookies(&self) -> Result<Vec<CookieInfo>> {
        Ok(vec![CookieInfo {
            name: "session".to_string(),
            secure: true,
            http_only: true,
        }])
    }

    async fn input_count(&self) -> Result<u32> {
        Ok(2)
    }

    async fn guarded_input_count(&self) -> Result<u32> {
        Ok(2)
    }

    async fn foreign_script_origins(&self) -> Result<Vec<String>> {
        Ok(vec!["https://cdn.example.com".to_string()])
    }
}

/// Transport over https with HSTS and a valid, pinned certificate.
pub struct SecureTransport;

#[async_trait]
impl TransportCapability for SecureTransport {
    async fn protocol(&self) -> Result<String> {
        Ok("https".to_string())
    }

    async fn hsts_enabled(&self) -> Result<bool> {
        Ok(true)
    }

    async fn certificate(&self) -> Result<Option<CertificateInfo>> {
        Ok(Some(CertificateInfo {
            valid: true,
            pinned: true,
            pin_count: 2,
        }))
    }
}

/// A clean document provider.
pub fn clean_document() -> Arc<CleanDocument> {
    Arc::new(CleanDocument)
}

/// A secure transport provider.
pub fn secure_transport() -> Arc<SecureTransport> {
    Arc::new(SecureTransport)
}

/// A bundle on which every check passes.
pub fn secure_capabilities() -> Capabilities {
    Capabilities::new()
        .with_crypto(Arc::new(FlakyCrypto::working()))
        .with_biometric(Arc::new(WorkingBiometric))
        .with_device(Arc::new(WorkingDevice))
        .with_storage(Arc::new(WorkingStorage))
        .with_document(clean_document())
        .with_transport(secure_transport())
        .with_compliance(Arc::new(WorkingCompliance))
}
