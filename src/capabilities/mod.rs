//! Capability providers consumed by the security checks
//!
//! The scanner never implements a platform capability itself; it only calls
//! narrow, kind-specific provider traits supplied by the embedder. Every
//! provider is independently optional: an absent capability makes the checks
//! that need it report a failed verdict, never crash the run.

pub mod biometric;
pub mod compliance;
pub mod crypto;
pub mod device;
pub mod document;
pub mod storage;
pub mod transport;

pub use biometric::BiometricCapability;
pub use compliance::{ComplianceCapability, ControlAttestation};
pub use crypto::CryptoCapability;
pub use device::{DeviceCapability, ScreenInfo};
pub use document::{CookieInfo, DocumentCapability};
pub use storage::StorageCapability;
pub use transport::{CertificateInfo, TransportCapability};

use std::sync::Arc;

/// Bundle of the capability providers available to a scan
///
/// Defaults to nothing available; embedders attach whatever the platform
/// actually offers.
#[derive(Clone, Default)]
pub struct Capabilities {
    crypto: Option<Arc<dyn CryptoCapability>>,
    biometric: Option<Arc<dyn BiometricCapability>>,
    device: Option<Arc<dyn DeviceCapability>>,
    storage: Option<Arc<dyn StorageCapability>>,
    document: Option<Arc<dyn DocumentCapability>>,
    transport: Option<Arc<dyn TransportCapability>>,
    compliance: Option<Arc<dyn ComplianceCapability>>,
}

impl Capabilities {
    /// An empty bundle with no capabilities attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a cryptographic subsystem.
    pub fn with_crypto(mut self, provider: Arc<dyn CryptoCapability>) -> Self {
        self.crypto = Some(provider);
        self
    }

    /// Attach a biometric provider.
    pub fn with_biometric(mut self, provider: Arc<dyn BiometricCapability>) -> Self {
        self.biometric = Some(provider);
        self
    }

    /// Attach a device metadata provider.
    pub fn with_device(mut self, provider: Arc<dyn DeviceCapability>) -> Self {
        self.device = Some(provider);
        self
    }

    /// Attach a storage provider.
    pub fn with_storage(mut self, provider: Arc<dyn StorageCapability>) -> Self {
        self.storage = Some(provider);
        self
    }

    /// Attach a document/response metadata provider.
    pub fn with_document(mut self, provider: Arc<dyn DocumentCapability>) -> Self {
        self.document = Some(provider);
        self
    }

    /// Attach a transport metadata provider.
    pub fn with_transport(mut self, provider: Arc<dyn TransportCapability>) -> Self {
        self.transport = Some(provider);
        self
    }

    /// Attach a compliance attestation provider.
    pub fn with_compliance(mut self, provider: Arc<dyn ComplianceCapability>) -> Self {
        self.compliance = Some(provider);
        self
    }

    /// The cryptographic subsystem, if attached.
    pub fn crypto(&self) -> Option<&Arc<dyn CryptoCapability>> {
        self.crypto.as_ref()
    }

    /// The biometric provider, if attached.
    pub fn biometric(&self) -> Option<&Arc<dyn BiometricCapability>> {
        self.biometric.as_ref()
    }

    /// The device metadata provider, if attached.
    pub fn device(&self) -> Option<&Arc<dyn DeviceCapability>> {
        self.device.as_ref()
    }

    /// The storage provider, if attached.
    pub fn storage(&self) -> Option<&Arc<dyn StorageCapability>> {
        self.storage.as_ref()
    }

    /// The document/response metadata provider, if attached.
    pub fn document(&self) -> Option<&Arc<dyn DocumentCapability>> {
        self.document.as_ref()
    }

    /// The transport metadata provider, if attached.
    pub fn transport(&self) -> Option<&Arc<dyn TransportCapability>> {
        self.transport.as_ref()
    }

    /// The compliance attestation provider, if attached.
    pub fn compliance(&self) -> Option<&Arc<dyn ComplianceCapability>> {
        self.compliance.as_ref()
    }
}

impl std::fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Capabilities")
            .field("crypto", &self.crypto.is_some())
            .field("biometric", &self.biometric.is_some())
            .field("device", &self.device.is_some())
            .field("storage", &self.storage.is_some())
            .field("document", &self.document.is_some())
            .field("transport", &self.transport.is_some())
            .field("compliance", &self.compliance.is_some())
            .finish()
    }
}
