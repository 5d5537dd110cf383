//! Cryptographic subsystem capability

use crate::utils::error::Result;
use async_trait::async_trait;

/// Access to the platform cryptographic subsystem
///
/// Covers the primitives the crypto, HSM, ZKP, and fingerprint checks
/// consult. Implementations wrap whatever the platform exposes; the scanner
/// never performs cryptography itself.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CryptoCapability: Send + Sync {
    /// Generate `len` random bytes.
    async fn random_bytes(&self, len: usize) -> Result<Vec<u8>>;

    /// Generate a fresh key and return an opaque handle to it.
    async fn generate_key(&self) -> Result<String>;

    /// Sign `data` with the key behind `key_handle`.
    async fn sign(&self, key_handle: &str, data: &[u8]) -> Result<Vec<u8>>;

    /// Verify `signature` over `data` with the key behind `key_handle`.
    async fn verify(&self, key_handle: &str, data: &[u8], signature: &[u8]) -> Result<bool>;

    /// Compute a digest over `data`.
    async fn digest(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Names of the reachable hardware-backed modules, empty when none.
    async fn hardware_modules(&self) -> Result<Vec<String>>;

    /// Name of the available zero-knowledge proof system, if any.
    async fn proof_system(&self) -> Result<Option<String>>;
}
