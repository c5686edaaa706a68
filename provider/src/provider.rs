// Copyright 2025 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

//! The capability surface consumed from the CAdES plugin.
//!
//! The plugin offers the same object model through two calling conventions.
//! [`Provider`] and its object traits describe the direct convention, where
//! every property read and method call returns immediately. [`AsyncProvider`]
//! and the `Async*` object traits describe the promise-based convention, where
//! each of those calls has to be awaited.
//!
//! A [`CadesPlugin`] exposes whichever of the two is available.

use std::any::Any;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::{
    constants::{ContentEncoding, ExportEncoding, FindType, HashAlgorithm, SignatureType},
    enumerator::PrivateKeyInfo,
    maybe_send_sync::{MaybeSend, MaybeSync},
    settings::StoreSettings,
};

/// An error reported by the plugin.
///
/// The message is the plugin's own description of the failure.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("{message}")]
pub struct ProviderError {
    message: String,
}

impl ProviderError {
    /// Wraps a plugin failure message.
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the plugin failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type of plugin calls.
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// Result of `Certificate.IsValid()`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CertificateStatus {
    /// Whether the certificate chain validated.
    pub result: bool,
}

/// Entry point to the installed plugin.
pub trait CadesPlugin: MaybeSend + MaybeSync {
    /// Direct object creation (`CreateObject`), if the plugin supports it.
    fn provider(&self) -> Option<&dyn Provider>;

    /// Promise-based object creation (`CreateObjectAsync`), if the plugin
    /// supports it.
    fn async_provider(&self) -> Option<&dyn AsyncProvider>;

    /// Converts a plugin failure into the message the plugin intends users to
    /// see (`cadesplugin.getLastError`).
    fn last_error(&self, err: &ProviderError) -> String {
        err.message().to_owned()
    }
}

/// Creates plugin objects through the direct calling convention.
pub trait Provider {
    /// `CreateObject("CAPICOM.Store")`
    fn create_store(&self) -> ProviderResult<Box<dyn Store>>;

    /// `CreateObject("CAdESCOM.CPSigner")`
    fn create_signer(&self) -> ProviderResult<Box<dyn Signer>>;

    /// `CreateObject("CAdESCOM.CadesSignedData")`
    fn create_signed_data(&self) -> ProviderResult<Box<dyn SignedData>>;

    /// `CreateObject("CAdESCOM.HashedData")`
    fn create_hashed_data(&self) -> ProviderResult<Box<dyn HashedData>>;

    /// `CreateObject("CAdESCOM.RawSignature")`
    fn create_raw_signature(&self) -> ProviderResult<Box<dyn RawSignature>>;
}

/// A certificate store. Must be closed once it has been opened.
pub trait Store {
    /// Opens the store.
    fn open(&mut self, settings: &StoreSettings) -> ProviderResult<()>;

    /// Closes the store.
    fn close(&mut self) -> ProviderResult<()>;

    /// Returns the certificates held by the open store.
    fn certificates(&self) -> ProviderResult<Box<dyn Certificates>>;
}

/// A 1-indexed certificate collection.
pub trait Certificates {
    /// Number of certificates in the collection.
    fn count(&self) -> ProviderResult<usize>;

    /// Returns the certificate at `index`, starting at 1.
    fn item(&self, index: usize) -> ProviderResult<Box<dyn Certificate>>;

    /// Returns the subset of this collection matching `criteria`.
    fn find(&self, find_type: FindType, criteria: &str) -> ProviderResult<Box<dyn Certificates>>;
}

/// A certificate owned by the plugin.
pub trait Certificate {
    /// Issuer distinguished name as a `", "`-delimited string.
    fn issuer_name(&self) -> ProviderResult<String>;

    /// Subject distinguished name as a `", "`-delimited string.
    fn subject_name(&self) -> ProviderResult<String>;

    /// Serial number in hex.
    fn serial_number(&self) -> ProviderResult<String>;

    /// SHA-1 thumbprint in hex.
    fn thumbprint(&self) -> ProviderResult<String>;

    /// The associated private key, if any.
    fn private_key(&self) -> ProviderResult<Option<PrivateKeyInfo>>;

    /// Start of the validity window.
    fn valid_from_date(&self) -> ProviderResult<DateTime<Utc>>;

    /// End of the validity window.
    fn valid_to_date(&self) -> ProviderResult<DateTime<Utc>>;

    /// X.509 version.
    fn version(&self) -> ProviderResult<u32>;

    /// Runs the plugin's chain validation.
    fn is_valid(&self) -> ProviderResult<CertificateStatus>;

    /// Exports the certificate.
    fn export(&self, encoding: ExportEncoding) -> ProviderResult<String>;

    /// Allows a plugin binding to recover its own certificate type.
    fn as_any(&self) -> &dyn Any;
}

/// `CAdESCOM.CPSigner`
pub trait Signer {
    /// Binds the signing certificate.
    fn set_certificate(&mut self, certificate: &dyn Certificate) -> ProviderResult<()>;

    /// Allows a plugin binding to recover its own signer type.
    fn as_any(&self) -> &dyn Any;
}

/// `CAdESCOM.CadesSignedData`
pub trait SignedData {
    /// Sets how [`set_content`](Self::set_content) is interpreted.
    fn set_content_encoding(&mut self, encoding: ContentEncoding) -> ProviderResult<()>;

    /// Sets the content to be signed.
    fn set_content(&mut self, content: &str) -> ProviderResult<()>;

    /// Produces a CAdES signature and returns it base64-encoded.
    fn sign_cades(
        &self,
        signer: &dyn Signer,
        signature_type: SignatureType,
        detached: bool,
    ) -> ProviderResult<String>;
}

/// `CAdESCOM.HashedData`
pub trait HashedData {
    /// Sets the hash algorithm.
    fn set_algorithm(&mut self, algorithm: HashAlgorithm) -> ProviderResult<()>;

    /// Sets how data passed to [`hash`](Self::hash) is interpreted.
    fn set_data_encoding(&mut self, encoding: ContentEncoding) -> ProviderResult<()>;

    /// Feeds data into the hash.
    fn hash(&mut self, data: &str) -> ProviderResult<()>;

    /// Allows a plugin binding to recover its own hash type.
    fn as_any(&self) -> &dyn Any;
}

/// `CAdESCOM.RawSignature`
pub trait RawSignature {
    /// Signs a computed hash and returns the signature as hex, least
    /// significant byte first.
    fn sign_hash(
        &self,
        hash: &dyn HashedData,
        certificate: &dyn Certificate,
    ) -> ProviderResult<String>;
}

/// Creates plugin objects through the promise-based calling convention.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait AsyncProvider: MaybeSync {
    /// `CreateObjectAsync("CAPICOM.Store")`
    async fn create_store(&self) -> ProviderResult<Box<dyn AsyncStore>>;

    /// `CreateObjectAsync("CAdESCOM.CPSigner")`
    async fn create_signer(&self) -> ProviderResult<Box<dyn AsyncSigner>>;

    /// `CreateObjectAsync("CAdESCOM.CadesSignedData")`
    async fn create_signed_data(&self) -> ProviderResult<Box<dyn AsyncSignedData>>;

    /// `CreateObjectAsync("CAdESCOM.HashedData")`
    async fn create_hashed_data(&self) -> ProviderResult<Box<dyn AsyncHashedData>>;

    /// `CreateObjectAsync("CAdESCOM.RawSignature")`
    async fn create_raw_signature(&self) -> ProviderResult<Box<dyn AsyncRawSignature>>;
}

/// Asynchronous form of [`Store`].
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait AsyncStore: MaybeSend + MaybeSync {
    /// Opens the store.
    async fn open(&mut self, settings: &StoreSettings) -> ProviderResult<()>;

    /// Closes the store.
    async fn close(&mut self) -> ProviderResult<()>;

    /// Returns the certificates held by the open store.
    async fn certificates(&self) -> ProviderResult<Box<dyn AsyncCertificates>>;
}

/// Asynchronous form of [`Certificates`].
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait AsyncCertificates: MaybeSend + MaybeSync {
    /// Number of certificates in the collection.
    async fn count(&self) -> ProviderResult<usize>;

    /// Returns the certificate at `index`, starting at 1.
    async fn item(&self, index: usize) -> ProviderResult<Box<dyn AsyncCertificate>>;

    /// Returns the subset of this collection matching `criteria`.
    async fn find(
        &self,
        find_type: FindType,
        criteria: &str,
    ) -> ProviderResult<Box<dyn AsyncCertificates>>;
}

/// Asynchronous form of [`Certificate`].
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait AsyncCertificate: MaybeSend + MaybeSync {
    /// Issuer distinguished name as a `", "`-delimited string.
    async fn issuer_name(&self) -> ProviderResult<String>;

    /// Subject distinguished name as a `", "`-delimited string.
    async fn subject_name(&self) -> ProviderResult<String>;

    /// Serial number in hex.
    async fn serial_number(&self) -> ProviderResult<String>;

    /// SHA-1 thumbprint in hex.
    async fn thumbprint(&self) -> ProviderResult<String>;

    /// The associated private key, if any.
    async fn private_key(&self) -> ProviderResult<Option<PrivateKeyInfo>>;

    /// Start of the validity window.
    async fn valid_from_date(&self) -> ProviderResult<DateTime<Utc>>;

    /// End of the validity window.
    async fn valid_to_date(&self) -> ProviderResult<DateTime<Utc>>;

    /// X.509 version.
    async fn version(&self) -> ProviderResult<u32>;

    /// Runs the plugin's chain validation.
    async fn is_valid(&self) -> ProviderResult<CertificateStatus>;

    /// Exports the certificate.
    async fn export(&self, encoding: ExportEncoding) -> ProviderResult<String>;

    /// Allows a plugin binding to recover its own certificate type.
    fn as_any(&self) -> &dyn Any;
}

/// Asynchronous form of [`Signer`].
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait AsyncSigner: MaybeSend + MaybeSync {
    /// Binds the signing certificate (`propset_Certificate`).
    async fn set_certificate(&mut self, certificate: &dyn AsyncCertificate)
        -> ProviderResult<()>;

    /// Allows a plugin binding to recover its own signer type.
    fn as_any(&self) -> &dyn Any;
}

/// Asynchronous form of [`SignedData`].
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait AsyncSignedData: MaybeSend + MaybeSync {
    /// Sets how [`set_content`](Self::set_content) is interpreted.
    async fn set_content_encoding(&mut self, encoding: ContentEncoding) -> ProviderResult<()>;

    /// Sets the content to be signed.
    async fn set_content(&mut self, content: &str) -> ProviderResult<()>;

    /// Produces a CAdES signature and returns it base64-encoded.
    async fn sign_cades(
        &self,
        signer: &dyn AsyncSigner,
        signature_type: SignatureType,
        detached: bool,
    ) -> ProviderResult<String>;
}

/// Asynchronous form of [`HashedData`].
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait AsyncHashedData: MaybeSend + MaybeSync {
    /// Sets the hash algorithm.
    async fn set_algorithm(&mut self, algorithm: HashAlgorithm) -> ProviderResult<()>;

    /// Sets how data passed to [`hash`](Self::hash) is interpreted.
    async fn set_data_encoding(&mut self, encoding: ContentEncoding) -> ProviderResult<()>;

    /// Feeds data into the hash.
    async fn hash(&mut self, data: &str) -> ProviderResult<()>;

    /// Allows a plugin binding to recover its own hash type.
    fn as_any(&self) -> &dyn Any;
}

/// Asynchronous form of [`RawSignature`].
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait AsyncRawSignature: MaybeSend + MaybeSync {
    /// Signs a computed hash and returns the signature as hex, least
    /// significant byte first.
    async fn sign_hash(
        &self,
        hash: &dyn AsyncHashedData,
        certificate: &dyn AsyncCertificate,
    ) -> ProviderResult<String>;
}
