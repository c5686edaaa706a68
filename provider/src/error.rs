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

use thiserror::Error;

/// `Error` enumerates errors returned by the signing and listing operations.
///
/// Messages that originate from the plugin are carried verbatim, as produced by
/// [`CadesPlugin::last_error`](crate::CadesPlugin::last_error).
#[derive(Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Neither direct nor asynchronous object creation is available.
    #[error("the CAdES browser plugin is not available")]
    ProviderUnavailable,

    /// The certificate store could not be created or opened.
    #[error("{0}")]
    StoreOpenFailed(String),

    /// The certificate store could not be closed after a successful operation.
    #[error("{0}")]
    StoreCloseFailed(String),

    /// No certificate in the store matches the requested thumbprint.
    #[error("Сертификат не найден: {thumbprint}")]
    CertificateNotFound {
        /// SHA-1 thumbprint that was looked up.
        thumbprint: String,
    },

    /// The signer could not be bound or the signature could not be produced.
    #[error("{0}")]
    SigningFailed(String),

    /// The content could not be hashed.
    #[error("{0}")]
    HashingFailed(String),

    /// The signing certificate could not be exported.
    #[error("{0}")]
    ExportFailed(String),

    /// Any other plugin call failed.
    #[error("{0}")]
    Provider(String),

    /// A certificate's fields could not be read while listing the store and
    /// the status tracker was configured to stop on the first error.
    #[error("certificate {index} could not be read: {reason}")]
    CertificateUnreadable {
        /// 1-based position of the certificate in the store.
        index: usize,

        /// Translated plugin message.
        reason: String,
    },

    /// The raw signature returned by the plugin is not a hex string.
    #[error("signature value is not valid hex: {0}")]
    InvalidSignatureValue(String),

    /// Settings could not be parsed or failed validation.
    #[error("bad settings: {0}")]
    BadSettings(String),

    /// Settings were supplied in a format other than JSON or TOML.
    #[error("unsupported settings format: {0}")]
    UnsupportedSettingsFormat(String),
}

/// A specialized `Result` type for signing operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::BadSettings(err.to_string())
    }
}
