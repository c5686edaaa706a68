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

//! Pieces of a detached signature for envelopes built by the caller.
//!
//! XML-DSig style envelopes are assembled outside this crate: the caller
//! inserts the signature value and the signing certificate into a prepared
//! template. Instead of a complete CAdES envelope, this module therefore
//! returns the raw signature over a hash of the content together with the
//! exported certificate.

use async_generic::async_generic;
use log::debug;
use serde::Serialize;

use crate::{
    codec::hex_to_base64,
    provider::{AsyncHashedData, AsyncProvider, AsyncStore, CadesPlugin, HashedData, Provider, Store},
    settings::{HashingSettings, Settings},
    store::{find_certificate, find_certificate_async, finish, translate},
    Error, Result,
};

/// Signature value and signing certificate for a detached signature.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DetachedSignature {
    /// Raw signature over the content's hash, base64-encoded, most significant
    /// byte first.
    pub signature_value: String,

    /// The signing certificate as exported by the plugin.
    pub x509certificate: String,
}

/// Hashes base64 `content`, signs the hash with the certificate whose SHA-1
/// thumbprint is `thumbprint` and returns the signature value together with
/// the exported certificate.
///
/// ## Actions taken
///
/// 1. Hashes the content with the configured algorithm (GOST R 34.11-94 by
///    default). Fails with [`Error::HashingFailed`].
/// 2. Opens the certificate store. Fails with [`Error::StoreOpenFailed`].
/// 3. Looks up the certificate. Fails with [`Error::CertificateNotFound`].
/// 4. Exports the certificate. Fails with [`Error::ExportFailed`].
/// 5. Signs the hash. Fails with [`Error::SigningFailed`].
/// 6. Closes the store, whatever the outcome of steps 3 to 5.
/// 7. Converts the signature from the plugin's byte order into base64.
#[async_generic(async_signature(
    plugin: &dyn CadesPlugin,
    provider: &dyn AsyncProvider,
    settings: &Settings,
    thumbprint: &str,
    content: &str
))]
pub fn params_for_detached_signature(
    plugin: &dyn CadesPlugin,
    provider: &dyn Provider,
    settings: &Settings,
    thumbprint: &str,
    content: &str,
) -> Result<DetachedSignature> {
    debug!("computing detached signature value with certificate {thumbprint}");

    let hashing_failed = translate(plugin, Error::HashingFailed);
    let hashing = &settings.hashing;

    let mut hashed_data = if _sync {
        provider.create_hashed_data().map_err(&hashing_failed)?
    } else {
        provider
            .create_hashed_data()
            .await
            .map_err(&hashing_failed)?
    };

    let configured = if _sync {
        hashed_data.set_algorithm(hashing.algorithm)
    } else {
        hashed_data.set_algorithm(hashing.algorithm).await
    };
    configured.map_err(&hashing_failed)?;

    let encoded = if _sync {
        hashed_data.set_data_encoding(hashing.data_encoding)
    } else {
        hashed_data.set_data_encoding(hashing.data_encoding).await
    };
    encoded.map_err(&hashing_failed)?;

    let hashed = if _sync {
        hashed_data.hash(content)
    } else {
        hashed_data.hash(content).await
    };
    hashed.map_err(&hashing_failed)?;

    let mut store = if _sync {
        provider
            .create_store()
            .map_err(translate(plugin, Error::StoreOpenFailed))?
    } else {
        provider
            .create_store()
            .await
            .map_err(translate(plugin, Error::StoreOpenFailed))?
    };

    let opened = if _sync {
        store.open(&settings.store)
    } else {
        store.open(&settings.store).await
    };
    opened.map_err(translate(plugin, Error::StoreOpenFailed))?;

    let signed = if _sync {
        sign_hash_in_store(
            plugin,
            provider,
            store.as_ref(),
            hashing,
            hashed_data.as_ref(),
            thumbprint,
        )
    } else {
        sign_hash_in_store_async(
            plugin,
            provider,
            store.as_ref(),
            hashing,
            hashed_data.as_ref(),
            thumbprint,
        )
        .await
    };

    let closed = if _sync {
        store.close()
    } else {
        store.close().await
    };

    let (x509certificate, signature_hex) = finish(plugin, signed, closed)?;

    Ok(DetachedSignature {
        signature_value: hex_to_base64(&signature_hex)?,
        x509certificate,
    })
}

/// Returns the exported certificate and the hex signature over `hash`.
#[async_generic(async_signature(
    plugin: &dyn CadesPlugin,
    provider: &dyn AsyncProvider,
    store: &dyn AsyncStore,
    settings: &HashingSettings,
    hash: &dyn AsyncHashedData,
    thumbprint: &str
))]
fn sign_hash_in_store(
    plugin: &dyn CadesPlugin,
    provider: &dyn Provider,
    store: &dyn Store,
    settings: &HashingSettings,
    hash: &dyn HashedData,
    thumbprint: &str,
) -> Result<(String, String)> {
    let certificate = if _sync {
        find_certificate(store, thumbprint)?
    } else {
        find_certificate_async(store, thumbprint).await?
    };

    let exported = if _sync {
        certificate.export(settings.export_encoding)
    } else {
        certificate.export(settings.export_encoding).await
    };
    let x509certificate = exported.map_err(translate(plugin, Error::ExportFailed))?;

    let signing_failed = translate(plugin, Error::SigningFailed);

    let raw_signature = if _sync {
        provider.create_raw_signature().map_err(&signing_failed)?
    } else {
        provider
            .create_raw_signature()
            .await
            .map_err(&signing_failed)?
    };

    let signature_hex = if _sync {
        raw_signature.sign_hash(hash, certificate.as_ref())
    } else {
        raw_signature.sign_hash(hash, certificate.as_ref()).await
    };

    Ok((x509certificate, signature_hex.map_err(&signing_failed)?))
}
