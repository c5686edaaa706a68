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

//! Listing of the certificates held in the user's store.

use async_generic::async_generic;
use chrono::{DateTime, Utc};
use log::{debug, error};
use serde::Serialize;

use crate::{
    log_item,
    normalize::{parse_distinguished_name, resolve, resolve_async, DistinguishedName},
    provider::{
        AsyncCertificates, AsyncProvider, AsyncStore, CadesPlugin, Certificates, Provider,
        ProviderResult, Store,
    },
    settings::StoreSettings,
    status_tracker::StatusTracker,
    store::{finish, translate},
    Error, Result,
};

/// A certificate as listed from the store.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CertificateInfo {
    /// Issuer distinguished name.
    pub issuer_name: DistinguishedName,

    /// Serial number in hex.
    pub serial_number: String,

    /// Subject distinguished name.
    pub subject_name: DistinguishedName,

    /// SHA-1 thumbprint in hex. Pass this to the signing operations.
    pub thumbprint: String,

    /// The private key bound to the certificate, if any.
    pub private_key: Option<PrivateKeyInfo>,

    /// Start of the validity window.
    pub valid_from_date: DateTime<Utc>,

    /// End of the validity window.
    pub valid_to_date: DateTime<Utc>,

    /// Result of the plugin's chain validation.
    pub is_valid: bool,

    /// X.509 version.
    pub version: u32,
}

/// Describes where the plugin keeps a certificate's private key.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct PrivateKeyInfo {
    /// Key container name.
    pub container_name: String,

    /// Cryptographic service provider name.
    pub provider_name: String,

    /// Unique key container name.
    pub unique_container_name: String,
}

/// Opens the store, lists its certificates and closes it again.
///
/// Certificates whose fields cannot be read are reported to `tracker` and
/// left out of the result (see [`enumerate_certificates`]).
#[async_generic(async_signature(
    plugin: &dyn CadesPlugin,
    provider: &dyn AsyncProvider,
    settings: &StoreSettings,
    tracker: &mut StatusTracker
))]
pub fn list_certificates(
    plugin: &dyn CadesPlugin,
    provider: &dyn Provider,
    settings: &StoreSettings,
    tracker: &mut StatusTracker,
) -> Result<Vec<CertificateInfo>> {
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
        store.open(settings)
    } else {
        store.open(settings).await
    };
    opened.map_err(translate(plugin, Error::StoreOpenFailed))?;

    let listed = if _sync {
        list_open_store(plugin, store.as_ref(), tracker)
    } else {
        list_open_store_async(plugin, store.as_ref(), tracker).await
    };

    let closed = if _sync {
        store.close()
    } else {
        store.close().await
    };

    finish(plugin, listed, closed)
}

#[async_generic(async_signature(
    plugin: &dyn CadesPlugin,
    store: &dyn AsyncStore,
    tracker: &mut StatusTracker
))]
fn list_open_store(
    plugin: &dyn CadesPlugin,
    store: &dyn Store,
    tracker: &mut StatusTracker,
) -> Result<Vec<CertificateInfo>> {
    let certificates = if _sync {
        store
            .certificates()
            .map_err(translate(plugin, Error::Provider))?
    } else {
        store
            .certificates()
            .await
            .map_err(translate(plugin, Error::Provider))?
    };

    if _sync {
        enumerate_certificates(plugin, certificates.as_ref(), tracker)
    } else {
        enumerate_certificates_async(plugin, certificates.as_ref(), tracker).await
    }
}

/// Reads every certificate of a 1-indexed collection.
///
/// A certificate whose fields cannot be read is logged, recorded in `tracker`
/// and skipped. If `tracker` stops on the first error, the listing fails with
/// [`Error::CertificateUnreadable`] instead.
#[async_generic(async_signature(
    plugin: &dyn CadesPlugin,
    collection: &dyn AsyncCertificates,
    tracker: &mut StatusTracker
))]
pub fn enumerate_certificates(
    plugin: &dyn CadesPlugin,
    collection: &dyn Certificates,
    tracker: &mut StatusTracker,
) -> Result<Vec<CertificateInfo>> {
    let count = if _sync {
        collection.count()
    } else {
        collection.count().await
    };
    let count = count.map_err(translate(plugin, Error::Provider))?;
    debug!("store holds {count} certificate(s)");

    let mut certificates = Vec::with_capacity(count);

    for index in 1..=count {
        let extracted = if _sync {
            certificate_info(collection, index)
        } else {
            certificate_info_async(collection, index).await
        };

        match extracted {
            Ok(info) => certificates.push(info),
            Err(err) => {
                let reason = plugin.last_error(&err);
                error!("skipping certificate {index}: {reason}");

                log_item!(
                    format!("certificate[{index}]"),
                    "certificate fields could not be read",
                    "enumerate_certificates"
                )
                .failure(tracker, reason)
                .map_err(|reason| Error::CertificateUnreadable { index, reason })?;
            }
        }
    }

    Ok(certificates)
}

#[async_generic(async_signature(collection: &dyn AsyncCertificates, index: usize))]
fn certificate_info(collection: &dyn Certificates, index: usize) -> ProviderResult<CertificateInfo> {
    let certificate = if _sync {
        collection.item(index)?
    } else {
        collection.item(index).await?
    };

    let status = if _sync {
        resolve(certificate.is_valid())?
    } else {
        resolve_async(certificate.is_valid()).await?
    };

    let issuer_name = if _sync {
        resolve(certificate.issuer_name())?
    } else {
        resolve_async(certificate.issuer_name()).await?
    };

    let serial_number = if _sync {
        resolve(certificate.serial_number())?
    } else {
        resolve_async(certificate.serial_number()).await?
    };

    let subject_name = if _sync {
        resolve(certificate.subject_name())?
    } else {
        resolve_async(certificate.subject_name()).await?
    };

    let thumbprint = if _sync {
        resolve(certificate.thumbprint())?
    } else {
        resolve_async(certificate.thumbprint()).await?
    };

    let private_key = if _sync {
        resolve(certificate.private_key())?
    } else {
        resolve_async(certificate.private_key()).await?
    };

    let valid_from_date = if _sync {
        resolve(certificate.valid_from_date())?
    } else {
        resolve_async(certificate.valid_from_date()).await?
    };

    let valid_to_date = if _sync {
        resolve(certificate.valid_to_date())?
    } else {
        resolve_async(certificate.valid_to_date()).await?
    };

    let version = if _sync {
        resolve(certificate.version())?
    } else {
        resolve_async(certificate.version()).await?
    };

    Ok(CertificateInfo {
        issuer_name: parse_distinguished_name(&issuer_name),
        serial_number,
        subject_name: parse_distinguished_name(&subject_name),
        thumbprint,
        private_key,
        valid_from_date,
        valid_to_date,
        is_valid: status.result,
        version,
    })
}
