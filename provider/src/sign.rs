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

//! CAdES signing with a certificate from the user's store.

use async_generic::async_generic;
use log::debug;

use crate::{
    provider::{AsyncProvider, AsyncStore, CadesPlugin, Provider, Store},
    settings::{Settings, SigningSettings},
    store::{find_certificate, find_certificate_async, finish, translate},
    Error, Result,
};

/// Signs base64 `content` with the certificate whose SHA-1 thumbprint is
/// `thumbprint` and returns the base64 CAdES signature.
///
/// With the default settings the result is a detached CAdES-BES signature, so
/// it does not embed the content.
///
/// ## Actions taken
///
/// 1. Opens the certificate store. Fails with [`Error::StoreOpenFailed`].
/// 2. Looks up the certificate. Fails with [`Error::CertificateNotFound`]
///    without creating any signing objects.
/// 3. Binds the certificate to a signer, loads the content and signs it. Fails
///    with [`Error::SigningFailed`].
/// 4. Closes the store, whatever the outcome of the previous steps.
#[async_generic(async_signature(
    plugin: &dyn CadesPlugin,
    provider: &dyn AsyncProvider,
    settings: &Settings,
    thumbprint: &str,
    content: &str
))]
pub fn sign(
    plugin: &dyn CadesPlugin,
    provider: &dyn Provider,
    settings: &Settings,
    thumbprint: &str,
    content: &str,
) -> Result<String> {
    debug!("signing with certificate {thumbprint}");

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
        sign_in_store(
            plugin,
            provider,
            store.as_ref(),
            &settings.signing,
            thumbprint,
            content,
        )
    } else {
        sign_in_store_async(
            plugin,
            provider,
            store.as_ref(),
            &settings.signing,
            thumbprint,
            content,
        )
        .await
    };

    let closed = if _sync {
        store.close()
    } else {
        store.close().await
    };

    finish(plugin, signed, closed)
}

#[async_generic(async_signature(
    plugin: &dyn CadesPlugin,
    provider: &dyn AsyncProvider,
    store: &dyn AsyncStore,
    settings: &SigningSettings,
    thumbprint: &str,
    content: &str
))]
fn sign_in_store(
    plugin: &dyn CadesPlugin,
    provider: &dyn Provider,
    store: &dyn Store,
    settings: &SigningSettings,
    thumbprint: &str,
    content: &str,
) -> Result<String> {
    let certificate = if _sync {
        find_certificate(store, thumbprint)?
    } else {
        find_certificate_async(store, thumbprint).await?
    };

    let signing_failed = translate(plugin, Error::SigningFailed);

    let mut signer = if _sync {
        provider.create_signer().map_err(&signing_failed)?
    } else {
        provider.create_signer().await.map_err(&signing_failed)?
    };

    let bound = if _sync {
        signer.set_certificate(certificate.as_ref())
    } else {
        signer.set_certificate(certificate.as_ref()).await
    };
    bound.map_err(&signing_failed)?;

    let mut signed_data = if _sync {
        provider.create_signed_data().map_err(&signing_failed)?
    } else {
        provider
            .create_signed_data()
            .await
            .map_err(&signing_failed)?
    };

    // Encoding has to be set before the content for the plugin to decode it.
    let encoded = if _sync {
        signed_data.set_content_encoding(settings.content_encoding)
    } else {
        signed_data
            .set_content_encoding(settings.content_encoding)
            .await
    };
    encoded.map_err(&signing_failed)?;

    let loaded = if _sync {
        signed_data.set_content(content)
    } else {
        signed_data.set_content(content).await
    };
    loaded.map_err(&signing_failed)?;

    let signature = if _sync {
        signed_data.sign_cades(signer.as_ref(), settings.signature_type, settings.detached)
    } else {
        signed_data
            .sign_cades(signer.as_ref(), settings.signature_type, settings.detached)
            .await
    };

    signature.map_err(&signing_failed)
}
