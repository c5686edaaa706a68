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

//! Steps shared by every operation that works inside an open store.

use log::{debug, warn};

use crate::{
    constants::FindType,
    provider::{
        AsyncCertificate, AsyncStore, CadesPlugin, Certificate, ProviderError, ProviderResult,
        Store,
    },
    Error, Result,
};

/// Returns a mapper that translates a plugin failure through
/// [`CadesPlugin::last_error`] and wraps it in `kind`.
pub(crate) fn translate(
    plugin: &dyn CadesPlugin,
    kind: fn(String) -> Error,
) -> impl Fn(ProviderError) -> Error + '_ {
    move |err| kind(plugin.last_error(&err))
}

/// Combines the outcome of the steps run inside the store with the outcome of
/// closing it.
///
/// A failure inside the store takes precedence over a failure to close it.
pub(crate) fn finish<T>(
    plugin: &dyn CadesPlugin,
    result: Result<T>,
    closed: ProviderResult<()>,
) -> Result<T> {
    match (result, closed) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(err)) => Err(Error::StoreCloseFailed(plugin.last_error(&err))),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(close_err)) => {
            warn!(
                "certificate store could not be closed: {}",
                plugin.last_error(&close_err)
            );
            Err(err)
        }
    }
}

fn not_found(thumbprint: &str, err: ProviderError) -> Error {
    debug!("no certificate with thumbprint {thumbprint}: {err}");
    Error::CertificateNotFound {
        thumbprint: thumbprint.to_owned(),
    }
}

/// Returns the first certificate in `store` whose SHA-1 thumbprint equals
/// `thumbprint`.
pub(crate) fn find_certificate(store: &dyn Store, thumbprint: &str) -> Result<Box<dyn Certificate>> {
    let matches = store
        .certificates()
        .and_then(|certificates| certificates.find(FindType::Sha1Hash, thumbprint))
        .map_err(|err| not_found(thumbprint, err))?;

    let count = matches.count().map_err(|err| not_found(thumbprint, err))?;
    if count == 0 {
        return Err(not_found(thumbprint, ProviderError::new("empty match set")));
    }

    matches.item(1).map_err(|err| not_found(thumbprint, err))
}

/// Asynchronous form of [`find_certificate`].
pub(crate) async fn find_certificate_async(
    store: &dyn AsyncStore,
    thumbprint: &str,
) -> Result<Box<dyn AsyncCertificate>> {
    let certificates = store
        .certificates()
        .await
        .map_err(|err| not_found(thumbprint, err))?;

    let matches = certificates
        .find(FindType::Sha1Hash, thumbprint)
        .await
        .map_err(|err| not_found(thumbprint, err))?;

    let count = matches
        .count()
        .await
        .map_err(|err| not_found(thumbprint, err))?;
    if count == 0 {
        return Err(not_found(thumbprint, ProviderError::new("empty match set")));
    }

    matches
        .item(1)
        .await
        .map_err(|err| not_found(thumbprint, err))
}
