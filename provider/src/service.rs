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

use std::sync::Arc;

use log::debug;

use crate::{
    detached::{params_for_detached_signature, params_for_detached_signature_async},
    enumerator::{list_certificates, list_certificates_async},
    provider::{AsyncProvider, Provider},
    sign::{sign, sign_async},
    status_tracker::StatusTracker,
    CadesPlugin, CertificateInfo, DetachedSignature, Error, Mode, Result, Settings,
};

/// Signing operations bound to one plugin.
///
/// The calling convention is detected once, when the service is constructed,
/// and every operation uses it from then on. Callers never need to know which
/// convention the plugin offers.
///
/// ## Example
///
/// ```rust,ignore
/// let service = CadesService::new(plugin)?;
/// let certificates = service.certificates().await?;
/// let signature = service.sign(&certificates[0].thumbprint, "SGVsbG8=").await?;
/// ```
pub struct CadesService {
    plugin: Arc<dyn CadesPlugin>,
    settings: Settings,
    mode: Mode,
}

impl CadesService {
    /// Creates a service with default [`Settings`].
    ///
    /// Fails with [`Error::ProviderUnavailable`] if the plugin offers neither
    /// calling convention.
    pub fn new(plugin: Arc<dyn CadesPlugin>) -> Result<Self> {
        Self::with_settings(plugin, Settings::default())
    }

    /// Creates a service with the given [`Settings`].
    pub fn with_settings(plugin: Arc<dyn CadesPlugin>, settings: Settings) -> Result<Self> {
        settings.validate()?;

        let mode = Mode::detect(plugin.as_ref())?;
        debug!("CAdES plugin calling convention: {mode:?}");

        Ok(Self {
            plugin,
            settings,
            mode,
        })
    }

    /// The calling convention used by this service.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The settings used by this service.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Lists the certificates in the configured store.
    ///
    /// Certificates that cannot be read are logged and left out.
    pub async fn certificates(&self) -> Result<Vec<CertificateInfo>> {
        let mut tracker = StatusTracker::default();
        self.certificates_with_tracker(&mut tracker).await
    }

    /// Lists the certificates in the configured store, reporting certificates
    /// that cannot be read to `tracker`.
    pub async fn certificates_with_tracker(
        &self,
        tracker: &mut StatusTracker,
    ) -> Result<Vec<CertificateInfo>> {
        let plugin = self.plugin.as_ref();
        let store = &self.settings.store;

        match self.mode {
            Mode::Sync => list_certificates(plugin, self.provider()?, store, tracker),
            Mode::Async => {
                list_certificates_async(plugin, self.async_provider()?, store, tracker).await
            }
        }
    }

    /// Produces a CAdES signature over base64 `content` with the certificate
    /// whose SHA-1 thumbprint is `thumbprint`.
    ///
    /// See [`sign`](crate::sign::sign).
    pub async fn sign(&self, thumbprint: &str, content: &str) -> Result<String> {
        let plugin = self.plugin.as_ref();

        match self.mode {
            Mode::Sync => sign(plugin, self.provider()?, &self.settings, thumbprint, content),
            Mode::Async => {
                sign_async(
                    plugin,
                    self.async_provider()?,
                    &self.settings,
                    thumbprint,
                    content,
                )
                .await
            }
        }
    }

    /// Computes the signature value and exported certificate for a detached
    /// signature over base64 `content`.
    ///
    /// See [`params_for_detached_signature`](crate::detached::params_for_detached_signature).
    pub async fn params_for_detached_signature(
        &self,
        thumbprint: &str,
        content: &str,
    ) -> Result<DetachedSignature> {
        let plugin = self.plugin.as_ref();

        match self.mode {
            Mode::Sync => params_for_detached_signature(
                plugin,
                self.provider()?,
                &self.settings,
                thumbprint,
                content,
            ),
            Mode::Async => {
                params_for_detached_signature_async(
                    plugin,
                    self.async_provider()?,
                    &self.settings,
                    thumbprint,
                    content,
                )
                .await
            }
        }
    }

    fn provider(&self) -> Result<&dyn Provider> {
        self.plugin.provider().ok_or(Error::ProviderUnavailable)
    }

    fn async_provider(&self) -> Result<&dyn AsyncProvider> {
        self.plugin.async_provider().ok_or(Error::ProviderUnavailable)
    }
}
