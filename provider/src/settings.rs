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

//! Settings that shape the calls made against the plugin.
//!
//! The defaults reproduce what qualified-signature portals expect: the
//! current user's personal store, a detached CAdES-BES signature over
//! base64-decoded content and a GOST R 34.11-94 hash for detached signature
//! values. Any of these can be overridden from TOML or JSON.

use config::{Config, FileFormat};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        ContentEncoding, ExportEncoding, HashAlgorithm, SignatureType, StoreLocation,
        StoreOpenMode, DEFAULT_STORE_NAME,
    },
    Error, Result,
};

const VERSION: u32 = 1;

/// Which certificate store is opened and how.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct StoreSettings {
    /// Store location.
    pub location: StoreLocation,

    /// Store name, e.g. `My`.
    pub name: String,

    /// Access mode.
    pub open_mode: StoreOpenMode,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            location: StoreLocation::CurrentUser,
            name: DEFAULT_STORE_NAME.to_owned(),
            open_mode: StoreOpenMode::MaximumAllowed,
        }
    }
}

/// Parameters of `SignCades`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SigningSettings {
    /// Signature type.
    pub signature_type: SignatureType,

    /// Whether the signature omits the signed content.
    pub detached: bool,

    /// Encoding of the content passed in by callers.
    pub content_encoding: ContentEncoding,
}

impl Default for SigningSettings {
    fn default() -> Self {
        Self {
            signature_type: SignatureType::CadesBes,
            detached: true,
            content_encoding: ContentEncoding::Base64ToBinary,
        }
    }
}

/// Parameters of the detached signature value computation.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct HashingSettings {
    /// Hash algorithm.
    pub algorithm: HashAlgorithm,

    /// Encoding of the content passed in by callers.
    pub data_encoding: ContentEncoding,

    /// Encoding of the exported signing certificate.
    pub export_encoding: ExportEncoding,
}

impl Default for HashingSettings {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::Gost3411,
            data_encoding: ContentEncoding::Base64ToBinary,
            export_encoding: ExportEncoding::Base64,
        }
    }
}

/// All settings.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Settings {
    /// Settings format version. Only `1` is understood.
    pub version: u32,

    /// Certificate store.
    pub store: StoreSettings,

    /// CAdES signing.
    pub signing: SigningSettings,

    /// Detached signature values.
    pub hashing: HashingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: VERSION,
            store: StoreSettings::default(),
            signing: SigningSettings::default(),
            hashing: HashingSettings::default(),
        }
    }
}

impl Settings {
    /// Parses settings from a JSON or TOML string, overlaying them on the
    /// defaults.
    ///
    /// `format` is `"json"` or `"toml"`, case-insensitive.
    pub fn from_string(settings_str: &str, format: &str) -> Result<Self> {
        Self::default().with_string(settings_str, format)
    }

    /// Overlays TOML settings on these settings.
    pub fn with_toml(self, toml: &str) -> Result<Self> {
        self.with_string(toml, "toml")
    }

    /// Overlays JSON settings on these settings.
    pub fn with_json(self, json: &str) -> Result<Self> {
        self.with_string(json, "json")
    }

    fn with_string(self, settings_str: &str, format: &str) -> Result<Self> {
        let file_format = match format.to_lowercase().as_str() {
            "json" => FileFormat::Json,
            "toml" => FileFormat::Toml,
            _ => return Err(Error::UnsupportedSettingsFormat(format.to_owned())),
        };

        let current = Config::try_from(&self)?;

        let settings: Settings = Config::builder()
            .add_source(current)
            .add_source(config::File::from_str(settings_str, file_format))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Checks that the settings can be used.
    pub fn validate(&self) -> Result<()> {
        if self.version != VERSION {
            return Err(Error::BadSettings(format!(
                "unsupported settings version {}",
                self.version
            )));
        }

        if self.store.name.is_empty() {
            return Err(Error::BadSettings("store name must not be empty".into()));
        }

        Ok(())
    }
}
