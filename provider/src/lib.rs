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

#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg, doc_cfg_hide))]

pub mod base64;

#[cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]
pub mod cadesplugin;

pub mod codec;
pub mod constants;
pub mod detached;
pub mod enumerator;

mod error;
pub use error::{Error, Result};

pub mod maybe_send_sync;
pub mod mode;
pub mod normalize;
pub mod provider;
pub mod settings;
pub mod sign;

mod store;

mod service;
pub use service::CadesService;

pub mod status_tracker;

pub use detached::DetachedSignature;
pub use enumerator::{CertificateInfo, PrivateKeyInfo};
pub use mode::Mode;
pub use normalize::DistinguishedName;
pub use provider::{AsyncProvider, CadesPlugin, Provider, ProviderError};
pub use settings::Settings;

#[cfg(test)]
pub(crate) mod tests;
