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

//! Detection of the plugin's calling convention.

use crate::{provider::CadesPlugin, Error, Result};

/// Calling convention used to drive the plugin.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    /// Objects are created with `CreateObject` and used directly.
    Sync,

    /// Objects are created with `CreateObjectAsync` and every call is awaited.
    Async,
}

impl Mode {
    /// Decides which convention to use from the capabilities `plugin` exposes.
    ///
    /// Promise-based creation is used whenever the plugin exposes it.
    pub fn detect(plugin: &dyn CadesPlugin) -> Result<Self> {
        if plugin.async_provider().is_some() {
            Ok(Self::Async)
        } else if plugin.provider().is_some() {
            Ok(Self::Sync)
        } else {
            Err(Error::ProviderUnavailable)
        }
    }
}
