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

//! Turns values read from the plugin into plain data.

use std::{collections::BTreeMap, future::Future, ops::Deref};

use serde::Serialize;

use crate::provider::ProviderResult;

/// Resolves a value read through the direct calling convention.
///
/// The value is already settled, so it is returned unchanged.
pub fn resolve<T>(value: ProviderResult<T>) -> ProviderResult<T> {
    value
}

/// Resolves a value read through the promise-based calling convention.
///
/// Suspends the caller until the plugin has settled the value.
pub async fn resolve_async<T, F>(value: F) -> ProviderResult<T>
where
    F: Future<Output = ProviderResult<T>>,
{
    value.await
}

/// A distinguished name split into its attributes, e.g. `CN` → `Smith`.
///
/// An attribute that appeared without `=` maps to `None`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DistinguishedName(BTreeMap<String, Option<String>>);

impl DistinguishedName {
    /// Returns the value of `attribute`, if present with a value.
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.0.get(attribute).and_then(|value| value.as_deref())
    }

    /// Consumes the name, returning the underlying map.
    pub fn into_inner(self) -> BTreeMap<String, Option<String>> {
        self.0
    }
}

impl Deref for DistinguishedName {
    type Target = BTreeMap<String, Option<String>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Parses a `", "`-delimited record such as `CN=Smith, O=Example`.
///
/// Each entry is split at its first `=`. Entries without `=` are kept with no
/// value. When an attribute repeats, the last occurrence wins.
///
/// Quoted values that themselves contain `", "` are split as well; the plugin
/// does not escape them.
pub fn parse_distinguished_name(record: &str) -> DistinguishedName {
    let mut attributes = BTreeMap::new();

    for entry in record.split(", ") {
        match entry.split_once('=') {
            Some((key, value)) => attributes.insert(key.to_owned(), Some(value.to_owned())),
            None => attributes.insert(entry.to_owned(), None),
        };
    }

    DistinguishedName(attributes)
}
