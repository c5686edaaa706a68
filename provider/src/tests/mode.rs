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

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::wasm_bindgen_test;

use super::fake_provider::FakePlugin;
use crate::{Error, Mode};

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn direct_only() {
    assert_eq!(Mode::detect(&FakePlugin::new(vec![])), Ok(Mode::Sync));
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn promises_preferred() {
    let plugin = FakePlugin::new(vec![]).with_promises();
    assert_eq!(Mode::detect(&plugin), Ok(Mode::Async));
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn promises_only() {
    let plugin = FakePlugin::new(vec![]).promises_only();
    assert_eq!(Mode::detect(&plugin), Ok(Mode::Async));
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn neither() {
    let plugin = FakePlugin::new(vec![]).without_any_creation();
    assert_eq!(Mode::detect(&plugin), Err(Error::ProviderUnavailable));
}
