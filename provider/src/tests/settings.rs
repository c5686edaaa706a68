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

use crate::{
    constants::{
        ContentEncoding, ExportEncoding, HashAlgorithm, SignatureType, StoreLocation,
        StoreOpenMode,
    },
    Error, Settings,
};

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn defaults() {
    let settings = Settings::default();

    assert_eq!(settings.version, 1);
    assert_eq!(settings.store.location, StoreLocation::CurrentUser);
    assert_eq!(settings.store.name, "My");
    assert_eq!(settings.store.open_mode, StoreOpenMode::MaximumAllowed);
    assert_eq!(settings.signing.signature_type, SignatureType::CadesBes);
    assert!(settings.signing.detached);
    assert_eq!(
        settings.signing.content_encoding,
        ContentEncoding::Base64ToBinary
    );
    assert_eq!(settings.hashing.algorithm, HashAlgorithm::Gost3411);
    assert_eq!(settings.hashing.export_encoding, ExportEncoding::Base64);
    assert!(settings.validate().is_ok());
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn plugin_codes() {
    assert_eq!(StoreLocation::CurrentUser.code(), 2);
    assert_eq!(StoreOpenMode::MaximumAllowed.code(), 2);
    assert_eq!(SignatureType::CadesBes.code(), 1);
    assert_eq!(ContentEncoding::Base64ToBinary.code(), 1);
    assert_eq!(HashAlgorithm::Gost3411.code(), 100);
    assert_eq!(ExportEncoding::Base64.code(), 0);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn toml_overlay() {
    let settings = Settings::from_string(
        r#"
            [store]
            name = "Root"

            [hashing]
            algorithm = "gost3411_2012_256"
        "#,
        "toml",
    )
    .unwrap();

    assert_eq!(settings.store.name, "Root");
    assert_eq!(settings.store.location, StoreLocation::CurrentUser);
    assert_eq!(settings.hashing.algorithm, HashAlgorithm::Gost3411_2012_256);
    assert!(settings.signing.detached);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn json_overlay() {
    let settings = Settings::from_string(r#"{"signing": {"detached": false}}"#, "JSON").unwrap();

    assert!(!settings.signing.detached);
    assert_eq!(settings.signing.signature_type, SignatureType::CadesBes);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn overlays_stack() {
    let settings = Settings::default()
        .with_toml("[store]\nname = \"Root\"")
        .unwrap()
        .with_json(r#"{"signing": {"detached": false}}"#)
        .unwrap();

    assert_eq!(settings.store.name, "Root");
    assert!(!settings.signing.detached);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn unsupported_format() {
    assert_eq!(
        Settings::from_string("store:\n  name: My", "yaml"),
        Err(Error::UnsupportedSettingsFormat("yaml".to_owned()))
    );
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn unsupported_version() {
    assert!(matches!(
        Settings::from_string("version = 2", "toml"),
        Err(Error::BadSettings(_))
    ));
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn empty_store_name() {
    assert!(matches!(
        Settings::from_string(r#"{"store": {"name": ""}}"#, "json"),
        Err(Error::BadSettings(_))
    ));
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn malformed_input() {
    assert!(matches!(
        Settings::from_string("[store", "toml"),
        Err(Error::BadSettings(_))
    ));
}
