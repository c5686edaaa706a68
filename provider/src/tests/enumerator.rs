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

#![allow(unused)] // test fns appear unused on WASM

#[cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]
use wasm_bindgen_test::wasm_bindgen_test;

use super::fake_provider::{FakeCertificate, FakePlugin};
use crate::{
    enumerator::{list_certificates, list_certificates_async},
    settings::StoreSettings,
    status_tracker::{ErrorBehavior, LogKind, StatusTracker},
    CadesPlugin, Error,
};

fn three_certificates() -> Vec<FakeCertificate> {
    vec![
        FakeCertificate::new("Alice"),
        FakeCertificate::new("Bob").without_private_key(),
        FakeCertificate::new("Carol"),
    ]
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn lists_every_certificate() {
    let plugin = FakePlugin::new(three_certificates());
    let mut tracker = StatusTracker::default();

    let certificates = list_certificates(
        &plugin,
        plugin.provider().unwrap(),
        &StoreSettings::default(),
        &mut tracker,
    )
    .unwrap();

    assert_eq!(certificates.len(), 3);
    assert!(tracker.logged_items().is_empty());

    let alice = &certificates[0];
    let expected = FakeCertificate::new("Alice");
    assert_eq!(alice.thumbprint, expected.thumbprint());
    assert_eq!(alice.subject_name.get("CN"), Some("Alice"));
    assert_eq!(alice.subject_name.get("C"), Some("RU"));
    assert_eq!(alice.issuer_name.get("CN"), Some("Test CA"));
    assert_eq!(alice.serial_number, expected.serial_number);
    assert_eq!(alice.valid_from_date, FakeCertificate::valid_from());
    assert_eq!(alice.valid_to_date, FakeCertificate::valid_to());
    assert!(alice.is_valid);
    assert_eq!(alice.version, 3);
    assert!(alice.private_key.is_some());

    assert_eq!(certificates[1].subject_name.get("CN"), Some("Bob"));
    assert!(certificates[1].private_key.is_none());

    assert_eq!(plugin.count("store.open"), 1);
    assert_eq!(plugin.count("store.close"), 1);
}

#[cfg_attr(not(target_arch = "wasm32"), actix::test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
async fn async_listing_matches_sync_listing() {
    let plugin = FakePlugin::new(three_certificates()).with_promises();
    let settings = StoreSettings::default();

    let mut tracker = StatusTracker::default();
    let direct =
        list_certificates(&plugin, plugin.provider().unwrap(), &settings, &mut tracker).unwrap();

    let mut tracker = StatusTracker::default();
    let promised = list_certificates_async(
        &plugin,
        plugin.async_provider().unwrap(),
        &settings,
        &mut tracker,
    )
    .await
    .unwrap();

    assert_eq!(direct, promised);
}

#[cfg_attr(not(target_arch = "wasm32"), actix::test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
async fn skips_unreadable_certificate() {
    let plugin = FakePlugin::new(vec![
        FakeCertificate::new("Alice"),
        FakeCertificate::new("Broken").unreadable(),
        FakeCertificate::new("Carol"),
    ])
    .promises_only();
    let mut tracker = StatusTracker::default();

    let certificates = list_certificates_async(
        &plugin,
        plugin.async_provider().unwrap(),
        &StoreSettings::default(),
        &mut tracker,
    )
    .await
    .unwrap();

    let names: Vec<_> = certificates
        .iter()
        .filter_map(|certificate| certificate.subject_name.get("CN"))
        .collect();
    assert_eq!(names, vec!["Alice", "Carol"]);

    assert_eq!(tracker.logged_items().len(), 1);
    let item = &tracker.logged_items()[0];
    assert_eq!(item.kind, LogKind::Failure);
    assert_eq!(item.label, "certificate[2]");
    assert_eq!(item.function, "enumerate_certificates");
    assert!(item
        .err_val
        .as_deref()
        .unwrap()
        .contains("plugin: certificate is damaged"));

    assert_eq!(plugin.count("store.close"), 1);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn stop_on_first_error() {
    let plugin = FakePlugin::new(vec![
        FakeCertificate::new("Alice"),
        FakeCertificate::new("Broken").unreadable(),
        FakeCertificate::new("Carol"),
    ]);
    let mut tracker = StatusTracker::with_error_behavior(ErrorBehavior::StopOnFirstError);

    let err = list_certificates(
        &plugin,
        plugin.provider().unwrap(),
        &StoreSettings::default(),
        &mut tracker,
    )
    .unwrap_err();

    assert_eq!(
        err,
        Error::CertificateUnreadable {
            index: 2,
            reason: "plugin: certificate is damaged".to_owned(),
        }
    );
    assert!(tracker.has_any_error());

    // The third certificate is never read, but the store is still closed.
    assert_eq!(plugin.count("certificates.item"), 2);
    assert_eq!(plugin.count("store.close"), 1);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn empty_store() {
    let plugin = FakePlugin::new(vec![]);
    let mut tracker = StatusTracker::default();

    let certificates = list_certificates(
        &plugin,
        plugin.provider().unwrap(),
        &StoreSettings::default(),
        &mut tracker,
    )
    .unwrap();

    assert!(certificates.is_empty());
    assert_eq!(plugin.count("certificates.item"), 0);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn open_failure() {
    let plugin = FakePlugin::new(three_certificates()).failing("store.open");
    let mut tracker = StatusTracker::default();

    let err = list_certificates(
        &plugin,
        plugin.provider().unwrap(),
        &StoreSettings::default(),
        &mut tracker,
    )
    .unwrap_err();

    assert_eq!(
        err,
        Error::StoreOpenFailed("plugin: store.open failed".to_owned())
    );
    assert_eq!(plugin.count("store.close"), 0);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn close_failure_after_listing() {
    let plugin = FakePlugin::new(three_certificates()).failing("store.close");
    let mut tracker = StatusTracker::default();

    let err = list_certificates(
        &plugin,
        plugin.provider().unwrap(),
        &StoreSettings::default(),
        &mut tracker,
    )
    .unwrap_err();

    assert_eq!(
        err,
        Error::StoreCloseFailed("plugin: store.close failed".to_owned())
    );
}

#[cfg_attr(not(target_arch = "wasm32"), actix::test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
async fn count_failure_is_reported_and_store_closed() {
    let plugin = FakePlugin::new(three_certificates())
        .promises_only()
        .failing("certificates.count");
    let mut tracker = StatusTracker::default();

    let err = list_certificates_async(
        &plugin,
        plugin.async_provider().unwrap(),
        &StoreSettings::default(),
        &mut tracker,
    )
    .await
    .unwrap_err();

    assert_eq!(
        err,
        Error::Provider("plugin: certificates.count failed".to_owned())
    );
    assert_eq!(plugin.count("store.close"), 1);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn serializes_certificate_info() {
    let plugin = FakePlugin::new(vec![FakeCertificate::new("Alice")]);
    let mut tracker = StatusTracker::default();

    let certificates = list_certificates(
        &plugin,
        plugin.provider().unwrap(),
        &StoreSettings::default(),
        &mut tracker,
    )
    .unwrap();

    let json = serde_json::to_value(&certificates[0]).unwrap();
    assert_eq!(json["subject_name"]["CN"], "Alice");
    assert_eq!(json["is_valid"], true);
    assert!(json["private_key"]["provider_name"]
        .as_str()
        .unwrap()
        .starts_with("Crypto-Pro"));
}
