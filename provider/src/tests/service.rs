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

use std::sync::Arc;

#[cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]
use wasm_bindgen_test::wasm_bindgen_test;

use super::fake_provider::{expected_cades, expected_raw_signature, FakeCertificate, FakePlugin};
use crate::{
    base64,
    status_tracker::{ErrorBehavior, StatusTracker},
    CadesService, Error, Mode, Settings,
};

const CONTENT: &str = "SGVsbG8sIHdvcmxk";

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn unavailable_plugin() {
    let plugin = Arc::new(FakePlugin::new(vec![]).without_any_creation());
    assert!(matches!(
        CadesService::new(plugin),
        Err(Error::ProviderUnavailable)
    ));
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn rejects_bad_settings() {
    let plugin = Arc::new(FakePlugin::new(vec![]));
    let settings = Settings {
        version: 7,
        ..Default::default()
    };

    assert!(matches!(
        CadesService::with_settings(plugin, settings),
        Err(Error::BadSettings(_))
    ));
}

#[cfg_attr(not(target_arch = "wasm32"), actix::test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
async fn end_to_end_direct() {
    let plugin = Arc::new(FakePlugin::new(vec![
        FakeCertificate::new("Alice"),
        FakeCertificate::new("Bob"),
    ]));
    let service = CadesService::new(plugin.clone()).unwrap();
    assert_eq!(service.mode(), Mode::Sync);

    let certificates = service.certificates().await.unwrap();
    assert_eq!(certificates.len(), 2);

    let thumbprint = &certificates[1].thumbprint;
    let signature = service.sign(thumbprint, CONTENT).await.unwrap();
    assert_eq!(signature, expected_cades(thumbprint, b"Hello, world", true));

    let params = service
        .params_for_detached_signature(thumbprint, CONTENT)
        .await
        .unwrap();
    assert_eq!(
        base64::decode(&params.signature_value).unwrap(),
        expected_raw_signature(thumbprint, b"Hello, world")
    );

    // One store session per operation.
    assert_eq!(plugin.count("store.open"), 3);
    assert_eq!(plugin.count("store.close"), 3);
}

#[cfg_attr(not(target_arch = "wasm32"), actix::test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
async fn modes_agree() {
    let certificate = FakeCertificate::new("Alice");
    let thumbprint = certificate.thumbprint();

    let direct = CadesService::new(Arc::new(FakePlugin::new(vec![certificate.clone()]))).unwrap();
    let promised =
        CadesService::new(Arc::new(FakePlugin::new(vec![certificate]).promises_only())).unwrap();
    assert_eq!(direct.mode(), Mode::Sync);
    assert_eq!(promised.mode(), Mode::Async);

    assert_eq!(
        direct.certificates().await.unwrap(),
        promised.certificates().await.unwrap()
    );
    assert_eq!(
        direct.sign(&thumbprint, CONTENT).await.unwrap(),
        promised.sign(&thumbprint, CONTENT).await.unwrap()
    );
    assert_eq!(
        direct
            .params_for_detached_signature(&thumbprint, CONTENT)
            .await
            .unwrap(),
        promised
            .params_for_detached_signature(&thumbprint, CONTENT)
            .await
            .unwrap()
    );
}

#[cfg_attr(not(target_arch = "wasm32"), actix::test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
async fn mode_is_stable() {
    let certificate = FakeCertificate::new("Alice");
    let thumbprint = certificate.thumbprint();
    let plugin = Arc::new(FakePlugin::new(vec![certificate]).with_promises());
    let service = CadesService::new(plugin.clone()).unwrap();

    for _ in 0..3 {
        assert_eq!(service.mode(), Mode::Async);
        service.sign(&thumbprint, CONTENT).await.unwrap();
    }

    assert_eq!(service.mode(), Mode::Async);
    assert_eq!(plugin.count("store.close"), 3);
}

#[cfg_attr(not(target_arch = "wasm32"), actix::test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
async fn tracker_receives_unreadable_certificates() {
    let plugin = Arc::new(FakePlugin::new(vec![
        FakeCertificate::new("Broken").unreadable(),
        FakeCertificate::new("Alice"),
    ]));
    let service = CadesService::new(plugin).unwrap();

    let mut tracker = StatusTracker::default();
    let certificates = service
        .certificates_with_tracker(&mut tracker)
        .await
        .unwrap();
    assert_eq!(certificates.len(), 1);
    assert_eq!(tracker.filter_errors().count(), 1);

    let mut tracker = StatusTracker::with_error_behavior(ErrorBehavior::StopOnFirstError);
    assert!(matches!(
        service.certificates_with_tracker(&mut tracker).await,
        Err(Error::CertificateUnreadable { index: 1, .. })
    ));
}

#[cfg_attr(not(target_arch = "wasm32"), actix::test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
async fn uses_configured_store() {
    let plugin = Arc::new(FakePlugin::new(vec![FakeCertificate::new("Alice")]));
    let settings = Settings::default()
        .with_json(r#"{"store": {"location": "local_machine"}}"#)
        .unwrap();
    let service = CadesService::with_settings(plugin, settings).unwrap();

    assert_eq!(service.certificates().await.unwrap().len(), 1);
    assert_eq!(service.settings().store.name, "My");
}
