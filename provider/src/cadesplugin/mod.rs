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

//! Binding to the `cadesplugin` object injected into web pages by the CryptoPro
//! browser extension.
//!
//! It is only available when this crate is compiled for `wasm` architecture and
//! not `wasi` target.

use js_sys::{Array, Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::{
    provider::{AsyncProvider, CadesPlugin, Provider, ProviderError, ProviderResult},
    Error, Result,
};

mod objects;
use objects::JsProvider;

/// The global `cadesplugin` object.
///
/// Direct object creation is offered when the plugin exposes `CreateObject`,
/// promise-based creation when it exposes `CreateObjectAsync`.
pub struct BrowserPlugin {
    provider: JsProvider,
    has_create_object: bool,
    has_create_object_async: bool,
}

impl BrowserPlugin {
    /// Locates `cadesplugin` in the global scope and waits until the extension
    /// reports that it has loaded.
    pub async fn load() -> Result<Self> {
        let object = Reflect::get(&js_sys::global(), &JsValue::from_str("cadesplugin"))
            .map_err(|_| Error::ProviderUnavailable)?;

        if object.is_undefined() || object.is_null() {
            return Err(Error::ProviderUnavailable);
        }

        // The object doubles as a promise that settles once the extension is
        // ready (or rejects when it is not installed).
        if let Some(ready) = object.dyn_ref::<Promise>() {
            JsFuture::from(ready.clone())
                .await
                .map_err(|err| Error::Provider(describe(&err)))?;
        }

        let exposes = |name: &str| {
            Reflect::get(&object, &JsValue::from_str(name))
                .map(|value| value.is_function())
                .unwrap_or(false)
        };

        let has_create_object = exposes("CreateObject");
        let has_create_object_async = exposes("CreateObjectAsync");

        Ok(Self {
            provider: JsProvider::new(PluginContext { object }),
            has_create_object,
            has_create_object_async,
        })
    }
}

impl CadesPlugin for BrowserPlugin {
    fn provider(&self) -> Option<&dyn Provider> {
        self.has_create_object
            .then_some(&self.provider as &dyn Provider)
    }

    fn async_provider(&self) -> Option<&dyn AsyncProvider> {
        self.has_create_object_async
            .then_some(&self.provider as &dyn AsyncProvider)
    }
}

/// Shared handle on the `cadesplugin` object, used to create objects and to
/// translate errors.
#[derive(Clone)]
pub(crate) struct PluginContext {
    object: JsValue,
}

impl PluginContext {
    /// Translates a thrown value with `cadesplugin.getLastError`.
    fn error(&self, err: JsValue) -> ProviderError {
        let translated = call(&self.object, "getLastError", &Array::of1(&err))
            .ok()
            .and_then(|message| message.as_string());

        ProviderError::new(translated.unwrap_or_else(|| describe(&err)))
    }
}

/// A plugin object together with the context needed to report its errors.
#[derive(Clone)]
pub(crate) struct JsObject {
    context: PluginContext,
    value: JsValue,
}

impl JsObject {
    fn wrap(&self, value: JsValue) -> Self {
        Self {
            context: self.context.clone(),
            value,
        }
    }

    fn get(&self, name: &str) -> ProviderResult<JsValue> {
        Reflect::get(&self.value, &JsValue::from_str(name)).map_err(|err| self.context.error(err))
    }

    fn set(&self, name: &str, value: &JsValue) -> ProviderResult<()> {
        Reflect::set(&self.value, &JsValue::from_str(name), value)
            .map(|_| ())
            .map_err(|err| self.context.error(err))
    }

    fn call(&self, method: &str, args: &Array) -> ProviderResult<JsValue> {
        call(&self.value, method, args).map_err(|err| self.context.error(err))
    }

    async fn settle(&self, value: JsValue) -> ProviderResult<JsValue> {
        JsFuture::from(Promise::resolve(&value))
            .await
            .map_err(|err| self.context.error(err))
    }

    async fn get_async(&self, name: &str) -> ProviderResult<JsValue> {
        let value = self.get(name)?;
        self.settle(value).await
    }

    async fn call_async(&self, method: &str, args: &Array) -> ProviderResult<JsValue> {
        let value = self.call(method, args)?;
        self.settle(value).await
    }

    async fn set_async(&self, name: &str, value: &JsValue) -> ProviderResult<()> {
        self.call_async(&format!("propset_{name}"), &Array::of1(value))
            .await
            .map(|_| ())
    }
}

fn call(target: &JsValue, method: &str, args: &Array) -> std::result::Result<JsValue, JsValue> {
    let function: Function = Reflect::get(target, &JsValue::from_str(method))?.dyn_into()?;
    Reflect::apply(&function, target, args)
}

fn describe(err: &JsValue) -> String {
    if let Some(err) = err.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }

    err.as_string()
        .unwrap_or_else(|| "unknown plugin error".to_owned())
}
