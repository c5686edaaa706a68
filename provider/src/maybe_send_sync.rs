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

//! Conditional `Send` / `Sync` bounds.
//!
//! The browser plugin hands out JavaScript objects, which can never cross a
//! thread boundary. On `wasm32` these traits are therefore empty, while on
//! native targets they require `Send` and `Sync` so that `async_trait`
//! futures stay `Send`.

/// A trait that is `Send` on non-WASM targets and not `Send` on WASM targets.
#[cfg(not(target_arch = "wasm32"))]
pub trait MaybeSend: Send {}

/// A trait that is `Send` on non-WASM targets and not `Send` on WASM targets.
#[cfg(target_arch = "wasm32")]
pub trait MaybeSend {}

#[cfg(not(target_arch = "wasm32"))]
impl<T: Send + ?Sized> MaybeSend for T {}

#[cfg(target_arch = "wasm32")]
impl<T: ?Sized> MaybeSend for T {}

/// A trait that is `Sync` on non-WASM targets and not `Sync` on WASM targets.
#[cfg(not(target_arch = "wasm32"))]
pub trait MaybeSync: Sync {}

/// A trait that is `Sync` on non-WASM targets and not `Sync` on WASM targets.
#[cfg(target_arch = "wasm32")]
pub trait MaybeSync {}

#[cfg(not(target_arch = "wasm32"))]
impl<T: Sync + ?Sized> MaybeSync for T {}

#[cfg(target_arch = "wasm32")]
impl<T: ?Sized> MaybeSync for T {}
