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

//! Collects per-item failures that do not abort an operation outright.
//!
//! Listing a store reads every certificate in turn. A certificate whose fields
//! cannot be read is recorded here as a [`LogItem`]; the [`ErrorBehavior`] of
//! the tracker decides whether the listing goes on without it.

use std::fmt::Debug;

use log::info;

/// Aggregates [`LogItem`]s and controls error-handling behavior.
#[derive(Debug, Default)]
pub struct StatusTracker {
    error_behavior: ErrorBehavior,
    logged_items: Vec<LogItem>,
}

impl StatusTracker {
    /// Returns a [`StatusTracker`] with the specified [`ErrorBehavior`].
    pub fn with_error_behavior(error_behavior: ErrorBehavior) -> Self {
        Self {
            error_behavior,
            logged_items: vec![],
        }
    }

    /// Returns the current list of log items.
    pub fn logged_items(&self) -> &[LogItem] {
        &self.logged_items
    }

    /// Adds a non-error [`LogItem`] to this status tracker.
    pub fn add_non_error(&mut self, log_item: LogItem) {
        info!("{}: {}", log_item.label, log_item.description);
        self.logged_items.push(log_item);
    }

    /// Adds an error-case [`LogItem`] to this status tracker.
    ///
    /// Returns `Err(err)` if configured to stop on the first error or
    /// `Ok(err)` if configured to continue. _(See [`ErrorBehavior`].)_
    pub fn add_error<E>(&mut self, log_item: LogItem, err: E) -> Result<E, E> {
        self.logged_items.push(log_item);

        match self.error_behavior {
            ErrorBehavior::StopOnFirstError => Err(err),
            ErrorBehavior::ContinueWhenPossible => Ok(err),
        }
    }

    /// Returns the [`LogItem`]s that carry an error value.
    pub fn filter_errors(&self) -> impl Iterator<Item = &LogItem> {
        self.logged_items
            .iter()
            .filter(|item| item.err_val.is_some())
    }

    /// Returns `true` if any logged item carries an error value.
    pub fn has_any_error(&self) -> bool {
        self.filter_errors().next().is_some()
    }
}

/// `ErrorBehavior` configures the behavior of [`StatusTracker`] when its
/// [`add_error`] function is called.
///
/// [`add_error`]: StatusTracker::add_error
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ErrorBehavior {
    /// If an error is encountered, stop immediately.
    StopOnFirstError,

    /// If an error is encountered, log it and carry on with the remaining
    /// items.
    #[default]
    ContinueWhenPossible,
}

mod log_item;
pub use log_item::{LogItem, LogKind};
