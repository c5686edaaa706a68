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

use std::{borrow::Cow, fmt::Debug};

use crate::status_tracker::StatusTracker;

/// Creates a [`LogItem`] struct that is annotated with the source file and line
/// number where the log condition was discovered.
///
/// Takes three parameters, each of which may be a `&'static str` or `String`:
///
/// * `label`: the item this `LogItem` refers to, e.g. `certificate[3]`
/// * `description`: human-readable reason for this `LogItem`
/// * `function`: name of the function generating this `LogItem`
///
/// ## Example
///
/// ```
/// # use std::borrow::Cow;
/// # use crypto_pro_provider::{log_item, status_tracker::{LogKind, LogItem}};
/// let log = log_item!("certificate[1]", "fields unreadable", "enumerate_certificates");
///
/// assert_eq!(log.kind, LogKind::Informational);
/// assert_eq!(log.label, Cow::Borrowed("certificate[1]"));
/// assert_eq!(log.file, Cow::Borrowed(file!()));
/// assert!(log.err_val.is_none());
/// ```
#[macro_export]
macro_rules! log_item {
    ($label:expr, $description:expr, $function:expr) => {{
        $crate::status_tracker::LogItem {
            kind: $crate::status_tracker::LogKind::Informational,
            label: $label.into(),
            file: file!().into(),
            function: $function.into(),
            line: line!(),
            description: $description.into(),
            err_val: None,
        }
    }};
}

/// Detailed information about an error or other noteworthy condition.
///
/// Use the [`log_item`](crate::log_item) macro to create a `LogItem`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LogItem {
    /// Kind of log item.
    pub kind: LogKind,

    /// The item this entry refers to.
    pub label: Cow<'static, str>,

    /// Description of the condition.
    pub description: Cow<'static, str>,

    /// Source file where the condition was detected.
    pub file: Cow<'static, str>,

    /// Function where the condition was detected.
    pub function: Cow<'static, str>,

    /// Source line number where the condition was detected.
    pub line: u32,

    /// Error value, formatted with `Debug`.
    pub err_val: Option<Cow<'static, str>>,
}

impl LogItem {
    /// Set the log item kind to [`LogKind::Informational`] and add it to the
    /// [`StatusTracker`].
    pub fn informational(mut self, tracker: &mut StatusTracker) {
        self.kind = LogKind::Informational;
        tracker.add_non_error(self);
    }

    /// Set the log item kind to [`LogKind::Failure`] and add it to the
    /// [`StatusTracker`].
    ///
    /// Returns `Err(err)` if the tracker stops on the first error, `Ok(err)`
    /// otherwise.
    pub fn failure<E: Debug>(mut self, tracker: &mut StatusTracker, err: E) -> Result<E, E> {
        self.kind = LogKind::Failure;
        self.err_val = Some(format!("{err:?}").into());
        tracker.add_error(self, err)
    }
}

/// Descriptive nature of this [`LogItem`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LogKind {
    /// This [`LogItem`] describes an informational condition.
    Informational,

    /// This [`LogItem`] describes a failure or error condition.
    Failure,
}
