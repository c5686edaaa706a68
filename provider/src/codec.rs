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

//! Conversion of raw signature values returned by the plugin.

use crate::{base64, Error, Result};

/// Converts a hex signature value into base64, reversing its byte order.
///
/// `CAdESCOM.RawSignature` reports the signature least significant byte first,
/// so the string is consumed from its tail two digits at a time. For `"0102"`
/// the encoded bytes are `[0x02, 0x01]`.
///
/// An empty string yields `""`. For an odd-length string the leading digit is
/// never reached by the tail walk and is ignored.
pub fn hex_to_base64(hex: &str) -> Result<String> {
    let tail = hex
        .get(hex.len() % 2..)
        .ok_or_else(|| Error::InvalidSignatureValue(hex.to_owned()))?;

    let mut bytes =
        ::hex::decode(tail).map_err(|err| Error::InvalidSignatureValue(err.to_string()))?;
    bytes.reverse();

    Ok(base64::encode(&bytes))
}
