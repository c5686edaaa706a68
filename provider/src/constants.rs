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

//! Typed forms of the numeric CAdESCOM and CAPICOM constants understood by the
//! plugin.
//!
//! Each enum converts to the raw integer the plugin expects via `code()`.

use serde::{Deserialize, Serialize};

/// Plugin object identifiers passed to `CreateObject` / `CreateObjectAsync`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProgId {
    /// `CAPICOM.Store`
    Store,
    /// `CAdESCOM.CPSigner`
    Signer,
    /// `CAdESCOM.CadesSignedData`
    SignedData,
    /// `CAdESCOM.HashedData`
    HashedData,
    /// `CAdESCOM.RawSignature`
    RawSignature,
}

impl ProgId {
    /// Name of the object as registered by the plugin.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Store => "CAPICOM.Store",
            Self::Signer => "CAdESCOM.CPSigner",
            Self::SignedData => "CAdESCOM.CadesSignedData",
            Self::HashedData => "CAdESCOM.HashedData",
            Self::RawSignature => "CAdESCOM.RawSignature",
        }
    }
}

/// Type of the signature produced by `SignCades`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum SignatureType {
    /// `CADESCOM_CADES_DEFAULT`
    CadesDefault,
    /// `CADESCOM_CADES_BES`
    CadesBes,
    /// `CADESCOM_CADES_T`
    CadesT,
    /// `CADESCOM_CADES_X_LONG_TYPE_1`
    CadesXLongType1,
}

impl SignatureType {
    /// Raw value passed to the plugin.
    pub fn code(self) -> i32 {
        match self {
            Self::CadesDefault => 0,
            Self::CadesBes => 1,
            Self::CadesT => 0x5,
            Self::CadesXLongType1 => 0x5d,
        }
    }
}

/// How the plugin interprets string content handed to it.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentEncoding {
    /// `CADESCOM_STRING_TO_UCS2LE`: content is signed as UTF-16LE text.
    StringToUcs2le,
    /// `CADESCOM_BASE64_TO_BINARY`: content is decoded from base64 first.
    Base64ToBinary,
}

impl ContentEncoding {
    /// Raw value passed to the plugin.
    pub fn code(self) -> i32 {
        match self {
            Self::StringToUcs2le => 0,
            Self::Base64ToBinary => 1,
        }
    }
}

/// Search criterion for `Certificates.Find`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum FindType {
    /// `CAPICOM_CERTIFICATE_FIND_SHA1_HASH`
    Sha1Hash,
    /// `CAPICOM_CERTIFICATE_FIND_SUBJECT_NAME`
    SubjectName,
    /// `CAPICOM_CERTIFICATE_FIND_ISSUER_NAME`
    IssuerName,
}

impl FindType {
    /// Raw value passed to the plugin.
    pub fn code(self) -> i32 {
        match self {
            Self::Sha1Hash => 0,
            Self::SubjectName => 1,
            Self::IssuerName => 2,
        }
    }
}

/// Hash algorithm for `CAdESCOM.HashedData`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum HashAlgorithm {
    /// GOST R 34.11-94 (`CADESCOM_HASH_ALGORITHM_CP_GOST_3411`)
    Gost3411,
    /// GOST R 34.11-2012, 256 bit
    Gost3411_2012_256,
    /// GOST R 34.11-2012, 512 bit
    Gost3411_2012_512,
}

impl HashAlgorithm {
    /// Raw value passed to the plugin.
    pub fn code(self) -> i32 {
        match self {
            Self::Gost3411 => 100,
            Self::Gost3411_2012_256 => 101,
            Self::Gost3411_2012_512 => 102,
        }
    }
}

/// Output encoding of `Certificate.Export`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportEncoding {
    /// `CAPICOM_ENCODE_BASE64`: DER bytes carried as base64 text.
    Base64,
    /// `CAPICOM_ENCODE_BINARY`
    Binary,
}

impl ExportEncoding {
    /// Raw value passed to the plugin.
    pub fn code(self) -> i32 {
        match self {
            Self::Base64 => 0,
            Self::Binary => 1,
        }
    }
}

/// Location of the certificate store.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreLocation {
    /// `CAPICOM_MEMORY_STORE`
    Memory,
    /// `CAPICOM_LOCAL_MACHINE_STORE`
    LocalMachine,
    /// `CAPICOM_CURRENT_USER_STORE`
    CurrentUser,
}

impl StoreLocation {
    /// Raw value passed to the plugin.
    pub fn code(self) -> i32 {
        match self {
            Self::Memory => 0,
            Self::LocalMachine => 1,
            Self::CurrentUser => 2,
        }
    }
}

/// Access mode used when opening the certificate store.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreOpenMode {
    /// `CAPICOM_STORE_OPEN_READ_ONLY`
    ReadOnly,
    /// `CAPICOM_STORE_OPEN_READ_WRITE`
    ReadWrite,
    /// `CAPICOM_STORE_OPEN_MAXIMUM_ALLOWED`
    MaximumAllowed,
}

impl StoreOpenMode {
    /// Raw value passed to the plugin.
    pub fn code(self) -> i32 {
        match self {
            Self::ReadOnly => 0,
            Self::ReadWrite => 1,
            Self::MaximumAllowed => 2,
        }
    }
}

/// Default store name: the user's personal certificates.
pub const DEFAULT_STORE_NAME: &str = "My";
