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

//! Plugin objects. Each type implements both the direct and the promise-based
//! trait, since the plugin hands out the same JavaScript object in either
//! mode and only the way it is driven differs.

use std::any::Any;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use js_sys::{Array, Date};
use wasm_bindgen::JsValue;

use super::{JsObject, PluginContext};
use crate::{
    constants::{ContentEncoding, ExportEncoding, FindType, HashAlgorithm, ProgId, SignatureType},
    enumerator::PrivateKeyInfo,
    provider::{
        AsyncCertificate, AsyncCertificates, AsyncHashedData, AsyncProvider, AsyncRawSignature,
        AsyncSignedData, AsyncSigner, AsyncStore, Certificate, CertificateStatus, Certificates,
        HashedData, Provider, ProviderError, ProviderResult, RawSignature, SignedData, Signer,
        Store,
    },
    settings::StoreSettings,
};

fn as_string(value: JsValue, what: &str) -> ProviderResult<String> {
    value
        .as_string()
        .ok_or_else(|| ProviderError::new(format!("{what} is not a string")))
}

fn as_number(value: JsValue, what: &str) -> ProviderResult<f64> {
    value
        .as_f64()
        .ok_or_else(|| ProviderError::new(format!("{what} is not a number")))
}

fn as_date(value: JsValue, what: &str) -> ProviderResult<DateTime<Utc>> {
    let millis = Date::new(&value).get_time();
    if millis.is_nan() {
        return Err(ProviderError::new(format!("{what} is not a date")));
    }

    DateTime::from_timestamp_millis(millis as i64)
        .ok_or_else(|| ProviderError::new(format!("{what} is out of range")))
}

fn int(code: i32) -> JsValue {
    JsValue::from_f64(code.into())
}

fn unwrap_object<'a, T: 'static>(any: &'a dyn Any, what: &str) -> ProviderResult<&'a T> {
    any.downcast_ref::<T>()
        .ok_or_else(|| ProviderError::new(format!("{what} was not created by cadesplugin")))
}

pub(crate) struct JsProvider {
    root: JsObject,
}

impl JsProvider {
    pub(crate) fn new(context: PluginContext) -> Self {
        let value = context.object.clone();
        Self {
            root: JsObject { context, value },
        }
    }

    fn create(&self, prog_id: ProgId) -> ProviderResult<JsObject> {
        let object = self.root.call(
            "CreateObject",
            &Array::of1(&JsValue::from_str(prog_id.as_str())),
        )?;
        Ok(self.root.wrap(object))
    }

    async fn create_async(&self, prog_id: ProgId) -> ProviderResult<JsObject> {
        let object = self
            .root
            .call_async(
                "CreateObjectAsync",
                &Array::of1(&JsValue::from_str(prog_id.as_str())),
            )
            .await?;
        Ok(self.root.wrap(object))
    }
}

impl Provider for JsProvider {
    fn create_store(&self) -> ProviderResult<Box<dyn Store>> {
        Ok(Box::new(JsStore(self.create(ProgId::Store)?)))
    }

    fn create_signer(&self) -> ProviderResult<Box<dyn Signer>> {
        Ok(Box::new(JsSigner(self.create(ProgId::Signer)?)))
    }

    fn create_signed_data(&self) -> ProviderResult<Box<dyn SignedData>> {
        Ok(Box::new(JsSignedData(self.create(ProgId::SignedData)?)))
    }

    fn create_hashed_data(&self) -> ProviderResult<Box<dyn HashedData>> {
        Ok(Box::new(JsHashedData(self.create(ProgId::HashedData)?)))
    }

    fn create_raw_signature(&self) -> ProviderResult<Box<dyn RawSignature>> {
        Ok(Box::new(JsRawSignature(self.create(ProgId::RawSignature)?)))
    }
}

#[async_trait(?Send)]
impl AsyncProvider for JsProvider {
    async fn create_store(&self) -> ProviderResult<Box<dyn AsyncStore>> {
        Ok(Box::new(JsStore(self.create_async(ProgId::Store).await?)))
    }

    async fn create_signer(&self) -> ProviderResult<Box<dyn AsyncSigner>> {
        Ok(Box::new(JsSigner(self.create_async(ProgId::Signer).await?)))
    }

    async fn create_signed_data(&self) -> ProviderResult<Box<dyn AsyncSignedData>> {
        Ok(Box::new(JsSignedData(
            self.create_async(ProgId::SignedData).await?,
        )))
    }

    async fn create_hashed_data(&self) -> ProviderResult<Box<dyn AsyncHashedData>> {
        Ok(Box::new(JsHashedData(
            self.create_async(ProgId::HashedData).await?,
        )))
    }

    async fn create_raw_signature(&self) -> ProviderResult<Box<dyn AsyncRawSignature>> {
        Ok(Box::new(JsRawSignature(
            self.create_async(ProgId::RawSignature).await?,
        )))
    }
}

struct JsStore(JsObject);

fn open_args(settings: &StoreSettings) -> Array {
    Array::of3(
        &int(settings.location.code()),
        &JsValue::from_str(&settings.name),
        &int(settings.open_mode.code()),
    )
}

impl Store for JsStore {
    fn open(&mut self, settings: &StoreSettings) -> ProviderResult<()> {
        self.0.call("Open", &open_args(settings)).map(|_| ())
    }

    fn close(&mut self) -> ProviderResult<()> {
        self.0.call("Close", &Array::new()).map(|_| ())
    }

    fn certificates(&self) -> ProviderResult<Box<dyn Certificates>> {
        let certificates = self.0.get("Certificates")?;
        Ok(Box::new(JsCertificates(self.0.wrap(certificates))))
    }
}

#[async_trait(?Send)]
impl AsyncStore for JsStore {
    async fn open(&mut self, settings: &StoreSettings) -> ProviderResult<()> {
        self.0.call_async("Open", &open_args(settings)).await.map(|_| ())
    }

    async fn close(&mut self) -> ProviderResult<()> {
        self.0.call_async("Close", &Array::new()).await.map(|_| ())
    }

    async fn certificates(&self) -> ProviderResult<Box<dyn AsyncCertificates>> {
        let certificates = self.0.get_async("Certificates").await?;
        Ok(Box::new(JsCertificates(self.0.wrap(certificates))))
    }
}

struct JsCertificates(JsObject);

fn find_args(find_type: FindType, criteria: &str) -> Array {
    Array::of2(&int(find_type.code()), &JsValue::from_str(criteria))
}

impl Certificates for JsCertificates {
    fn count(&self) -> ProviderResult<usize> {
        Ok(as_number(self.0.get("Count")?, "Count")? as usize)
    }

    fn item(&self, index: usize) -> ProviderResult<Box<dyn Certificate>> {
        let item = self.0.call("Item", &Array::of1(&JsValue::from_f64(index as f64)))?;
        Ok(Box::new(JsCertificate(self.0.wrap(item))))
    }

    fn find(&self, find_type: FindType, criteria: &str) -> ProviderResult<Box<dyn Certificates>> {
        let found = self.0.call("Find", &find_args(find_type, criteria))?;
        Ok(Box::new(JsCertificates(self.0.wrap(found))))
    }
}

#[async_trait(?Send)]
impl AsyncCertificates for JsCertificates {
    async fn count(&self) -> ProviderResult<usize> {
        Ok(as_number(self.0.get_async("Count").await?, "Count")? as usize)
    }

    async fn item(&self, index: usize) -> ProviderResult<Box<dyn AsyncCertificate>> {
        let item = self
            .0
            .call_async("Item", &Array::of1(&JsValue::from_f64(index as f64)))
            .await?;
        Ok(Box::new(JsCertificate(self.0.wrap(item))))
    }

    async fn find(
        &self,
        find_type: FindType,
        criteria: &str,
    ) -> ProviderResult<Box<dyn AsyncCertificates>> {
        let found = self
            .0
            .call_async("Find", &find_args(find_type, criteria))
            .await?;
        Ok(Box::new(JsCertificates(self.0.wrap(found))))
    }
}

struct JsCertificate(JsObject);

impl Certificate for JsCertificate {
    fn issuer_name(&self) -> ProviderResult<String> {
        as_string(self.0.get("IssuerName")?, "IssuerName")
    }

    fn subject_name(&self) -> ProviderResult<String> {
        as_string(self.0.get("SubjectName")?, "SubjectName")
    }

    fn serial_number(&self) -> ProviderResult<String> {
        as_string(self.0.get("SerialNumber")?, "SerialNumber")
    }

    fn thumbprint(&self) -> ProviderResult<String> {
        as_string(self.0.get("Thumbprint")?, "Thumbprint")
    }

    fn private_key(&self) -> ProviderResult<Option<PrivateKeyInfo>> {
        if !self.0.call("HasPrivateKey", &Array::new())?.is_truthy() {
            return Ok(None);
        }

        let key = self.0.wrap(self.0.get("PrivateKey")?);
        Ok(Some(PrivateKeyInfo {
            container_name: as_string(key.get("ContainerName")?, "ContainerName")?,
            provider_name: as_string(key.get("ProviderName")?, "ProviderName")?,
            unique_container_name: as_string(
                key.get("UniqueContainerName")?,
                "UniqueContainerName",
            )?,
        }))
    }

    fn valid_from_date(&self) -> ProviderResult<DateTime<Utc>> {
        as_date(self.0.get("ValidFromDate")?, "ValidFromDate")
    }

    fn valid_to_date(&self) -> ProviderResult<DateTime<Utc>> {
        as_date(self.0.get("ValidToDate")?, "ValidToDate")
    }

    fn version(&self) -> ProviderResult<u32> {
        Ok(as_number(self.0.get("Version")?, "Version")? as u32)
    }

    fn is_valid(&self) -> ProviderResult<CertificateStatus> {
        let status = self.0.wrap(self.0.call("IsValid", &Array::new())?);
        Ok(CertificateStatus {
            result: status.get("Result")?.is_truthy(),
        })
    }

    fn export(&self, encoding: ExportEncoding) -> ProviderResult<String> {
        as_string(
            self.0.call("Export", &Array::of1(&int(encoding.code())))?,
            "Export",
        )
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[async_trait(?Send)]
impl AsyncCertificate for JsCertificate {
    async fn issuer_name(&self) -> ProviderResult<String> {
        as_string(self.0.get_async("IssuerName").await?, "IssuerName")
    }

    async fn subject_name(&self) -> ProviderResult<String> {
        as_string(self.0.get_async("SubjectName").await?, "SubjectName")
    }

    async fn serial_number(&self) -> ProviderResult<String> {
        as_string(self.0.get_async("SerialNumber").await?, "SerialNumber")
    }

    async fn thumbprint(&self) -> ProviderResult<String> {
        as_string(self.0.get_async("Thumbprint").await?, "Thumbprint")
    }

    async fn private_key(&self) -> ProviderResult<Option<PrivateKeyInfo>> {
        let has_key = self.0.call_async("HasPrivateKey", &Array::new()).await?;
        if !has_key.is_truthy() {
            return Ok(None);
        }

        let key = self.0.wrap(self.0.get_async("PrivateKey").await?);
        Ok(Some(PrivateKeyInfo {
            container_name: as_string(key.get_async("ContainerName").await?, "ContainerName")?,
            provider_name: as_string(key.get_async("ProviderName").await?, "ProviderName")?,
            unique_container_name: as_string(
                key.get_async("UniqueContainerName").await?,
                "UniqueContainerName",
            )?,
        }))
    }

    async fn valid_from_date(&self) -> ProviderResult<DateTime<Utc>> {
        as_date(self.0.get_async("ValidFromDate").await?, "ValidFromDate")
    }

    async fn valid_to_date(&self) -> ProviderResult<DateTime<Utc>> {
        as_date(self.0.get_async("ValidToDate").await?, "ValidToDate")
    }

    async fn version(&self) -> ProviderResult<u32> {
        Ok(as_number(self.0.get_async("Version").await?, "Version")? as u32)
    }

    async fn is_valid(&self) -> ProviderResult<CertificateStatus> {
        let status = self
            .0
            .wrap(self.0.call_async("IsValid", &Array::new()).await?);
        Ok(CertificateStatus {
            result: status.get_async("Result").await?.is_truthy(),
        })
    }

    async fn export(&self, encoding: ExportEncoding) -> ProviderResult<String> {
        let exported = self
            .0
            .call_async("Export", &Array::of1(&int(encoding.code())))
            .await?;
        as_string(exported, "Export")
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

struct JsSigner(JsObject);

impl Signer for JsSigner {
    fn set_certificate(&mut self, certificate: &dyn Certificate) -> ProviderResult<()> {
        let certificate: &JsCertificate = unwrap_object(certificate.as_any(), "certificate")?;
        self.0.set("Certificate", &certificate.0.value)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[async_trait(?Send)]
impl AsyncSigner for JsSigner {
    async fn set_certificate(
        &mut self,
        certificate: &dyn AsyncCertificate,
    ) -> ProviderResult<()> {
        let certificate: &JsCertificate = unwrap_object(certificate.as_any(), "certificate")?;
        self.0.set_async("Certificate", &certificate.0.value).await
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

struct JsSignedData(JsObject);

fn sign_cades_args(signer: &JsSigner, signature_type: SignatureType, detached: bool) -> Array {
    Array::of3(
        &signer.0.value,
        &int(signature_type.code()),
        &JsValue::from_bool(detached),
    )
}

impl SignedData for JsSignedData {
    fn set_content_encoding(&mut self, encoding: ContentEncoding) -> ProviderResult<()> {
        self.0.set("ContentEncoding", &int(encoding.code()))
    }

    fn set_content(&mut self, content: &str) -> ProviderResult<()> {
        self.0.set("Content", &JsValue::from_str(content))
    }

    fn sign_cades(
        &self,
        signer: &dyn Signer,
        signature_type: SignatureType,
        detached: bool,
    ) -> ProviderResult<String> {
        let signer: &JsSigner = unwrap_object(signer.as_any(), "signer")?;
        let signature = self.0.call(
            "SignCades",
            &sign_cades_args(signer, signature_type, detached),
        )?;
        as_string(signature, "SignCades")
    }
}

#[async_trait(?Send)]
impl AsyncSignedData for JsSignedData {
    async fn set_content_encoding(&mut self, encoding: ContentEncoding) -> ProviderResult<()> {
        self.0
            .set_async("ContentEncoding", &int(encoding.code()))
            .await
    }

    async fn set_content(&mut self, content: &str) -> ProviderResult<()> {
        self.0
            .set_async("Content", &JsValue::from_str(content))
            .await
    }

    async fn sign_cades(
        &self,
        signer: &dyn AsyncSigner,
        signature_type: SignatureType,
        detached: bool,
    ) -> ProviderResult<String> {
        let signer: &JsSigner = unwrap_object(signer.as_any(), "signer")?;
        let signature = self
            .0
            .call_async(
                "SignCades",
                &sign_cades_args(signer, signature_type, detached),
            )
            .await?;
        as_string(signature, "SignCades")
    }
}

struct JsHashedData(JsObject);

impl HashedData for JsHashedData {
    fn set_algorithm(&mut self, algorithm: HashAlgorithm) -> ProviderResult<()> {
        self.0.set("Algorithm", &int(algorithm.code()))
    }

    fn set_data_encoding(&mut self, encoding: ContentEncoding) -> ProviderResult<()> {
        self.0.set("DataEncoding", &int(encoding.code()))
    }

    fn hash(&mut self, data: &str) -> ProviderResult<()> {
        self.0
            .call("Hash", &Array::of1(&JsValue::from_str(data)))
            .map(|_| ())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[async_trait(?Send)]
impl AsyncHashedData for JsHashedData {
    async fn set_algorithm(&mut self, algorithm: HashAlgorithm) -> ProviderResult<()> {
        self.0.set_async("Algorithm", &int(algorithm.code())).await
    }

    async fn set_data_encoding(&mut self, encoding: ContentEncoding) -> ProviderResult<()> {
        self.0
            .set_async("DataEncoding", &int(encoding.code()))
            .await
    }

    async fn hash(&mut self, data: &str) -> ProviderResult<()> {
        self.0
            .call_async("Hash", &Array::of1(&JsValue::from_str(data)))
            .await
            .map(|_| ())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

struct JsRawSignature(JsObject);

impl RawSignature for JsRawSignature {
    fn sign_hash(
        &self,
        hash: &dyn HashedData,
        certificate: &dyn Certificate,
    ) -> ProviderResult<String> {
        let hash: &JsHashedData = unwrap_object(hash.as_any(), "hash")?;
        let certificate: &JsCertificate = unwrap_object(certificate.as_any(), "certificate")?;

        let signature = self.0.call(
            "SignHash",
            &Array::of2(&hash.0.value, &certificate.0.value),
        )?;
        as_string(signature, "SignHash")
    }
}

#[async_trait(?Send)]
impl AsyncRawSignature for JsRawSignature {
    async fn sign_hash(
        &self,
        hash: &dyn AsyncHashedData,
        certificate: &dyn AsyncCertificate,
    ) -> ProviderResult<String> {
        let hash: &JsHashedData = unwrap_object(hash.as_any(), "hash")?;
        let certificate: &JsCertificate = unwrap_object(certificate.as_any(), "certificate")?;

        let signature = self
            .0
            .call_async("SignHash", &Array::of2(&hash.0.value, &certificate.0.value))
            .await?;
        as_string(signature, "SignHash")
    }
}
