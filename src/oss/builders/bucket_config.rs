// Alibaba Cloud OSS Rust Library for Bucket Configuration
// Copyright 2026 The alioss-rs Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Get, put and delete builders shared by every bucket sub-resource.

use crate::oss::client::OssClient;
use crate::oss::error::ValidationErr;
use crate::oss::header_constants::{APPLICATION_XML, CONTENT_MD5, CONTENT_TYPE};
use crate::oss::multimap_ext::{Multimap, MultimapExt};
use crate::oss::response::{
    DeleteBucketConfigResponse, GetBucketConfigResponse, PutBucketConfigResponse,
};
use crate::oss::types::{
    AccessControlPolicy, BucketConfig, CorsConfig, DeletableConfig, LifecycleConfig,
    LocationConfig, LoggingConfig, OssApi, OssRequest, RefererConfig, ToOssRequest,
    WebsiteConfig, WritableConfig,
};
use crate::oss::utils::{check_bucket_name, insert, md5sum_hash};
use bytes::Bytes;
use http::Method;
use std::marker::PhantomData;
use typed_builder::TypedBuilder;

/// Argument builder for reading the `C` configuration of a bucket (`GET /?<resource>`).
///
/// Created by the `get_bucket_*` methods of [`OssClient`], e.g.
/// [`OssClient::get_bucket_lifecycle`].
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetBucketConfig<C: BucketConfig> {
    #[builder(!default)] // force required
    client: OssClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    #[builder(default, setter(skip))]
    _config: PhantomData<C>,
}

/// Builder type alias for [`GetBucketConfig`].
///
/// Constructed via [`GetBucketConfig::builder()`](GetBucketConfig::builder) and used to build a [`GetBucketConfig`] instance.
pub type GetBucketConfigBldr<C> = GetBucketConfigBuilder<C, ((OssClient,), (), (), (String,))>;

impl<C: BucketConfig> OssApi for GetBucketConfig<C> {
    type OssResponse = GetBucketConfigResponse<C>;
}

impl<C: BucketConfig> ToOssRequest for GetBucketConfig<C> {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;

        Ok(OssRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .bucket(self.bucket)
            .query_params(insert(self.extra_query_params, C::RESOURCE.query_key()))
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}

/// Argument builder for replacing the `C` configuration of a bucket (`PUT /?<resource>`).
///
/// The configuration is validated locally before anything is sent.
#[derive(Clone, Debug, TypedBuilder)]
pub struct PutBucketConfig<C: WritableConfig> {
    #[builder(!default)] // force required
    client: OssClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    #[builder(!default)] // force required
    config: C,
}

/// Builder type alias for [`PutBucketConfig`].
///
/// Constructed via [`PutBucketConfig::builder()`](PutBucketConfig::builder); the configuration
/// still has to be supplied with `.config(..)` before `.build()`.
pub type PutBucketConfigBldr<C> =
    PutBucketConfigBuilder<C, ((OssClient,), (), (), (String,), ())>;

impl<C: WritableConfig> OssApi for PutBucketConfig<C> {
    type OssResponse = PutBucketConfigResponse<C>;
}

impl<C: WritableConfig> ToOssRequest for PutBucketConfig<C> {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        self.config.validate()?;

        let bytes: Bytes = self.config.to_xml()?.into();
        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        headers.add(CONTENT_MD5, md5sum_hash(&bytes));
        headers.add(CONTENT_TYPE, APPLICATION_XML);

        Ok(OssRequest::builder()
            .client(self.client)
            .method(Method::PUT)
            .bucket(self.bucket)
            .query_params(insert(self.extra_query_params, C::RESOURCE.query_key()))
            .headers(headers)
            .body(bytes)
            .build())
    }
}

/// Argument builder for removing the `C` configuration of a bucket (`DELETE /?<resource>`).
///
/// Deleting a configuration that is not set succeeds.
#[derive(Clone, Debug, TypedBuilder)]
pub struct DeleteBucketConfig<C: DeletableConfig> {
    #[builder(!default)] // force required
    client: OssClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    #[builder(default, setter(skip))]
    _config: PhantomData<C>,
}

/// Builder type alias for [`DeleteBucketConfig`].
///
/// Constructed via [`DeleteBucketConfig::builder()`](DeleteBucketConfig::builder) and used to build a [`DeleteBucketConfig`] instance.
pub type DeleteBucketConfigBldr<C> =
    DeleteBucketConfigBuilder<C, ((OssClient,), (), (), (String,))>;

impl<C: DeletableConfig> OssApi for DeleteBucketConfig<C> {
    type OssResponse = DeleteBucketConfigResponse<C>;
}

impl<C: DeletableConfig> ToOssRequest for DeleteBucketConfig<C> {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;

        Ok(OssRequest::builder()
            .client(self.client)
            .method(Method::DELETE)
            .bucket(self.bucket)
            .query_params(insert(self.extra_query_params, C::RESOURCE.query_key()))
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}

pub type GetBucketAcl = GetBucketConfig<AccessControlPolicy>;
pub type GetBucketLocation = GetBucketConfig<LocationConfig>;

pub type GetBucketLogging = GetBucketConfig<LoggingConfig>;
pub type PutBucketLogging = PutBucketConfig<LoggingConfig>;
pub type DeleteBucketLogging = DeleteBucketConfig<LoggingConfig>;

pub type GetBucketWebsite = GetBucketConfig<WebsiteConfig>;
pub type PutBucketWebsite = PutBucketConfig<WebsiteConfig>;
pub type DeleteBucketWebsite = DeleteBucketConfig<WebsiteConfig>;

pub type GetBucketLifecycle = GetBucketConfig<LifecycleConfig>;
pub type PutBucketLifecycle = PutBucketConfig<LifecycleConfig>;
pub type DeleteBucketLifecycle = DeleteBucketConfig<LifecycleConfig>;

pub type GetBucketCors = GetBucketConfig<CorsConfig>;
pub type PutBucketCors = PutBucketConfig<CorsConfig>;
pub type DeleteBucketCors = DeleteBucketConfig<CorsConfig>;

pub type GetBucketReferer = GetBucketConfig<RefererConfig>;
pub type PutBucketReferer = PutBucketConfig<RefererConfig>;
