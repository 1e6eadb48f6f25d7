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

use crate::oss::error::{Error, ResourceNotFound};
use crate::oss::response::response_traits::{HasBucket, HasOssFields, HasRequestId};
use crate::oss::transport::TransportResponse;
use crate::oss::types::{
    BucketConfig, DeletableConfig, FromOssResponse, OssRequest, WritableConfig, decode_config,
};
use async_trait::async_trait;
use bytes::Bytes;
use http::HeaderMap;
use std::marker::PhantomData;

macro_rules! impl_has_oss_fields_generic {
    ($($ty:ident<$bound:ident>),* $(,)?) => {
        $(
            impl<C: $bound> HasOssFields for $ty<C> {
                fn request(&self) -> &OssRequest {
                    &self.request
                }

                fn headers(&self) -> &HeaderMap {
                    &self.headers
                }

                fn body(&self) -> &Bytes {
                    &self.body
                }
            }

            impl<C: $bound> HasBucket for $ty<C> {}
            impl<C: $bound> HasRequestId for $ty<C> {}
        )*
    };
}

/// Response of the `get_bucket_*` APIs, holding the decoded configuration.
///
/// A configuration that was never set is reported according to the resource's
/// [`AbsencePolicy`](crate::oss::types::AbsencePolicy): as [`Error::NotFound`] for lifecycle,
/// CORS and website, and as the empty value for logging.
#[derive(Clone, Debug)]
pub struct GetBucketConfigResponse<C: BucketConfig> {
    request: OssRequest,
    headers: HeaderMap,
    body: Bytes,

    config: C,
}

impl<C: BucketConfig> GetBucketConfigResponse<C> {
    /// The decoded configuration.
    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn into_config(self) -> C {
        self.config
    }
}

#[async_trait]
impl<C: BucketConfig> FromOssResponse for GetBucketConfigResponse<C> {
    async fn from_oss_response(
        request: OssRequest,
        response: Result<TransportResponse, Error>,
    ) -> Result<Self, Error> {
        match response {
            Ok(resp) => {
                let config: C = decode_config(&resp.body)?;
                Ok(Self {
                    request,
                    headers: resp.headers,
                    body: resp.body,
                    config,
                })
            }
            Err(Error::Service(e)) if C::RESOURCE.not_found_code().as_ref() == Some(e.code()) => {
                Err(Error::NotFound(ResourceNotFound {
                    resource: C::RESOURCE,
                    bucket: request.bucket.unwrap_or_default(),
                    code: e.code().clone(),
                    response: e,
                }))
            }
            Err(e) => Err(e),
        }
    }
}

/// Response of the `put_bucket_*` APIs.
#[derive(Clone, Debug)]
pub struct PutBucketConfigResponse<C: WritableConfig> {
    request: OssRequest,
    headers: HeaderMap,
    body: Bytes,
    _config: PhantomData<C>,
}

#[async_trait]
impl<C: WritableConfig> FromOssResponse for PutBucketConfigResponse<C> {
    async fn from_oss_response(
        request: OssRequest,
        response: Result<TransportResponse, Error>,
    ) -> Result<Self, Error> {
        let resp = response?;
        Ok(Self {
            request,
            headers: resp.headers,
            body: resp.body,
            _config: PhantomData,
        })
    }
}

/// Response of the `delete_bucket_*` APIs.
///
/// Deleting a configuration that does not exist is not an error; [`existed`](Self::existed)
/// tells the two cases apart.
#[derive(Clone, Debug)]
pub struct DeleteBucketConfigResponse<C: DeletableConfig> {
    request: OssRequest,
    headers: HeaderMap,
    body: Bytes,
    existed: bool,
    _config: PhantomData<C>,
}

impl<C: DeletableConfig> DeleteBucketConfigResponse<C> {
    /// `false` if the service reported the configuration as already absent.
    pub fn existed(&self) -> bool {
        self.existed
    }
}

#[async_trait]
impl<C: DeletableConfig> FromOssResponse for DeleteBucketConfigResponse<C> {
    async fn from_oss_response(
        request: OssRequest,
        response: Result<TransportResponse, Error>,
    ) -> Result<Self, Error> {
        match response {
            Ok(resp) => Ok(Self {
                request,
                headers: resp.headers,
                body: resp.body,
                existed: true,
                _config: PhantomData,
            }),
            Err(Error::Service(mut e))
                if C::RESOURCE.not_found_code().as_ref() == Some(e.code()) =>
            {
                log::debug!(
                    "{} configuration already absent on bucket {}",
                    C::RESOURCE,
                    request.bucket.as_deref().unwrap_or_default()
                );
                Ok(Self {
                    request,
                    headers: e.take_headers(),
                    body: Bytes::new(),
                    existed: false,
                    _config: PhantomData,
                })
            }
            Err(e) => Err(e),
        }
    }
}

impl_has_oss_fields_generic!(
    GetBucketConfigResponse<BucketConfig>,
    PutBucketConfigResponse<WritableConfig>,
    DeleteBucketConfigResponse<DeletableConfig>,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oss::client::OssClient;
    use crate::oss::error::ValidationErr;
    use crate::oss::oss_error_response::{OssErrorCode, OssErrorResponse};
    use crate::oss::transport::{Transport, TransportRequest};
    use crate::oss::types::{BucketResource, CorsConfig, LifecycleConfig, RefererConfig};
    use http::{Method, StatusCode};
    use std::sync::Arc;

    #[derive(Debug)]
    struct Unreachable;

    #[async_trait]
    impl Transport for Unreachable {
        async fn send(&self, _request: TransportRequest) -> Result<TransportResponse, Error> {
            unreachable!("no request expected")
        }
    }

    fn request(method: Method) -> OssRequest {
        OssRequest::builder()
            .client(OssClient::with_transport(Arc::new(Unreachable)))
            .method(method)
            .bucket(Some("my-bucket".to_owned()))
            .build()
    }

    fn service_error(code: &str) -> Error {
        let body = format!("<Error><Code>{code}</Code><RequestId>req-1</RequestId></Error>");
        let e = OssErrorResponse::new_from_body(
            StatusCode::NOT_FOUND,
            Bytes::from(body),
            HeaderMap::new(),
        )
        .unwrap();
        Error::Service(Box::new(e))
    }

    #[tokio::test]
    async fn test_get_maps_not_found_code() {
        let err = GetBucketConfigResponse::<LifecycleConfig>::from_oss_response(
            request(Method::GET),
            Err(service_error("NoSuchLifecycle")),
        )
        .await
        .unwrap_err();
        assert_eq!(err.not_found_resource(), Some(BucketResource::Lifecycle));
        match err {
            Error::NotFound(e) => {
                assert_eq!(e.bucket, "my-bucket");
                assert_eq!(e.request_id(), "req-1");
            }
            e => panic!("unexpected error {e:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_passes_other_codes_through() {
        // a CORS code on a lifecycle get is not an absence
        let err = GetBucketConfigResponse::<LifecycleConfig>::from_oss_response(
            request(Method::GET),
            Err(service_error("NoSuchCORSConfiguration")),
        )
        .await
        .unwrap_err();
        assert!(err.is_service_code(&OssErrorCode::NoSuchCORSConfiguration));
        assert_eq!(err.not_found_resource(), None);

        let err = GetBucketConfigResponse::<RefererConfig>::from_oss_response(
            request(Method::GET),
            Err(service_error("AccessDenied")),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, Error::Service(_)));
    }

    #[tokio::test]
    async fn test_get_decodes_body() {
        let body = "<RefererConfiguration><AllowEmptyReferer>false</AllowEmptyReferer>\
            <RefererList><Referer>http://a.com</Referer></RefererList></RefererConfiguration>";
        let resp = GetBucketConfigResponse::<RefererConfig>::from_oss_response(
            request(Method::GET),
            Ok(TransportResponse::new(
                StatusCode::OK,
                HeaderMap::new(),
                Bytes::from(body),
            )),
        )
        .await
        .unwrap();
        assert_eq!(resp.bucket(), "my-bucket");
        assert_eq!(
            resp.into_config(),
            RefererConfig::new(false, ["http://a.com"])
        );

        let err = GetBucketConfigResponse::<RefererConfig>::from_oss_response(
            request(Method::GET),
            Ok(TransportResponse::new(
                StatusCode::OK,
                HeaderMap::new(),
                Bytes::from_static(b"<CORSConfiguration/>"),
            )),
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationErr::UnexpectedRootElement { .. })
        ));
    }

    #[tokio::test]
    async fn test_delete_swallows_absence() {
        let resp = DeleteBucketConfigResponse::<CorsConfig>::from_oss_response(
            request(Method::DELETE),
            Err(service_error("NoSuchCORSConfiguration")),
        )
        .await
        .unwrap();
        assert!(!resp.existed());

        let resp = DeleteBucketConfigResponse::<CorsConfig>::from_oss_response(
            request(Method::DELETE),
            Ok(TransportResponse::new(
                StatusCode::NO_CONTENT,
                HeaderMap::new(),
                Bytes::new(),
            )),
        )
        .await
        .unwrap();
        assert!(resp.existed());

        let err = DeleteBucketConfigResponse::<CorsConfig>::from_oss_response(
            request(Method::DELETE),
            Err(service_error("NoSuchBucket")),
        )
        .await
        .unwrap_err();
        assert!(err.is_service_code(&OssErrorCode::NoSuchBucket));
    }
}
