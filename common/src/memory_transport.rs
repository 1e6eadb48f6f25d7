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

//! In-memory stand-in for the bucket APIs of the service.
//!
//! Requests are answered the way the service answers them: per-bucket storage of every
//! sub-resource, the resource-specific not-found codes, an empty logging document when
//! logging is off, ACLs carried in `x-oss-acl`, and `<Error>` bodies with a request id.

use alioss::oss::error::Error;
use alioss::oss::header_constants::{APPLICATION_XML, CONTENT_MD5, X_OSS_ACL, X_OSS_REQUEST_ID};
use alioss::oss::multimap_ext::MultimapExt;
use alioss::oss::oss_error_response::OssErrorCode;
use alioss::oss::transport::{Transport, TransportRequest, TransportResponse};
use alioss::oss::types::{
    BucketAcl, BucketResource, CorsConfig, LifecycleConfig, LoggingConfig, RefererConfig,
    StorageClass, WebsiteConfig, decode_config,
};
use alioss::oss::utils::{
    UtcTime, check_bucket_name, md5sum_hash, parent_element, text_element, to_iso8601utc,
    utc_now, write_xml_document,
};
use async_trait::async_trait;
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderValue, Method, StatusCode};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use xmltree::Element;

pub const DEFAULT_LOCATION: &str = "oss-cn-hangzhou";
pub const OWNER_ID: &str = "1234567890";
pub const OWNER_DISPLAY_NAME: &str = "alioss-tester";

#[derive(Debug)]
struct StoredBucket {
    acl: BucketAcl,
    storage_class: StorageClass,
    creation_date: UtcTime,
    resources: HashMap<BucketResource, Bytes>,
}

#[derive(Debug, Default)]
struct ServiceState {
    buckets: BTreeMap<String, StoredBucket>,
    /// Buckets that exist but belong to another account.
    foreign: BTreeSet<String>,
}

type Failure = (StatusCode, OssErrorCode, String);
type Reply = Result<(StatusCode, Bytes), Failure>;

#[derive(Debug, Default)]
pub struct MemoryTransport {
    state: Mutex<ServiceState>,
    request_count: AtomicUsize,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `bucket` as owned by someone else: every request on it is denied.
    pub fn with_foreign_bucket(self, bucket: impl Into<String>) -> Self {
        self.state.lock().unwrap().foreign.insert(bucket.into());
        self
    }

    /// Number of requests that reached the transport.
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    fn handle(&self, req: &TransportRequest) -> Reply {
        let mut state = self.state.lock().unwrap();
        let Some(bucket) = req.bucket.as_deref() else {
            return match req.method {
                Method::GET => list_buckets(&state, req),
                _ => Err(method_not_allowed()),
            };
        };

        if state.foreign.contains(bucket) {
            return Err((
                StatusCode::FORBIDDEN,
                OssErrorCode::AccessDenied,
                "The bucket you access does not belong to you.".into(),
            ));
        }

        match req.sub_resource() {
            None => match req.method {
                Method::PUT => create_bucket(&mut state, bucket, req),
                Method::DELETE => delete_bucket(&mut state, bucket),
                _ => Err(method_not_allowed()),
            },
            Some(resource) => {
                let stored = state.buckets.get_mut(bucket).ok_or_else(no_such_bucket)?;
                match req.method {
                    Method::GET => get_resource(stored, resource),
                    Method::PUT => put_resource(stored, resource, req),
                    Method::DELETE => delete_resource(stored, resource),
                    _ => Err(method_not_allowed()),
                }
            }
        }
    }
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, Error> {
        let n = self.request_count.fetch_add(1, Ordering::SeqCst) + 1;
        let request_id = format!("{:024X}", n);
        log::trace!(
            "memory transport {} {:?} ?{}",
            request.method,
            request.bucket,
            request.query_params.to_query_string()
        );

        let mut headers = HeaderMap::new();
        if let Ok(v) = HeaderValue::from_str(&request_id) {
            headers.insert(X_OSS_REQUEST_ID, v);
        }

        let (status, body) = match self.handle(&request) {
            Ok((status, body)) => {
                if !body.is_empty() {
                    headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_XML));
                }
                (status, body)
            }
            Err((status, code, message)) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_XML));
                let body = error_body(&code, &message, &request_id, request.bucket.as_deref());
                (status, body)
            }
        };
        Ok(TransportResponse::new(status, headers, body))
    }
}

fn no_such_bucket() -> Failure {
    (
        StatusCode::NOT_FOUND,
        OssErrorCode::NoSuchBucket,
        "The specified bucket does not exist.".into(),
    )
}

fn method_not_allowed() -> Failure {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        OssErrorCode::MethodNotAllowed,
        "The specified method is not allowed against this resource.".into(),
    )
}

fn bad_request(code: OssErrorCode, message: impl Into<String>) -> Failure {
    (StatusCode::BAD_REQUEST, code, message.into())
}

fn xml(root: &Element) -> Bytes {
    write_xml_document(root).unwrap_or_default().into()
}

fn error_body(code: &OssErrorCode, message: &str, request_id: &str, bucket: Option<&str>) -> Bytes {
    let mut children = vec![
        text_element("Code", code.to_string()),
        text_element("Message", message),
        text_element("RequestId", request_id),
        text_element("HostId", "memory.oss.local"),
    ];
    if let Some(bucket) = bucket {
        children.push(text_element("BucketName", bucket));
    }
    xml(&parent_element("Error", children))
}

fn owner_element() -> Element {
    parent_element(
        "Owner",
        [
            text_element("ID", OWNER_ID),
            text_element("DisplayName", OWNER_DISPLAY_NAME),
        ],
    )
}

fn parse_acl_header(req: &TransportRequest) -> Result<Option<BucketAcl>, Failure> {
    match req.headers.first_value(X_OSS_ACL) {
        Some(v) => v
            .parse()
            .map(Some)
            .map_err(|_| {
                bad_request(
                    OssErrorCode::InvalidArgument,
                    format!("no such bucket access control exists: {v}"),
                )
            }),
        None => Ok(None),
    }
}

fn check_digest(req: &TransportRequest, body: &Bytes) -> Result<(), Failure> {
    match req.headers.first_value(CONTENT_MD5) {
        Some(md5) if md5 != md5sum_hash(body) => Err(bad_request(
            OssErrorCode::InvalidDigest,
            "The Content-MD5 you specified was invalid.",
        )),
        _ => Ok(()),
    }
}

fn create_bucket(state: &mut ServiceState, bucket: &str, req: &TransportRequest) -> Reply {
    check_bucket_name(bucket)
        .map_err(|e| bad_request(OssErrorCode::InvalidBucketName, e.to_string()))?;
    if state.buckets.contains_key(bucket) {
        return Err((
            StatusCode::CONFLICT,
            OssErrorCode::BucketAlreadyExists,
            "The requested bucket name is not available.".into(),
        ));
    }

    let acl = parse_acl_header(req)?.unwrap_or_default();
    let storage_class = match &req.body {
        Some(body) if !body.is_empty() => {
            check_digest(req, body)?;
            let root = Element::parse(body.as_ref())
                .map_err(|e| bad_request(OssErrorCode::MalformedXML, e.to_string()))?;
            match root.get_child("StorageClass").and_then(|e| e.get_text()) {
                Some(s) => s.parse().map_err(|_| {
                    bad_request(
                        OssErrorCode::InvalidArgument,
                        format!("invalid storage class {s}"),
                    )
                })?,
                None => StorageClass::default(),
            }
        }
        _ => StorageClass::default(),
    };

    state.buckets.insert(
        bucket.to_owned(),
        StoredBucket {
            acl,
            storage_class,
            creation_date: utc_now(),
            resources: HashMap::new(),
        },
    );
    Ok((StatusCode::OK, Bytes::new()))
}

fn delete_bucket(state: &mut ServiceState, bucket: &str) -> Reply {
    state.buckets.remove(bucket).ok_or_else(no_such_bucket)?;
    Ok((StatusCode::NO_CONTENT, Bytes::new()))
}

fn list_buckets(state: &ServiceState, req: &TransportRequest) -> Reply {
    let prefix = req.query_params.first_value("prefix").unwrap_or_default();
    let marker = req.query_params.first_value("marker").unwrap_or_default();
    let max_keys: usize = match req.query_params.first_value("max-keys") {
        Some(v) => v.parse().map_err(|_| {
            bad_request(OssErrorCode::InvalidArgument, format!("invalid max-keys {v}"))
        })?,
        None => 1000,
    };

    let mut matching = state
        .buckets
        .iter()
        .filter(|(name, _)| name.starts_with(prefix) && name.as_str() > marker);
    let page: Vec<_> = matching.by_ref().take(max_keys).collect();
    let truncated = matching.next().is_some();

    let buckets = page.iter().map(|(name, b)| {
        parent_element(
            "Bucket",
            [
                text_element("CreationDate", to_iso8601utc(b.creation_date)),
                text_element(
                    "ExtranetEndpoint",
                    format!("{DEFAULT_LOCATION}.aliyuncs.com"),
                ),
                text_element(
                    "IntranetEndpoint",
                    format!("{DEFAULT_LOCATION}-internal.aliyuncs.com"),
                ),
                text_element("Location", DEFAULT_LOCATION),
                text_element("Name", name.as_str()),
                text_element("StorageClass", b.storage_class.as_str()),
            ],
        )
    });

    let mut children = vec![owner_element(), parent_element("Buckets", buckets)];
    if truncated {
        children.push(text_element("IsTruncated", "true"));
        if let Some((last, _)) = page.last() {
            children.push(text_element("NextMarker", last.as_str()));
        }
    }
    Ok((StatusCode::OK, xml(&parent_element("ListAllMyBucketsResult", children))))
}

fn get_resource(stored: &StoredBucket, resource: BucketResource) -> Reply {
    let body = match resource {
        BucketResource::Acl => xml(&parent_element(
            "AccessControlPolicy",
            [
                owner_element(),
                parent_element("AccessControlList", [text_element("Grant", stored.acl.as_str())]),
            ],
        )),
        BucketResource::Location => xml(&text_element("LocationConstraint", DEFAULT_LOCATION)),
        _ => match stored.resources.get(&resource) {
            Some(body) => body.clone(),
            None => match resource.not_found_code() {
                Some(code) => {
                    return Err((
                        StatusCode::NOT_FOUND,
                        code,
                        format!("The bucket has no {resource} configuration."),
                    ));
                }
                None if resource == BucketResource::Referer => xml(&parent_element(
                    "RefererConfiguration",
                    [
                        text_element("AllowEmptyReferer", "true"),
                        parent_element("RefererList", []),
                    ],
                )),
                None => xml(&parent_element(resource.root_element(), [])),
            },
        },
    };
    Ok((StatusCode::OK, body))
}

fn validate_document(resource: BucketResource, body: &[u8]) -> Result<(), String> {
    let checked = match resource {
        BucketResource::Logging => decode_config::<LoggingConfig>(body).map(drop),
        BucketResource::Website => decode_config::<WebsiteConfig>(body).map(drop),
        BucketResource::Lifecycle => decode_config::<LifecycleConfig>(body).map(drop),
        BucketResource::Cors => decode_config::<CorsConfig>(body).map(drop),
        BucketResource::Referer => decode_config::<RefererConfig>(body).map(drop),
        BucketResource::Acl | BucketResource::Location => Ok(()),
    };
    checked.map_err(|e| e.to_string())
}

fn put_resource(
    stored: &mut StoredBucket,
    resource: BucketResource,
    req: &TransportRequest,
) -> Reply {
    match resource {
        BucketResource::Acl => {
            stored.acl = parse_acl_header(req)?.ok_or_else(|| {
                bad_request(OssErrorCode::InvalidArgument, "missing x-oss-acl header")
            })?;
        }
        BucketResource::Location => return Err(method_not_allowed()),
        _ => {
            let body = req.body.clone().unwrap_or_default();
            check_digest(req, &body)?;
            validate_document(resource, &body)
                .map_err(|e| bad_request(OssErrorCode::MalformedXML, e))?;
            stored.resources.insert(resource, body);
        }
    }
    Ok((StatusCode::OK, Bytes::new()))
}

fn delete_resource(stored: &mut StoredBucket, resource: BucketResource) -> Reply {
    match resource {
        BucketResource::Acl | BucketResource::Location | BucketResource::Referer => {
            Err(method_not_allowed())
        }
        BucketResource::Logging => {
            stored.resources.remove(&resource);
            Ok((StatusCode::NO_CONTENT, Bytes::new()))
        }
        _ => match stored.resources.remove(&resource) {
            Some(_) => Ok((StatusCode::NO_CONTENT, Bytes::new())),
            None => Err((
                StatusCode::NOT_FOUND,
                resource.not_found_code().unwrap_or(OssErrorCode::NoSuchKey),
                format!("The bucket has no {resource} configuration."),
            )),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alioss::oss::multimap_ext::Multimap;

    fn request(method: Method, bucket: Option<&str>, sub: Option<&str>) -> TransportRequest {
        let mut query_params = Multimap::new();
        if let Some(sub) = sub {
            query_params.add(sub, "");
        }
        TransportRequest {
            method,
            bucket: bucket.map(str::to_owned),
            query_params,
            headers: Multimap::new(),
            body: None,
        }
    }

    #[tokio::test]
    async fn test_bucket_lifecycle() {
        let transport = MemoryTransport::new();
        let resp = transport
            .send(request(Method::PUT, Some("b1-test"), None))
            .await
            .unwrap();
        assert_eq!(resp.status, StatusCode::OK);

        let resp = transport
            .send(request(Method::GET, Some("b1-test"), Some("lifecycle")))
            .await
            .unwrap();
        assert_eq!(resp.status, StatusCode::NOT_FOUND);
        assert!(String::from_utf8_lossy(&resp.body).contains("NoSuchLifecycle"));

        let resp = transport
            .send(request(Method::GET, Some("b1-test"), Some("logging")))
            .await
            .unwrap();
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(transport.request_count(), 3);
    }

    #[tokio::test]
    async fn test_foreign_bucket_denied() {
        let transport = MemoryTransport::new().with_foreign_bucket("not-mine");
        let resp = transport
            .send(request(Method::GET, Some("not-mine"), Some("acl")))
            .await
            .unwrap();
        assert_eq!(resp.status, StatusCode::FORBIDDEN);
    }
}
