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

use crate::oss::error::{Error, ValidationErr};
use crate::oss::response::response_traits::HasRequestId;
use crate::oss::transport::TransportResponse;
use crate::oss::types::{BucketInfo, FromOssResponse, OssRequest, Owner};
use crate::oss::utils::{children_named, get_text_default, get_text_option, parse_bool};
use crate::impl_has_oss_fields;
use async_trait::async_trait;
use bytes::Bytes;
use http::HeaderMap;
use xmltree::Element;

/// Response of [list_buckets()](crate::oss::client::OssClient::list_buckets) API
#[derive(Clone, Debug)]
pub struct ListBucketsResponse {
    request: OssRequest,
    headers: HeaderMap,
    body: Bytes,

    owner: Owner,
    buckets: Vec<BucketInfo>,
    is_truncated: bool,
    next_marker: Option<String>,
}
impl_has_oss_fields!(ListBucketsResponse);

impl HasRequestId for ListBucketsResponse {}

impl ListBucketsResponse {
    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    pub fn buckets(&self) -> &[BucketInfo] {
        &self.buckets
    }

    /// Whether more buckets are available after [`next_marker`](Self::next_marker).
    pub fn is_truncated(&self) -> bool {
        self.is_truncated
    }

    pub fn next_marker(&self) -> Option<&str> {
        self.next_marker.as_deref()
    }

    fn parse(body: &[u8]) -> Result<(Owner, Vec<BucketInfo>, bool, Option<String>), ValidationErr> {
        let root = Element::parse(body)?;
        if root.name != "ListAllMyBucketsResult" {
            return Err(ValidationErr::UnexpectedRootElement {
                expected: "ListAllMyBucketsResult",
                found: root.name,
            });
        }

        let owner = root.get_child("Owner").map(Owner::from_xml).unwrap_or_default();
        let buckets = match root.get_child("Buckets") {
            Some(list) => children_named(list, "Bucket")
                .map(BucketInfo::from_xml)
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };
        let is_truncated = match get_text_default(&root, "IsTruncated").as_str() {
            "" => false,
            v => parse_bool("IsTruncated", v)?,
        };
        let next_marker = get_text_option(&root, "NextMarker").filter(|m| !m.is_empty());

        Ok((owner, buckets, is_truncated, next_marker))
    }
}

#[async_trait]
impl FromOssResponse for ListBucketsResponse {
    async fn from_oss_response(
        request: OssRequest,
        response: Result<TransportResponse, Error>,
    ) -> Result<Self, Error> {
        let resp = response?;
        let (owner, buckets, is_truncated, next_marker) = Self::parse(&resp.body)?;
        Ok(Self {
            request,
            headers: resp.headers,
            body: resp.body,
            owner,
            buckets,
            is_truncated,
            next_marker,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_listing() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListAllMyBucketsResult>
  <Prefix>my</Prefix>
  <Marker>mybucket</Marker>
  <MaxKeys>10</MaxKeys>
  <IsTruncated>true</IsTruncated>
  <NextMarker>mybucket10</NextMarker>
  <Owner>
    <ID>512**</ID>
    <DisplayName>51264</DisplayName>
  </Owner>
  <Buckets>
    <Bucket>
      <CreationDate>2014-05-14T11:18:32.000Z</CreationDate>
      <ExtranetEndpoint>oss-cn-hangzhou.aliyuncs.com</ExtranetEndpoint>
      <IntranetEndpoint>oss-cn-hangzhou-internal.aliyuncs.com</IntranetEndpoint>
      <Location>oss-cn-hangzhou</Location>
      <Name>mybucket01</Name>
      <StorageClass>Standard</StorageClass>
    </Bucket>
    <Bucket>
      <CreationDate>2014-05-15T11:18:32.000Z</CreationDate>
      <Location>oss-cn-shanghai</Location>
      <Name>mybucket02</Name>
    </Bucket>
  </Buckets>
</ListAllMyBucketsResult>"#;
        let (owner, buckets, truncated, marker) =
            ListBucketsResponse::parse(xml.as_bytes()).unwrap();
        assert_eq!(owner.id, "512**");
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].name, "mybucket01");
        assert_eq!(buckets[1].location, "oss-cn-shanghai");
        assert_eq!(buckets[1].storage_class, None);
        assert!(truncated);
        assert_eq!(marker.as_deref(), Some("mybucket10"));
    }

    #[test]
    fn test_parse_empty_listing() {
        let xml = "<ListAllMyBucketsResult><Owner><ID>1</ID></Owner><Buckets/></ListAllMyBucketsResult>";
        let (_, buckets, truncated, marker) = ListBucketsResponse::parse(xml.as_bytes()).unwrap();
        assert!(buckets.is_empty());
        assert!(!truncated);
        assert_eq!(marker, None);
    }

    #[test]
    fn test_parse_wrong_root() {
        assert!(matches!(
            ListBucketsResponse::parse(b"<Error><Code>x</Code></Error>"),
            Err(ValidationErr::UnexpectedRootElement { .. })
        ));
    }
}
