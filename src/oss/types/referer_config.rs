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

use crate::oss::error::ValidationErr;
use crate::oss::types::bucket_config::{BucketConfig, BucketResource, WritableConfig};
use crate::oss::utils::{children_named, get_text_option, parse_bool, parent_element, text_element};
use std::collections::BTreeSet;
use xmltree::Element;

/// Hotlink protection: the `Referer` values allowed to read from the bucket.
///
/// Every bucket has one; a fresh bucket allows empty referers and lists none.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefererConfig {
    pub allow_empty_referer: bool,
    pub referers: BTreeSet<String>,
}

impl Default for RefererConfig {
    fn default() -> Self {
        Self {
            allow_empty_referer: true,
            referers: BTreeSet::new(),
        }
    }
}

impl RefererConfig {
    pub fn new<I, S>(allow_empty_referer: bool, referers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allow_empty_referer,
            referers: referers.into_iter().map(Into::into).collect(),
        }
    }
}

impl BucketConfig for RefererConfig {
    const RESOURCE: BucketResource = BucketResource::Referer;

    fn from_xml(root: &Element) -> Result<Self, ValidationErr> {
        let allow_empty_referer = match get_text_option(root, "AllowEmptyReferer") {
            Some(v) => parse_bool("AllowEmptyReferer", &v)?,
            None => true,
        };
        let referers = root
            .get_child("RefererList")
            .map(|list| {
                children_named(list, "Referer")
                    .map(|e| e.get_text().unwrap_or_default().into_owned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(RefererConfig {
            allow_empty_referer,
            referers,
        })
    }
}

impl WritableConfig for RefererConfig {
    fn to_xml_element(&self) -> Element {
        parent_element(
            Self::RESOURCE.root_element(),
            [
                text_element(
                    "AllowEmptyReferer",
                    if self.allow_empty_referer { "true" } else { "false" },
                ),
                parent_element(
                    "RefererList",
                    self.referers
                        .iter()
                        .map(|r| text_element("Referer", r.as_str())),
                ),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oss::types::bucket_config::decode_config;

    #[test]
    fn test_roundtrip() {
        let config = RefererConfig::new(true, ["http://hello.com", "mibrowser:home"]);
        let decoded: RefererConfig = decode_config(config.to_xml().unwrap().as_bytes()).unwrap();
        assert_eq!(decoded, config);
    }

    #[test]
    fn test_unicode_raw_document() {
        let xml = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
            <RefererConfiguration><AllowEmptyReferer>true</AllowEmptyReferer>\
            <RefererList><Referer>阿里云</Referer></RefererList></RefererConfiguration>";
        let decoded: RefererConfig = decode_config(xml.as_bytes()).unwrap();
        assert!(decoded.allow_empty_referer);
        assert_eq!(decoded.referers, BTreeSet::from(["阿里云".to_owned()]));

        let encoded = decoded.to_xml().unwrap();
        assert!(encoded.contains("<Referer>阿里云</Referer>"));
    }

    #[test]
    fn test_special_characters_escaped() {
        let config = RefererConfig::new(false, ["http://a.com/?x=1&y=<2>"]);
        let xml = config.to_xml().unwrap();
        assert!(xml.contains("&amp;"));
        assert!(xml.contains("&lt;2"));
        assert_eq!(decode_config::<RefererConfig>(xml.as_bytes()).unwrap(), config);
    }

    #[test]
    fn test_empty_list() {
        let xml = "<RefererConfiguration><AllowEmptyReferer>false</AllowEmptyReferer>\
            <RefererList/></RefererConfiguration>";
        let decoded: RefererConfig = decode_config(xml.as_bytes()).unwrap();
        assert_eq!(decoded, RefererConfig::new(false, Vec::<String>::new()));
    }

    quickcheck! {
        fn prop_referer_set_roundtrip(allow_empty: bool, referers: Vec<String>) -> bool {
            // xml cannot carry control characters; keep alphanumerics (Unicode included)
            let referers: BTreeSet<String> = referers
                .into_iter()
                .map(|r| r.chars().filter(|c| c.is_alphanumeric()).collect::<String>())
                .filter(|r| !r.is_empty())
                .collect();
            let config = RefererConfig { allow_empty_referer: allow_empty, referers };
            let xml = config.to_xml().unwrap();
            decode_config::<RefererConfig>(xml.as_bytes()).unwrap() == config
        }
    }
}
