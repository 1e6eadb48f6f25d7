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
use crate::oss::types::bucket_config::{
    BucketConfig, BucketResource, DeletableConfig, WritableConfig,
};
use crate::oss::utils::{get_text_default, parent_element, text_element};
use xmltree::Element;

/// Static website hosting: the default page and the page served on 404
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WebsiteConfig {
    pub index_file: String,
    pub error_file: String,
}

impl WebsiteConfig {
    pub fn new(index_file: impl Into<String>, error_file: impl Into<String>) -> Self {
        Self {
            index_file: index_file.into(),
            error_file: error_file.into(),
        }
    }
}

impl BucketConfig for WebsiteConfig {
    const RESOURCE: BucketResource = BucketResource::Website;

    fn from_xml(root: &Element) -> Result<Self, ValidationErr> {
        let index_file = root
            .get_child("IndexDocument")
            .map(|e| get_text_default(e, "Suffix"))
            .unwrap_or_default();
        let error_file = root
            .get_child("ErrorDocument")
            .map(|e| get_text_default(e, "Key"))
            .unwrap_or_default();
        Ok(WebsiteConfig {
            index_file,
            error_file,
        })
    }
}

impl WritableConfig for WebsiteConfig {
    fn validate(&self) -> Result<(), ValidationErr> {
        if self.index_file.is_empty() {
            return Err(ValidationErr::InvalidWebsiteConfig(
                "index file must not be empty".into(),
            ));
        }
        // the index suffix is appended to directory paths
        if self.index_file.contains('/') {
            return Err(ValidationErr::InvalidWebsiteConfig(format!(
                "index file '{}' must not contain '/'",
                self.index_file
            )));
        }
        Ok(())
    }

    fn to_xml_element(&self) -> Element {
        let mut children = vec![parent_element(
            "IndexDocument",
            [text_element("Suffix", self.index_file.as_str())],
        )];
        if !self.error_file.is_empty() {
            children.push(parent_element(
                "ErrorDocument",
                [text_element("Key", self.error_file.as_str())],
            ));
        }
        parent_element(Self::RESOURCE.root_element(), children)
    }
}

impl DeletableConfig for WebsiteConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oss::types::bucket_config::decode_config;

    #[test]
    fn test_roundtrip() {
        let config = WebsiteConfig::new("index.html", "error.html");
        config.validate().unwrap();
        let xml = config.to_xml().unwrap();
        assert!(xml.contains(
            "<WebsiteConfiguration><IndexDocument><Suffix>index.html</Suffix></IndexDocument>\
             <ErrorDocument><Key>error.html</Key></ErrorDocument></WebsiteConfiguration>"
        ));
        assert_eq!(decode_config::<WebsiteConfig>(xml.as_bytes()).unwrap(), config);
    }

    #[test]
    fn test_error_document_omitted_when_empty() {
        let config = WebsiteConfig::new("index.html", "");
        let xml = config.to_xml().unwrap();
        assert!(!xml.contains("ErrorDocument"));
        assert_eq!(decode_config::<WebsiteConfig>(xml.as_bytes()).unwrap(), config);
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            WebsiteConfig::new("", "error.html").validate(),
            Err(ValidationErr::InvalidWebsiteConfig(_))
        ));
        assert!(matches!(
            WebsiteConfig::new("pages/index.html", "").validate(),
            Err(ValidationErr::InvalidWebsiteConfig(_))
        ));
    }
}
