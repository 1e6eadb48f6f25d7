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
use crate::oss::utils::{check_bucket_name, get_text_default, parent_element, text_element};
use xmltree::Element;

/// Access logging: the bucket receiving the log objects, and the key prefix of those objects.
///
/// A bucket without logging reads back as the empty value (both fields `""`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    pub target_bucket: String,
    pub target_prefix: String,
}

impl LoggingConfig {
    pub fn new(target_bucket: impl Into<String>, target_prefix: impl Into<String>) -> Self {
        Self {
            target_bucket: target_bucket.into(),
            target_prefix: target_prefix.into(),
        }
    }

    /// Whether logging is switched on.
    pub fn is_enabled(&self) -> bool {
        !self.target_bucket.is_empty()
    }
}

impl BucketConfig for LoggingConfig {
    const RESOURCE: BucketResource = BucketResource::Logging;

    fn from_xml(root: &Element) -> Result<Self, ValidationErr> {
        Ok(match root.get_child("LoggingEnabled") {
            Some(enabled) => LoggingConfig {
                target_bucket: get_text_default(enabled, "TargetBucket"),
                target_prefix: get_text_default(enabled, "TargetPrefix"),
            },
            None => LoggingConfig::default(),
        })
    }

    fn empty() -> Option<Self> {
        Some(LoggingConfig::default())
    }
}

impl WritableConfig for LoggingConfig {
    fn validate(&self) -> Result<(), ValidationErr> {
        if self.target_bucket.is_empty() {
            return Err(ValidationErr::InvalidLoggingConfig(
                "target bucket must not be empty, delete the logging configuration to disable logging".into(),
            ));
        }
        check_bucket_name(&self.target_bucket)
    }

    fn to_xml_element(&self) -> Element {
        parent_element(
            Self::RESOURCE.root_element(),
            [parent_element(
                "LoggingEnabled",
                [
                    text_element("TargetBucket", self.target_bucket.as_str()),
                    text_element("TargetPrefix", self.target_prefix.as_str()),
                ],
            )],
        )
    }
}

impl DeletableConfig for LoggingConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oss::types::bucket_config::decode_config;

    #[test]
    fn test_roundtrip() {
        let config = LoggingConfig::new("log-bucket", "access/");
        config.validate().unwrap();
        let decoded: LoggingConfig = decode_config(config.to_xml().unwrap().as_bytes()).unwrap();
        assert_eq!(decoded, config);
        assert!(decoded.is_enabled());
    }

    #[test]
    fn test_absent_logging_is_empty() {
        let bodies: [&[u8]; 4] = [
            b"",
            b"  \n",
            b"<BucketLoggingStatus/>",
            b"<BucketLoggingStatus></BucketLoggingStatus>",
        ];
        for body in bodies {
            let decoded: LoggingConfig = decode_config(body).unwrap();
            assert_eq!(decoded, LoggingConfig::new("", ""));
            assert!(!decoded.is_enabled());
        }
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            LoggingConfig::new("", "x").validate(),
            Err(ValidationErr::InvalidLoggingConfig(_))
        ));
        assert!(matches!(
            LoggingConfig::new("Bad_Bucket", "x").validate(),
            Err(ValidationErr::InvalidBucketName { .. })
        ));
    }
}
