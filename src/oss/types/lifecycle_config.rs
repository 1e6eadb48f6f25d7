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
use crate::oss::types::basic_types::StorageClass;
use crate::oss::types::bucket_config::{
    BucketConfig, BucketResource, DeletableConfig, WritableConfig,
};
use crate::oss::utils::{
    children_named, from_iso8601_date, get_text_default, get_text_option, parent_element,
    text_element, to_iso8601_date,
};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;
use xmltree::Element;

/// Maximum number of rules in one lifecycle configuration
pub const MAX_LIFECYCLE_RULES: usize = 1000;

/// Maximum length of a lifecycle rule id
pub const MAX_LIFECYCLE_RULE_ID_LEN: usize = 255;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RuleStatus {
    #[default]
    Enabled,
    Disabled,
}

impl RuleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleStatus::Enabled => "Enabled",
            RuleStatus::Disabled => "Disabled",
        }
    }
}

impl FromStr for RuleStatus {
    type Err = ValidationErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Enabled" => Ok(RuleStatus::Enabled),
            "Disabled" => Ok(RuleStatus::Disabled),
            other => Err(ValidationErr::InvalidLifecycleRule(format!(
                "status must be Enabled or Disabled, got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When a lifecycle action applies: a number of days after last modification, or
/// to objects last modified before a fixed date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleExpiration {
    Days(u32),
    Date(NaiveDate),
}

impl LifecycleExpiration {
    /// Writes the variant as `<Days>` or `<{date_tag}>`.
    fn to_xml_elements(self, date_tag: &str) -> Element {
        match self {
            LifecycleExpiration::Days(days) => text_element("Days", days.to_string()),
            LifecycleExpiration::Date(date) => text_element(date_tag, to_iso8601_date(date)),
        }
    }

    /// Reads the variant from an action element. Both date spellings are accepted.
    fn from_xml(element: &Element) -> Result<Option<Self>, ValidationErr> {
        let days = get_text_option(element, "Days");
        let date = get_text_option(element, "CreatedBeforeDate")
            .or_else(|| get_text_option(element, "Date"));

        match (days, date) {
            (Some(_), Some(_)) => Err(ValidationErr::InvalidDateAndDays(format!(
                "<{}> must contain either Days or a date, not both",
                element.name
            ))),
            (Some(days), None) => Ok(Some(LifecycleExpiration::Days(days.trim().parse()?))),
            (None, Some(date)) => Ok(Some(LifecycleExpiration::Date(from_iso8601_date(&date)?))),
            (None, None) => Ok(None),
        }
    }
}

/// Moves matching objects to another storage class
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StorageTransition {
    pub point: LifecycleExpiration,
    pub storage_class: StorageClass,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LifecycleRule {
    pub id: String,
    /// Object key prefix the rule applies to; empty means the whole bucket
    pub prefix: String,
    pub status: RuleStatus,
    pub expiration: Option<LifecycleExpiration>,
    pub abort_multipart_upload: Option<LifecycleExpiration>,
    pub transitions: Vec<StorageTransition>,
}

impl LifecycleRule {
    pub fn new(id: impl Into<String>, prefix: impl Into<String>, status: RuleStatus) -> Self {
        Self {
            id: id.into(),
            prefix: prefix.into(),
            status,
            expiration: None,
            abort_multipart_upload: None,
            transitions: Vec::new(),
        }
    }

    pub fn with_expiration(mut self, expiration: LifecycleExpiration) -> Self {
        self.expiration = Some(expiration);
        self
    }

    pub fn with_abort_multipart_upload(mut self, point: LifecycleExpiration) -> Self {
        self.abort_multipart_upload = Some(point);
        self
    }

    pub fn with_transition(
        mut self,
        point: LifecycleExpiration,
        storage_class: StorageClass,
    ) -> Self {
        self.transitions.push(StorageTransition {
            point,
            storage_class,
        });
        self
    }

    pub fn validate(&self) -> Result<(), ValidationErr> {
        if self.id.len() > MAX_LIFECYCLE_RULE_ID_LEN {
            return Err(ValidationErr::InvalidLifecycleRuleId);
        }
        if self.expiration.is_none()
            && self.abort_multipart_upload.is_none()
            && self.transitions.is_empty()
        {
            return Err(ValidationErr::MissingLifecycleAction(self.id.clone()));
        }

        let points = self
            .expiration
            .iter()
            .chain(self.abort_multipart_upload.iter())
            .chain(self.transitions.iter().map(|t| &t.point));
        for point in points {
            if *point == LifecycleExpiration::Days(0) {
                return Err(ValidationErr::InvalidLifecycleRule(format!(
                    "days must be positive in rule '{}'",
                    self.id
                )));
            }
        }

        for t in &self.transitions {
            if t.storage_class == StorageClass::Standard {
                return Err(ValidationErr::InvalidLifecycleRule(format!(
                    "cannot transition to Standard in rule '{}'",
                    self.id
                )));
            }
        }
        Ok(())
    }

    fn from_xml(element: &Element) -> Result<Self, ValidationErr> {
        let status = match get_text_option(element, "Status") {
            Some(s) => s.parse()?,
            None => RuleStatus::Enabled,
        };

        let expiration = match element.get_child("Expiration") {
            Some(e) => LifecycleExpiration::from_xml(e)?,
            None => None,
        };
        let abort_multipart_upload = match element.get_child("AbortMultipartUpload") {
            Some(e) => LifecycleExpiration::from_xml(e)?,
            None => None,
        };

        let mut transitions = Vec::new();
        for t in children_named(element, "Transition") {
            let Some(point) = LifecycleExpiration::from_xml(t)? else {
                return Err(ValidationErr::xml_error(
                    "<Transition> must contain Days or CreatedBeforeDate",
                ));
            };
            transitions.push(StorageTransition {
                point,
                storage_class: get_text_default(t, "StorageClass").parse()?,
            });
        }

        Ok(LifecycleRule {
            id: get_text_default(element, "ID"),
            prefix: get_text_default(element, "Prefix"),
            status,
            expiration,
            abort_multipart_upload,
            transitions,
        })
    }

    fn to_xml_element(&self) -> Element {
        let mut children = vec![
            text_element("ID", self.id.as_str()),
            text_element("Prefix", self.prefix.as_str()),
            text_element("Status", self.status.as_str()),
        ];
        if let Some(expiration) = self.expiration {
            children.push(parent_element(
                "Expiration",
                [expiration.to_xml_elements("Date")],
            ));
        }
        if let Some(abort) = self.abort_multipart_upload {
            children.push(parent_element(
                "AbortMultipartUpload",
                [abort.to_xml_elements("CreatedBeforeDate")],
            ));
        }
        for t in &self.transitions {
            children.push(parent_element(
                "Transition",
                [
                    t.point.to_xml_elements("CreatedBeforeDate"),
                    text_element("StorageClass", t.storage_class.as_str()),
                ],
            ));
        }
        parent_element("Rule", children)
    }
}

#[derive(PartialEq, Eq, Clone, Debug, Default)]
/// Lifecycle configuration
pub struct LifecycleConfig {
    pub rules: Vec<LifecycleRule>,
}

impl LifecycleConfig {
    pub fn new(rules: Vec<LifecycleRule>) -> Self {
        Self { rules }
    }
}

impl BucketConfig for LifecycleConfig {
    const RESOURCE: BucketResource = BucketResource::Lifecycle;

    fn from_xml(root: &Element) -> Result<Self, ValidationErr> {
        let rules = children_named(root, "Rule")
            .map(LifecycleRule::from_xml)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(LifecycleConfig { rules })
    }
}

impl WritableConfig for LifecycleConfig {
    fn validate(&self) -> Result<(), ValidationErr> {
        if self.rules.is_empty() {
            return Err(ValidationErr::EmptyRules {
                resource: Self::RESOURCE,
            });
        }
        if self.rules.len() > MAX_LIFECYCLE_RULES {
            return Err(ValidationErr::TooManyRules {
                resource: Self::RESOURCE,
                max: MAX_LIFECYCLE_RULES,
                count: self.rules.len(),
            });
        }
        self.rules.iter().try_for_each(LifecycleRule::validate)
    }

    fn to_xml_element(&self) -> Element {
        parent_element(
            Self::RESOURCE.root_element(),
            self.rules.iter().map(LifecycleRule::to_xml_element),
        )
    }
}

impl DeletableConfig for LifecycleConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oss::types::bucket_config::decode_config;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_and_date_rules_roundtrip() {
        let config = LifecycleConfig::new(vec![
            LifecycleRule::new("rule-days", "days/", RuleStatus::Enabled)
                .with_expiration(LifecycleExpiration::Days(356)),
            LifecycleRule::new("rule-date", "date/", RuleStatus::Disabled)
                .with_expiration(LifecycleExpiration::Date(date(2100, 12, 25))),
        ]);
        config.validate().unwrap();

        let xml = config.to_xml().unwrap();
        assert!(xml.contains("<Expiration><Days>356</Days></Expiration>"));
        assert!(xml.contains("<Expiration><Date>2100-12-25T00:00:00.000Z</Date></Expiration>"));

        let decoded: LifecycleConfig = decode_config(xml.as_bytes()).unwrap();
        assert_eq!(decoded, config);
        assert_eq!(
            decoded.rules[0].expiration,
            Some(LifecycleExpiration::Days(356))
        );
        assert_eq!(
            decoded.rules[1].expiration,
            Some(LifecycleExpiration::Date(date(2100, 12, 25)))
        );
    }

    #[test]
    fn test_abort_and_transition_roundtrip() {
        let config = LifecycleConfig::new(vec![
            LifecycleRule::new("archive", "", RuleStatus::Enabled)
                .with_abort_multipart_upload(LifecycleExpiration::Days(7))
                .with_transition(LifecycleExpiration::Days(30), StorageClass::IA)
                .with_transition(
                    LifecycleExpiration::Date(date(2099, 1, 1)),
                    StorageClass::Archive,
                ),
        ]);
        config.validate().unwrap();
        let decoded: LifecycleConfig = decode_config(config.to_xml().unwrap().as_bytes()).unwrap();
        assert_eq!(decoded, config);
    }

    #[test]
    fn test_decode_both_days_and_date_fails() {
        let xml = "<LifecycleConfiguration><Rule><ID>x</ID><Prefix/><Status>Enabled</Status>\
            <Expiration><Days>3</Days><Date>2100-12-25T00:00:00.000Z</Date></Expiration>\
            </Rule></LifecycleConfiguration>";
        assert!(matches!(
            decode_config::<LifecycleConfig>(xml.as_bytes()),
            Err(ValidationErr::InvalidDateAndDays(_))
        ));
    }

    #[test]
    fn test_decode_tolerates_order_and_unknown_elements() {
        let xml = "<LifecycleConfiguration><Rule>\
            <Expiration><CreatedBeforeDate>2100-12-25T00:00:00.000Z</CreatedBeforeDate></Expiration>\
            <Tag><Key>k</Key><Value>v</Value></Tag>\
            <Status>Enabled</Status><Prefix>p/</Prefix><ID>late-id</ID>\
            </Rule></LifecycleConfiguration>";
        let config: LifecycleConfig = decode_config(xml.as_bytes()).unwrap();
        let rule = &config.rules[0];
        assert_eq!(rule.id, "late-id");
        assert_eq!(rule.prefix, "p/");
        assert_eq!(
            rule.expiration,
            Some(LifecycleExpiration::Date(date(2100, 12, 25)))
        );
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            LifecycleConfig::default().validate(),
            Err(ValidationErr::EmptyRules {
                resource: BucketResource::Lifecycle
            })
        ));

        let no_action =
            LifecycleConfig::new(vec![LifecycleRule::new("a", "", RuleStatus::Enabled)]);
        assert!(matches!(
            no_action.validate(),
            Err(ValidationErr::MissingLifecycleAction(_))
        ));

        let long_id = LifecycleConfig::new(vec![
            LifecycleRule::new("x".repeat(256), "", RuleStatus::Enabled)
                .with_expiration(LifecycleExpiration::Days(1)),
        ]);
        assert!(matches!(
            long_id.validate(),
            Err(ValidationErr::InvalidLifecycleRuleId)
        ));

        let zero_days = LifecycleConfig::new(vec![
            LifecycleRule::new("z", "", RuleStatus::Enabled)
                .with_expiration(LifecycleExpiration::Days(0)),
        ]);
        assert!(matches!(
            zero_days.validate(),
            Err(ValidationErr::InvalidLifecycleRule(_))
        ));

        let rule = LifecycleRule::new("r", "", RuleStatus::Enabled)
            .with_expiration(LifecycleExpiration::Days(1));
        let too_many = LifecycleConfig::new(vec![rule; MAX_LIFECYCLE_RULES + 1]);
        assert!(matches!(
            too_many.validate(),
            Err(ValidationErr::TooManyRules { max: 1000, .. })
        ));
    }

    #[test]
    fn test_wrong_root_rejected() {
        assert!(matches!(
            decode_config::<LifecycleConfig>(b"<CORSConfiguration/>"),
            Err(ValidationErr::UnexpectedRootElement {
                expected: "LifecycleConfiguration",
                ..
            })
        ));
    }
}
