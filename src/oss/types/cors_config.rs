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
use crate::oss::utils::{children_named, get_text_option, parent_element, text_element};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use xmltree::Element;

/// Maximum number of rules in one CORS configuration
pub const MAX_CORS_RULES: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CorsMethod {
    Get,
    Put,
    Delete,
    Post,
    Head,
}

impl CorsMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            CorsMethod::Get => "GET",
            CorsMethod::Put => "PUT",
            CorsMethod::Delete => "DELETE",
            CorsMethod::Post => "POST",
            CorsMethod::Head => "HEAD",
        }
    }
}

impl FromStr for CorsMethod {
    type Err = ValidationErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(CorsMethod::Get),
            "PUT" => Ok(CorsMethod::Put),
            "DELETE" => Ok(CorsMethod::Delete),
            "POST" => Ok(CorsMethod::Post),
            "HEAD" => Ok(CorsMethod::Head),
            _ => Err(ValidationErr::InvalidCorsMethod(s.to_owned())),
        }
    }
}

impl fmt::Display for CorsMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One cross-origin access rule. Sets compare regardless of the order the service returns them in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsRule {
    pub allowed_origins: BTreeSet<String>,
    pub allowed_methods: BTreeSet<CorsMethod>,
    pub allowed_headers: BTreeSet<String>,
    pub expose_headers: BTreeSet<String>,
    pub max_age_seconds: Option<u32>,
}

impl CorsRule {
    pub fn new<O, S, M>(allowed_origins: O, allowed_methods: M) -> Self
    where
        O: IntoIterator<Item = S>,
        S: Into<String>,
        M: IntoIterator<Item = CorsMethod>,
    {
        Self {
            allowed_origins: allowed_origins.into_iter().map(Into::into).collect(),
            allowed_methods: allowed_methods.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn with_allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_expose_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expose_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_max_age_seconds(mut self, seconds: u32) -> Self {
        self.max_age_seconds = Some(seconds);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationErr> {
        if self.allowed_origins.is_empty() {
            return Err(ValidationErr::InvalidCorsRule(
                "at least one allowed origin is required".into(),
            ));
        }
        if self.allowed_methods.is_empty() {
            return Err(ValidationErr::InvalidCorsRule(
                "at least one allowed method is required".into(),
            ));
        }
        for origin in &self.allowed_origins {
            if origin.matches('*').count() > 1 {
                return Err(ValidationErr::InvalidCorsRule(format!(
                    "allowed origin '{origin}' may contain at most one '*'"
                )));
            }
        }
        for header in &self.allowed_headers {
            if header.matches('*').count() > 1 {
                return Err(ValidationErr::InvalidCorsRule(format!(
                    "allowed header '{header}' may contain at most one '*'"
                )));
            }
        }
        if let Some(header) = self.expose_headers.iter().find(|h| h.contains('*')) {
            return Err(ValidationErr::InvalidCorsRule(format!(
                "expose header '{header}' must not contain '*'"
            )));
        }
        Ok(())
    }

    fn from_xml(element: &Element) -> Result<Self, ValidationErr> {
        let texts = |tag: &'static str| {
            children_named(element, tag)
                .map(|e| e.get_text().unwrap_or_default().into_owned())
                .collect::<BTreeSet<String>>()
        };
        let allowed_methods = children_named(element, "AllowedMethod")
            .map(|e| e.get_text().unwrap_or_default().parse::<CorsMethod>())
            .collect::<Result<BTreeSet<_>, _>>()?;
        let max_age_seconds = match get_text_option(element, "MaxAgeSeconds") {
            Some(s) => Some(s.trim().parse()?),
            None => None,
        };

        Ok(CorsRule {
            allowed_origins: texts("AllowedOrigin"),
            allowed_methods,
            allowed_headers: texts("AllowedHeader"),
            expose_headers: texts("ExposeHeader"),
            max_age_seconds,
        })
    }

    fn to_xml_element(&self) -> Element {
        let mut children: Vec<Element> = Vec::new();
        children.extend(
            self.allowed_origins
                .iter()
                .map(|o| text_element("AllowedOrigin", o.as_str())),
        );
        children.extend(
            self.allowed_methods
                .iter()
                .map(|m| text_element("AllowedMethod", m.as_str())),
        );
        children.extend(
            self.allowed_headers
                .iter()
                .map(|h| text_element("AllowedHeader", h.as_str())),
        );
        children.extend(
            self.expose_headers
                .iter()
                .map(|h| text_element("ExposeHeader", h.as_str())),
        );
        if let Some(max_age) = self.max_age_seconds {
            children.push(text_element("MaxAgeSeconds", max_age.to_string()));
        }
        parent_element("CORSRule", children)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsConfig {
    pub rules: Vec<CorsRule>,
}

impl CorsConfig {
    pub fn new(rules: Vec<CorsRule>) -> Self {
        Self { rules }
    }
}

impl BucketConfig for CorsConfig {
    const RESOURCE: BucketResource = BucketResource::Cors;

    fn from_xml(root: &Element) -> Result<Self, ValidationErr> {
        let rules = children_named(root, "CORSRule")
            .map(CorsRule::from_xml)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CorsConfig { rules })
    }
}

impl WritableConfig for CorsConfig {
    fn validate(&self) -> Result<(), ValidationErr> {
        if self.rules.is_empty() {
            return Err(ValidationErr::EmptyRules {
                resource: Self::RESOURCE,
            });
        }
        if self.rules.len() > MAX_CORS_RULES {
            return Err(ValidationErr::TooManyRules {
                resource: Self::RESOURCE,
                max: MAX_CORS_RULES,
                count: self.rules.len(),
            });
        }
        self.rules.iter().try_for_each(CorsRule::validate)
    }

    fn to_xml_element(&self) -> Element {
        parent_element(
            Self::RESOURCE.root_element(),
            self.rules.iter().map(CorsRule::to_xml_element),
        )
    }
}

impl DeletableConfig for CorsConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oss::types::bucket_config::decode_config;
    use quickcheck::{Arbitrary, Gen};

    fn sample_rule() -> CorsRule {
        CorsRule::new(["*"], [CorsMethod::Head, CorsMethod::Get])
            .with_allowed_headers(["*"])
            .with_max_age_seconds(1000)
    }

    #[test]
    fn test_roundtrip() {
        let config = CorsConfig::new(vec![
            sample_rule(),
            CorsRule::new(
                ["https://a.example.com", "https://b.example.com"],
                [CorsMethod::Put, CorsMethod::Post, CorsMethod::Delete],
            )
            .with_expose_headers(["x-oss-request-id", "ETag"]),
        ]);
        config.validate().unwrap();
        let decoded: CorsConfig = decode_config(config.to_xml().unwrap().as_bytes()).unwrap();
        assert_eq!(decoded, config);
    }

    #[test]
    fn test_decode_order_insensitive() {
        let xml = "<CORSConfiguration><CORSRule>\
            <MaxAgeSeconds>1000</MaxAgeSeconds>\
            <AllowedMethod>GET</AllowedMethod><AllowedOrigin>*</AllowedOrigin>\
            <AllowedMethod>HEAD</AllowedMethod><AllowedHeader>*</AllowedHeader>\
            </CORSRule><ResponseVary>false</ResponseVary></CORSConfiguration>";
        let decoded: CorsConfig = decode_config(xml.as_bytes()).unwrap();
        assert_eq!(decoded, CorsConfig::new(vec![sample_rule()]));
    }

    #[test]
    fn test_decode_unknown_method() {
        let xml = "<CORSConfiguration><CORSRule><AllowedOrigin>*</AllowedOrigin>\
            <AllowedMethod>PATCH</AllowedMethod></CORSRule></CORSConfiguration>";
        assert!(matches!(
            decode_config::<CorsConfig>(xml.as_bytes()),
            Err(ValidationErr::InvalidCorsMethod(m)) if m == "PATCH"
        ));
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            CorsConfig::default().validate(),
            Err(ValidationErr::EmptyRules { .. })
        ));
        assert!(matches!(
            CorsConfig::new(vec![sample_rule(); MAX_CORS_RULES + 1]).validate(),
            Err(ValidationErr::TooManyRules { count: 11, .. })
        ));

        let bad_rules = [
            CorsRule::new(Vec::<String>::new(), [CorsMethod::Get]),
            CorsRule::new(["*"], []),
            CorsRule::new(["http://*.*.example.com"], [CorsMethod::Get]),
            CorsRule::new(["*"], [CorsMethod::Get]).with_allowed_headers(["x-*-*"]),
            CorsRule::new(["*"], [CorsMethod::Get]).with_expose_headers(["x-oss-*"]),
        ];
        for rule in bad_rules {
            assert!(
                matches!(
                    CorsConfig::new(vec![rule.clone()]).validate(),
                    Err(ValidationErr::InvalidCorsRule(_))
                ),
                "expected {rule:?} to be rejected"
            );
        }
    }

    #[derive(Clone, Debug)]
    struct Token(String);

    impl Arbitrary for Token {
        fn arbitrary(g: &mut Gen) -> Self {
            let len = usize::arbitrary(g) % 12 + 1;
            let chars: Vec<char> = "abcdefghijklmnopqrstuvwxyz0123456789-".chars().collect();
            Token((0..len).map(|_| *g.choose(&chars).unwrap()).collect())
        }
    }

    quickcheck! {
        fn prop_cors_sets_roundtrip(
            origins: Vec<Token>,
            headers: Vec<Token>,
            methods: Vec<u8>,
            max_age: Option<u32>
        ) -> bool {
            let all = [
                CorsMethod::Get,
                CorsMethod::Put,
                CorsMethod::Delete,
                CorsMethod::Post,
                CorsMethod::Head,
            ];
            let mut rule = CorsRule::new(
                origins.into_iter().map(|t| t.0),
                methods.into_iter().map(|m| all[m as usize % all.len()]),
            )
            .with_allowed_headers(headers.into_iter().map(|t| t.0));
            rule.max_age_seconds = max_age;
            let config = CorsConfig::new(vec![rule]);
            let xml = config.to_xml().unwrap();
            decode_config::<CorsConfig>(xml.as_bytes()).unwrap() == config
        }
    }
}
