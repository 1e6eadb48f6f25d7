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

//! Walks one bucket through every configuration round trip.
//!
//! Runs against the endpoint given with `--endpoint` (or `OSS_ENDPOINT`), or against the
//! in-memory service when none is given:
//! ```
//! cargo run --example bucket_config
//! RUST_LOG=debug cargo run --example bucket_config -- --endpoint http://127.0.0.1:9000 --bucket demo-bucket
//! ```

use alioss::oss::client::hooks::{Extensions, RequestHooks};
use alioss::oss::error::Error;
use alioss::oss::http::{BaseUrl, Url};
use alioss::oss::multimap_ext::Multimap;
use alioss::oss::types::{
    BucketAcl, CorsConfig, CorsMethod, CorsRule, LifecycleConfig, LifecycleExpiration,
    LifecycleRule, LoggingConfig, OssApi, RefererConfig, RuleStatus, WebsiteConfig,
};
use alioss::oss::{OssClient, OssClientBuilder};
use alioss_common::memory_transport::MemoryTransport;
use clap::Parser;
use http::Method;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(about = "Bucket configuration round trips")]
struct Args {
    /// Service endpoint, e.g. https://oss-cn-hangzhou.aliyuncs.com
    #[arg(long, env = "OSS_ENDPOINT")]
    endpoint: Option<String>,

    #[arg(long, default_value = "alioss-demo-bucket")]
    bucket: String,

    /// Print every request the client sends
    #[arg(long)]
    verbose: bool,
}

/// Prints method, URL and status of each request.
#[derive(Debug)]
struct PrintingHook;

#[async_trait::async_trait]
impl RequestHooks for PrintingHook {
    fn name(&self) -> &'static str {
        "printer"
    }

    async fn after_execute(
        &self,
        method: &Method,
        url: &Url,
        _headers: &Multimap,
        _query_params: &Multimap,
        _bucket_name: Option<&str>,
        resp: &Result<reqwest::Response, reqwest::Error>,
        _extensions: &mut Extensions,
    ) {
        match resp {
            Ok(r) => println!("{method} {url} -> {}", r.status()),
            Err(e) => println!("{method} {url} -> {e}"),
        }
    }
}

fn make_client(args: &Args) -> Result<OssClient, Error> {
    match &args.endpoint {
        Some(endpoint) => {
            let base_url: BaseUrl = endpoint.parse()?;
            let mut builder = OssClientBuilder::new(base_url)
                .app_info(Some(("bucket-config-demo".into(), "0.1.0".into())));
            if args.verbose {
                builder = builder.hook(Arc::new(PrintingHook));
            }
            builder.build()
        }
        None => {
            println!("no endpoint given, using the in-memory service");
            Ok(OssClient::with_transport(Arc::new(MemoryTransport::new())))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init(); // Note: set environment variable RUST_LOG="debug" to see every request
    let args = Args::parse();
    let client = make_client(&args)?;
    let bucket = args.bucket.as_str();

    if !client.bucket_exists(bucket).build().send().await?.exists() {
        client
            .create_bucket(bucket)
            .acl(BucketAcl::Private)
            .build()
            .send()
            .await?;
        println!("created bucket {bucket}");
    }

    let location = client.get_bucket_location(bucket).build().send().await?;
    println!("location: {}", location.config().location);

    let lifecycle = LifecycleConfig::new(vec![
        LifecycleRule::new("expire-logs", "logs/", RuleStatus::Enabled)
            .with_expiration(LifecycleExpiration::Days(30))
            .with_abort_multipart_upload(LifecycleExpiration::Days(7)),
    ]);
    client
        .put_bucket_lifecycle(bucket)
        .config(lifecycle)
        .build()
        .send()
        .await?;
    let resp = client.get_bucket_lifecycle(bucket).build().send().await?;
    println!("lifecycle: {:?}", resp.config());

    let cors = CorsConfig::new(vec![
        CorsRule::new(["*"], [CorsMethod::Get, CorsMethod::Head])
            .with_max_age_seconds(600),
    ]);
    client
        .put_bucket_cors(bucket)
        .config(cors)
        .build()
        .send()
        .await?;
    let resp = client.get_bucket_cors(bucket).build().send().await?;
    println!("cors: {:?}", resp.config());

    client
        .put_bucket_website(bucket)
        .config(WebsiteConfig::new("index.html", "404.html"))
        .build()
        .send()
        .await?;
    client
        .put_bucket_logging(bucket)
        .config(LoggingConfig::new(bucket, "access-log/"))
        .build()
        .send()
        .await?;
    client
        .put_bucket_referer(bucket)
        .config(RefererConfig::new(false, ["https://www.example.com"]))
        .build()
        .send()
        .await?;
    let resp = client.get_bucket_referer(bucket).build().send().await?;
    println!("referer: {:?}", resp.config());

    client.delete_bucket_lifecycle(bucket).build().send().await?;
    client.delete_bucket_cors(bucket).build().send().await?;
    client.delete_bucket_website(bucket).build().send().await?;
    client.delete_bucket_logging(bucket).build().send().await?;

    let lifecycle_after_delete = client.get_bucket_lifecycle(bucket).build().send().await;
    match lifecycle_after_delete {
        Err(Error::NotFound(e)) => println!("lifecycle removed ({})", e.code),
        other => println!("unexpected: {other:?}"),
    }
    let logging = client.get_bucket_logging(bucket).build().send().await?;
    println!(
        "logging enabled after delete: {}",
        logging.config().is_enabled()
    );

    client.delete_bucket(bucket).build().send().await?;
    println!("deleted bucket {bucket}");
    Ok(())
}
