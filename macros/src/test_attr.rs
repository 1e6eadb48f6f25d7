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

use darling::FromMeta;
use darling_core::Error;
use proc_macro2::TokenStream;
use quote::{ToTokens, quote, quote_spanned};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{FnArg, ItemFn, ReturnType};
use uuid::Uuid;

const CANNED_ACLS: [&str; 3] = ["private", "public-read", "public-read-write"];

#[derive(Debug, FromMeta)]
pub(crate) struct MacroArgs {
    flavor: Option<String>,
    worker_threads: Option<usize>,
    bucket_name: Option<String>,
    acl: Option<String>,
    no_bucket: darling::util::Flag,
    no_cleanup: darling::util::Flag,
    memory_only: darling::util::Flag,
}

impl MacroArgs {
    /// Checks the attribute arguments against the signature of the annotated function.
    pub(crate) fn validate(&self, func: &ItemFn) -> Result<(), proc_macro::TokenStream> {
        let fail = |msg: &str, span: proc_macro2::Span| {
            Err(proc_macro::TokenStream::from(
                Error::custom(msg).with_span(&span).write_errors(),
            ))
        };
        let no_bucket = self.no_bucket.is_present();
        let inputs = &func.sig.inputs;

        if no_bucket && (self.bucket_name.is_some() || self.acl.is_some()) {
            return fail(
                "`no_bucket` cannot be combined with `bucket_name` or `acl`",
                func.sig.span(),
            );
        }
        if self
            .acl
            .as_deref()
            .is_some_and(|acl| !CANNED_ACLS.contains(&acl))
        {
            return fail(
                &format!("`acl` must be one of {CANNED_ACLS:?}"),
                func.sig.span(),
            );
        }

        let expected: &[&str] = if no_bucket {
            &["TestContext"]
        } else {
            &["TestContext", "String"]
        };
        if inputs.len() != expected.len() {
            let signature = if no_bucket {
                "(ctx: TestContext)"
            } else {
                "(ctx: TestContext, bucket_name: String)"
            };
            return fail(
                &format!("OSS test function must take {signature}"),
                inputs.span(),
            );
        }
        for (arg, want) in inputs.iter().zip(expected) {
            if let FnArg::Typed(pat_type) = arg
                && !pat_type.ty.to_token_stream().to_string().contains(want)
            {
                return fail(&format!("argument must be of type {want}"), pat_type.span());
            }
        }
        Ok(())
    }
}

/// Expands the test macro into the final TokenStream
pub(crate) fn expand_test_macro(
    args: MacroArgs,
    mut func: ItemFn,
) -> Result<TokenStream, proc_macro::TokenStream> {
    let input_span = func.sig.paren_token.span.span();
    func.sig.output = ReturnType::Default;
    let old_inps = func.sig.inputs.clone();
    func.sig.inputs = Punctuated::default();
    let sig = func.sig.clone().into_token_stream();

    let header = generate_tokio_test_header(&args, sig);

    let test_function_block = func.block.clone().into_token_stream();

    let inner_inputs = quote_spanned!(input_span=> #old_inps);
    let inner_fn_name = create_inner_func_name(&func);
    let inner_header = quote_spanned!(func.sig.span()=> async fn #inner_fn_name(#inner_inputs));

    let maybe_skip = generate_skip_logic(&args, func.sig.span());

    let prelude = quote!(
            use ::futures_util::FutureExt;
            use ::std::panic::AssertUnwindSafe;
            use ::alioss::oss::types::OssApi;
            use ::alioss::oss::response::response_traits::HasBucket;

            let ctx = ::alioss_common::test_context::TestContext::new_from_env();
    );

    let outer_body = if args.no_bucket.is_present() {
        generate_no_bucket_body(prelude, maybe_skip, inner_fn_name, func.block.span())
    } else {
        generate_with_bucket_body(prelude, maybe_skip, inner_fn_name, &args, func.block.span())
    };

    let inner_impl = quote_spanned!(func.span()=>
        #inner_header
        #test_function_block
    );

    let mut out = TokenStream::new();
    out.extend(header);
    out.extend(outer_body);
    out.extend(inner_impl);

    Ok(out)
}

fn generate_tokio_test_header(args: &MacroArgs, sig: TokenStream) -> TokenStream {
    let flavor = args
        .flavor
        .clone()
        .or_else(|| std::env::var("OSS_TEST_TOKIO_RUNTIME_FLAVOR").ok());

    let mut runtime: Vec<TokenStream> = Vec::new();
    if let Some(flavor) = flavor {
        runtime.push(quote!(flavor = #flavor));
    }
    if let Some(worker_threads) = args.worker_threads {
        runtime.push(quote!(worker_threads = #worker_threads));
    }

    if runtime.is_empty() {
        quote!(#[::tokio::test] #sig)
    } else {
        quote!(#[::tokio::test(#(#runtime),*)] #sig)
    }
}

fn generate_skip_logic(args: &MacroArgs, span: proc_macro2::Span) -> TokenStream {
    if args.memory_only.is_present() {
        quote_spanned!(span=>
        if ctx.memory.is_none() {
            println!("Skipping test because it only runs against the in-memory service");
            return;
        })
    } else {
        TokenStream::new()
    }
}

fn generate_no_bucket_body(
    prelude: TokenStream,
    maybe_skip: TokenStream,
    inner_fn_name: TokenStream,
    span: proc_macro2::Span,
) -> TokenStream {
    quote_spanned!(span=> {
        #prelude
        #maybe_skip
        #inner_fn_name(ctx).await;
    })
}

fn generate_with_bucket_body(
    prelude: TokenStream,
    maybe_skip: TokenStream,
    inner_fn_name: TokenStream,
    args: &MacroArgs,
    span: proc_macro2::Span,
) -> TokenStream {
    let bucket_name = args
        .bucket_name
        .as_ref()
        .map(|b| b.to_token_stream())
        .unwrap_or_else(|| {
            let random_name = format!("test-bucket-{}", Uuid::new_v4());
            proc_macro2::Literal::string(&random_name).into_token_stream()
        });
    let maybe_acl = match &args.acl {
        Some(acl) => quote! {
            .acl(#acl.parse::<::alioss::oss::types::BucketAcl>().unwrap())
        },
        None => TokenStream::new(),
    };
    let maybe_cleanup = if args.no_cleanup.is_present() {
        quote! {}
    } else {
        quote! {
            ::alioss_common::cleanup_guard::cleanup(client_clone, resp.bucket()).await;
        }
    };
    quote_spanned!(span=> {
        #prelude
        #maybe_skip

        let client_clone = ctx.client.clone();
        let bucket_name = #bucket_name;
        let resp = client_clone
            .create_bucket(bucket_name)
            #maybe_acl
            .build()
            .send()
            .await
            .expect("Failed to create bucket");
        assert_eq!(resp.bucket(), bucket_name);
        let res = AssertUnwindSafe(#inner_fn_name(ctx, resp.bucket().to_string()))
            .catch_unwind()
            .await;
        #maybe_cleanup
        if let Err(e) = res {
            ::std::panic::resume_unwind(e);
        }
    })
}

fn create_inner_func_name(func: &ItemFn) -> TokenStream {
    let inner_name = format!("{}_test_impl", func.sig.ident);
    let ident = proc_macro2::Ident::new(&inner_name, func.sig.span());
    quote! { #ident }
}
