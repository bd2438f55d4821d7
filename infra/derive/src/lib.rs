#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by every crate of the workspace.
//!
//! * [`macro@setorial_error`] turns an enum into a context-aware error type.
//! * [`macro@setorial_slice`] turns a struct into a registrable feature slice.
//! * [`macro@main`] bootstraps an `async fn main` on a runtime profile.
//!
//! The examples below are `ignore`d; they only compile inside consuming crates.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Attribute macro to bootstrap a Tokio runtime from a named profile.
///
/// Transforms an `async fn main` returning a `Result` into a plain `fn main`
/// that builds the runtime through `setorial_runtime` and blocks on the body.
///
/// # Arguments
///
/// * `event_loop` - Single-threaded runtime driving UI-style event handling.
/// * `default` - Same as omitting the argument.
///
/// # Examples
///
/// ```rust,ignore
/// #[setorial_runtime::main(event_loop)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Attribute macro for declaring crate error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * **Context Support**: Generates a companion `<Name>Ext` trait adding `.context()`
///   to `Result<T, Name>` and to `Result<T, Source>` for every wrapped source error.
/// * **Conversions**: `From<Source>` for variants holding a `source` field, so `?` works.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant exists.
///
/// # Requirements
///
/// 1. Only enums with named-field variants are accepted.
/// 2. A `context` field must have the type `Option<Cow<'static, str>>`.
/// 3. A variant with a `source` field must also carry `context`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[setorial_derive::setorial_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn setorial_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Attribute macro to define a feature slice handle.
///
/// Generates an `<Name>Inner` struct with the declared fields, an `Arc` backed
/// `Name` handle that derefs to it, and a `FeatureSlice` impl so the handle can
/// be stored in the slice registry.
///
/// # Example
/// ```rust,ignore
/// #[setorial_derive::setorial_slice]
/// pub struct Registration {
///     pub timings: FormTimings,
/// }
///
/// let slice = Registration::new(RegistrationInner { timings });
/// ```
#[proc_macro_attribute]
pub fn setorial_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
