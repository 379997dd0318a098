//! Read-only client for the Codetum headless CMS REST API
//!
//! `CmsClient` is scoped to one space and exposes the API's GET endpoints as
//! async methods. Successful bodies decode into the types in [`types`]; every
//! failure is reported as a [`CmsError`] carrying `status`, `name` and
//! `message`.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod types;


pub use client::CmsClient;
pub use config::{ClientConfig, API_KEY_HEADER, DEFAULT_API_URL};
pub use error::{CmsError, ConfigError};
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use types::{Content, ContentOptions, ContentQueryOptions, SortBy, Space, SpaceLocale};
