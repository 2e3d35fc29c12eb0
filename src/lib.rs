//! # uaforge
//!
//! Synthetic browser identities for HTTP clients: user-agent string,
//! ordered header set, TLS ClientHello identity and HTTP/2 SETTINGS,
//! generated together so every layer describes the same browser.
//!
//! ## Features
//!
//! - Catalogue of Chrome, Opera, Edge, Brave, Firefox and Safari releases
//! - Header emission with pseudo-header aware ordering strategies
//! - Canonical and synthesized TLS ClientHello identities
//! - Per-engine HTTP/2 SETTINGS tables with optional jitter
//! - Search, SEO, AI and social crawler identities
//! - Reverse construction from an existing user-agent string
//!
//! ## Example
//!
//! ```
//! use uaforge::{Browser, Generator, Platform};
//!
//! let generator = Generator::builder()
//!     .with_browsers([Browser::Chrome])
//!     .with_platforms([Platform::Desktop])
//!     .build();
//!
//! let agent = generator.generate()?;
//! assert!(agent.user_agent.starts_with("Mozilla/5.0"));
//!
//! // hand the record back so its buffers get reused
//! generator.release(agent);
//! # Ok::<(), uaforge::GenerateError>(())
//! ```

mod agent;
mod compose;
mod generator;
mod parser;

pub mod config;
pub mod fingerprint;
pub mod headers;
pub mod profiles;

pub use crate::agent::Agent;

pub use crate::config::{
    Browser,
    FingerprintProfile,
    H2Jitter,
    OperatingSystem,
    Platform,
    RequestType,
    UnknownToken,
};

pub use crate::fingerprint::{
    ClientHelloSpec,
    H2Settings,
    HelloId,
    TlsExtension,
    TlsIdentity,
};

pub use crate::generator::{
    GenerateError,
    Generator,
    GeneratorBuilder,
    GeneratorConfig,
    parse_language_header,
};

pub use crate::headers::order::HeaderOrdering;

pub use crate::parser::{ParseError, from_user_agent};

pub use crate::profiles::bots;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
