//! Transport-level fingerprint artifacts
//!
//! Responsibilities:
//! - Canonical and synthesized TLS ClientHello identities
//! - Per-family HTTP/2 SETTINGS tables and jitter

pub mod h2;
pub mod tls;

pub use h2::H2Settings;
pub use tls::{ClientHelloSpec, HelloId, TlsExtension};

use serde::{Deserialize, Serialize};

/// TLS presentation attached to an agent.
///
/// Exactly one selection mode applies: either a reference to a
/// well-known hello or a one-off synthesized blueprint, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TlsIdentity {
    /// Canonical hello replayed by the transport layer.
    Canonical(HelloId),
    /// Fully synthesized hello with randomized layout.
    Synthesized(ClientHelloSpec),
}

impl TlsIdentity {
    /// The canonical id, if this identity references one.
    pub fn hello_id(&self) -> Option<HelloId> {
        match self {
            TlsIdentity::Canonical(id) => Some(*id),
            TlsIdentity::Synthesized(_) => None,
        }
    }

    /// The synthesized blueprint, if this identity carries one.
    pub fn spec(&self) -> Option<&ClientHelloSpec> {
        match self {
            TlsIdentity::Canonical(_) => None,
            TlsIdentity::Synthesized(spec) => Some(spec),
        }
    }
}
