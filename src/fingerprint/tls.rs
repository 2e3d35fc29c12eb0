//! TLS ClientHello identities
//!
//! An agent either references a canonical, well-known ClientHello by id
//! or carries a fully synthesized [`ClientHelloSpec`] whose cipher and
//! extension layout is randomized per agent. The synthesized layout
//! keeps the GREASE framing real Chrome emits: one leading GREASE
//! extension, one trailing GREASE extension and a final padding entry.

use std::fmt;

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::thread_rng;
use serde::{Deserialize, Serialize};

pub const GREASE_PLACEHOLDER: u16 = 0x0a0a;

// TLS 1.3 suites
pub const TLS_AES_128_GCM_SHA256: u16 = 0x1301;
pub const TLS_AES_256_GCM_SHA384: u16 = 0x1302;
pub const TLS_CHACHA20_POLY1305_SHA256: u16 = 0x1303;

// TLS 1.2 ECDHE suites
pub const TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256: u16 = 0xc02b;
pub const TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256: u16 = 0xc02f;
pub const TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384: u16 = 0xc02c;
pub const TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384: u16 = 0xc030;
pub const TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305: u16 = 0xcca9;
pub const TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305: u16 = 0xcca8;
pub const TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA: u16 = 0xc013;
pub const TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA: u16 = 0xc014;

// Legacy RSA suites
pub const TLS_RSA_WITH_AES_128_GCM_SHA256: u16 = 0x009c;
pub const TLS_RSA_WITH_AES_256_GCM_SHA384: u16 = 0x009d;
pub const TLS_RSA_WITH_AES_128_CBC_SHA: u16 = 0x002f;
pub const TLS_RSA_WITH_AES_256_CBC_SHA: u16 = 0x0035;

// Supported groups
pub const CURVE_X25519: u16 = 0x001d;
pub const CURVE_SECP256R1: u16 = 0x0017;
pub const CURVE_SECP384R1: u16 = 0x0018;

// Signature schemes
pub const ECDSA_SECP256R1_SHA256: u16 = 0x0403;
pub const RSA_PSS_RSAE_SHA256: u16 = 0x0804;
pub const RSA_PKCS1_SHA256: u16 = 0x0401;
pub const ECDSA_SECP384R1_SHA384: u16 = 0x0503;
pub const RSA_PSS_RSAE_SHA384: u16 = 0x0805;
pub const RSA_PKCS1_SHA384: u16 = 0x0501;
pub const RSA_PSS_RSAE_SHA512: u16 = 0x0806;
pub const RSA_PKCS1_SHA512: u16 = 0x0601;

pub const VERSION_TLS12: u16 = 0x0303;
pub const VERSION_TLS13: u16 = 0x0304;

pub const PSK_MODE_DHE: u8 = 1;
pub const CERT_COMPRESSION_BROTLI: u16 = 2;

/// Canonical ClientHello identities understood by uTLS-style transports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HelloId {
    #[serde(rename = "chrome_120")]
    Chrome120,
    #[serde(rename = "chrome_131")]
    Chrome131,
    #[serde(rename = "chrome_133")]
    Chrome133,
    #[serde(rename = "edge_106")]
    Edge106,
    #[serde(rename = "firefox_120")]
    Firefox120,
    #[serde(rename = "safari_16")]
    Safari16,
    /// Plain HTTP-library handshake most crawler bots present.
    #[serde(rename = "generic_crawler")]
    GenericCrawler,
}

impl HelloId {
    pub fn as_str(&self) -> &'static str {
        match self {
            HelloId::Chrome120 => "chrome_120",
            HelloId::Chrome131 => "chrome_131",
            HelloId::Chrome133 => "chrome_133",
            HelloId::Edge106 => "edge_106",
            HelloId::Firefox120 => "firefox_120",
            HelloId::Safari16 => "safari_16",
            HelloId::GenericCrawler => "generic_crawler",
        }
    }
}

impl fmt::Display for HelloId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extension slot in a synthesized ClientHello.
///
/// Payload-free variants model extensions whose body is fixed or filled
/// in by the transport layer at handshake time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TlsExtension {
    ServerName,
    ExtendedMasterSecret,
    RenegotiationInfo,
    SupportedCurves { curves: Vec<u16> },
    EcPointFormats { formats: Vec<u8> },
    SessionTicket,
    Alpn { protocols: Vec<String> },
    StatusRequest,
    SignatureAlgorithms { schemes: Vec<u16> },
    SignedCertificateTimestamp,
    KeyShare { groups: Vec<u16> },
    PskKeyExchangeModes { modes: Vec<u8> },
    SupportedVersions { versions: Vec<u16> },
    CompressCertificate { algorithms: Vec<u16> },
    Grease,
    Padding,
}

/// Cipher order Chrome 120+ negotiates from, GREASE slot included.
static CHROME_CIPHERS: Lazy<Vec<u16>> = Lazy::new(|| {
    vec![
        GREASE_PLACEHOLDER,
        TLS_AES_128_GCM_SHA256,
        TLS_AES_256_GCM_SHA384,
        TLS_CHACHA20_POLY1305_SHA256,
        TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256,
        TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
        TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384,
        TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384,
        TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305,
        TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305,
        TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA,
        TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA,
        TLS_RSA_WITH_AES_128_GCM_SHA256,
        TLS_RSA_WITH_AES_256_GCM_SHA384,
        TLS_RSA_WITH_AES_128_CBC_SHA,
        TLS_RSA_WITH_AES_256_CBC_SHA,
    ]
});

/// Synthesized ClientHello blueprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientHelloSpec {
    pub cipher_suites: Vec<u16>,
    pub compression_methods: Vec<u8>,
    pub extensions: Vec<TlsExtension>,
}

impl ClientHelloSpec {
    /// Builds a Chrome-shaped hello with a fresh random layout.
    ///
    /// The core extension set is shuffled as a block and wrapped in the
    /// GREASE framing Chrome uses, so the first extension is always
    /// GREASE and the hello ends with GREASE followed by padding. The
    /// full cipher list is shuffled including its GREASE slot.
    pub fn randomized_chrome() -> Self {
        let mut rng = thread_rng();

        let mut core = vec![
            TlsExtension::ServerName,
            TlsExtension::ExtendedMasterSecret,
            TlsExtension::RenegotiationInfo,
            TlsExtension::SupportedCurves {
                curves: vec![
                    GREASE_PLACEHOLDER,
                    CURVE_X25519,
                    CURVE_SECP256R1,
                    CURVE_SECP384R1,
                ],
            },
            TlsExtension::EcPointFormats { formats: vec![0] },
            TlsExtension::SessionTicket,
            TlsExtension::Alpn {
                protocols: vec!["h2".to_string(), "http/1.1".to_string()],
            },
            TlsExtension::StatusRequest,
            TlsExtension::SignatureAlgorithms {
                schemes: vec![
                    ECDSA_SECP256R1_SHA256,
                    RSA_PSS_RSAE_SHA256,
                    RSA_PKCS1_SHA256,
                    ECDSA_SECP384R1_SHA384,
                    RSA_PSS_RSAE_SHA384,
                    RSA_PKCS1_SHA384,
                    RSA_PSS_RSAE_SHA512,
                    RSA_PKCS1_SHA512,
                ],
            },
            TlsExtension::SignedCertificateTimestamp,
            TlsExtension::KeyShare {
                groups: vec![GREASE_PLACEHOLDER, CURVE_X25519],
            },
            TlsExtension::PskKeyExchangeModes {
                modes: vec![PSK_MODE_DHE],
            },
            TlsExtension::SupportedVersions {
                versions: vec![GREASE_PLACEHOLDER, VERSION_TLS13, VERSION_TLS12],
            },
            TlsExtension::CompressCertificate {
                algorithms: vec![CERT_COMPRESSION_BROTLI],
            },
        ];
        core.shuffle(&mut rng);

        let mut extensions = Vec::with_capacity(core.len() + 3);
        extensions.push(TlsExtension::Grease);
        extensions.extend(core);
        extensions.push(TlsExtension::Grease);
        extensions.push(TlsExtension::Padding);

        let mut cipher_suites = CHROME_CIPHERS.clone();
        cipher_suites.shuffle(&mut rng);

        ClientHelloSpec {
            cipher_suites,
            compression_methods: vec![0],
            extensions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn randomized_hello_keeps_grease_framing() {
        let spec = ClientHelloSpec::randomized_chrome();
        assert_eq!(spec.extensions.first(), Some(&TlsExtension::Grease));
        let tail = &spec.extensions[spec.extensions.len() - 2..];
        assert_eq!(tail, &[TlsExtension::Grease, TlsExtension::Padding]);
        assert_eq!(spec.extensions.len(), 17);
    }

    #[test]
    fn randomized_hello_carries_full_cipher_list() {
        let spec = ClientHelloSpec::randomized_chrome();
        assert_eq!(spec.cipher_suites.len(), 16);
        assert!(spec.cipher_suites.contains(&GREASE_PLACEHOLDER));
        assert!(spec.cipher_suites.contains(&TLS_AES_128_GCM_SHA256));
        assert_eq!(spec.compression_methods, vec![0]);
    }

    #[test]
    fn randomized_hello_core_set_is_complete() {
        let spec = ClientHelloSpec::randomized_chrome();
        let core = &spec.extensions[1..spec.extensions.len() - 2];
        assert!(core.contains(&TlsExtension::ServerName));
        assert!(core.contains(&TlsExtension::SessionTicket));
        assert!(core.iter().any(|ext| matches!(
            ext,
            TlsExtension::Alpn { protocols } if protocols == &["h2", "http/1.1"]
        )));
        assert!(core.iter().any(|ext| matches!(
            ext,
            TlsExtension::SupportedVersions { versions }
                if versions == &[GREASE_PLACEHOLDER, VERSION_TLS13, VERSION_TLS12]
        )));
        assert!(!core.contains(&TlsExtension::Grease));
        assert!(!core.contains(&TlsExtension::Padding));
    }

    #[test]
    fn consecutive_hellos_differ() {
        let a = ClientHelloSpec::randomized_chrome();
        let b = ClientHelloSpec::randomized_chrome();
        assert!(a.cipher_suites != b.cipher_suites || a.extensions != b.extensions);
    }

    #[test]
    fn hello_id_serializes_to_token() {
        let json = serde_json::to_string(&HelloId::Chrome120).unwrap();
        assert_eq!(json, "\"chrome_120\"");
        assert_eq!(HelloId::GenericCrawler.to_string(), "generic_crawler");
    }
}
