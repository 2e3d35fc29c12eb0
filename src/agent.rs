//! Generated client identity record

use http::HeaderMap;

use crate::fingerprint::{H2Settings, TlsIdentity};

/// One complete client identity.
///
/// `headers` never contains a `user-agent` entry; transports inject
/// `user_agent` themselves so the string and the header cannot drift
/// apart. `header_order` lists pseudo-headers first, then every key in
/// `headers` in emission order.
#[derive(Debug, Clone, Default)]
pub struct Agent {
    pub user_agent: String,
    pub headers: HeaderMap,
    pub header_order: Vec<String>,
    /// Always present on a generated record, `None` on a cleared one.
    pub tls: Option<TlsIdentity>,
    /// `None` unless the generator pins identities to HTTP/2.
    pub h2_settings: Option<H2Settings>,
}

impl Agent {
    /// Empties every field in place so a pooled record cannot leak a
    /// previous caller's identity through retained state.
    pub fn clear(&mut self) {
        self.user_agent.clear();
        self.headers.clear();
        self.header_order.clear();
        self.tls = None;
        self.h2_settings = None;
    }
}
