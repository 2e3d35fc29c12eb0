//! HTTP/2 SETTINGS tables
//!
//! Each rendering family advertises a characteristic SETTINGS frame;
//! real Chrome, Firefox and Safari differ in every value here. Jitter
//! perturbs the advertised numbers per agent so that repeated
//! connections do not share an exact SETTINGS signature.

use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};

use crate::config::H2Jitter;

/// SETTINGS parameters an agent advertises on connection preface.
///
/// `None` means the parameter is left out of the frame entirely, which
/// is itself part of the fingerprint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct H2Settings {
    pub header_table_size: Option<u32>,
    pub enable_push: Option<bool>,
    pub max_concurrent_streams: Option<u32>,
    pub initial_window_size: Option<u32>,
    pub max_frame_size: Option<u32>,
    pub max_header_list_size: Option<u32>,
}

impl H2Settings {
    /// Chrome, Edge, Opera and Brave.
    pub fn chromium() -> Self {
        H2Settings {
            header_table_size: Some(65536),
            max_concurrent_streams: Some(1000),
            initial_window_size: Some(6_291_456),
            max_header_list_size: Some(262_144),
            ..Default::default()
        }
    }

    /// Firefox.
    pub fn gecko() -> Self {
        H2Settings {
            header_table_size: Some(65536),
            max_concurrent_streams: Some(1000),
            initial_window_size: Some(131_072),
            max_header_list_size: Some(262_144),
            ..Default::default()
        }
    }

    /// Safari.
    pub fn webkit() -> Self {
        H2Settings {
            header_table_size: Some(4096),
            max_concurrent_streams: Some(100),
            initial_window_size: Some(2_097_152),
            max_header_list_size: Some(16_384),
            ..Default::default()
        }
    }

    /// Applies the configured jitter profile and returns the result.
    ///
    /// `Moderate` nudges the advertised sizes a few percent around the
    /// family values. `Maximum` discards the family values and rebuilds
    /// the frame around protocol minima with push disabled, keeping only
    /// `max_header_list_size` from the base.
    pub fn jittered(mut self, profile: H2Jitter) -> Self {
        let mut rng = thread_rng();
        match profile {
            H2Jitter::None => self,
            H2Jitter::Moderate => {
                if let Some(v) = self.header_table_size {
                    self.header_table_size = Some(jitter_value(v, 0.10, &mut rng));
                }
                if let Some(v) = self.initial_window_size {
                    self.initial_window_size = Some(jitter_value(v, 0.15, &mut rng));
                }
                if let Some(v) = self.max_header_list_size {
                    self.max_header_list_size = Some(jitter_value(v, 0.10, &mut rng));
                }
                self
            }
            H2Jitter::Maximum => {
                self.header_table_size = Some(jitter_value(4096, 0.20, &mut rng));
                self.enable_push = Some(false);
                self.initial_window_size = Some(jitter_value(65535, 0.20, &mut rng));
                self.max_frame_size = Some(jitter_value(16384, 0.20, &mut rng));
                self.max_concurrent_streams = Some(u32::MAX - rng.gen_range(0..1024));
                self
            }
        }
    }
}

/// Uniform draw from `base` plus or minus `pct`, floored at 1.
fn jitter_value(base: u32, pct: f64, rng: &mut impl Rng) -> u32 {
    if base == 0 {
        return 0;
    }
    let delta = (base as f64 * pct) as u32;
    let min = if base < delta { 1 } else { base - delta };
    let max = base.saturating_add(delta);
    rng.gen_range(min..=max)
}
