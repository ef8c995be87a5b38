//! Platform capability flags consulted by the storage layout table.
//!
//! These only steer which [`AccessLayout`](crate::storage::AccessLayout) a
//! vector reports; lane values are identical on every platform.

use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Capabilities of the host, detected once at first use.
pub static PLATFORM: Lazy<PlatformCaps> = Lazy::new(|| {
    let caps = PlatformCaps::detect();
    debug!("Detected platform capabilities: {:?}", caps);
    caps
});

/// What the host can do natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformCaps {
    /// Native half-precision support. Without it, `Half` vectors always use
    /// the plain array layout.
    pub native_half: bool,
    /// Width in bytes of the widest vector register, or 0 if there is none.
    pub register_bytes: usize,
}

impl Default for PlatformCaps {
    /// A conservative host: no half support, 128-bit registers.
    fn default() -> Self {
        Self {
            native_half: false,
            register_bytes: 16,
        }
    }
}

impl PlatformCaps {
    /// Query the running CPU.
    pub fn detect() -> Self {
        Self {
            native_half: detect_native_half(),
            register_bytes: detect_register_bytes(),
        }
    }

    /// Caps for a host without any vector unit.
    pub fn scalar() -> Self {
        Self {
            native_half: false,
            register_bytes: 0,
        }
    }

    /// Sets the native half flag.
    pub fn with_native_half(mut self, native_half: bool) -> Self {
        self.native_half = native_half;
        self
    }

    /// Sets the register width.
    pub fn with_register_bytes(mut self, register_bytes: usize) -> Self {
        self.register_bytes = register_bytes;
        self
    }
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn detect_native_half() -> bool {
    std::is_x86_feature_detected!("f16c")
}

#[cfg(target_arch = "aarch64")]
fn detect_native_half() -> bool {
    std::arch::is_aarch64_feature_detected!("fp16")
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")))]
fn detect_native_half() -> bool {
    false
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn detect_register_bytes() -> usize {
    if std::is_x86_feature_detected!("avx512f") {
        64
    } else if std::is_x86_feature_detected!("avx") {
        32
    } else if std::is_x86_feature_detected!("sse2") {
        16
    } else {
        0
    }
}

#[cfg(target_arch = "aarch64")]
fn detect_register_bytes() -> usize {
    16
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")))]
fn detect_register_bytes() -> usize {
    0
}
