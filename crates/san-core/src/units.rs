//! Unit conversions between link-rate units (Gbps) and payload units (MB/s).
//!
//! All model arithmetic runs in MB/s: every queueing formula and every worked
//! example in the qualitative analysis operates on megabytes per second, so
//! capacities are converted once at scenario construction and never again.
//! Decimal units throughout: 1 Gbps = 1e9 bit/s, 1 MB = 1e6 bytes = 8e6 bits.

/// Bits per megabyte (decimal).
const BITS_PER_MB: f64 = 8e6;

/// Convert a link rate in Gbps to a payload capacity in MB/s.
///
/// 1 Gbps → 125 MB/s, 16 Gbps → 2000 MB/s.
#[inline]
pub fn gbps_to_mb_s(gbps: f64) -> f64 {
    gbps * 1e9 / BITS_PER_MB
}

/// Convert a payload rate in MB/s back to Gbps.
#[inline]
pub fn mb_s_to_gbps(mb_s: f64) -> f64 {
    mb_s * BITS_PER_MB / 1e9
}
