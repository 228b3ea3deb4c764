// Copyright 2026 the Filmstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float functions that work with or without `std`.
//!
//! Mirrors Kurbo's scheme: `std` uses the intrinsic methods, `libm` supplies
//! them for `no_std` builds. One of the two features must be enabled.

#[cfg(feature = "std")]
pub(crate) fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

#[cfg(feature = "std")]
pub(crate) fn round(x: f64) -> f64 {
    x.round()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
pub(crate) fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
pub(crate) fn round(x: f64) -> f64 {
    libm::round(x)
}

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("filmstrip_swipe requires either the `std` or `libm` feature");
