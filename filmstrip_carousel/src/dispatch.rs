// Copyright 2026 the Filmstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! String-keyed method dispatch for scripting boundaries.
//!
//! Embedders that receive method names as strings (script bindings, message
//! buses) can route them through [`invoke`] instead of re-implementing the
//! mapping. The table covers exactly the public surface; there is no way to
//! reach internal methods through it, and unknown names are reported rather
//! than swallowed.

use alloc::string::String;
use core::fmt;

use crate::carousel::Carousel;
use crate::events::Events;
use crate::host::CarouselHost;

/// Errors from the string-keyed dispatch surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchError {
    /// The requested method is not part of the public surface.
    UnknownMethod(String),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMethod(name) => write!(f, "{name} method does not exist."),
        }
    }
}

impl core::error::Error for DispatchError {}

/// What a dispatched call produced.
#[derive(Clone, Debug, PartialEq)]
pub enum Reply {
    /// The call produced observable events.
    Events(Events),
    /// The call returned the shown index.
    Index(usize),
    /// The call returned nothing.
    None,
}

/// Invokes a public carousel method by name.
///
/// `arg` feeds the methods that take an index (`"slideTo"`; missing arguments
/// default to 0), `now_ms` the ones that consult the clock. Recognized names
/// are `"refresh"`, `"slideTo"`, `"getIndex"`, `"play"`, `"stop"`, and
/// `"destroy"`.
pub fn invoke<H: CarouselHost>(
    carousel: &mut Carousel<H>,
    method: &str,
    arg: Option<i64>,
    now_ms: u64,
) -> Result<Reply, DispatchError> {
    match method {
        "refresh" => Ok(Reply::Events(carousel.refresh())),
        "slideTo" => Ok(Reply::Events(carousel.slide_to(arg.unwrap_or(0), now_ms))),
        "getIndex" => Ok(Reply::Index(carousel.index())),
        "play" => {
            carousel.play(now_ms);
            Ok(Reply::None)
        }
        "stop" => {
            carousel.stop();
            Ok(Reply::None)
        }
        "destroy" => {
            carousel.destroy();
            Ok(Reply::None)
        }
        _ => Err(DispatchError::UnknownMethod(String::from(method))),
    }
}
