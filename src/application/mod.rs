// SPDX-License-Identifier: MPL-2.0
//! Application layer: interfaces the UI depends on.
//!
//! - [`port`]: Trait definitions implemented by `infrastructure`

pub mod port;
