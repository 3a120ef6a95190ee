// SPDX-License-Identifier: MPL-2.0
//! Link-out records: videos and magazine issues.
//!
//! Both open their `url` in the system browser when selected; the gallery
//! never tracks what happens afterwards.

use serde::{Deserialize, Serialize};

/// A recorded talk or presentation hosted on an external platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: u32,
    pub title: String,
    pub thumbnail: String,
    pub url: String,
}

/// A digital publication issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Magazine {
    pub id: u32,
    pub title: String,
    pub image: String,
    pub url: String,
}
