// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod report;
pub mod schema;
pub mod validity;

use serde::Serialize;

use crate::error::Result;

/// Pretty-printed JSON for command output.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
