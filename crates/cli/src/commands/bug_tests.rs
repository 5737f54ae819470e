// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn version_text_has_no_trailing_newline() {
    let text = version_text().unwrap();
    assert!(text.starts_with("Version:"));
    assert!(text.contains(env!("CARGO_PKG_VERSION")));
    assert!(!text.ends_with('\n'));
}

#[test]
fn version_text_is_fenced_cleanly_in_report() {
    let body = crate::report::render_report(&version_text().unwrap(), "{}").unwrap();
    assert!(body.contains("```\nVersion:"));
    assert!(body.contains("/"));
    assert!(body.contains(&format!("{}\n```", std::env::consts::ARCH)));
}
