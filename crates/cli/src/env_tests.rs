// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::path::PathBuf;

#[test]
fn test_vars_constants() {
    assert_eq!(vars::PORTICO_CONFIG_FILE, "PORTICO_CONFIG_FILE");
    assert_eq!(vars::PORTICO_PLATFORM, "PORTICO_PLATFORM");
    assert_eq!(vars::PORTICO_LOG, "PORTICO_LOG");
    assert_eq!(vars::NO_COLOR, "NO_COLOR");
    assert_eq!(vars::COLOR, "COLOR");
    assert_eq!(vars::XDG_CONFIG_HOME, "XDG_CONFIG_HOME");
}

#[test]
fn test_config_file_unset() {
    std::env::remove_var("PORTICO_CONFIG_FILE");
    assert_eq!(config_file(), None);
}

#[test]
fn test_config_file_set() {
    std::env::set_var("PORTICO_CONFIG_FILE", "/etc/portico/portico.toml");
    assert_eq!(
        config_file(),
        Some(PathBuf::from("/etc/portico/portico.toml"))
    );
    std::env::remove_var("PORTICO_CONFIG_FILE");
}

#[test]
fn test_platform_override_trims_and_ignores_empty() {
    std::env::set_var("PORTICO_PLATFORM", "  ");
    assert_eq!(platform_override(), None);
    std::env::set_var("PORTICO_PLATFORM", " linux ");
    assert_eq!(platform_override(), Some("linux".to_string()));
    std::env::remove_var("PORTICO_PLATFORM");
}

#[test]
fn test_log_filter_set() {
    std::env::set_var("PORTICO_LOG", "debug");
    assert_eq!(log_filter(), Some("debug".to_string()));
    std::env::remove_var("PORTICO_LOG");
    assert_eq!(log_filter(), None);
}

#[test]
fn test_no_color_set_to_other() {
    std::env::set_var("NO_COLOR", "true");
    assert!(!no_color());
    std::env::set_var("NO_COLOR", "1");
    assert!(no_color());
    std::env::remove_var("NO_COLOR");
}

#[test]
fn test_force_color_set_to_one() {
    std::env::set_var("COLOR", "1");
    assert!(force_color());
    std::env::remove_var("COLOR");
    assert!(!force_color());
}

#[test]
fn test_config_home_prefers_xdg() {
    std::env::set_var("XDG_CONFIG_HOME", "/tmp/xdg-config-test");
    assert_eq!(config_home(), Some(PathBuf::from("/tmp/xdg-config-test")));
    std::env::remove_var("XDG_CONFIG_HOME");
}
