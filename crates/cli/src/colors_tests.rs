// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    command_and_description = { "portico bug    Open a report", Some(11) },
    trailing_spaces_only = { "portico bug   ", None },
    single_spaces = { "portico version info", None },
    empty = { "", None },
)]
fn test_find_description_start(line: &str, expected: Option<usize>) {
    assert_eq!(find_description_start(line), expected);
}

// Color output depends on NO_COLOR/COLOR and the TTY, so these tests only
// assert on the visible text.

fn strip_ansi(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

#[test]
fn test_colorize_command_preserves_text() {
    let cmd = "portico completion <shell>";
    assert_eq!(strip_ansi(&colorize_command(cmd)), cmd);
}

#[test]
fn test_colorize_command_unclosed_placeholder() {
    let cmd = "portico --config-file <path";
    assert_eq!(strip_ansi(&colorize_command(cmd)), cmd);
}

#[test]
fn test_examples_preserves_text() {
    let text = "Examples:\n  portico bug                 Report a bug\n  portico completion <shell>  Generate completions";
    assert_eq!(strip_ansi(&examples(text)), text);
}

#[test]
fn test_header_preserves_text() {
    assert_eq!(strip_ansi(&header("Commands:")), "Commands:");
    assert_eq!(strip_ansi(&literal("bug")), "bug");
    assert_eq!(strip_ansi(&context("<path>")), "<path>");
}
