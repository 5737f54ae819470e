// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header}
  {bug}         Open a pre-filled issue on the bug tracker
  {version}     Print version information
  {completion}  Generate shell completions
",
        header = colors::header("Commands:"),
        bug = colors::literal("bug"),
        version = colors::literal("version"),
        completion = colors::literal("completion"),
    )
}

/// Examples shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Examples:
  portico bug                                Report a bug with the active config
  portico --config-file <path> bug           Report a bug with a specific config
  portico version                            Show version details",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
