// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bug report assembly and delivery.
//!
//! A report is the built-in Markdown template with two slots filled in:
//! the version block and the configuration as indented JSON. The rendered
//! body is percent-encoded into the issue tracker's "new issue" URL and
//! handed to a [`BrowserLauncher`]. When no browser can be launched the
//! body is printed with instructions instead; that still counts as success.

use std::io::Write;
use std::sync::OnceLock;

use serde::Serialize;

use crate::browser::BrowserLauncher;
use crate::error::{Error, Result};

/// Issue tracker endpoint for new issues.
pub const BUG_TRACKER_URL: &str = "https://github.com/portico-proxy/portico/issues/new";

/// Built-in report template.
pub const BUG_TEMPLATE: &str = "\
Please answer these questions before submitting your issue. Thanks!

### What version of Portico are you using?
```
{{.Version}}
```

### What is your environment & configuration?
```
{{.Configuration}}
```

### What did you do?


### What did you expect to see?


### What did you see instead?
";

/// A template slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Version,
    Configuration,
}

impl Field {
    fn parse(name: &str) -> Option<Self> {
        match name {
            ".Version" => Some(Field::Version),
            ".Configuration" => Some(Field::Configuration),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Slot(Field),
}

/// A parsed report template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTemplate {
    segments: Vec<Segment>,
}

/// Values substituted into a [`ReportTemplate`].
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    pub version: &'a str,
    pub configuration: &'a str,
}

impl ReportTemplate {
    /// Parses `{{.Field}}` slots out of `source`.
    ///
    /// Whitespace inside the braces is ignored. Unknown fields and
    /// unterminated slots are errors.
    pub fn parse(source: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut rest = source;

        while let Some(open) = rest.find("{{") {
            if open > 0 {
                segments.push(Segment::Text(rest[..open].to_string()));
            }
            let after_open = &rest[open + 2..];
            let close = after_open.find("}}").ok_or_else(|| {
                Error::Template(format!(
                    "unterminated slot at byte {}",
                    source.len() - rest.len() + open
                ))
            })?;
            let name = after_open[..close].trim();
            let field = Field::parse(name)
                .ok_or_else(|| Error::Template(format!("unknown field '{}'", name)))?;
            segments.push(Segment::Slot(field));
            rest = &after_open[close + 2..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }

        Ok(ReportTemplate { segments })
    }

    /// The built-in bug template, parsed once per process.
    pub fn builtin() -> Result<&'static ReportTemplate> {
        static BUILTIN: OnceLock<std::result::Result<ReportTemplate, String>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| ReportTemplate::parse(BUG_TEMPLATE).map_err(|e| e.to_string()))
            .as_ref()
            .map_err(|msg| Error::Template(msg.clone()))
    }

    /// Returns true if the template contains a slot for `field`.
    #[cfg(test)]
    pub(crate) fn has_slot(&self, field: Field) -> bool {
        self.segments.contains(&Segment::Slot(field))
    }

    /// Substitutes `ctx` into the template in a single pass.
    ///
    /// Substituted values are copied verbatim and never rescanned.
    pub fn render(&self, ctx: &ReportContext<'_>) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Slot(Field::Version) => out.push_str(ctx.version),
                Segment::Slot(Field::Configuration) => out.push_str(ctx.configuration),
            }
        }
        out
    }
}

/// Serializes `config` as JSON indented by a single space.
///
/// Non-finite floats (`NaN`, infinities) have no JSON form and are written
/// as `null`, so they show up in the report as missing values.
pub fn config_json<T: Serialize + ?Sized>(config: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    config.serialize(&mut ser)?;
    String::from_utf8(buf)
        .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Renders the built-in template.
pub fn render_report(version: &str, configuration: &str) -> Result<String> {
    let template = ReportTemplate::builtin()?;
    Ok(template.render(&ReportContext {
        version,
        configuration,
    }))
}

/// Appends `body` to `base` as the percent-encoded `body` query parameter.
pub fn encode_issue_url(base: &str, body: &str) -> String {
    format!("{}?body={}", base, urlencoding::encode(body))
}

/// Outcome of a bug report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BugReport {
    /// Rendered template.
    pub body: String,
    /// Issue URL carrying the encoded body.
    pub url: String,
    /// Whether the browser launch was handed off successfully.
    pub opened: bool,
}

/// Assembles a bug report and delivers it through a browser or `out`.
pub struct BugReporter<L, W> {
    tracker_url: String,
    launcher: L,
    out: W,
}

impl<L: BrowserLauncher, W: Write> BugReporter<L, W> {
    /// Creates a reporter targeting the default issue tracker.
    pub fn new(launcher: L, out: W) -> Self {
        Self::with_tracker_url(BUG_TRACKER_URL, launcher, out)
    }

    pub fn with_tracker_url(tracker_url: impl Into<String>, launcher: L, out: W) -> Self {
        BugReporter {
            tracker_url: tracker_url.into(),
            launcher,
            out,
        }
    }

    /// Consumes the reporter, returning its writer.
    pub fn into_writer(self) -> W {
        self.out
    }

    /// Builds the report and delivers it.
    ///
    /// Version and serialization failures abort before anything is written
    /// or launched. Browser failures fall back to printing instructions and
    /// are not returned as errors.
    pub fn execute<V, C, T>(&mut self, version: V, config: C) -> Result<BugReport>
    where
        V: FnOnce() -> Result<String>,
        C: FnOnce() -> T,
        T: Serialize,
    {
        let version = version().map_err(|e| match e {
            Error::VersionUnavailable(msg) => Error::VersionUnavailable(msg),
            other => Error::VersionUnavailable(other.to_string()),
        })?;
        let configuration = config_json(&config())?;
        let body = render_report(&version, &configuration)?;
        let url = encode_issue_url(&self.tracker_url, &body);
        tracing::debug!("issue url is {} bytes", url.len());

        let opened = match self.launcher.open(&url) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("could not open browser: {}", e);
                false
            }
        };
        // Output errors after the launch attempt do not fail the command.
        if let Err(e) = self.print(opened, &body) {
            tracing::warn!("failed to print report: {}", e);
        }

        Ok(BugReport { body, url, opened })
    }

    fn print(&mut self, opened: bool, body: &str) -> std::io::Result<()> {
        if opened {
            write!(self.out, "Opening issue with:\n\n")?;
        } else {
            write!(
                self.out,
                "Please file a new issue at {} using this template:\n\n",
                self.tracker_url
            )?;
        }
        self.out.write_all(body.as_bytes())?;
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
