// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use crate::error::Result;
use crate::version::write_version;

/// Print version information to stdout.
pub fn run() -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_version(&mut out)?;
    out.flush()?;
    Ok(())
}
