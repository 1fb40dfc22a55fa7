// src/render/json.rs
// =============================================================================
// Machine-readable output.
//
// - write_json: {"contributions": [...]} for --json
// - write_raw:  the untouched GraphQL response for --query
//
// Both use a 4-space indent.
// =============================================================================

use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

use crate::contributions::Contribution;

#[derive(Serialize)]
struct Report<'a> {
    contributions: &'a [Contribution],
}

pub fn write_json<W: Write>(out: &mut W, contributions: &[Contribution]) -> Result<()> {
    write_pretty(out, &Report { contributions })
}

pub fn write_raw<W: Write>(out: &mut W, raw: &Value) -> Result<()> {
    write_pretty(out, raw)
}

fn write_pretty<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    let mut serializer = Serializer::with_formatter(&mut *out, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    writeln!(out)?;
    Ok(())
}
