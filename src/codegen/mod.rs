pub mod c;
pub mod go;
pub mod rust;

use crate::errors::*;
use crate::manifest::Constant;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::io::Write;

pub const GENERATED_MARKER: &str = "// AUTOGENERATED FILE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    C,
    Go,
    Rust,
}

pub fn escape(data: &[u8], out: &mut String) -> Result<()> {
    for b in data {
        write!(out, "\\x{b:02x}")?;
    }
    Ok(())
}

pub fn generate<W: Write>(backend: &Backend, constants: &[Constant], w: &mut W) -> Result<()> {
    writeln!(w, "{GENERATED_MARKER}")?;
    for constant in constants {
        match backend {
            Backend::C => c::emit(w, &constant.name, &constant.data)?,
            Backend::Go => go::emit(w, &constant.name, &constant.data)?,
            Backend::Rust => rust::emit(w, &constant.name, &constant.data)?,
        }
    }
    Ok(())
}
