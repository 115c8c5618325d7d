use crate::codegen;
use crate::errors::*;
use std::io::Write;

pub fn emit<W: Write>(w: &mut W, name: &str, data: &[u8]) -> Result<()> {
    let mut buf = String::new();
    codegen::escape(data, &mut buf)?;
    writeln!(w, "pub static {name}: &[u8] = b\"{buf}\";")?;
    Ok(())
}
