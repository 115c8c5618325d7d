use crate::codegen;
use crate::errors::*;
use std::io::Write;

pub fn emit<W: Write>(w: &mut W, name: &str, data: &[u8]) -> Result<()> {
    let mut buf = String::new();
    codegen::escape(data, &mut buf)?;
    writeln!(w, "var {name} = []byte(\"{buf}\")")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_sample() -> Result<()> {
        let mut buf = Vec::new();
        emit(&mut buf, "sample", &[0x00, 0x41, 0xff])?;
        assert_eq!(
            String::from_utf8(buf)?,
            "var sample = []byte(\"\\x00\\x41\\xff\")\n"
        );
        Ok(())
    }

    #[test]
    fn emit_empty() -> Result<()> {
        let mut buf = Vec::new();
        emit(&mut buf, "sample", &[])?;
        assert_eq!(String::from_utf8(buf)?, "var sample = []byte(\"\")\n");
        Ok(())
    }
}
