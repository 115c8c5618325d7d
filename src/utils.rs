use crate::errors::*;
use std::fs;
use std::io;
use std::io::Read;
use std::path::Path;

pub fn read_input_path(path: &Path) -> Result<Vec<u8>> {
    if path.to_str() == Some("-") {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        let data =
            fs::read(path).with_context(|| anyhow!("Failed to read from path: {:?}", path))?;
        Ok(data)
    }
}
