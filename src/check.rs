use crate::args;
use crate::errors::*;
use crate::manifest::Manifest;
use std::io;

pub fn run(check: args::Check) -> Result<()> {
    info!("Loading manifest from {:?}...", check.manifest);
    let manifest = Manifest::load_from_path(&check.manifest)?;

    if check.json {
        serde_json::to_writer_pretty(io::stdout(), &manifest)?;
        println!();
    }

    for entry in &manifest.constants {
        let constant = entry.resolve()?;
        println!("constant {:?}: {} bytes", constant.name, constant.data.len());
    }

    Ok(())
}
