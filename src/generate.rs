use crate::args;
use crate::codegen;
use crate::errors::*;
use crate::manifest::Manifest;
use std::fs::File;
use std::io;
use std::io::Write;

pub fn run(generate: args::Generate) -> Result<()> {
    info!("Loading manifest from {:?}...", generate.manifest);
    let manifest = Manifest::load_from_path(&generate.manifest)?;

    let constants = manifest
        .resolve()
        .context("Failed to resolve manifest into constants")?;

    let total = constants.iter().map(|c| c.data.len()).sum::<usize>();
    info!(
        "Generating source for {} constants ({} bytes)...",
        constants.len(),
        total
    );

    if let Some(path) = &generate.output {
        let mut f = File::create(path)
            .with_context(|| anyhow!("Failed to open output file: {:?}", path))?;
        codegen::generate(&generate.backend, &constants, &mut f)?;
        f.flush()?;
    } else {
        let stdout = io::stdout();
        let mut stdout = stdout.lock();
        codegen::generate(&generate.backend, &constants, &mut stdout)?;
    }

    Ok(())
}
