//! `podsite config`

use std::path::Path;

use anyhow::{bail, Result};
use podsite_config::{apply_all_defaults, write_config, PodsiteConfig};

/// Print the effective config, or write a default one with `init`.
pub async fn run(config: &PodsiteConfig, path: &Path, init: bool, force: bool) -> Result<()> {
    if init {
        if path.exists() && !force {
            bail!("{} already exists (use --force to overwrite)", path.display());
        }
        let fresh = apply_all_defaults(PodsiteConfig::default());
        write_config(&fresh, path).await?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    print!("{}", serde_yaml::to_string(config)?);
    Ok(())
}
