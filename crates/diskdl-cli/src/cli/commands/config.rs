//! `diskdl config` – show where the config lives and what it holds.

use anyhow::Result;
use diskdl_core::config;

pub fn run_config() -> Result<()> {
    let path = config::config_path()?;
    let cfg = config::load_or_init_at(&path)?;
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(&cfg)?);
    println!("# download URL: {}", cfg.endpoint_url()?);
    Ok(())
}
