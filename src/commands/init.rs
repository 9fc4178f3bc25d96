use anyhow::Result;
use std::fs;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(".vulngate.toml");

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Vulngate Configuration

[gate]
# Fail the build when the worst vulnerability score is strictly greater
# than this value. 0 fails on any scored vulnerability.
fail_threshold = 0.0

[summary]
# Include clean dependencies in the summary output.
verbose = false
"#;

    fs::write(&config_path, default_config)?;
    println!("Created .vulngate.toml configuration file");

    Ok(())
}
