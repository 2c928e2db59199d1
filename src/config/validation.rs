use super::defaults::{MAX_PERMISSION_DELAY_MS, MAX_WIDTH, MIN_WIDTH};
use super::AppConfig;
use anyhow::{bail, Result};
use clap::Parser;

impl AppConfig {
    /// Parse CLI arguments and validate them right away.
    pub fn parse_args() -> Result<Self> {
        let mut config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    /// Check CLI values and normalize implied flags.
    pub fn validate(&mut self) -> Result<()> {
        if !(MIN_WIDTH..=MAX_WIDTH).contains(&self.width) {
            bail!(
                "--width must be between {MIN_WIDTH} and {MAX_WIDTH} columns, got {}",
                self.width
            );
        }
        if self.permission_delay_ms > MAX_PERMISSION_DELAY_MS {
            bail!(
                "--permission-delay-ms must be at most {MAX_PERMISSION_DELAY_MS}, got {}",
                self.permission_delay_ms
            );
        }
        if self.grant && self.deny {
            bail!("--grant and --deny cannot be used together");
        }
        if self.json {
            self.once = true;
        }
        if self.click && !self.once {
            bail!("--click requires --once (use Enter or a mouse click in the interactive view)");
        }
        Ok(())
    }
}
