//! Config management commands.
//!
//! ```bash
//! # Write the defaults to the config location
//! konofan-assets config init
//!
//! # Print the effective settings (file + KONOFAN_ASSETS_SOURCE / --source)
//! konofan-assets config show
//! ```

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::ConfigLoader;
use crate::context::AppContext;
use crate::error::{AssetBrowserError, Result};
use crate::utils::{hint, success};

/// Run the config command.
pub fn run_config(args: ConfigArgs, ctx: &AppContext) -> Result<()> {
    match args.action {
        ConfigAction::Init => {
            let path = ConfigLoader::init(ctx.config_path.as_deref())?;
            success(&format!("Wrote default config to {}", path.display()));
            hint("Edit [source] to point at your data directory or mirror");
        }
        ConfigAction::Show => {
            print!("{}", toml::to_string_pretty(&ctx.config)?);
        }
        ConfigAction::Path => {
            let path = ctx.config_path.as_ref().ok_or_else(|| {
                AssetBrowserError::Config("Cannot determine config path".into())
            })?;
            println!("{}", path.display());
        }
    }
    Ok(())
}
