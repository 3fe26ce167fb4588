use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::PortalConfig;

pub fn run(token: Option<String>) -> Result<()> {
    let mut cfg = PortalConfig::load()?;

    let token = match token {
        Some(t) => t,
        None => rpassword::prompt_password("  Portal API token: ")?,
    };

    let token = token.trim();
    if token.is_empty() {
        anyhow::bail!("No token provided");
    }

    cfg.token = Some(token.to_string());
    cfg.save()?;

    println!("{}", "  Token saved. Your calendar now syncs with the portal.".green());
    println!(
        "{}",
        format!("  Config: {}", PortalConfig::config_path()?.display()).dimmed()
    );

    Ok(())
}
