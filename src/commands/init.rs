use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;

/// Runs the configuration wizard and saves the result.
pub fn cmd() -> Result<Config> {
    let config = Config::init()?;
    config.save()?;
    msg_success!(Message::ConfigSaved);

    Ok(config)
}
