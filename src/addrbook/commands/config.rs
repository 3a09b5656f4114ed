use crate::commands::{CmdMessage, CmdResult};
use crate::config::BookConfig;
use crate::error::{BookError, Result};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(home: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = BookConfig::load(home)?;

    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => match config.get(&key) {
            Some(value) => Ok(CmdResult::default()
                .with_message(CmdMessage::info(format!("{} = {}", key, value)))),
            None => Err(BookError::Usage(format!(
                "unknown config key '{}', expected one of: {}",
                key,
                BookConfig::KEYS.join(", ")
            ))),
        },
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(home)?;
            let shown = config.get(&key).unwrap_or(value);
            Ok(CmdResult::default()
                .with_message(CmdMessage::success(format!("{} set to {}", key, shown)))
                .with_config(config))
        }
    }
}
