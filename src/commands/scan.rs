//! Scan command handler
//!
//! Rebuilds the file-cache entries of a user's home directory.

use anyhow::Result;

use user_cleanup::config::Config;
use user_cleanup::infrastructure::DataDirMounts;
use user_cleanup::{AccountId, CleanupError};

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, StartEvent};
use crate::ui::primitives::text::ColoredText;

pub fn cmd_scan(config: &Config, ui: &UiContext, user_id: &str) -> Result<usize> {
    let account = AccountId::new(user_id);
    let mounts = DataDirMounts::from_config(&config.storage);

    let home = mounts
        .home_dir(&account)
        .map_err(|e| CleanupError::StorageUnavailable {
            account: account.to_string(),
            reason: e.reason,
        })?;
    if !home.is_dir() {
        return Err(CleanupError::StorageUnavailable {
            account: account.to_string(),
            reason: format!("home directory {} does not exist", home.display()),
        }
        .into());
    }

    if ui.json {
        emit_event(&StartEvent::new("scan").with_user(user_id))?;
    }

    let cache = mounts.cache_for(&account);
    let count = cache.scan(&home).map_err(|source| CleanupError::Cache {
        storage: cache.storage_id().to_string(),
        source,
    })?;

    if ui.json {
        emit_event(&CompleteEvent::success("scan").with_count(count))?;
    } else {
        println!(
            "Indexed {} entries of {} {}",
            count,
            cache.storage_id(),
            ColoredText::dim(format!("({})", cache.path().display())).render(ui.color)
        );
    }

    Ok(count)
}
