//! Backends command handler
//!
//! Lists the registered user backends by the names `--user-backend` accepts.

use anyhow::Result;

use user_cleanup::config::Config;
use user_cleanup::domain::ports::{backend_name, AccountManager};
use user_cleanup::infrastructure::RegisteredAccounts;

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, StartEvent};
use crate::ui::views::backends::render_backends;

pub fn cmd_backends(config: &Config, ui: &UiContext) -> Result<()> {
    let accounts = RegisteredAccounts::from_config(&config.backends)?;
    let backends = accounts.backends();

    if ui.json {
        emit_event(&StartEvent::new("backends"))?;
        for backend in backends {
            let backend = backend.as_ref();
            emit_event(&serde_json::json!({
                "event": "backend",
                "command": "backends",
                "name": backend_name(backend),
                "type": backend.type_name(),
            }))?;
        }
        emit_event(&CompleteEvent::success("backends").with_count(backends.len()))?;
        return Ok(());
    }

    print!("{}", render_backends(backends, ui.color));
    Ok(())
}
