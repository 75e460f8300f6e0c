//! Backends command view

use user_cleanup::domain::ports::{backend_name, UserBackend};

use crate::ui::primitives::text::ColoredText;

/// List backends by the name `--user-backend` accepts, with their type
pub fn render_backends(backends: &[Box<dyn UserBackend>], color: bool) -> String {
    if backends.is_empty() {
        return format!(
            "{}\n",
            ColoredText::dim("No user backends configured.").render(color)
        );
    }

    let mut out = String::from("Registered user backends:\n");
    for backend in backends {
        let backend = backend.as_ref();
        let name = backend_name(backend);
        out.push_str("    ");
        out.push_str(&ColoredText::info(name).render(color));
        if name != backend.type_name() {
            out.push_str(&format!(
                " {}",
                ColoredText::dim(format!("({})", backend.type_name())).render(color)
            ));
        }
        out.push('\n');
    }
    out
}
