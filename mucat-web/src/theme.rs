use mucat_core::Theme;
use tracing::warn;

/// Set `data-theme` on the document root so the stylesheet picks it up.
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys_x::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        warn!("No document root to apply theme to");
        return;
    };

    if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
        warn!("Failed to apply theme {}: {:?}", theme, e);
    }
}
