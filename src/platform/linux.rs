use tauri_plugin_global_shortcut::Modifiers;

use crate::deeplink::TabContext;

/// Simulate Ctrl+C to copy the current selection.
pub fn platform_simulate_copy() {
    use enigo::{Direction, Enigo, Key, Keyboard, Settings};
    if let Ok(mut enigo) = Enigo::new(&Settings::default()) {
        let _ = enigo.key(Key::Control, Direction::Press);
        let _ = enigo.key(Key::Unicode('c'), Direction::Click);
        let _ = enigo.key(Key::Control, Direction::Release);
    }
    // Small delay for the target app to process
    std::thread::sleep(std::time::Duration::from_millis(50));
}

/// Read clipboard text via arboard (cross-platform).
pub fn platform_read_clipboard() -> Option<String> {
    let mut clipboard = arboard::Clipboard::new().ok()?;
    let text = clipboard.get_text().ok()?;
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// No browser tab probe on Linux; the active window title (X11 only) is the
/// only page context, and the URL stays absent.
pub async fn platform_active_tab() -> TabContext {
    let title = match active_win_pos_rs::get_active_window() {
        Ok(win) if !win.title.is_empty() => Some(win.title),
        _ => None,
    };
    TabContext { url: None, title }
}

/// Return the platform-appropriate shortcut modifier (Ctrl on Linux).
pub fn platform_shortcut_modifier() -> Modifiers {
    Modifiers::CONTROL
}

/// Return the platform shortcut display prefix for menus.
pub fn platform_shortcut_display() -> &'static str {
    "Ctrl+Shift+"
}
