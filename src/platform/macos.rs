use tauri_plugin_global_shortcut::Modifiers;

use crate::deeplink::TabContext;

/// AppleScript for the frontmost application's name.
const FRONT_APP_SCRIPT: &str = r#"
tell application "System Events"
    set frontApp to name of first application process whose frontmost is true
end tell
return frontApp
"#;

/// AppleScript for Chrome's active-tab URL and title.
const CHROME_TAB_SCRIPT: &str = r#"
tell application "Google Chrome"
    if (count of windows) > 0 then
        return (URL of active tab of front window) & linefeed & (title of active tab of front window)
    else
        return ""
    end if
end tell
"#;

/// AppleScript for Safari's front-document URL and title.
const SAFARI_TAB_SCRIPT: &str = r#"
tell application "Safari"
    if (count of documents) > 0 then
        return (URL of front document) & linefeed & (name of front document)
    else
        return ""
    end if
end tell
"#;

/// Simulate Cmd+C via System Events to copy the current selection.
pub fn platform_simulate_copy() {
    let _ = std::process::Command::new("osascript")
        .arg("-e")
        .arg(r#"tell application "System Events" to keystroke "c" using command down"#)
        .status();
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

/// URL and title of the frontmost browser tab. When the frontmost app is not
/// a supported browser, there is no URL and the active window title stands in.
pub async fn platform_active_tab() -> TabContext {
    let front_app = run_osascript(FRONT_APP_SCRIPT).await.unwrap_or_default();

    let tab_script = if front_app.contains("Chrome") {
        Some(CHROME_TAB_SCRIPT)
    } else if front_app.contains("Safari") {
        Some(SAFARI_TAB_SCRIPT)
    } else {
        None
    };

    if let Some(script) = tab_script {
        if let Some(out) = run_osascript(script).await {
            let mut lines = out.splitn(2, '\n');
            let url = lines.next().unwrap_or("").trim().to_string();
            let title = lines.next().unwrap_or("").trim().to_string();
            if !url.is_empty() {
                return TabContext {
                    url: Some(url),
                    title: if title.is_empty() { None } else { Some(title) },
                };
            }
        }
    }

    TabContext {
        url: None,
        title: active_window_title(),
    }
}

/// Run an AppleScript snippet and return its trimmed stdout.
async fn run_osascript(script: &str) -> Option<String> {
    let output = tokio::process::Command::new("osascript")
        .arg("-e")
        .arg(script)
        .output()
        .await
        .ok()?;

    if !output.status.success() {
        return None;
    }
    let out = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

fn active_window_title() -> Option<String> {
    match active_win_pos_rs::get_active_window() {
        Ok(win) if !win.title.is_empty() => Some(win.title),
        _ => None,
    }
}

/// Return the platform-appropriate shortcut modifier (Cmd on macOS).
pub fn platform_shortcut_modifier() -> Modifiers {
    Modifiers::SUPER
}

/// Return the platform shortcut display prefix for menus.
pub fn platform_shortcut_display() -> &'static str {
    "\u{2318}\u{21E7}" // ⌘⇧
}
