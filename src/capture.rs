use tauri_plugin_notification::NotificationExt;
use tauri_plugin_opener::OpenerExt;

use crate::config::AppConfig;
use crate::deeplink::{build_capture_url, TabContext};
use crate::platform;

/// Failures on the capture path. Building the link itself cannot fail;
/// everything here is host-environment trouble.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("no text selected")]
    NoSelection,
    #[error("failed to open deep link: {0}")]
    Open(#[from] tauri_plugin_opener::Error),
}

/// Save the current text selection to Cortex.
/// Simulates Cmd/Ctrl+C, reads the clipboard, grabs the active tab context,
/// and hands the resulting deep link to the OS. Tray menu and global
/// shortcut both land here.
pub async fn save_selection(app_handle: tauri::AppHandle) {
    // Step 1: Simulate copy keystroke
    platform::platform_simulate_copy();

    // Step 2: Wait for clipboard to update
    tokio::time::sleep(tokio::time::Duration::from_millis(150)).await;

    // Step 3: Read clipboard
    let selection = platform::platform_read_clipboard().unwrap_or_default();
    if selection.trim().is_empty() {
        log::info!("no text selected, skipping capture");
        notify(
            &app_handle,
            "Cortex Capture",
            "No text selected. Select some text and try again.",
        );
        return;
    }

    // Step 4: Active tab URL and title, when a browser is frontmost
    let tab = platform::platform_active_tab().await;

    // Step 5: Build the deep link and hand it off
    match dispatch(&app_handle, &selection, &tab) {
        Ok(_) => {
            notify(&app_handle, "Saved to Cortex", &preview(&selection));
        }
        Err(e) => {
            log::error!("capture failed: {}", e);
            notify(&app_handle, "Cortex Capture", &format!("Failed to capture: {}", e));
        }
    }
}

/// Build the deep link for `selection` and ask the OS to open it, launching
/// the Cortex app. Fire-and-forget: no retries, and whether a handler for
/// the scheme is installed is invisible from here.
pub fn dispatch(
    app_handle: &tauri::AppHandle,
    selection: &str,
    tab: &TabContext,
) -> Result<String, CaptureError> {
    let link = build_capture_url(selection, tab).ok_or(CaptureError::NoSelection)?;

    log::info!("opening deep link: {}", link);
    app_handle.opener().open_url(&link, None::<&str>)?;
    Ok(link)
}

/// Show a notification unless the user turned them off.
fn notify(app_handle: &tauri::AppHandle, title: &str, body: &str) {
    if !AppConfig::load(app_handle).show_notifications {
        return;
    }
    let _ = app_handle
        .notification()
        .builder()
        .title(title)
        .body(body)
        .show();
}

/// Shorten captured text for the notification body.
fn preview(text: &str) -> String {
    if text.chars().count() > 60 {
        let head: String = text.chars().take(57).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::preview;

    #[test]
    fn short_text_passes_through() {
        assert_eq!(preview("Hello World"), "Hello World");
    }

    #[test]
    fn long_text_is_ellipsized() {
        let long = "x".repeat(80);
        let p = preview(&long);
        assert_eq!(p.chars().count(), 60);
        assert!(p.ends_with("..."));
    }

    #[test]
    fn multibyte_text_truncates_on_char_boundary() {
        let long = "café ".repeat(30);
        let p = preview(&long);
        assert_eq!(p.chars().count(), 60);
        assert!(p.ends_with("..."));
    }
}
