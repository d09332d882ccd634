use tauri::{
    image::Image,
    menu::{Menu, MenuItem, PredefinedMenuItem},
    tray::TrayIconBuilder,
    Manager, RunEvent, WebviewUrl, WebviewWindowBuilder,
};
use tauri_plugin_global_shortcut::{Code, GlobalShortcutExt, Shortcut};

mod capture;
mod config;
mod deeplink;
mod platform;

use config::AppConfig;
use deeplink::TabContext;

/// Flag to distinguish intentional quit from window-close
static SHOULD_QUIT: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);

/// Menu id of the capture entry; clicks on any other id are not captures.
const CAPTURE_MENU_ID: &str = "cortex-capture";

// ── Tauri commands callable from the frontend ───────────────────────────────

#[tauri::command]
async fn get_config(app: tauri::AppHandle) -> Result<AppConfig, String> {
    Ok(AppConfig::load(&app))
}

#[tauri::command]
async fn save_config(app: tauri::AppHandle, config: AppConfig) -> Result<(), String> {
    config.save(&app)
}

/// Capture the current selection, exactly as the tray entry does.
#[tauri::command]
async fn capture_selection(app: tauri::AppHandle) -> Result<(), String> {
    capture::save_selection(app).await;
    Ok(())
}

/// Capture explicit text with optional page context; bypasses the clipboard.
/// Returns the deep link that was opened.
#[tauri::command]
async fn capture_text(
    app: tauri::AppHandle,
    text: String,
    url: Option<String>,
    title: Option<String>,
) -> Result<String, String> {
    let tab = TabContext { url, title };
    capture::dispatch(&app, &text, &tab).map_err(|e| e.to_string())
}

fn create_window(app: &tauri::AppHandle, label: &str, title: &str, url: &str, width: f64, height: f64) {
    let app_clone = app.clone();
    let label = label.to_string();
    let title = title.to_string();
    let url = url.to_string();

    let _ = app.run_on_main_thread(move || {
        let app = app_clone;

        if let Some(window) = app.get_webview_window(&label) {
            let _ = window.show();
            let _ = window.set_focus();
            return;
        }

        if let Ok(window) = WebviewWindowBuilder::new(&app, &label, WebviewUrl::App(url.into()))
            .title(&title)
            .inner_size(width, height)
            .resizable(false)
            .center()
            .visible(true)
            .build()
        {
            let _ = window.set_focus();
        }
    });
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(
            tauri_plugin_log::Builder::new()
                .level(log::LevelFilter::Info)
                .build(),
        )
        .plugin(tauri_plugin_global_shortcut::Builder::new().build())
        .plugin(tauri_plugin_notification::init())
        .plugin(tauri_plugin_store::Builder::default().build())
        .plugin(tauri_plugin_opener::init())
        .invoke_handler(tauri::generate_handler![
            get_config,
            save_config,
            capture_selection,
            capture_text,
        ])
        .setup(|app| {
            // Tray-only: keep the app out of the Dock.
            #[cfg(target_os = "macos")]
            app.set_activation_policy(tauri::ActivationPolicy::Accessory);

            // Build tray menu with platform-appropriate shortcut display
            let shortcut_prefix = platform::platform_shortcut_display();
            let capture_item = MenuItem::with_id(
                app,
                CAPTURE_MENU_ID,
                &format!("Save to Cortex  {}S", shortcut_prefix),
                true,
                None::<&str>,
            )?;
            let settings = MenuItem::with_id(app, "settings", "Settings", true, None::<&str>)?;
            let quit = MenuItem::with_id(app, "quit", "Quit Cortex Capture", true, None::<&str>)?;
            let separator = PredefinedMenuItem::separator(app)?;
            let menu = Menu::with_items(app, &[&capture_item, &separator, &settings, &separator, &quit])?;

            // Build tray icon (embedded at compile time for reliable loading)
            let icon = Image::from_bytes(include_bytes!("../icons/tray-icon.png"))
                .expect("failed to load tray icon");
            let mut tray_builder = TrayIconBuilder::with_id("main-tray")
                .icon(icon)
                .menu(&menu)
                .tooltip("Cortex Capture")
                .on_menu_event(|app, event| match event.id().as_ref() {
                    CAPTURE_MENU_ID => {
                        let handle = app.clone();
                        tauri::async_runtime::spawn(async move {
                            capture::save_selection(handle).await;
                        });
                    }
                    "settings" => {
                        create_window(app, "settings", "Settings", "/", 400.0, 360.0);
                    }
                    "quit" => {
                        SHOULD_QUIT.store(true, std::sync::atomic::Ordering::SeqCst);
                        app.exit(0);
                    }
                    _ => {}
                });

            // Template icons only work on macOS
            #[cfg(target_os = "macos")]
            {
                tray_builder = tray_builder.icon_as_template(true);
            }

            let _tray = tray_builder.build(app)?;
            log::info!("capture menu registered");

            // Save Selection shortcut with platform-appropriate modifier
            let app_handle = app.handle().clone();
            let modifier = platform::platform_shortcut_modifier()
                | tauri_plugin_global_shortcut::Modifiers::SHIFT;
            let save_shortcut = Shortcut::new(Some(modifier), Code::KeyS);
            app.global_shortcut().on_shortcut(save_shortcut, {
                let app_handle = app_handle.clone();
                move |_app, _shortcut, _event| {
                    let handle = app_handle.clone();
                    tauri::async_runtime::spawn(async move {
                        capture::save_selection(handle).await;
                    });
                }
            })?;

            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|_app, event| {
            if let RunEvent::ExitRequested { api, .. } = event {
                if !SHOULD_QUIT.load(std::sync::atomic::Ordering::SeqCst) {
                    api.prevent_exit();
                }
            }
        });
}
