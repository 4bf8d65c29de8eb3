// SPDX-License-Identifier: MPL-2.0
use hazard_watch::config::{self, Config, NotificationsConfig, MAX_MAX_VISIBLE_TOASTS};
use hazard_watch::notifications::{ToastProps, ToastStore, Toaster};
use hazard_watch::ui::toast_stack::{self, ToastStack};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;
use tokio::time::{self, Instant};

#[test]
fn settings_file_drives_toast_timeout() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config = Config {
        notifications: NotificationsConfig {
            timeout_ms: Some(2_000),
            max_visible: Some(3),
        },
        ..Config::default()
    };
    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let mut store = ToastStore::new(loaded.notifications.timeout());
    let start = Instant::now();
    let id = store.add_at(ToastProps::titled("Saved"), start);

    assert!(store
        .expire(start + Duration::from_millis(1_999))
        .is_empty());
    assert_eq!(store.expire(start + Duration::from_millis(2_000)), vec![id]);
    assert_eq!(store.visible_count(), 0);
}

#[test]
fn out_of_range_settings_are_clamped() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[notifications]\ntimeout_ms = 999999\nmax_visible = 0\n",
    )
    .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(loaded.notifications.timeout(), Duration::from_secs(60));
    assert_eq!(loaded.notifications.max_visible(), 1);
    assert!(loaded.notifications.max_visible() <= MAX_MAX_VISIBLE_TOASTS);
}

#[tokio::test(start_paused = true)]
async fn tick_driven_expiry_prunes_toasts() {
    let toaster = Toaster::new(Duration::from_millis(1_000));
    toaster.success(ToastProps::titled("first"));
    time::sleep(Duration::from_millis(400)).await;
    let second = toaster.info(ToastProps::titled("second"));

    // Ticks at the UI interval until the first toast has expired.
    for _ in 0..7 {
        time::sleep(Duration::from_millis(100)).await;
        ToastStack::update(&toaster, toast_stack::Message::Tick);
    }

    let snapshot = toaster.snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].id(), &second);

    time::sleep(Duration::from_millis(400)).await;
    ToastStack::update(&toaster, toast_stack::Message::Tick);
    assert!(!toaster.has_toasts());
}
