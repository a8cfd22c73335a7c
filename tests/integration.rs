// SPDX-License-Identifier: MPL-2.0
use gallery_lens::app::{App, Message};
use gallery_lens::application::port::gallery::GalleryApi;
use gallery_lens::config::{self, Config};
use gallery_lens::domain::gallery::View;
use gallery_lens::i18n::fluent::I18n;
use gallery_lens::infrastructure::http::HttpGalleryApi;
use std::sync::Arc;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("navbar-back-button"), "Back");

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn settings_file_drives_server_and_limits() {
    let dir = tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("settings.toml"),
        r#"
[server]
base_url = "http://photos.local:9000/gallery"
request_timeout_secs = 5

[display]
thumbnail_size = 9999

[history]
max_entries = 2
"#,
    )
    .expect("write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(config.server_url(), "http://photos.local:9000/gallery");
    assert_eq!(
        config.request_timeout(),
        Some(std::time::Duration::from_secs(5))
    );
    assert_eq!(config.thumbnail_size(), config::MAX_THUMBNAIL_SIZE);
    assert_eq!(config.history_entries(), 2);

    let api = HttpGalleryApi::new(config.server_url(), config.request_timeout())
        .expect("valid server url");
    assert_eq!(
        api.base_url().as_str(),
        "http://photos.local:9000/gallery/"
    );
}

#[test]
fn history_depth_follows_config() {
    let mut config = Config::default();
    config.history.max_entries = Some(2);
    let api: Arc<dyn GalleryApi> =
        Arc::new(HttpGalleryApi::new(config.server_url(), None).expect("client"));

    let (mut app, _task) = App::with_api(api, &config, I18n::new(Some("en-US".into()), &config));
    assert_eq!(app.state().view, View::Init);

    for round in 0..4 {
        let _ = app.update(Message::GalleryListLoaded(Ok(vec![format!("g{round}")])));
    }
    assert_eq!(app.history().len(), 2);
}

#[test]
fn broken_settings_fall_back_to_defaults_with_warning() {
    let dir = tempdir().expect("tempdir");
    std::fs::write(dir.path().join("settings.toml"), "[server\nbase_url = ").expect("write");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(
        warning.as_deref(),
        Some("notification-config-load-error")
    );
}
