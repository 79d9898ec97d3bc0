// SPDX-License-Identifier: MPL-2.0
use object_locator::app::config::{self, Config};
use object_locator::i18n::fluent::I18n;
use object_locator::media::{DirectoryOptions, ImageOption, ImageOptionList, ImageOptionsProvider};
use object_locator::ui::example_images::{self, Grid};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &config_path).expect("Failed to write initial config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("top-bar-upload-button"), "Upload image");

    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &config_path).expect("Failed to write french config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
}

#[test]
fn test_cli_language_wins_over_config() {
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());

    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[tokio::test]
async fn test_configured_directory_feeds_selector() {
    let dir = tempdir().expect("temp dir");
    let examples = dir.path().join("examples");
    fs::create_dir(&examples).expect("create examples dir");
    for name in ["mug.png", "desk.jpg", "notes.txt"] {
        fs::write(examples.join(name), b"").expect("write file");
    }

    let mut config = Config::default();
    config.examples.directory = Some(examples.clone());
    config.examples.defaults = vec!["placeholder.png".to_string()];
    config::save_to_path(&config, &dir.path().join("settings.toml")).expect("save config");
    let config = config::load_from_path(&dir.path().join("settings.toml")).expect("load config");

    let provider = config.examples.provider(None);
    let mut selector = example_images::State::new(provider.as_ref());
    assert_eq!(
        selector.grid(),
        Grid::Thumbnails(&[ImageOption::new("placeholder.png")])
    );

    // Drive the load by hand: the iced runtime is not involved here.
    let _ = selector.mount(provider.as_ref());
    let result = provider.load_options().await;
    let _ = selector.update(example_images::Message::OptionsLoaded {
        selector: selector.id(),
        result,
    });

    let names: Vec<_> = selector
        .displayed()
        .iter()
        .map(ImageOption::display_name)
        .collect();
    assert_eq!(names, vec!["desk", "mug"]);
    assert!(selector.options().is_ready());
}

#[tokio::test]
async fn test_missing_directory_keeps_defaults() {
    let dir = tempdir().expect("temp dir");
    let defaults: ImageOptionList = ["a.png"].into_iter().collect();
    let provider = DirectoryOptions::new(dir.path().join("absent"), defaults.clone());

    let mut selector = example_images::State::new(&provider);
    let _ = selector.mount(&provider);
    let result = provider.load_options().await;
    let event = selector.update(example_images::Message::OptionsLoaded {
        selector: selector.id(),
        result,
    });

    assert!(matches!(event, example_images::Event::OptionsLoadFailed(_)));
    assert_eq!(selector.displayed(), &defaults);
}
