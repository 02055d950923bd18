// SPDX-License-Identifier: MPL-2.0
use iced::mouse::Button;
use iced_login::app::config;
use iced_login::app::{App, Flags, Message, Navigation, Screen};
use iced_login::i18n::fluent::I18n;
use iced_login::ui::state::ClickGesture;
use iced_login::ui::stylesheet::{self, ids};
use iced_login::ui::{login, signup};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    fs::write(&config_path, "[general]\nlanguage = \"en-US\"\n")
        .expect("Failed to write initial config file");
    let english = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n_en = I18n::new(None, &english);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("login-button"), "Login");

    fs::write(&config_path, "[general]\nlanguage = \"fr\"\n")
        .expect("Failed to write french config file");
    let french = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n_fr = I18n::new(None, &french);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("login-title"), "Connexion");
}

#[test]
fn test_cli_language_beats_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");
    fs::write(&config_path, "[general]\nlanguage = \"fr\"\n").expect("write config");

    let config = config::load_from_path(&config_path).expect("load config");
    let i18n = I18n::new(Some("en-US".into()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_missing_config_dir_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (config, warning) = config::load_with_override(Some(dir.path().join("absent")));
    assert!(warning.is_none());
    assert_eq!(config, config::Config::default());
}

#[test]
fn test_stylesheet_from_disk_applies_and_missing_is_silent() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let sheet_path = dir.path().join("login.toml");
    fs::write(
        &sheet_path,
        "[LoginButton]\nbackground = \"#2563EB\"\nborder-radius = 6\n",
    )
    .expect("write stylesheet");

    let (sheet, warning) = stylesheet::load(&sheet_path);
    assert!(warning.is_none());
    assert_eq!(sheet.get(ids::LOGIN_BUTTON).border_radius, Some(6.0));

    let (missing, warning) = stylesheet::load(&dir.path().join("absent.toml"));
    assert!(warning.is_none());
    assert!(missing.is_empty());
}

#[test]
fn test_malformed_stylesheet_reports_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let sheet_path = dir.path().join("login.toml");
    fs::write(&sheet_path, "[LoginButton\nbackground = 1").expect("write stylesheet");

    let (sheet, warning) = stylesheet::load(&sheet_path);
    assert!(sheet.is_empty());
    assert_eq!(warning.as_deref(), Some("warning-stylesheet-syntax"));
}

#[test]
fn test_bundled_stylesheet_parses() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("res/login.toml");
    let sheet = stylesheet::load_from_path(&path).expect("bundled stylesheet is valid");
    assert!(!sheet.is_empty());
}

#[test]
fn test_screen_transitions_are_reversible() {
    let forgot = Screen::Login.navigate(Navigation::ForgotPassword);
    assert_eq!(forgot.navigate(Navigation::BackToLogin), Screen::Login);

    let signup = Screen::Login.navigate(Navigation::Signup);
    assert_eq!(signup.navigate(Navigation::BackToLogin), Screen::Login);
}

#[test]
fn test_app_walks_every_panel() {
    let mut app = App::with_config(
        Flags {
            lang: Some("en-US".into()),
            stylesheet: Some("/nonexistent/login.toml".into()),
            ..Flags::default()
        },
        &config::Config::default(),
    );
    assert_eq!(app.screen(), Screen::Login);

    let _ = app.update(Message::Login(login::Message::SignupClicked));
    assert_eq!(app.screen(), Screen::Signup);
    let _ = app.update(Message::Signup(signup::Message::FirstNameChanged(
        "Ada".into(),
    )));
    assert_eq!(app.signup_state().first_name, "Ada");

    let _ = app.update(Message::Signup(signup::Message::AlreadyHaveAccountClicked));
    assert_eq!(app.screen(), Screen::Login);
}

#[test]
fn test_click_requires_press_and_release_inside() {
    let mut gesture = ClickGesture::default();
    gesture.press(Button::Left, true);
    assert!(gesture.release(Button::Left, true));

    gesture.press(Button::Left, true);
    assert!(!gesture.release(Button::Left, false));

    gesture.press(Button::Left, false);
    assert!(!gesture.release(Button::Left, true));
}
