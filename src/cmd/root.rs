use crate::cmd::Query;
use crate::data::AppSettings;
use crate::ui::board::{run_app, App};
use crate::ui::theme::Theme;
use crate::ui::{restore_terminal, setup_terminal};
use anyhow::Result;

/// Opens the board. `stored` is config.yaml as loaded, without command-line
/// overrides. Only a country or theme picked on the board is written back to it.
pub fn run(query: &Query, theme: Theme, stored: AppSettings) -> Result<()> {
    let mut app = App::new(query.year, query.today, query.resolved_country(), theme)?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen
        );
        original_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;

    if let Some(updated) = board_choices(&stored, &app) {
        updated.save()?;
    }

    result
}

/// The settings to save after the board closes, or `None` when nothing was picked.
fn board_choices(stored: &AppSettings, app: &App) -> Option<AppSettings> {
    if !app.country_changed() && !app.theme_changed() {
        return None;
    }
    let mut updated = stored.clone();
    if app.country_changed() {
        updated.country = app.country.map(|c| c.code().to_lowercase());
    }
    if app.theme_changed() {
        updated.theme = app.theme.id.to_string();
    }
    Some(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Country;
    use chrono::NaiveDate;
    use crossterm::event::{KeyCode, KeyModifiers};
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn stored() -> AppSettings {
        AppSettings {
            country: Some("jp".to_string()),
            theme: "sakura".to_string(),
        }
    }

    /// Builds the board the way `run` does for the given command-line overrides.
    fn app_for(country: Option<&str>, theme: Option<&str>) -> App {
        let settings = stored().with_overrides(country, theme);
        let query = Query {
            year: 2025,
            country: settings.country.clone(),
            today: today(),
        };
        App::new(2025, today(), query.resolved_country(), Theme::by_id(&settings.theme)).unwrap()
    }

    #[test]
    fn test_board_choices_records_country_and_theme() {
        let mut app = app_for(None, None);
        app.handle_key(KeyCode::Char('c'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('t'), KeyModifiers::NONE);
        let updated = board_choices(&stored(), &app).unwrap();
        // Japan -> South Korea, sakura -> lofi-beige (wraps)
        assert_eq!(updated.country.as_deref(), Some("kr"));
        assert_eq!(updated.theme, "lofi-beige");
        assert_eq!(
            Country::lookup(updated.country.as_deref().unwrap()),
            Some(Country::SouthKorea)
        );
    }

    #[test]
    fn test_board_choices_none_when_nothing_picked() {
        let mut app = app_for(None, None);
        app.handle_key(KeyCode::Right, KeyModifiers::NONE);
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(board_choices(&stored(), &app), None);
    }

    #[test]
    fn test_unrecognized_overrides_keep_stored_settings() {
        let tmp = TempDir::new().unwrap();
        stored().save_to(tmp.path()).unwrap();

        let app = app_for(Some("atlantis"), Some("neon"));
        assert_eq!(app.country, None);
        assert_eq!(app.theme, Theme::default());
        assert_eq!(board_choices(&stored(), &app), None);

        let yaml = std::fs::read_to_string(tmp.path().join("config.yaml")).unwrap();
        assert!(yaml.contains("jp"));
        assert!(yaml.contains("sakura"));
    }

    #[test]
    fn test_theme_pick_keeps_stored_country_under_override() {
        let mut app = app_for(Some("atlantis"), None);
        app.handle_key(KeyCode::Char('t'), KeyModifiers::NONE);
        let updated = board_choices(&stored(), &app).unwrap();
        assert_eq!(updated.country.as_deref(), Some("jp"));
        assert_eq!(updated.theme, "lofi-beige");
    }

    #[test]
    fn test_board_choices_clears_country_for_default_list() {
        let mut app = app_for(Some("cn"), None);
        // China is last in the selector, so `c` returns to the default list.
        app.handle_key(KeyCode::Char('c'), KeyModifiers::NONE);
        let updated = board_choices(&stored(), &app).unwrap();
        assert_eq!(updated.country, None);
        assert_eq!(updated.theme, "sakura");
    }
}
