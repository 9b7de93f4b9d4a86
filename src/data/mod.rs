pub mod app_settings;
pub mod country;
pub mod holiday;
pub mod persistence;
pub mod tables;

pub use app_settings::AppSettings;
pub use country::Country;
pub use holiday::Holiday;
