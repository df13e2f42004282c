//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &mut Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => show_settings(config),
        ConfigAction::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigAction::Set { key, value } => set_setting(config, path, &key, &value, formatter),
    }
}

/// Show the effective settings.
fn show_settings(config: &Config) -> Result<()> {
    let settings = &config.settings;
    println!("Settings:");
    println!("  locale: {}", settings.locale);
    println!("  format: {:?}", settings.format);
    println!("  color: {}", settings.color);
    println!("  history_size: {}", settings.history_size);
    Ok(())
}

/// Update a setting and persist the file.
fn set_setting(config: &mut Config, path: &Path, key: &str, value: &str, formatter: &Formatter) -> Result<()> {
    config.set(key, value)?;
    config.save_to(path)?;
    println!("{}", formatter.success(&format!("Set {} = {}", key, value)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use genea_namer::Locale;

    #[test]
    fn test_set_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        let formatter = Formatter::new(OutputFormat::Table, false);

        let args = ConfigArgs {
            action: ConfigAction::Set {
                key: "locale".to_string(),
                value: "en".to_string(),
            },
        };
        execute_config(args, &mut config, &path, &formatter).unwrap();

        assert_eq!(config.settings.locale, Locale::English);
        assert_eq!(Config::load_from(&path).unwrap().settings.locale, Locale::English);
    }

    #[test]
    fn test_invalid_set_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        let formatter = Formatter::new(OutputFormat::Table, false);

        let result = set_setting(&mut config, &path, "format", "xml", &formatter);
        assert!(result.is_err());
        assert!(!path.exists());
    }
}
