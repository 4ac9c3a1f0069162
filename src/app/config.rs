use crate::paths::*;

use std::error::Error;
use std::fs::File;
use std::io::BufReader;

use serde::{Deserialize, Serialize};

/// Identity card shown at the top of the drawer
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProfileCard {
    #[serde(default = "default_display_name")]
    pub display_name: String,
    #[serde(default = "default_email")]
    pub email: String,
    /// Absolute path to an avatar image (png/jpeg).
    /// An initials disc is painted when unset.
    #[serde(default)]
    pub avatar_path: Option<String>,
}

fn default_display_name() -> String {
    "Lucas Krul".to_string()
}

fn default_email() -> String {
    "lucas@krul.com.br".to_string()
}

impl Default for ProfileCard {
    fn default() -> Self {
        ProfileCard {
            display_name: default_display_name(),
            email: default_email(),
            avatar_path: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ShellConfig {
    #[serde(default)]
    pub profile: ProfileCard,
    /// Fraction of the window width the open drawer occupies
    #[serde(default = "default_drawer_fraction")]
    pub drawer_fraction: f32,
}

fn default_drawer_fraction() -> f32 {
    0.5
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            profile: ProfileCard::default(),
            drawer_fraction: default_drawer_fraction(),
        }
    }
}

impl ShellConfig {
    /// Keep hand-edited values inside the range the layout can handle
    pub fn normalized(mut self) -> Self {
        self.drawer_fraction = self.drawer_fraction.clamp(0.25, 0.75);
        self
    }
}

pub fn load_cfg() -> ShellConfig {
    let path = PATH_SHELL.join("settings.json");

    if let Ok(file) = File::open(path) {
        if let Ok(config) = serde_json::from_reader::<_, ShellConfig>(BufReader::new(file)) {
            return config.normalized();
        }
    }

    // Return default settings if file doesn't exist or has error
    ShellConfig::default()
}

pub fn save_cfg(config: &ShellConfig) -> Result<(), Box<dyn Error>> {
    std::fs::create_dir_all(&*PATH_SHELL)?;
    let file = File::create(PATH_SHELL.join("settings.json"))?;
    serde_json::to_writer_pretty(file, config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_identity_card() {
        let config = ShellConfig::default();
        assert_eq!(config.profile.display_name, "Lucas Krul");
        assert_eq!(config.profile.email, "lucas@krul.com.br");
        assert_eq!(config.profile.avatar_path, None);
        assert_eq!(config.drawer_fraction, 0.5);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: ShellConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn test_drawer_fraction_is_clamped() {
        let mut config = ShellConfig::default();
        config.drawer_fraction = 0.95;
        assert_eq!(config.normalized().drawer_fraction, 0.75);

        let mut config = ShellConfig::default();
        config.drawer_fraction = 0.0;
        assert_eq!(config.normalized().drawer_fraction, 0.25);
    }
}
