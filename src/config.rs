use std::path::Path;

use anyhow::anyhow;
use config::{Config, File};
use serde::Deserialize;

use crate::completion::matcher::{Case, CompletionFilter, MatchStrategy};

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Offer option names while typing in a modeline
    pub modeline_completions: bool,
    /// Show option descriptions on hover
    pub hover: bool,
    pub match_strategy: MatchStrategy,
    pub case_matching: Case,
}

impl Settings {
    /// Loads settings from `~/.config/camelk-modeline/settings` and
    /// `<root_dir>/.camelk-modeline`, both optional, the latter winning.
    pub fn new(root_dir: &Path) -> anyhow::Result<Settings> {
        let expanded = shellexpand::tilde("~/.config/camelk-modeline/settings");
        Self::from_sources(&expanded, root_dir)
    }

    fn from_sources(user_settings: &str, root_dir: &Path) -> anyhow::Result<Settings> {
        let settings = Config::builder()
            .add_source(File::with_name(user_settings).required(false))
            .add_source(
                File::with_name(&format!(
                    "{}/.camelk-modeline",
                    root_dir
                        .to_str()
                        .ok_or(anyhow!("Can't convert root_dir to str"))?
                ))
                .required(false),
            )
            .set_default("modeline_completions", true)?
            .set_default("hover", true)?
            .set_default("match_strategy", "Prefix")?
            .set_default("case_matching", "Respect")?
            .build()
            .map_err(|err| anyhow!("Build err: {err}"))?;

        let settings = settings.try_deserialize::<Settings>()?;

        anyhow::Ok(settings)
    }

    pub fn completion_filter(&self) -> CompletionFilter {
        CompletionFilter::new(self.match_strategy, self.case_matching)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            modeline_completions: true,
            hover: true,
            match_strategy: MatchStrategy::Prefix,
            case_matching: Case::Respect,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_utils::create_test_workspace_dir;

    #[test]
    fn test_defaults_without_files() {
        let (_temp_dir, root) = create_test_workspace_dir();
        let missing = root.join("no-user-settings");

        let settings = Settings::from_sources(missing.to_str().unwrap(), &root).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.completion_filter(), CompletionFilter::default());
    }

    #[test]
    fn test_workspace_file_overrides_defaults() {
        let (_temp_dir, root) = create_test_workspace_dir();
        fs::write(
            root.join(".camelk-modeline.toml"),
            "match_strategy = \"Fuzzy\"\ncase_matching = \"Smart\"\nhover = false\n",
        )
        .unwrap();
        let missing = root.join("no-user-settings");

        let settings = Settings::from_sources(missing.to_str().unwrap(), &root).unwrap();

        assert_eq!(settings.match_strategy, MatchStrategy::Fuzzy);
        assert_eq!(settings.case_matching, Case::Smart);
        assert!(!settings.hover);
        assert!(settings.modeline_completions);
    }

    #[test]
    fn test_workspace_file_wins_over_user_file() {
        let (_temp_dir, root) = create_test_workspace_dir();
        let user = root.join("user-settings");
        fs::write(user.with_extension("toml"), "match_strategy = \"Substring\"\nhover = false\n").unwrap();
        fs::write(root.join(".camelk-modeline.toml"), "hover = true\n").unwrap();

        let settings = Settings::from_sources(user.to_str().unwrap(), &root).unwrap();

        assert_eq!(settings.match_strategy, MatchStrategy::Substring);
        assert!(settings.hover);
    }

    #[test]
    fn test_rejects_unknown_strategy() {
        let (_temp_dir, root) = create_test_workspace_dir();
        fs::write(root.join(".camelk-modeline.toml"), "match_strategy = \"Regex\"\n").unwrap();
        let missing = root.join("no-user-settings");

        assert!(Settings::from_sources(missing.to_str().unwrap(), &root).is_err());
    }
}
