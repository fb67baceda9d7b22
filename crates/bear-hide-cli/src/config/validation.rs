use super::HideConfig;
use crate::error::ConfigError;

impl HideConfig {
    /// Reject values that would produce unusable or misplaced hide files.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty("environment", &self.environment, "e.g. \"live\"")?;
        require_non_empty(
            "anchor_application",
            &self.anchor_application,
            "e.g. \"GCCcore\"",
        )?;
        require_non_empty("file_extension", &self.file_extension, "e.g. \".lua\"")?;

        if !self.file_extension.starts_with('.') {
            return Err(ConfigError::InvalidValue {
                field: "file_extension".to_string(),
                value: self.file_extension.clone(),
                hint: "The extension must start with '.', e.g. \".lua\"".to_string(),
            });
        }

        if self.file_prefix.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue {
                field: "file_prefix".to_string(),
                value: self.file_prefix.clone(),
                hint: "Use out_dir to choose the directory; the prefix is part of the file name"
                    .to_string(),
            });
        }

        if self.out_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "out_dir".to_string(),
                value: String::new(),
                hint: "Set out_dir to the Lmod hide directory".to_string(),
            });
        }

        Ok(())
    }
}

fn require_non_empty(field: &str, value: &str, example: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            hint: format!("{field} must not be empty, {example}"),
        });
    }
    Ok(())
}
