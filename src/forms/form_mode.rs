use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Mode the secret form is opened in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    /// Creates a new secret.
    Add,
    /// Updates an existing secret.
    Edit,
    /// Displays an existing secret without allowing changes.
    View,
}

impl FormMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormMode::Add => "add",
            FormMode::Edit => "edit",
            FormMode::View => "view",
        }
    }

    /// Indicates whether the form starts from an existing secret.
    pub fn loads_existing(&self) -> bool {
        !matches!(self, FormMode::Add)
    }
}

impl Display for FormMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::FormMode;

    #[test]
    fn serialization() -> anyhow::Result<()> {
        assert_eq!(serde_json::to_string(&FormMode::Add)?, r#""add""#);
        assert_eq!(serde_json::to_string(&FormMode::Edit)?, r#""edit""#);
        assert_eq!(serde_json::to_string(&FormMode::View)?, r#""view""#);

        Ok(())
    }

    #[test]
    fn loads_existing() {
        assert!(!FormMode::Add.loads_existing());
        assert!(FormMode::Edit.loads_existing());
        assert!(FormMode::View.loads_existing());
    }
}
