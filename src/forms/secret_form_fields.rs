use crate::{
    forms::ImageList,
    secrets::{SecretEvent, SecretRecord},
};
use anyhow::bail;
use std::collections::BTreeSet;

/// Notice displayed next to the events selection.
pub const EVENTS_DISCLAIMER: &str = "Native secrets do NOT have the pull_request event enabled \
    by default. This is intentional to help mitigate exposure via a pull request against the \
    repo. You can override this behavior, at your own risk, for each secret.";

/// Editable values of the secret form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretFormFields {
    pub name: String,
    /// Blank value in `edit` mode keeps the stored value unchanged.
    pub value: String,
    pub events: BTreeSet<SecretEvent>,
    pub allow_command: bool,
    pub images: ImageList,
}

impl SecretFormFields {
    /// Selects or deselects the event.
    pub fn set_event(&mut self, event: SecretEvent, selected: bool) {
        if selected {
            self.events.insert(event);
        } else {
            self.events.remove(&event);
        }
    }

    /// Flips the event selection and returns whether the event is selected now.
    pub fn toggle_event(&mut self, event: SecretEvent) -> bool {
        let selected = !self.events.contains(&event);
        self.set_event(event, selected);
        selected
    }

    /// Replaces the selected events.
    pub fn set_events<I: IntoIterator<Item = SecretEvent>>(&mut self, events: I) {
        self.events = events.into_iter().collect();
    }

    /// Checks the values that can be verified without the server.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.name.trim().is_empty() {
            bail!("Secret name cannot be empty.");
        }

        if self.events.is_empty() {
            bail!("At least one event must be selected.");
        }

        if self
            .images
            .entries()
            .iter()
            .any(|entry| entry.value.trim().is_empty())
        {
            bail!("Image name cannot be empty.");
        }

        Ok(())
    }
}

impl From<&SecretRecord> for SecretFormFields {
    fn from(record: &SecretRecord) -> Self {
        Self {
            name: record.name.clone(),
            value: record.value.clone().unwrap_or_default(),
            events: record.events.clone(),
            allow_command: record.allow_command,
            images: ImageList::from_values(record.images.iter().cloned()),
        }
    }
}
