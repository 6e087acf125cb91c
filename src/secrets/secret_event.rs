use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

/// Pipeline trigger for which a secret is injected into the build.
///
/// The declaration order is the order events are displayed and sent in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecretEvent {
    PullRequest,
    Push,
    Tag,
    Comment,
    Deployment,
}

impl SecretEvent {
    /// All known events.
    pub const ALL: [SecretEvent; 5] = [
        SecretEvent::PullRequest,
        SecretEvent::Push,
        SecretEvent::Tag,
        SecretEvent::Comment,
        SecretEvent::Deployment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SecretEvent::PullRequest => "pull_request",
            SecretEvent::Push => "push",
            SecretEvent::Tag => "tag",
            SecretEvent::Comment => "comment",
            SecretEvent::Deployment => "deployment",
        }
    }

    /// Human readable label of the event.
    pub fn label(&self) -> &'static str {
        match self {
            SecretEvent::PullRequest => "Pull Request",
            SecretEvent::Push => "Push",
            SecretEvent::Tag => "Tag",
            SecretEvent::Comment => "Comment",
            SecretEvent::Deployment => "Deployment",
        }
    }
}

impl Display for SecretEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SecretEvent {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        SecretEvent::ALL
            .into_iter()
            .find(|event| event.as_str() == value)
            .ok_or_else(|| anyhow::anyhow!("Unknown secret event ({value})."))
    }
}
