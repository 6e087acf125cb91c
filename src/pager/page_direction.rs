use serde::Serialize;

/// Direction of the page navigation, pages are ordered from the newest to the oldest items.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PageDirection {
    Newer,
    Older,
}

impl PageDirection {
    /// Label of the navigation affordance.
    pub fn label(&self) -> &'static str {
        match self {
            PageDirection::Newer => "← newer",
            PageDirection::Older => "older →",
        }
    }
}
