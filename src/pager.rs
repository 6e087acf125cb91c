mod page_direction;

pub use self::page_direction::PageDirection;
use anyhow::Context;
use url::{Position, Url};

/// Query parameter that holds the page number.
const PAGE_QUERY_KEY: &str = "page";

/// Navigation between the pages (1-based) of a result list rendered at the specified path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    /// Absolute path of the list, optionally with a query string.
    pub path: String,
}

impl Pager {
    pub fn new<P: Into<String>>(page: u32, path: P) -> Self {
        Self {
            page,
            path: path.into(),
        }
    }

    /// Page with the newer items, never goes below the first page.
    pub fn newer(&self) -> u32 {
        self.page.saturating_sub(1).max(1)
    }

    /// Page with the older items.
    pub fn older(&self) -> u32 {
        self.page.saturating_add(1)
    }

    pub fn page_in(&self, direction: PageDirection) -> u32 {
        match direction {
            PageDirection::Newer => self.newer(),
            PageDirection::Older => self.older(),
        }
    }

    /// Path of the page in the specified direction: the `page` query parameter is rewritten, the
    /// rest of the query is preserved.
    pub fn destination(&self, direction: PageDirection) -> anyhow::Result<String> {
        // Base is only needed to resolve the path, it's stripped from the result.
        let mut url = Url::parse("http://localhost/")?
            .join(&self.path)
            .with_context(|| format!("Invalid pager path ({}).", self.path))?;

        let page = self.page_in(direction).to_string();
        let mut page_set = false;
        let pairs = url
            .query_pairs()
            .into_owned()
            .filter_map(|(key, value)| {
                if key != PAGE_QUERY_KEY {
                    Some((key, value))
                } else if !page_set {
                    page_set = true;
                    Some((key, page.clone()))
                } else {
                    None
                }
            })
            .collect::<Vec<_>>();

        {
            let mut query = url.query_pairs_mut();
            query.clear().extend_pairs(pairs);
            if !page_set {
                query.append_pair(PAGE_QUERY_KEY, &page);
            }
        }

        Ok(url[Position::BeforePath..].to_string())
    }
}
