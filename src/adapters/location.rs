use crate::domain::ports::Location;
use crate::utils::error::Result;
use url::Url;

/// In-memory page URL. `replace_query` rewrites it in place, like a
/// history replace rather than a navigation.
#[derive(Debug, Clone)]
pub struct PageLocation {
    url: Url,
}

impl PageLocation {
    pub fn parse(page_url: &str) -> Result<Self> {
        Ok(Self::new(Url::parse(page_url)?))
    }

    pub fn new(url: Url) -> Self {
        Self { url }
    }

    pub fn current(&self) -> &Url {
        &self.url
    }
}

impl Location for PageLocation {
    fn query(&self) -> String {
        self.current().query().unwrap_or_default().to_string()
    }

    fn replace_query(&mut self, query: &str) {
        if query.is_empty() {
            self.url.set_query(None);
        } else {
            self.url.set_query(Some(query));
        }
        tracing::debug!("Replaced page URL with {}", self.url);
    }
}
