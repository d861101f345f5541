use std::collections::BTreeMap;

/// Blurbs for the AI tool cards, keyed by tool name
#[derive(Debug, Clone, Default)]
pub struct ToolCatalog {
    blurbs: BTreeMap<String, String>,
}

impl ToolCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, blurb: impl Into<String>) {
        self.blurbs.insert(key.into().to_lowercase(), blurb.into());
    }

    /// Unknown tools get a generic "coming soon" line
    pub fn describe(&self, key: &str) -> String {
        let key = key.trim();
        match self.blurbs.get(&key.to_lowercase()) {
            Some(blurb) => blurb.clone(),
            None => format!("{} is coming soon!", key),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.blurbs.keys().map(String::as_str)
    }
}

impl FromIterator<(String, String)> for ToolCatalog {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for (key, blurb) in iter {
            catalog.insert(key, blurb);
        }
        catalog
    }
}
