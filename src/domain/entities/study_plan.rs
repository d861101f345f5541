use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// A study plan shown for an exam category
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StudyPlan {
    pub title: String,
    pub items: Vec<String>,
}

impl StudyPlan {
    pub fn new(title: impl Into<String>, items: &[&str]) -> Self {
        Self {
            title: title.into(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Title line followed by one checklist line per item
    pub fn render(&self) -> String {
        let mut out = self.title.clone();
        for item in &self.items {
            out.push_str("\n- ");
            out.push_str(item);
        }
        out
    }
}

/// Study plans keyed by lowercase category
#[derive(Debug, Clone, Default)]
pub struct StudyPlanCatalog {
    plans: BTreeMap<String, StudyPlan>,
}

impl StudyPlanCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: impl Into<String>, plan: StudyPlan) {
        self.plans.insert(category.into().to_lowercase(), plan);
    }

    pub fn get(&self, category: &str) -> Option<&StudyPlan> {
        self.plans.get(&category.trim().to_lowercase())
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.plans.keys().map(String::as_str)
    }
}

impl FromIterator<(String, StudyPlan)> for StudyPlanCatalog {
    fn from_iter<I: IntoIterator<Item = (String, StudyPlan)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for (category, plan) in iter {
            catalog.insert(category, plan);
        }
        catalog
    }
}
