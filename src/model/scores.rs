use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScore {
    pub category: String,
    pub score: f64,
}

/// Combined confidence per category for one image.
///
/// Entries keep the order in which their category first received a label;
/// only categories with at least one matching label are present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedScore {
    pub entries: Vec<CategoryScore>,
}

impl GroupedScore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryScore> {
        self.entries.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserScoreRow {
    pub user: String,
    pub category: String,
    pub score: f64,
}
