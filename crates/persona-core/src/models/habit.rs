use serde::{Deserialize, Serialize};

/// How often a habit is expected to be performed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Schedule {
    #[default]
    Daily,
    /// Specific weekdays, 1 = Monday through 7 = Sunday.
    DaysOfWeek { days: Vec<u8> },
    TimesPerWeek { count: u8 },
}

/// An active habit as seen by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    /// Id of the predefined or custom category this habit belongs to.
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub schedule: Schedule,
    /// Numeric goal for count-style habits.
    #[serde(default)]
    pub target: Option<f64>,
    #[serde(default)]
    pub reminder_count: u32,
}

impl Habit {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category_id: None,
            schedule: Schedule::Daily,
            target: None,
            reminder_count: 0,
        }
    }

    pub fn in_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn belongs_to(&self, category_id: &str) -> bool {
        self.category_id.as_deref() == Some(category_id)
    }
}
