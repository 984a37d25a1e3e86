//! Task domain types in canonical (English) form.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How urgent a task is. Serialized as the backend's upper-case code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Baixa,
    Media,
    Alta,
}

impl Priority {
    /// All priorities, lowest first.
    pub const ALL: [Priority; 3] = [Self::Baixa, Self::Media, Self::Alta];

    /// The backend code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Baixa => "BAIXA",
            Self::Media => "MEDIA",
            Self::Alta => "ALTA",
        }
    }

    /// The pt-BR display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Baixa => "Baixa",
            Self::Media => "Média",
            Self::Alta => "Alta",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a task is in its lifecycle. Serialized as the backend's upper-case code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Situation {
    Aberta,
    Pendente,
    Concluida,
}

impl Situation {
    /// All situations, in workflow order.
    pub const ALL: [Situation; 3] = [Self::Aberta, Self::Pendente, Self::Concluida];

    /// The backend code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Aberta => "ABERTA",
            Self::Pendente => "PENDENTE",
            Self::Concluida => "CONCLUIDA",
        }
    }

    /// The pt-BR display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Aberta => "Aberta",
            Self::Pendente => "Pendente",
            Self::Concluida => "Concluída",
        }
    }
}

impl fmt::Display for Situation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A task as the application sees it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub situation: Option<Situation>,
    pub expected_completion_date: Option<NaiveDate>,
    /// Set by the backend; kept verbatim.
    pub creation_date: Option<String>,
    pub user_id: Option<String>,
}

impl Task {
    /// A new, unsaved task.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            situation: Some(Situation::Aberta),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_situation(mut self, situation: Situation) -> Self {
        self.situation = Some(situation);
        self
    }

    pub fn with_expected_completion_date(mut self, date: NaiveDate) -> Self {
        self.expected_completion_date = Some(date);
        self
    }

    pub fn is_complete(&self) -> bool {
        self.situation == Some(Situation::Concluida)
    }

    /// Whether the task is unfinished past its expected date.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_complete() && self.expected_completion_date.is_some_and(|d| d < today)
    }
}

/// Sort direction for task listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Paging, sorting and filters for a task listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskQuery {
    /// Zero-based page index.
    pub page: usize,
    pub size: usize,
    pub sort: String,
    pub direction: SortDirection,
    pub name: Option<String>,
    pub priority: Option<Priority>,
    pub situation: Option<Situation>,
}

impl Default for TaskQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: 10,
            sort: "name".to_string(),
            direction: SortDirection::Asc,
            name: None,
            priority: None,
            situation: None,
        }
    }
}

impl TaskQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set page index and page size using builder pattern.
    pub fn with_page(mut self, page: usize, size: usize) -> Self {
        self.page = page;
        self.size = size;
        self
    }

    /// Set sort field and direction using builder pattern.
    pub fn with_sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = field.into();
        self.direction = direction;
        self
    }

    /// Filter by name; an empty or blank name clears the filter.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = (!name.trim().is_empty()).then_some(name);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_situation(mut self, situation: Situation) -> Self {
        self.situation = Some(situation);
        self
    }

    /// Query-string parameters, filters last and only when set.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("page".to_string(), self.page.to_string()),
            ("size".to_string(), self.size.to_string()),
            (
                "sort".to_string(),
                format!("{},{}", self.sort, self.direction.as_str()),
            ),
        ];
        if let Some(name) = &self.name {
            params.push(("name".to_string(), name.clone()));
        }
        if let Some(priority) = self.priority {
            params.push(("priority".to_string(), priority.code().to_string()));
        }
        if let Some(situation) = self.situation {
            params.push(("situation".to_string(), situation.code().to_string()));
        }
        params
    }
}

/// One page of a listing, in the backend's page envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPage<T = Task> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: usize,
    #[serde(default)]
    pub total_pages: usize,
    #[serde(default)]
    pub size: usize,
    /// Zero-based index of this page.
    #[serde(default)]
    pub number: usize,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
}

impl<T> TaskPage<T> {
    /// Convert the items, keeping the envelope.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> TaskPage<U> {
        TaskPage {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            size: self.size,
            number: self.number,
            first: self.first,
            last: self.last,
        }
    }
}

/// Per-situation counts, as shown on the dashboard summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SituationCounts {
    pub open: usize,
    pub pending: usize,
    pub completed: usize,
}

impl TaskPage<Task> {
    /// Count this page's tasks by situation.
    pub fn situation_counts(&self) -> SituationCounts {
        self.content
            .iter()
            .fold(SituationCounts::default(), |mut counts, task| {
                match task.situation {
                    Some(Situation::Aberta) => counts.open += 1,
                    Some(Situation::Pendente) => counts.pending += 1,
                    Some(Situation::Concluida) => counts.completed += 1,
                    None => {}
                }
                counts
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_labels() {
        assert_eq!(serde_json::to_string(&Priority::Media).unwrap(), "\"MEDIA\"");
        assert_eq!(
            serde_json::from_str::<Situation>("\"CONCLUIDA\"").unwrap(),
            Situation::Concluida
        );
        assert_eq!(Priority::Media.label(), "Média");
        assert_eq!(Situation::Concluida.to_string(), "Concluída");
        assert_eq!(Priority::ALL.map(Priority::code), ["BAIXA", "MEDIA", "ALTA"]);
    }

    #[test]
    fn test_query_params() {
        let query = TaskQuery::new()
            .with_page(2, 20)
            .with_sort("priority", SortDirection::Desc)
            .with_priority(Priority::Alta);
        assert_eq!(
            query.to_params(),
            vec![
                ("page".to_string(), "2".to_string()),
                ("size".to_string(), "20".to_string()),
                ("sort".to_string(), "priority,DESC".to_string()),
                ("priority".to_string(), "ALTA".to_string()),
            ]
        );
    }

    #[test]
    fn test_blank_name_filter_is_dropped() {
        assert_eq!(TaskQuery::new().with_name("   ").name, None);
        assert_eq!(
            TaskQuery::new().with_name("mercado").name.as_deref(),
            Some("mercado")
        );
        assert_eq!(TaskQuery::default().to_params()[2].1, "name,ASC");
    }

    #[test]
    fn test_overdue() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let yesterday = NaiveDate::from_ymd_opt(2025, 6, 9).unwrap();

        let task = Task::new("Pagar contas").with_expected_completion_date(yesterday);
        assert!(task.is_overdue(today));
        assert!(!task.clone().with_situation(Situation::Concluida).is_overdue(today));
        assert!(!Task::new("Sem data").is_overdue(today));
    }

    #[test]
    fn test_situation_counts() {
        let page = TaskPage {
            content: vec![
                Task::new("a"),
                Task::new("b").with_situation(Situation::Pendente),
                Task::new("c").with_situation(Situation::Concluida),
                Task::new("d").with_situation(Situation::Concluida),
            ],
            total_elements: 4,
            total_pages: 1,
            size: 10,
            number: 0,
            first: true,
            last: true,
        };
        assert_eq!(
            page.situation_counts(),
            SituationCounts {
                open: 1,
                pending: 1,
                completed: 2
            }
        );
    }
}
