//! Query engine: pure derivation of display views from the task list.
//!
//! Everything here recomputes from scratch on demand; at to-do-list scale an
//! incremental index buys nothing. `today` is passed in explicitly so the
//! overdue cutoff and date labels are testable without touching the clock.

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::task::Task;

/// Status filter applied before text search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Pending,
    Overdue,
}

impl StatusFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Completed => "completed",
            StatusFilter::Pending => "pending",
            StatusFilter::Overdue => "overdue",
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "completed" => Ok(StatusFilter::Completed),
            "pending" => Ok(StatusFilter::Pending),
            "overdue" => Ok(StatusFilter::Overdue),
            _ => Err(Error::InvalidArgument(format!(
                "invalid filter '{}': must be all, completed, pending, or overdue",
                s
            ))),
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate counts over the unfiltered store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskCounts {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
}

/// Overdue predicate for filtering and counting: the task must be
/// incomplete and strictly past its due date. Distinct from the date
/// label, which ignores completion (see [`date_label`]).
pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    !task.completed && task.due_date.is_some_and(|due| due < today)
}

/// Derive the filtered, searched, ordered view of the store.
///
/// Ordering is a stable three-key chain: incomplete before completed, then
/// priority descending, then `created_at` descending.
pub fn view(
    tasks: &[Task],
    filter: StatusFilter,
    search: &str,
    today: NaiveDate,
) -> Vec<Task> {
    let mut filtered: Vec<Task> = tasks
        .iter()
        .filter(|task| match filter {
            StatusFilter::All => true,
            StatusFilter::Completed => task.completed,
            StatusFilter::Pending => !task.completed,
            StatusFilter::Overdue => is_overdue(task, today),
        })
        .filter(|task| matches_search(task, search))
        .cloned()
        .collect();

    filtered.sort_by(|left, right| {
        left.completed
            .cmp(&right.completed)
            .then_with(|| right.priority.rank().cmp(&left.priority.rank()))
            .then_with(|| right.created_at.cmp(&left.created_at))
    });

    filtered
}

/// Case-insensitive substring match on title or description.
fn matches_search(task: &Task, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    task.title.to_lowercase().contains(&needle)
        || task.description.to_lowercase().contains(&needle)
}

/// Aggregate counts from the unfiltered store.
pub fn counts(tasks: &[Task], today: NaiveDate) -> TaskCounts {
    TaskCounts {
        total: tasks.len(),
        completed: tasks.iter().filter(|task| task.completed).count(),
        pending: tasks.iter().filter(|task| !task.completed).count(),
        overdue: tasks.iter().filter(|task| is_overdue(task, today)).count(),
    }
}

/// Human label for a due date.
///
/// Purely a date comparison; a completed task due yesterday still reads
/// "Overdue (...)". That matches the observed behavior of the original,
/// where only the list highlighting checked completion.
pub fn date_label(due: NaiveDate, today: NaiveDate) -> String {
    if due == today {
        "Today".to_string()
    } else if due == today.succ_opt().unwrap_or(today) {
        "Tomorrow".to_string()
    } else if due < today {
        format!("Overdue ({})", due.format("%b %-d"))
    } else {
        due.format("%b %-d, %Y").to_string()
    }
}

/// Today's calendar date in the local timezone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Category, Priority};
    use chrono::{DateTime, TimeZone, Utc};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, hour, 0, 0).unwrap()
    }

    fn task(
        title: &str,
        priority: Priority,
        completed: bool,
        due: Option<NaiveDate>,
        created: DateTime<Utc>,
    ) -> Task {
        Task {
            id: title.to_string(),
            title: title.to_string(),
            description: String::new(),
            priority,
            category: Category::General,
            due_date: due,
            completed,
            created_at: created,
            updated_at: created,
        }
    }

    fn yesterday() -> NaiveDate {
        today().pred_opt().unwrap()
    }

    #[test]
    fn incomplete_sorts_before_completed() {
        let store = vec![
            task("B", Priority::Low, true, None, at(2)),
            task("A", Priority::High, false, Some(yesterday()), at(1)),
        ];

        let ordered = view(&store, StatusFilter::All, "", today());
        let titles: Vec<&str> = ordered.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn priority_breaks_ties_among_equal_completion() {
        let store = vec![
            task("low", Priority::Low, false, None, at(3)),
            task("high", Priority::High, false, None, at(1)),
            task("medium", Priority::Medium, false, None, at(2)),
        ];

        let ordered = view(&store, StatusFilter::All, "", today());
        let titles: Vec<&str> = ordered.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["high", "medium", "low"]);
    }

    #[test]
    fn newer_created_at_breaks_priority_ties() {
        let store = vec![
            task("older", Priority::Medium, false, None, at(1)),
            task("newer", Priority::Medium, false, None, at(2)),
        ];

        let ordered = view(&store, StatusFilter::All, "", today());
        let titles: Vec<&str> = ordered.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["newer", "older"]);
    }

    #[test]
    fn ordering_is_stable_across_calls() {
        let store = vec![
            task("a", Priority::Medium, false, None, at(1)),
            task("b", Priority::Medium, false, None, at(1)),
            task("c", Priority::Medium, false, None, at(1)),
        ];

        let first = view(&store, StatusFilter::All, "", today());
        let second = view(&store, StatusFilter::All, "", today());
        assert_eq!(first, second);
        // Fully tied tasks keep their store order.
        let titles: Vec<&str> = first.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[test]
    fn overdue_filter_requires_incomplete_and_past_due() {
        let store = vec![
            task("past-open", Priority::Medium, false, Some(yesterday()), at(1)),
            task("past-done", Priority::Medium, true, Some(yesterday()), at(2)),
            task("today-open", Priority::Medium, false, Some(today()), at(3)),
            task("no-due", Priority::Medium, false, None, at(4)),
        ];

        let overdue = view(&store, StatusFilter::Overdue, "", today());
        let titles: Vec<&str> = overdue.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["past-open"]);
    }

    #[test]
    fn search_matches_title_or_description_case_insensitively() {
        let mut groceries = task("Groceries", Priority::Medium, false, None, at(1));
        groceries.description = "buy MILK and eggs".to_string();
        let store = vec![
            groceries,
            task("Taxes", Priority::Medium, false, None, at(2)),
        ];

        let by_title = view(&store, StatusFilter::All, "groc", today());
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].title, "Groceries");

        let by_description = view(&store, StatusFilter::All, "milk", today());
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].title, "Groceries");

        let no_match = view(&store, StatusFilter::All, "laundry", today());
        assert!(no_match.is_empty());
    }

    #[test]
    fn search_applies_after_status_filter() {
        let store = vec![
            task("report", Priority::Medium, true, None, at(1)),
            task("report draft", Priority::Medium, false, None, at(2)),
        ];

        let matched = view(&store, StatusFilter::Completed, "report", today());
        assert_eq!(matched.len(), 1);
        assert!(matched[0].completed);
    }

    #[test]
    fn mixed_store_orders_all_and_narrows_overdue() {
        // store = [A: high/incomplete/due yesterday, B: low/completed]
        let store = vec![
            task("A", Priority::High, false, Some(yesterday()), at(2)),
            task("B", Priority::Low, true, None, at(1)),
        ];

        let all = view(&store, StatusFilter::All, "", today());
        let titles: Vec<&str> = all.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);

        let overdue = view(&store, StatusFilter::Overdue, "", today());
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].title, "A");
    }

    #[test]
    fn counts_derive_from_unfiltered_store() {
        let store = vec![
            task("done", Priority::Medium, true, None, at(1)),
            task("late", Priority::Medium, false, Some(yesterday()), at(2)),
            task(
                "future",
                Priority::Medium,
                false,
                today().succ_opt(),
                at(3),
            ),
        ];

        let counts = counts(&store, today());
        assert_eq!(counts.total, 3);
        assert_eq!(counts.completed, 1);
        assert_eq!(counts.pending, 2);
        assert_eq!(counts.overdue, 1);
    }

    #[test]
    fn date_labels() {
        let today = today();
        assert_eq!(date_label(today, today), "Today");
        assert_eq!(date_label(today.succ_opt().unwrap(), today), "Tomorrow");
        assert_eq!(date_label(yesterday(), today), "Overdue (Jun 9)");
        assert_eq!(
            date_label(NaiveDate::from_ymd_opt(2025, 12, 24).unwrap(), today),
            "Dec 24, 2025"
        );
    }

    #[test]
    fn date_label_ignores_completion() {
        // The label is purely a date comparison; the overdue predicate is not.
        let done_late = task("done", Priority::Low, true, Some(yesterday()), at(1));
        assert!(!is_overdue(&done_late, today()));
        assert_eq!(
            date_label(done_late.due_date.unwrap(), today()),
            "Overdue (Jun 9)"
        );
    }

    #[test]
    fn filter_parsing() {
        assert_eq!("ALL".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "overdue".parse::<StatusFilter>().unwrap(),
            StatusFilter::Overdue
        );
        assert!("done".parse::<StatusFilter>().is_err());
    }
}
