//! Query decomposition.
//!
//! The planner asks the language model to break a research query into
//! focused sub-queries, one per line. Model failures and unparseable
//! responses both degrade to a fixed set of template tasks, so planning
//! never fails the pipeline.

use crate::llm::LanguageModel;
use crate::types::SubTask;
use std::sync::Arc;
use std::time::Duration;

/// Decomposes one research query into an ordered sub-task list.
pub struct TaskPlanner {
    llm: Arc<dyn LanguageModel>,
    timeout: Duration,
}

impl TaskPlanner {
    /// Create a planner that generates with `llm` under `timeout`.
    pub fn new(llm: Arc<dyn LanguageModel>, timeout: Duration) -> Self {
        Self { llm, timeout }
    }

    /// Decompose a query into 1-5 ordered sub-tasks. Never returns an empty
    /// list: if the model call fails, times out, or yields nothing usable,
    /// the fallback templates are used instead.
    pub async fn plan(&self, query: &str) -> Vec<SubTask> {
        let prompt = planning_prompt(query);

        let mut tasks = match tokio::time::timeout(self.timeout, self.llm.generate(&prompt)).await
        {
            Ok(Ok(response)) => parse_task_lines(&response),
            Ok(Err(e)) => {
                tracing::warn!("Task planning failed: {}", e);
                Vec::new()
            }
            Err(_) => {
                tracing::warn!("Task planning timed out after {:?}", self.timeout);
                Vec::new()
            }
        };

        if tasks.is_empty() {
            tasks = fallback_tasks(query);
        }

        tasks
            .into_iter()
            .enumerate()
            .map(|(i, task)| SubTask::new(i + 1, task))
            .collect()
    }
}

fn planning_prompt(query: &str) -> String {
    format!(
        r#"
Given this research query: "{}"

Break this down into 3-5 specific research tasks that would help answer this question comprehensively.
Each task should be a specific search query or investigation.

Format your response as a simple list, one task per line:
Task 1: [specific search query]
Task 2: [specific search query]
Task 3: [specific search query]
etc.

Keep tasks focused and searchable.
"#,
        query
    )
}

/// Fixed decomposition used whenever the model cannot supply one.
fn fallback_tasks(query: &str) -> Vec<String> {
    vec![
        format!("General information about {}", query),
        format!("Recent developments in {}", query),
        format!("Expert opinions on {}", query),
    ]
}

/// Pull task text out of a model response, keeping response order.
///
/// A line counts as a task if it mentions "Task" or starts with a list
/// marker (dash, bullet, or "N."). Markers are stripped; at most 5 tasks
/// are kept.
fn parse_task_lines(response: &str) -> Vec<String> {
    let mut tasks = Vec::new();

    for line in response.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !(trimmed.contains("Task") || starts_with_list_marker(trimmed)) {
            continue;
        }

        let task = strip_task_markers(trimmed);
        if !task.is_empty() {
            tasks.push(task.to_string());
        }
    }

    tasks.truncate(5);
    tasks
}

fn starts_with_list_marker(line: &str) -> bool {
    if line.starts_with('-') || line.starts_with('•') {
        return true;
    }
    let mut chars = line.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(digit), Some('.')) if digit.is_ascii_digit()
    )
}

fn strip_task_markers(line: &str) -> &str {
    let mut task = line;

    // "Task 3: query" -> "query"
    if let Some(rest) = task.strip_prefix("Task ") {
        let after_digits = rest.trim_start_matches(|c: char| c.is_ascii_digit());
        if after_digits.len() < rest.len() {
            if let Some(body) = after_digits.strip_prefix(':') {
                task = body;
            }
        }
    }
    let task = task.trim();

    // "3. query" -> "query"
    let after_digits = task.trim_start_matches(|c: char| c.is_ascii_digit());
    let task = if after_digits.len() < task.len() {
        after_digits.strip_prefix('.').unwrap_or(task)
    } else {
        task
    };
    let task = task.trim();

    // "- query" / "• query" -> "query"
    let task = task
        .strip_prefix('-')
        .or_else(|| task.strip_prefix('•'))
        .unwrap_or(task);

    task.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_task_marker_lines() {
        let response = "Task 1: History of the topic\nTask 2: Current state\nTask 3: Future outlook";
        let tasks = parse_task_lines(response);
        assert_eq!(
            tasks,
            vec!["History of the topic", "Current state", "Future outlook"]
        );
    }

    #[test]
    fn test_parse_numbered_and_bulleted_lines() {
        let response = "1. First angle\n- Second angle\n• Third angle";
        let tasks = parse_task_lines(response);
        assert_eq!(tasks, vec!["First angle", "Second angle", "Third angle"]);
    }

    #[test]
    fn test_parse_skips_prose_and_blank_lines() {
        let response = "Here is a breakdown:\n\n1. Only real entry\n\nHope this helps!";
        let tasks = parse_task_lines(response);
        assert_eq!(tasks, vec!["Only real entry"]);
    }

    #[test]
    fn test_parse_caps_at_five_tasks() {
        let response = (1..=8)
            .map(|i| format!("{}. Angle number {}", i, i))
            .collect::<Vec<_>>()
            .join("\n");
        let tasks = parse_task_lines(&response);
        assert_eq!(tasks.len(), 5);
        assert_eq!(tasks[4], "Angle number 5");
    }

    #[test]
    fn test_parse_unparseable_response_yields_nothing() {
        let response = "I cannot break this down for you.";
        assert!(parse_task_lines(response).is_empty());
    }

    #[test]
    fn test_strip_combined_markers() {
        assert_eq!(strip_task_markers("Task 2: 1. - query text"), "query text");
        assert_eq!(strip_task_markers("- query text"), "query text");
        assert_eq!(strip_task_markers("3. query text"), "query text");
    }

    #[test]
    fn test_fallback_tasks_cover_three_angles() {
        let tasks = fallback_tasks("rust adoption");
        assert_eq!(
            tasks,
            vec![
                "General information about rust adoption",
                "Recent developments in rust adoption",
                "Expert opinions on rust adoption",
            ]
        );
    }
}
