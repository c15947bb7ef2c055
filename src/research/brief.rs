//! Plain-text brief rendering.

use crate::research::clip;
use crate::types::{AppError, ResearchResult, Result};

/// Render a completed research result as a human-readable brief.
///
/// Rendering is pure and deterministic. A malformed result (finding list
/// out of step with the task list) is a contract violation and fails loudly
/// instead of rendering partial output.
pub fn format_brief(result: &ResearchResult) -> Result<String> {
    if result.findings.len() != result.tasks.len() {
        return Err(AppError::Format(format!(
            "finding count {} does not match task count {}",
            result.findings.len(),
            result.tasks.len()
        )));
    }
    for (i, (task, finding)) in result.tasks.iter().zip(&result.findings).enumerate() {
        if task.index != i + 1 {
            return Err(AppError::Format(format!(
                "task index {} at position {} breaks the contiguous sequence",
                task.index,
                i + 1
            )));
        }
        if finding.task != *task {
            return Err(AppError::Format(format!(
                "finding for sub-task {} does not match the planned task list",
                task.index
            )));
        }
    }

    let mut brief = format!("Research Brief: {}\n", result.query);
    brief.push_str(&format!(
        "Generated: {}\n\n",
        result.timestamp.format("%Y-%m-%d %H:%M:%S")
    ));

    brief.push_str("EXECUTIVE SUMMARY\n");
    brief.push_str(&format!("{}\n\n", result.summary));

    brief.push_str("RESEARCH TASKS EXECUTED\n");
    for (i, task) in result.tasks.iter().enumerate() {
        brief.push_str(&format!("{}. {}\n", i + 1, task.query));
    }

    brief.push_str("\nKEY FINDINGS\n");
    for (i, finding) in result.findings.iter().enumerate() {
        brief.push_str(&format!("\nTask {}: {}\n", i + 1, finding.task.query));
        for item in &finding.evidence {
            if item.snippet.is_empty() {
                continue;
            }
            let excerpt = clip(&item.snippet, 300);
            let ellipsis = if excerpt.len() < item.snippet.len() {
                "..."
            } else {
                ""
            };
            brief.push_str(&format!("- {}{}\n", excerpt, ellipsis));
        }
    }

    brief.push_str("\nREFERENCES\n");
    for (i, reference) in result.references.iter().enumerate() {
        brief.push_str(&format!(
            "{}. {} - {} ({})\n",
            i + 1,
            reference.title,
            reference.url,
            reference.source
        ));
    }

    brief.push_str(&format!(
        "\nResearch completed with {} tasks and {} references",
        result.tasks.len(),
        result.references.len()
    ));

    Ok(brief)
}
