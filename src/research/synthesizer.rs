//! Summary generation.
//!
//! Builds one synthesis prompt from every finding and asks the model for a
//! structured summary. Failure never propagates: a failed, timed-out, or
//! blank generation produces [`SYNTHESIS_FAILURE_MARKER`] so callers can
//! tell an explicit failure apart from a summary that was never attempted.

use crate::llm::LanguageModel;
use crate::research::clip;
use crate::types::TaskFinding;
use std::sync::Arc;
use std::time::Duration;

/// Summary text recorded when generation fails.
pub const SYNTHESIS_FAILURE_MARKER: &str = "Summary generation failed.";

/// Turns retrieved findings into an executive summary.
pub struct Synthesizer {
    llm: Arc<dyn LanguageModel>,
    timeout: Duration,
}

impl Synthesizer {
    /// Create a synthesizer that generates with `llm` under `timeout`.
    pub fn new(llm: Arc<dyn LanguageModel>, timeout: Duration) -> Self {
        Self { llm, timeout }
    }

    /// Generate a summary of the findings. Always returns non-empty text.
    pub async fn synthesize(&self, query: &str, findings: &[TaskFinding]) -> String {
        let prompt = synthesis_prompt(query, findings);

        match tokio::time::timeout(self.timeout, self.llm.generate(&prompt)).await {
            Ok(Ok(summary)) if !summary.trim().is_empty() => summary,
            Ok(Ok(_)) => {
                tracing::warn!("Synthesis returned empty text");
                SYNTHESIS_FAILURE_MARKER.to_string()
            }
            Ok(Err(e)) => {
                tracing::warn!("Synthesis failed: {}", e);
                SYNTHESIS_FAILURE_MARKER.to_string()
            }
            Err(_) => {
                tracing::warn!("Synthesis timed out after {:?}", self.timeout);
                SYNTHESIS_FAILURE_MARKER.to_string()
            }
        }
    }
}

/// One prompt covering every finding, with snippets clipped to 200 chars.
fn synthesis_prompt(query: &str, findings: &[TaskFinding]) -> String {
    let mut prompt = format!(
        r#"
Based on the following research findings for the query "{}", write a comprehensive but concise summary:

Research Tasks and Findings:
"#,
        query
    );

    for finding in findings {
        prompt.push_str(&format!("\nTask: {}\n", finding.task.query));
        for item in &finding.evidence {
            prompt.push_str(&format!("- {}...\n", clip(&item.snippet, 200)));
        }
    }

    prompt.push_str(
        r#"
Please provide:
1. A clear, comprehensive summary of the key findings
2. Important insights or conclusions
3. Any limitations or areas needing further research

Keep the summary well-structured and informative.
"#,
    );

    prompt
}
