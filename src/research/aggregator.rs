//! Reference deduplication.

use crate::types::{EvidenceItem, TaskFinding};
use std::collections::HashSet;

/// Fold all evidence across findings into a deduplicated reference list.
///
/// The locator (URL) is the identity of a reference: the first item seen
/// for a locator wins and later duplicates are ignored, so the output
/// preserves first-seen order. Items with an empty locator cannot be cited
/// and are excluded here, though they remain visible in the raw findings.
pub fn collect_references(findings: &[TaskFinding]) -> Vec<EvidenceItem> {
    let mut seen = HashSet::new();
    let mut references = Vec::new();

    for finding in findings {
        for item in &finding.evidence {
            if item.url.is_empty() {
                continue;
            }
            if seen.insert(item.url.clone()) {
                references.push(item.clone());
            }
        }
    }

    references
}
