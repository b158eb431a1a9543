//! Human-readable report writer.
//!
//! Formats findings for terminal display, one line per finding plus a
//! closing summary.

use std::io::Write;

use super::{Finding, FindingKind, RECOMMENDED_PRESET};

/// Render one finding as a line of advice.
pub fn finding_line(finding: &Finding) -> String {
    match finding.kind {
        FindingKind::Outdated => match &finding.replacement {
            Some(replacement) => format!(
                "Remove rule \"{}\": it is outdated. Replace it with rule \"{}\".",
                finding.rule_id, replacement
            ),
            None => format!(
                "Remove rule \"{}\": it is outdated. No replacement is available.",
                finding.rule_id
            ),
        },
        FindingKind::RedundantRecommended => format!(
            "Rule \"{}\" is already enabled by \"{}\"; configuring it is redundant.",
            finding.rule_id, RECOMMENDED_PRESET
        ),
    }
}

/// Write all findings in order, followed by a summary line.
pub fn write_report<W: Write>(findings: &[Finding], writer: &mut W) -> std::io::Result<()> {
    for finding in findings {
        writeln!(writer, "{}", finding_line(finding))?;
    }

    if findings.is_empty() {
        writeln!(writer, "No issues found.")?;
    } else {
        writeln!(writer, "Found {} issue(s).", findings.len())?;
    }

    Ok(())
}
