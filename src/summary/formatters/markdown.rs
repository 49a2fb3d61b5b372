use crate::engine::EstimateBreakdown;
use crate::summary::projector::Summary;
use crate::utils::format_acres_grouped;

/// Shown under every snapshot
pub const DISCLAIMER: &str = "This is an estimate, not an appraisal. Market dynamics, legal \
encumbrances, topography and on-site inspections can materially change value.";

/// Markdown formatter for summaries
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format summary as a markdown methodology snapshot
    pub fn format(summary: &Summary) -> String {
        let mut md = String::with_capacity(1024);

        md.push_str("# Estimated land value\n\n");
        md.push_str(&format!("**Estimated total:** ${}\n\n", summary.estimate_display()));
        md.push_str(&format!("**Confidence:** {}%\n\n", summary.confidence_pct()));

        md.push_str("## Methodology snapshot\n\n");
        md.push_str(&format!(
            "- Baseline per acre (region): **${}**\n",
            summary.baseline_display()
        ));
        md.push_str(&format!(
            "- Acreage: **{} ac**\n",
            format_acres_grouped(summary.acres)
        ));
        md.push_str("- Multipliers:\n");
        for (kind, value) in summary.multipliers.iter() {
            md.push_str(&format!("  - {}: ×{:.2}\n", capitalize(kind.key()), value));
        }
        md.push('\n');

        md.push_str(&format!("*{}*\n", DISCLAIMER));
        md
    }

    /// Snapshot plus a table of every intermediate term
    pub fn format_with_breakdown(summary: &Summary, breakdown: &EstimateBreakdown) -> String {
        let mut md = Self::format(summary);

        md.push_str("\n## Calculation\n\n");
        md.push_str("| Term | Value |\n");
        md.push_str("|------|-------|\n");
        md.push_str(&format!("| Baseline per acre | {} |\n", breakdown.base));
        md.push_str(&format!("| Acres priced | {} |\n", breakdown.acres));
        md.push_str(&format!("| Size scaling | {:.4} |\n", breakdown.scale));
        md.push_str(&format!("| Combined multiplier | {:.4} |\n", breakdown.multiplier));
        md.push_str(&format!("| Factor distance | {:.2} |\n", breakdown.factor_distance));
        md.push_str(&format!("| Size penalty | {:.2} |\n", breakdown.size_penalty));
        md.push_str(&format!("| Confidence | {:.4} |\n", breakdown.confidence));
        md.push('\n');
        md
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
