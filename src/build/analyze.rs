use haru_core::{AnalyzeAction, AnalyzePeriod, CommandKind};

/// Period and action are keyed purely by keyword presence.
pub(super) fn build(text: &str) -> CommandKind {
    let lower = text.to_lowercase();

    let period = if text.contains("주간")
        || text.contains("이번 주")
        || text.contains("이번주")
        || lower.contains("week")
    {
        AnalyzePeriod::Week
    } else {
        AnalyzePeriod::Today
    };

    let action = if text.contains("빈") || text.contains("여유") || lower.contains("free") {
        AnalyzeAction::FreeTime
    } else if text.contains("바쁜")
        || text.contains("바쁘")
        || text.contains("바빠")
        || lower.contains("busy")
    {
        AnalyzeAction::BusyAnalysis
    } else {
        AnalyzeAction::Summary
    };

    CommandKind::Analyze { period, action }
}
