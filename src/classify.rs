//! Intent classification over ordered pattern groups.
//!
//! Groups are tried in a fixed precedence order (navigate, view, create,
//! edit, delete, search, analyze); within a group, patterns top-to-bottom.
//! The first match wins. Some inputs could plausibly match more than one
//! group, so both orderings are load-bearing and pinned by tests.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

/// Coarse command category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Navigate,
    View,
    Create,
    Edit,
    Delete,
    Search,
    Analyze,
}

/// One matched pattern: the intent, its capture groups, and the pattern's
/// static confidence constant.
pub struct Classification<'t> {
    pub intent: Intent,
    pub captures: Captures<'t>,
    pub pattern_index: usize,
    pub confidence: f32,
}

struct PatternGroup {
    intent: Intent,
    patterns: Vec<(Regex, f32)>,
}

fn pattern(re: &str, confidence: f32) -> (Regex, f32) {
    (Regex::new(re).expect("valid intent pattern"), confidence)
}

static PATTERN_GROUPS: LazyLock<Vec<PatternGroup>> = LazyLock::new(|| {
    vec![
        PatternGroup {
            intent: Intent::Navigate,
            patterns: vec![
                pattern(r"(오늘|today)(?:로|으로)?\s*(?:이동|가기|가줘|가자|보여줘)", 0.9),
                pattern(r"(내일|tomorrow)(?:로|으로)?\s*(?:이동|가기|가줘|가자|보여줘)", 0.9),
                pattern(
                    r"(다음\s?주|next week)(?:로|으로)?\s*(?:이동|가기|가줘|가자|보여줘)",
                    0.9,
                ),
                pattern(
                    r"(\d{1,2})월\s*(\d{1,2})일(?:로|으로)?\s*(?:이동|가기|가줘|가자|보여줘)",
                    0.9,
                ),
            ],
        },
        PatternGroup {
            intent: Intent::View,
            patterns: vec![
                pattern(r"(일간|하루|데이|day)\s*(?:뷰|보기|화면|모드|view)", 0.85),
                pattern(r"(주간|위클리|week)\s*(?:뷰|보기|화면|모드|view)", 0.85),
                pattern(r"(월간|먼슬리|month)\s*(?:뷰|보기|화면|모드|view)", 0.85),
                pattern(r"(라인|line)\s*(?:뷰|보기|화면|모드|view)", 0.85),
                pattern(r"(플로우|흐름|flow)\s*(?:뷰|보기|화면|모드|view)", 0.85),
                pattern(r"뷰\s*(?:변경|바꿔|전환)", 0.7),
            ],
        },
        PatternGroup {
            intent: Intent::Create,
            patterns: vec![
                pattern(r#""([^"]+)".*?(?:추가|등록|생성|만들|잡아)"#, 0.9),
                pattern(
                    r"(.+?)\s*(?:일정|약속|미팅)?\s*(?:추가해줘|추가|등록해줘|등록|생성|만들어줘|잡아줘)",
                    0.7,
                ),
            ],
        },
        PatternGroup {
            intent: Intent::Edit,
            patterns: vec![
                pattern(r"(\d+)\s*(분|시간)\s*(?:더)?\s*(?:연장|늘려)", 0.8),
                pattern(r"(\d+)\s*(분|시간)\s*(?:뒤로|뒤에)?\s*(?:미뤄|연기|늦춰)", 0.8),
                pattern(r"(\d+)\s*(분|시간)\s*(?:앞으로)?\s*(?:당겨|앞당겨)", 0.8),
                pattern(
                    r"(?:이름|제목)\s*(?:을|를)?\s*(.+?)\s*(?:로|으로)\s*(?:변경|바꿔|수정)",
                    0.8,
                ),
            ],
        },
        PatternGroup {
            intent: Intent::Delete,
            patterns: vec![
                pattern(
                    r"(?:선택된?|selected)\s*(?:일정|이벤트)?\s*(?:을|를)?\s*(?:삭제|지워|제거)",
                    0.85,
                ),
                pattern(r"오늘\s*(?:일정|스케줄)\s*(?:모두|전부|다)?\s*(?:삭제|지워|제거)", 0.85),
                pattern(r#""([^"]+)"\s*(?:일정)?\s*(?:을|를)?\s*(?:삭제|지워|제거)"#, 0.85),
                pattern(r"(.+?)\s*(?:일정)?\s*(?:을|를)?\s*(?:삭제해줘|삭제|지워줘|지워|제거)", 0.7),
            ],
        },
        PatternGroup {
            intent: Intent::Search,
            patterns: vec![
                pattern(r#""([^"]+)"\s*(?:검색|찾아|찾기)"#, 0.75),
                pattern(r"(.+?)\s*(?:을|를)?\s*검색", 0.75),
                pattern(r"(.+?)\s*일정\s*(?:을|를)?\s*(?:찾아|찾기)", 0.75),
            ],
        },
        PatternGroup {
            intent: Intent::Analyze,
            patterns: vec![
                pattern(r"빈\s*시간|여유\s*시간|free\s*time", 0.8),
                pattern(r"바쁜|바쁘|바빠|busy", 0.8),
                pattern(r"(?:오늘|이번\s*주|주간)?\s*일정\s*(?:요약|분석|정리)", 0.8),
                pattern(r"(?:요약|분석)\s*(?:해줘|부탁)?", 0.7),
            ],
        },
    ]
});

/// Match trimmed input against the pattern table.
///
/// Returns None when no group matches; the caller must treat that as
/// "intent not understood".
pub fn classify(text: &str) -> Option<Classification<'_>> {
    let trimmed = text.trim();

    for group in PATTERN_GROUPS.iter() {
        for (pattern_index, (pattern, confidence)) in group.patterns.iter().enumerate() {
            if let Some(captures) = pattern.captures(trimmed) {
                debug!(intent = ?group.intent, pattern_index, "matched intent pattern");
                return Some(Classification {
                    intent: group.intent,
                    captures,
                    pattern_index,
                    confidence: *confidence,
                });
            }
        }
    }

    debug!("no intent pattern matched");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent_of(text: &str) -> Option<Intent> {
        classify(text).map(|c| c.intent)
    }

    #[test]
    fn test_each_group_has_a_representative_match() {
        assert_eq!(intent_of("내일로 이동"), Some(Intent::Navigate));
        assert_eq!(intent_of("주간 보기"), Some(Intent::View));
        assert_eq!(intent_of("\"팀 회의\" 오늘 3시 추가"), Some(Intent::Create));
        assert_eq!(intent_of("회의 30분 연장"), Some(Intent::Edit));
        assert_eq!(intent_of("\"회의\" 삭제"), Some(Intent::Delete));
        assert_eq!(intent_of("회의를 검색"), Some(Intent::Search));
        assert_eq!(intent_of("오늘 일정 요약"), Some(Intent::Analyze));
    }

    #[test]
    fn test_no_match_returns_none() {
        assert!(classify("안녕하세요").is_none());
        assert!(classify("").is_none());
    }

    #[test]
    fn test_classification_is_deterministic() {
        let text = "회의 30분 연장";
        let first = classify(text).unwrap();
        let second = classify(text).unwrap();
        assert_eq!(first.intent, second.intent);
        assert_eq!(first.pattern_index, second.pattern_index);
        assert_eq!(
            first.captures.get(0).map(|m| m.as_str()),
            second.captures.get(0).map(|m| m.as_str())
        );
    }

    #[test]
    fn test_create_wins_over_edit_for_quoted_titles_with_numbers() {
        // "30분 연장" inside the quotes also matches the edit magnitude
        // pattern; the group order makes create win.
        assert_eq!(intent_of("\"30분 연장 회고\" 추가"), Some(Intent::Create));
    }

    #[test]
    fn test_delete_beats_search_for_delete_verbs() {
        assert_eq!(intent_of("회의 일정 삭제"), Some(Intent::Delete));
    }

    #[test]
    fn test_free_time_phrases_reach_analyze() {
        // No earlier group claims these
        assert_eq!(intent_of("오늘 빈 시간 찾아줘"), Some(Intent::Analyze));
        assert_eq!(intent_of("이번 주 여유 시간 알려줘"), Some(Intent::Analyze));
    }

    #[test]
    fn test_all_today_delete_prefers_the_dedicated_pattern() {
        let classification = classify("오늘 일정 전부 삭제").unwrap();
        assert_eq!(classification.intent, Intent::Delete);
        assert_eq!(classification.pattern_index, 1);
        assert!(classification.captures.get(1).is_none());
    }

    #[test]
    fn test_input_is_trimmed_before_matching() {
        assert_eq!(intent_of("  내일로 이동  "), Some(Intent::Navigate));
    }

    #[test]
    fn test_confidence_is_a_pattern_constant() {
        let quoted = classify("\"팀 회의\" 추가").unwrap();
        let bare = classify("팀 회의 추가").unwrap();
        assert_eq!(quoted.intent, Intent::Create);
        assert_eq!(bare.intent, Intent::Create);
        assert!(quoted.confidence > bare.confidence);
    }
}
