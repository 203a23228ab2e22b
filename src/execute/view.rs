use haru_core::{Animation, AnimationKind, CalendarView, CommandResult, Navigation};

use crate::config::InterpreterConfig;

pub(super) fn handle(view: CalendarView, config: &InterpreterConfig) -> CommandResult {
    CommandResult {
        navigation: Some(Navigation {
            view: Some(view),
            date: None,
        }),
        animation: Some(Animation {
            kind: AnimationKind::Fade,
            duration_ms: config.fade_duration_ms,
        }),
        ..CommandResult::ok(format!("{} 뷰로 전환합니다.", view.label()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_change_emits_directive_and_fade_hint() {
        let result = handle(CalendarView::Week, &InterpreterConfig::default());

        assert!(result.success);
        assert_eq!(result.message, "주간 뷰로 전환합니다.");
        assert_eq!(result.navigation.unwrap().view, Some(CalendarView::Week));
        let animation = result.animation.unwrap();
        assert_eq!(animation.kind, AnimationKind::Fade);
        assert_eq!(animation.duration_ms, 200);
    }
}
