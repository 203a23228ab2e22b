//! Per-intent command builders.
//!
//! Each builder is a pure function turning the classifier's captures plus
//! the raw text and ambient context into a typed `Command`. The confidence
//! carried on the result is the matched pattern's constant.

mod analyze;
mod create;
mod delete;
mod edit;
mod navigate;
mod search;
mod view;

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use regex::Regex;

use haru_core::{ChatContext, Command};

use crate::classify::{Classification, Intent};

pub fn build(
    classification: &Classification<'_>,
    text: &str,
    context: &ChatContext,
    reference: DateTime<Utc>,
    tz: Tz,
) -> Command {
    let captures = &classification.captures;
    let kind = match classification.intent {
        Intent::Navigate => navigate::build(captures, reference, tz),
        Intent::View => view::build(captures),
        Intent::Create => create::build(
            captures,
            text,
            classification.pattern_index,
            reference,
            tz,
        ),
        Intent::Edit => edit::build(captures, text, context),
        Intent::Delete => delete::build(captures, text, context),
        Intent::Search => search::build(captures),
        Intent::Analyze => analyze::build(text),
    };

    Command {
        kind,
        confidence: classification.confidence,
    }
}

static TITLE_NOISE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"오늘|내일|모레|다음\s?주|today|tomorrow|next\s+week|저녁|아침|점심|오전|오후|새벽|\d{1,2}시\s*\d{1,2}분|\d{1,2}시반?에?|\d{1,2}:\d{2}",
    )
    .expect("valid regex")
});

static TARGET_NOISE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"선택된?|selected|일정|이벤트|["'“”]"#).expect("valid regex"));

/// Strip date/time tokens out of a bare title and collapse the whitespace.
pub(crate) fn clean_title(raw: &str) -> String {
    let stripped = TITLE_NOISE_RE.replace_all(raw, " ");
    collapse(&stripped)
}

/// Strip selection words, filler nouns and quotes from a target fragment.
pub(crate) fn clean_target(raw: &str) -> String {
    let stripped = TARGET_NOISE_RE.replace_all(raw, " ");
    let collapsed = collapse(&stripped);
    trim_particle(&collapsed)
}

fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drop a single trailing object particle left over after the verb was cut
/// off ("회의를" -> "회의").
fn trim_particle(text: &str) -> String {
    text.strip_suffix(['을', '를', '은', '는'])
        .unwrap_or(text)
        .trim()
        .to_string()
}
