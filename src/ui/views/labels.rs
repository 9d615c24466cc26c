//! The help/wait labels of the visibility state machine, and the
//! stats label's `"N result(s)"` / `"V of T result(s) shown"` text.

use iced::widget::text;
use iced::Element;

use crate::query::SearchResult;
use crate::ui::Message;

pub fn help_label<'a>() -> Element<'a, Message> {
    text("Choose a library folder to begin searching.").size(16).into()
}

pub fn wait_label<'a>() -> Element<'a, Message> {
    text("Building search index, please wait...").size(16).into()
}

pub fn stats_label(result: &SearchResult) -> Element<'_, Message> {
    let visible = result.rows.len();
    let total = visible + result.hidden;
    let s = if result.hidden == 0 {
        pluralize(visible)
    } else {
        format!("{visible} of {} {} shown", total, plural_word(total))
    };
    text(s).size(14).into()
}

fn pluralize(n: usize) -> String {
    format!("{n} {}", plural_word(n))
}

fn plural_word(n: usize) -> &'static str {
    if n == 1 {
        "result"
    } else {
        "results"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(visible: usize, hidden: usize) -> SearchResult {
        SearchResult {
            rows: vec![0; visible],
            hidden,
        }
    }

    #[test]
    fn singular_result_has_no_trailing_s() {
        assert_eq!(pluralize(1), "1 result");
    }

    #[test]
    fn plural_result_count() {
        assert_eq!(pluralize(20), "20 results");
    }

    #[test]
    fn cap_text_matches_spec_scenario_s3() {
        let r = result(20, 5);
        let total = r.rows.len() + r.hidden;
        let s = format!("{} of {} {} shown", r.rows.len(), total, plural_word(total));
        assert_eq!(s, "20 of 25 results shown");
    }
}
