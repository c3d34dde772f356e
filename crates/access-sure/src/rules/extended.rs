//! Opt-in checks for focusability and media playback.

use once_cell::sync::Lazy;
use regex::Regex;

use super::descriptions::{KEYBOARD_ACCESS, NO_AUTOPLAY};
use super::Rule;
use crate::node::Node;
use crate::selector::Selector;
use crate::utilities::{INTERACTIVE_ELEMENTS, MEDIA_ELEMENTS};

static HIDDEN_STYLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)display\s*:\s*none|visibility\s*:\s*hidden").expect("valid regex")
});

/// Keyboard and autoplay rules, appended after the standard rules
pub fn extended_rules() -> Vec<Rule> {
    vec![keyboard_access_rule(), no_autoplay_rule()]
}

fn keyboard_access_rule() -> Rule {
    Rule::every(
        KEYBOARD_ACCESS,
        Selector::tags(INTERACTIVE_ELEMENTS),
        |element, _, _| is_keyboard_reachable(element),
    )
}

fn no_autoplay_rule() -> Rule {
    Rule::every(NO_AUTOPLAY, Selector::tags(MEDIA_ELEMENTS), |media, _, _| {
        !media.has_attribute("autoplay")
    })
}

fn is_keyboard_reachable(element: &Node) -> bool {
    if element.get_attribute("tabindex").map(str::trim) == Some("-1") {
        return false;
    }
    match element.get_attribute("style") {
        Some(style) => !HIDDEN_STYLE.is_match(style),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_html;
    use crate::service::AuditOptions;

    fn run(rule: Rule, html: &str) -> bool {
        rule.evaluate(&parse_html(html), &AuditOptions::default())
    }

    #[test]
    fn test_keyboard_access() {
        assert!(run(keyboard_access_rule(), r#"<a href="/">Home</a><button>Go</button>"#));
        assert!(run(keyboard_access_rule(), r#"<button tabindex="0">Go</button>"#));
        assert!(!run(keyboard_access_rule(), r#"<a href="/" tabindex="-1">Home</a>"#));
        assert!(!run(keyboard_access_rule(), r#"<button tabindex=" -1 ">Go</button>"#));
    }

    #[test]
    fn test_keyboard_access_hidden_styles() {
        assert!(!run(keyboard_access_rule(), r#"<button style="display:none">Go</button>"#));
        assert!(!run(
            keyboard_access_rule(),
            r#"<a href="/" style="color: red; VISIBILITY : Hidden">Home</a>"#
        ));
        assert!(run(keyboard_access_rule(), r#"<button style="display: block">Go</button>"#));
        // only interactive elements are considered
        assert!(run(keyboard_access_rule(), r#"<div style="display:none"></div>"#));
    }

    #[test]
    fn test_no_autoplay() {
        assert!(run(no_autoplay_rule(), r#"<video src="a.mp4" controls></video>"#));
        assert!(!run(no_autoplay_rule(), r#"<video src="a.mp4" autoplay></video>"#));
        assert!(!run(no_autoplay_rule(), r#"<audio src="a.mp3" autoplay="false"></audio>"#));
        assert!(run(no_autoplay_rule(), "<p>No media</p>"));
    }
}
