//! The standard accessibility rules.

use super::aria;
use super::descriptions::*;
use super::Rule;
use crate::selector::Selector;
use crate::utilities::{
    heading_level, is_numeric_text, FORM_CONTROL_ELEMENTS, HEADING_ELEMENTS, TEXT_ELEMENTS,
};

/// Create the eight standard rules, in evaluation order
pub fn standard_rules() -> Vec<Rule> {
    vec![
        aria_roles_rule(),
        button_name_rule(),
        image_alt_rule(),
        form_label_rule(),
        color_contrast_rule(),
        main_landmark_rule(),
        heading_hierarchy_rule(),
        link_text_rule(),
    ]
}

fn aria_roles_rule() -> Rule {
    Rule::every(ARIA_ROLES, Selector::attribute_prefix("aria-"), |element, _, _| {
        aria::element_is_valid(element)
    })
}

fn button_name_rule() -> Rule {
    Rule::every(BUTTON_NAME, Selector::tag("button"), |button, _, _| {
        !button.text_content().is_empty() || button.has_attribute("aria-label")
    })
}

fn image_alt_rule() -> Rule {
    Rule::every(IMAGE_ALT, Selector::tag("img"), |img, _, _| {
        img.get_attribute("alt")
            .map(|alt| !alt.trim().is_empty())
            .unwrap_or(false)
    })
}

fn form_label_rule() -> Rule {
    Rule::every(
        FORM_LABELS,
        Selector::tags(FORM_CONTROL_ELEMENTS),
        |control, document, _| {
            if control.has_attribute("aria-label") {
                return true;
            }
            // Without an id there is nothing for a label to point at
            let Some(id) = control.get_attribute("id") else {
                return false;
            };
            let label = Selector::attribute_equals("label", "for", id);
            document.query_selector_first(&label).is_some()
        },
    )
}

fn color_contrast_rule() -> Rule {
    Rule::every(COLOR_CONTRAST, Selector::tags(TEXT_ELEMENTS), |_, _, options| {
        options.contrast.passes()
    })
}

fn main_landmark_rule() -> Rule {
    let landmark = Selector::tag("main").or(Selector::attribute_equals("*", "role", "main"));
    Rule::new(MAIN_LANDMARK, move |document, _| {
        document.query_selector_first(&landmark).is_some()
    })
}

fn heading_hierarchy_rule() -> Rule {
    let headings = Selector::tags(HEADING_ELEMENTS);
    Rule::new(HEADING_HIERARCHY, move |document, _| {
        let mut previous = 0;
        for heading in document.query_all(&headings) {
            let Some(level) = heading_level(heading.tag_name()) else {
                continue;
            };
            if level > previous + 1 {
                return false;
            }
            previous = level;
        }
        true
    })
}

fn link_text_rule() -> Rule {
    Rule::every(LINK_TEXT, Selector::tag("a"), |link, _, _| {
        let text = link.text_content();
        !text.is_empty() && !is_numeric_text(&text)
    })
}
