//! ARIA role and attribute tables.
//!
//! The role table is a policy subset, not the full WAI-ARIA matrix: a role
//! missing from it exempts the element from the check.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::node::Node;

/// Attributes each known role may carry
static ROLE_ATTRIBUTES: Lazy<IndexMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    IndexMap::from([
        ("button", &["aria-pressed", "aria-disabled"][..]),
        ("checkbox", &["aria-checked", "aria-readonly", "aria-required"][..]),
        ("dialog", &["aria-labelledby", "aria-describedby"][..]),
        ("link", &["aria-disabled"][..]),
        ("listbox", &["aria-multiselectable", "aria-readonly"][..]),
        ("menu", &["aria-orientation"][..]),
        ("menuitem", &["aria-disabled", "aria-checked"][..]),
        ("menubar", &["aria-orientation"][..]),
        ("navigation", &["aria-label", "aria-roledescription"][..]),
        ("radio", &["aria-checked", "aria-readonly", "aria-required"][..]),
        ("region", &["aria-label", "aria-roledescription"][..]),
        ("tab", &["aria-selected", "aria-controls", "aria-expanded"][..]),
        ("tablist", &["aria-orientation", "aria-multiselectable"][..]),
        ("textbox", &["aria-readonly", "aria-required", "aria-invalid"][..]),
        ("treeitem", &["aria-expanded", "aria-selected"][..]),
    ])
});

const BOOLEAN_VALUES: &[&str] = &["true", "false"];
const INVALID_VALUES: &[&str] = &["true", "false", "grammar", "spelling"];
const ORIENTATION_VALUES: &[&str] = &["horizontal", "vertical"];
const TRISTATE_VALUES: &[&str] = &["true", "false", "mixed"];

/// Allowed `aria-*` attributes for a role, or `None` for roles outside the table
pub fn allowed_attributes(role: &str) -> Option<&'static [&'static str]> {
    ROLE_ATTRIBUTES.get(role.trim()).copied()
}

/// Check an attribute value against its value type.
///
/// Attributes without a constrained type accept any value.
pub fn value_is_valid(attribute: &str, value: &str) -> bool {
    let allowed = match attribute {
        "aria-checked" | "aria-disabled" | "aria-expanded" | "aria-readonly"
        | "aria-required" | "aria-selected" | "aria-multiselectable" => BOOLEAN_VALUES,
        "aria-invalid" => INVALID_VALUES,
        "aria-orientation" => ORIENTATION_VALUES,
        "aria-pressed" => TRISTATE_VALUES,
        _ => return true,
    };
    allowed.contains(&value)
}

/// Check every `aria-*` attribute of an element against its role
pub fn element_is_valid(element: &Node) -> bool {
    let Some(allowed) = element.get_attribute("role").and_then(allowed_attributes) else {
        return true;
    };

    element
        .attributes()
        .filter(|(name, _)| name.starts_with("aria-"))
        .all(|(name, value)| allowed.contains(&name) && value_is_valid(name, value))
}
