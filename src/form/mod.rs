//! Successful-control selection: turns a form's controls into the fields a
//! browser would submit.

use indexmap::IndexMap;
use tracing::debug;

use crate::constants::is_successful_node;
use crate::types::{Control, ControlType, Field};
use crate::SerializeOptions;

/// Collect the fields to submit from `controls`, in document order.
///
/// Controls are skipped when they are disabled (unless `options.disabled`),
/// nameless, not an input-like node, or a submit-style button. Unchecked
/// checkboxes and radios carry no value. With `options.empty`, valueless
/// controls are kept as empty strings; a radio group with nothing checked
/// contributes one empty field after all other controls.
///
/// # Examples
/// ```
/// use serde_form::{collect_fields, Control, Field, SerializeOptions};
///
/// let controls = [
///     Control::text("name", "Ada"),
///     Control::checkbox("admin", "on", false),
///     Control::input("submit", "go", "Send"),
/// ];
/// let fields = collect_fields(&controls, &SerializeOptions::new());
/// assert_eq!(fields, vec![Field::new("name", "Ada")]);
/// ```
pub fn collect_fields(controls: &[Control], options: &SerializeOptions) -> Vec<Field> {
    let mut fields = Vec::new();
    let mut radio_groups: IndexMap<&str, bool> = IndexMap::new();

    for control in controls {
        if (!options.disabled && control.disabled) || control.name.is_empty() {
            debug!(name = %control.name, "skipping disabled or nameless control");
            continue;
        }
        if !is_successful_node(&control.node_name) || control.kind.is_submitter() {
            debug!(name = %control.name, kind = %control.kind, "skipping unsuccessful control");
            continue;
        }

        let mut value = Some(control.current_value());
        if control.kind.is_checkable() && !control.checked {
            value = None;
        }

        if options.empty {
            if control.kind == ControlType::Checkbox && !control.checked {
                value = Some("");
            }
            if control.kind == ControlType::Radio {
                let checked = radio_groups.entry(control.name.as_str()).or_insert(false);
                *checked |= control.checked;
                if value.map_or(true, str::is_empty) {
                    continue;
                }
            }
        } else if value.map_or(true, str::is_empty) {
            continue;
        }

        if control.kind == ControlType::SelectMultiple {
            push_selected_options(control, options, &mut fields);
            continue;
        }

        if let Some(value) = value {
            fields.push(Field::new(control.name.as_str(), value));
        }
    }

    if options.empty {
        for (name, checked) in radio_groups {
            if !checked {
                fields.push(Field::new(name, ""));
            }
        }
    }

    fields
}

fn push_selected_options(control: &Control, options: &SerializeOptions, fields: &mut Vec<Field>) {
    let mut any_selected = false;
    for option in &control.options {
        if option.selected && (!option.value.is_empty() || options.empty) {
            any_selected = true;
            fields.push(Field::list_member(control.name.as_str(), option.value.as_str()));
        }
    }
    if !any_selected && options.empty {
        fields.push(Field::new(control.name.as_str(), ""));
    }
}
