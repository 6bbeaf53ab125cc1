//! The Datastar attribute and modifier tables.
//!
//! This is the single source of truth for what generated builders expose.
//! Adding an attribute means adding an `AttributeSpec` here; adding a
//! modifier means adding an entry to `datastar_modifiers` and referencing its
//! identifier from the attributes that accept it.

use crate::catalog::identity::ValueKind;
use crate::catalog::model::Modifier;

const DOCS_BASE: &str = "https://data-star.dev/reference/attributes";

/// Unresolved catalog entry. Modifiers are referenced by registry identifier.
#[derive(Debug, Clone, Copy)]
pub struct AttributeSpec {
    pub name: &'static str,
    pub key: &'static str,
    pub description: &'static str,
    /// Anchor under the attribute reference page, when one exists.
    pub doc_anchor: Option<&'static str>,
    pub customizable_by_suffix: bool,
    pub value: ValueKind,
    pub modifiers: &'static [&'static str],
}

impl AttributeSpec {
    const fn new(name: &'static str, key: &'static str, description: &'static str) -> Self {
        Self {
            name,
            key,
            description,
            doc_anchor: None,
            customizable_by_suffix: false,
            value: ValueKind::String,
            modifiers: &[],
        }
    }

    const fn doc(mut self, anchor: &'static str) -> Self {
        self.doc_anchor = Some(anchor);
        self
    }

    /// Accepts an inline key (`data-on:click`).
    const fn keyed(mut self) -> Self {
        self.customizable_by_suffix = true;
        self
    }

    const fn boolean(mut self) -> Self {
        self.value = ValueKind::Bool;
        self
    }

    const fn modifiers(mut self, modifiers: &'static [&'static str]) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn doc_url(&self) -> Option<String> {
        self.doc_anchor.map(|anchor| format!("{DOCS_BASE}#{anchor}"))
    }
}

const TIMING: &[&str] = &[
    "DelayMs",
    "DelaySec",
    "DebounceMs",
    "DebounceMsLeading",
    "DebounceMsNoTrailing",
    "DebounceSec",
    "DebounceSecLeading",
    "DebounceSecNoTrailing",
    "ThrottleMs",
    "ThrottleMsNoLeading",
    "ThrottleMsTrailing",
    "ThrottleSec",
    "ThrottleSecNoLeading",
    "ThrottleSecTrailing",
];

pub const DATASTAR_ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new(
        "DatastarAttr",
        "attr",
        "Sets the value of any HTML attribute to an expression, and keeps it in sync.",
    )
    .doc("data-attr")
    .keyed(),
    AttributeSpec::new(
        "DatastarBind",
        "bind",
        "Creates a signal (if one doesn’t already exist) and sets up two-way data binding between it and an element’s value.",
    )
    .doc("data-bind")
    .keyed(),
    AttributeSpec::new(
        "DatastarClass",
        "datastar-class",
        "Adds or removes a class to or from an element based on an expression.",
    )
    .keyed()
    .modifiers(&["Case"]),
    AttributeSpec::new(
        "DatastarComputed",
        "computed",
        "Creates a signal that is computed based on an expression. The computed signal is read-only, and its value is automatically updated when any signals in the expression are updated.",
    )
    .doc("data-computed")
    .keyed()
    .modifiers(&["Case"]),
    AttributeSpec::new(
        "DatastarEffect",
        "effect",
        "Executes an expression on page load and whenever any signals in the expression change. This is useful for performing side effects, such as updating other signals, making requests to the backend, or manipulating the DOM.",
    )
    .doc("data-effect"),
    AttributeSpec::new(
        "DatastarIgnore",
        "ignore",
        "Datastar walks the entire DOM and applies plugins to each element it encounters. It's possible to tell Datastar to ignore an element and its descendants by placing a data-ignore attribute on it. This can be useful for preventing naming conflicts with third-party libraries, or when you are unable to escape user input.",
    )
    .doc("data-ignore")
    .boolean()
    .modifiers(&["Self"]),
    AttributeSpec::new(
        "DatastarIgnoreMorph",
        "ignore-morph",
        "Similar to the data-ignore attribute, the data-ignore-morph attribute tells the PatchElements watcher to skip processing an element and its children when morphing elements. This can be useful for preventing conflicts with third-party libraries that manipulate the DOM, or when you are unable to escape user input.",
    )
    .doc("data-ignore-morph")
    .boolean(),
    AttributeSpec::new(
        "DatastarIndicator",
        "indicator",
        "Creates a signal and sets its value to true while a fetch request is in flight, otherwise false. The signal can be used to show a loading indicator.",
    )
    .doc("data-indicator")
    .modifiers(&["Case"]),
    AttributeSpec::new(
        "DatastarInit",
        "init",
        "Runs an expression when the attribute is initialized. This can happen on page load, when an element is patched into the DOM, and any time the attribute is modified (via a backend action or otherwise).",
    )
    .doc("data-init")
    .modifiers(&["DelayMs", "DelaySec", "ViewTransition"]),
    AttributeSpec::new(
        "DatastarJSONSignals",
        "json-signals",
        "Sets the text content of an element to a reactive JSON stringified version of signals. Useful when troubleshooting an issue.",
    )
    .doc("data-json-signals")
    .modifiers(&["Terse"]),
    AttributeSpec::new(
        "DatastarOn",
        "on",
        "Attaches an event listener to an element, executing an expression whenever the event is triggered.",
    )
    .doc("data-on")
    .keyed()
    .modifiers(&[
        "Once",
        "Passive",
        "Capture",
        "Case",
        "DelayMs",
        "DelaySec",
        "DebounceMs",
        "DebounceMsLeading",
        "DebounceMsNoTrailing",
        "DebounceSec",
        "DebounceSecLeading",
        "DebounceSecNoTrailing",
        "ThrottleMs",
        "ThrottleMsNoLeading",
        "ThrottleMsTrailing",
        "ThrottleSec",
        "ThrottleSecNoLeading",
        "ThrottleSecTrailing",
        "ViewTransition",
        "Window",
        "Prevent",
        "Outside",
        "Stop",
    ]),
    AttributeSpec::new(
        "DatastarOnIntersect",
        "on-intersect",
        "Runs an expression when the element intersects with the viewport.",
    )
    .modifiers(&[
        "Once",
        "Half",
        "Full",
        "DelayMs",
        "DelaySec",
        "DebounceMs",
        "DebounceMsLeading",
        "DebounceMsNoTrailing",
        "DebounceSec",
        "DebounceSecLeading",
        "DebounceSecNoTrailing",
        "ThrottleMs",
        "ThrottleMsNoLeading",
        "ThrottleMsTrailing",
        "ThrottleSec",
        "ThrottleSecNoLeading",
        "ThrottleSecTrailing",
        "ViewTransition",
    ]),
    AttributeSpec::new(
        "DatastarOnInterval",
        "on-interval",
        "Runs an expression at a regular interval. The interval duration defaults to one second and can be modified using the '__duration' modifier.",
    )
    .doc("data-on-interval")
    .modifiers(&[
        "DurationMs",
        "DurationMsLeading",
        "DurationSec",
        "DurationSecLeading",
        "ViewTransition",
    ]),
    AttributeSpec::new(
        "DatastarOnSignalPatch",
        "on-signal-patch",
        "Runs an expression whenever any signals are patched. This is useful for tracking changes, updating computed values, or triggering side effects when data updates.",
    )
    .doc("data-on-signal-patch")
    .modifiers(TIMING),
    AttributeSpec::new(
        "DatastarOnSignalPatchFilter",
        "on-signal-patch-filter",
        "Filters which signals to watch when using the data-on-signal-patch attribute.\n\nThe data-on-signal-patch-filter attribute accepts an object with include and/or exclude properties that are regular expressions.",
    )
    .doc("data-on-signal-patch-filter"),
    AttributeSpec::new(
        "DatastarPreserveAttr",
        "preserve-attr",
        "Preserves the value of an attribute when morphing DOM elements.",
    )
    .doc("data-preserve-attr"),
    AttributeSpec::new(
        "DatastarRef",
        "ref",
        "Creates a new signal that is a reference to the element on which the data attribute is placed.",
    )
    .doc("data-ref")
    .modifiers(&["Case"]),
    AttributeSpec::new(
        "DatastarShow",
        "show",
        "Shows or hides an element based on whether an expression evaluates to 'true' or 'false'. For anything with custom requirements, use 'data-class' instead.",
    )
    .doc("data-show"),
    AttributeSpec::new(
        "DatastarSignals",
        "signals",
        "Patches (adds, updates or removes) one or more signals into the existing signals. Values defined later in the DOM tree override those defined earlier.",
    )
    .doc("data-signals")
    .keyed()
    .modifiers(&["Case", "IfMissing"]),
    AttributeSpec::new(
        "DatastarStyle",
        "datastar-style",
        "Sets the value of inline CSS styles on an element based on an expression, and keeps them in sync.",
    )
    .doc("data-style")
    .keyed()
    .modifiers(&["Case"]),
    AttributeSpec::new(
        "DatastarText",
        "text",
        "Binds the text content of an element to an expression.",
    )
    .doc("data-text"),
];

fn flag(name: &str, description: &str, key: &str) -> Modifier {
    Modifier::new(name, description, key, ValueKind::Bool, key, "")
}

fn timed(name: &str, description: &str, key: &str, kind: ValueKind, suffix: &str) -> Modifier {
    Modifier::new(name, description, key, kind, &format!("{key}."), suffix)
}

/// Registry entries for every Datastar modifier, in declaration order.
pub fn datastar_modifiers() -> Vec<(&'static str, Modifier)> {
    use ValueKind::{DurationMs, DurationSec};

    vec![
        (
            "Capture",
            flag(
                "Capture",
                "Use capture event listener. Only works with built-in events.",
                "capture",
            ),
        ),
        (
            "Case",
            Modifier::new(
                "Case",
                "Converts the casing of the signal name.\n\t- 'camel' – Camel case: 'mySignal' (default)\n\t- 'kebab' – Kebab case: 'my-signal'\n\t- 'snake' – Snake case: 'my_signal'\n\t- 'pascal' – Pascal case: 'MySignal'",
                "case",
                ValueKind::String,
                "case.",
                "",
            ),
        ),
        (
            "DebounceMs",
            timed("DebounceMs", "Debounces the event handler", "debounce", DurationMs, "ms"),
        ),
        (
            "DebounceMsLeading",
            timed(
                "DebounceMsLeading",
                "Debounce the event listener in milliseconds with leading edge.",
                "debounce",
                DurationMs,
                "ms.leading",
            ),
        ),
        (
            "DebounceMsNoTrailing",
            timed(
                "DebounceMsNoTrailing",
                "Debounce the event listener in milliseconds without trailing edge.",
                "debounce",
                DurationMs,
                "ms.notrailing",
            ),
        ),
        (
            "DebounceSec",
            timed("DebounceSec", "Debounces the event handler", "debounce", DurationSec, "s"),
        ),
        (
            "DebounceSecLeading",
            timed(
                "DebounceSecLeading",
                "Debounce the event listener in seconds with leading edge.",
                "debounce",
                DurationSec,
                "s.leading",
            ),
        ),
        (
            "DebounceSecNoTrailing",
            timed(
                "DebounceSecNoTrailing",
                "Debounce the event listener in seconds without trailing edge.",
                "debounce",
                DurationSec,
                "s.notrailing",
            ),
        ),
        (
            "DelayMs",
            timed(
                "DelayMs",
                "Delay the event listener in milliseconds.",
                "delay",
                DurationMs,
                "ms",
            ),
        ),
        (
            "DelaySec",
            timed(
                "DelaySec",
                "Delay the event listener in seconds.",
                "delay",
                DurationSec,
                "s",
            ),
        ),
        (
            "DurationMs",
            timed(
                "DurationMs",
                "Sets the interval duration in milliseconds.",
                "duration",
                DurationMs,
                "ms",
            ),
        ),
        (
            "DurationMsLeading",
            timed(
                "DurationMsLeading",
                "Sets the interval duration in milliseconds. Execute the first interval immediately.",
                "duration",
                DurationMs,
                "ms.leading",
            ),
        ),
        (
            "DurationSec",
            timed(
                "DurationSec",
                "Sets the interval duration in seconds.",
                "duration",
                DurationSec,
                "s",
            ),
        ),
        (
            "DurationSecLeading",
            timed(
                "DurationSecLeading",
                "Sets the interval duration in seconds. Execute the first interval immediately.",
                "duration",
                DurationSec,
                "s.leading",
            ),
        ),
        (
            "Full",
            flag("Full", "Trigger when the full element is visible.", "full"),
        ),
        (
            "IfMissing",
            flag(
                "IfMissing",
                "Only patches signals if their keys do not already exist. This is useful for setting defaults without overwriting existing values.",
                "ifmissing",
            ),
        ),
        (
            "Half",
            flag("Half", "Trigger when half of the element is visible.", "half"),
        ),
        (
            "Once",
            flag(
                "Once",
                "Only run the expression once. Only works with built-in events.",
                "once",
            ),
        ),
        (
            "Outside",
            flag(
                "Outside",
                "Triggers when the event is outside the element.",
                "outside",
            ),
        ),
        (
            "Passive",
            flag(
                "Passive",
                "Do not call preventDefault on the event listener. Only works with built-in events.",
                "passive",
            ),
        ),
        (
            "Prevent",
            flag(
                "Prevent",
                "Calls 'preventDefault' on the event listener.",
                "prevent",
            ),
        ),
        (
            "Self",
            flag(
                "Self",
                "Only ignore the element itself, not its descendants.",
                "self",
            ),
        ),
        (
            "Stop",
            flag(
                "Stop",
                "Calls 'stopPropagation' on the event listener.",
                "stop",
            ),
        ),
        (
            "Terse",
            flag(
                "Terse",
                "Outputs a more compact JSON format without extra whitespace. Useful for displaying filtered data inline.",
                "terse",
            ),
        ),
        (
            "ThrottleMs",
            timed("ThrottleMs", "Throttles the event handler", "throttle", DurationMs, "ms"),
        ),
        (
            "ThrottleMsNoLeading",
            timed(
                "ThrottleMsNoLeading",
                "Throttle the event listener in milliseconds without leading edge.",
                "throttle",
                DurationMs,
                "ms.noleading",
            ),
        ),
        (
            "ThrottleMsTrailing",
            timed(
                "ThrottleMsTrailing",
                "Throttle the event listener in milliseconds with trailing edge.",
                "throttle",
                DurationMs,
                "ms.trailing",
            ),
        ),
        (
            "ThrottleSec",
            timed(
                "ThrottleSec",
                "Throttles the event listener in seconds.",
                "throttle",
                DurationSec,
                "s",
            ),
        ),
        (
            "ThrottleSecNoLeading",
            timed(
                "ThrottleSecNoLeading",
                "Throttle the event listener in seconds without leading edge.",
                "throttle",
                DurationSec,
                "s.noleading",
            ),
        ),
        (
            "ThrottleSecTrailing",
            timed(
                "ThrottleSecTrailing",
                "Throttle the event listener in seconds with trailing edge.",
                "throttle",
                DurationSec,
                "s.trailing",
            ),
        ),
        (
            "ViewTransition",
            flag(
                "ViewTransition",
                "Wraps the expression in 'document.startViewTransition()' when the View Transition API is available.",
                "viewtransition",
            ),
        ),
        (
            "Window",
            flag(
                "Window",
                "Attaches the event listener to the 'window' element.",
                "window",
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn every_referenced_modifier_is_declared() {
        let declared: BTreeSet<_> = datastar_modifiers().into_iter().map(|(id, _)| id).collect();
        assert_eq!(declared.len(), 32);
        for spec in DATASTAR_ATTRIBUTES {
            for id in spec.modifiers {
                assert!(declared.contains(id), "{} references {id}", spec.name);
            }
        }
    }

    #[test]
    fn prefixes_and_suffixes_match_wire_tokens() {
        let modifiers: Vec<_> = datastar_modifiers();
        let find = |id: &str| {
            modifiers
                .iter()
                .find(|(candidate, _)| *candidate == id)
                .map(|(_, m)| m.clone())
                .unwrap()
        };
        let debounce = find("DebounceMsLeading");
        assert_eq!(debounce.prefix, "debounce.");
        assert_eq!(debounce.suffix, "ms.leading");
        assert_eq!(debounce.kind, ValueKind::DurationMs);

        let case = find("Case");
        assert_eq!(case.prefix, "case.");
        assert_eq!(case.kind, ValueKind::String);

        let window = find("Window");
        assert_eq!(window.prefix, "window");
        assert!(window.suffix.is_empty());

        let throttle = find("ThrottleSec");
        assert_eq!(throttle.type_key, "throttle");
        assert_eq!(throttle.suffix, "s");
    }

    #[test]
    fn doc_urls_point_at_attribute_reference() {
        let on = DATASTAR_ATTRIBUTES.iter().find(|s| s.key == "on").unwrap();
        assert_eq!(
            on.doc_url().as_deref(),
            Some("https://data-star.dev/reference/attributes#data-on")
        );
        let class = DATASTAR_ATTRIBUTES
            .iter()
            .find(|s| s.name == "DatastarClass")
            .unwrap();
        assert_eq!(class.doc_url(), None);
    }
}
