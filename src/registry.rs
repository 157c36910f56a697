//! The fixed catalog of frameworks and their template variants.

use crate::paint::Hue;

#[derive(Debug, PartialEq, Eq)]
pub struct Variant {
    pub id: &'static str,
    pub display: &'static str,
    pub hue: Hue,
    /// External generator normally used for this variant, if any.
    pub custom_command: Option<&'static str>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Framework {
    pub id: &'static str,
    pub display: &'static str,
    pub hue: Hue,
    pub variants: &'static [Variant],
}

static FRAMEWORKS: &[Framework] = &[
    Framework {
        id: "vue",
        display: "Vue",
        hue: Hue::Green,
        variants: &[
            Variant {
                id: "vue-ts",
                display: "Vue3 + TypeScript",
                hue: Hue::Green,
                custom_command: None,
            },
            Variant {
                id: "vue",
                display: "Vue3 + JavaScript",
                hue: Hue::Green,
                custom_command: None,
            },
        ],
    },
    Framework {
        id: "react",
        display: "React",
        hue: Hue::Cyan,
        variants: &[
            Variant {
                id: "react-ts",
                display: "React + TypeScript",
                hue: Hue::Cyan,
                custom_command: None,
            },
            Variant {
                id: "react",
                display: "React + JavaScript",
                hue: Hue::Cyan,
                custom_command: None,
            },
        ],
    },
];

#[must_use]
pub fn frameworks() -> &'static [Framework] {
    FRAMEWORKS
}

/// Every variant in catalog order.
pub fn variants() -> impl Iterator<Item = &'static Variant> {
    FRAMEWORKS.iter().flat_map(|f| f.variants.iter())
}

/// Identifiers accepted by `--template`, in catalog order.
#[must_use]
pub fn template_ids() -> Vec<&'static str> {
    variants().map(|v| v.id).collect()
}

#[must_use]
pub fn find_variant(id: &str) -> Option<&'static Variant> {
    variants().find(|v| v.id == id)
}

#[must_use]
pub fn is_known_template(id: &str) -> bool {
    find_variant(id).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn template_ids_follow_catalog_order() {
        assert_eq!(template_ids(), ["vue-ts", "vue", "react-ts", "react"]);
    }

    #[test]
    fn template_ids_are_unique() {
        let ids = template_ids();
        let unique = ids.iter().collect::<HashSet<_>>();
        assert_eq!(ids.len(), unique.len());
    }

    #[test]
    fn every_framework_has_variants() {
        assert!(frameworks().iter().all(|f| !f.variants.is_empty()));
    }

    #[test]
    fn lookup() {
        assert_eq!(find_variant("react-ts").map(|v| v.display), Some("React + TypeScript"));
        assert!(is_known_template("vue"));
        assert!(!is_known_template("svelte"));
        assert!(!is_known_template("Vue"));
    }
}
