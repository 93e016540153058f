//! Brand variants and their pinned axes.

use std::collections::HashSet;

use write_fonts::types::Tag;

use crate::{
    config::VariantSpec,
    recipe::{Operation, Step},
};

/// A normalized brand variant: a named sub-family cut from the same source
/// by extra pipeline steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    pub name: String,
    pub alias: Option<String>,
    pub italic: bool,
    pub steps: Vec<Step>,
    /// Axes the variant's steps fix to a single value.
    pub pins: HashSet<Tag>,
}

impl Variant {
    pub fn new(spec: &VariantSpec) -> Variant {
        Variant {
            name: spec.name.clone(),
            alias: spec.alias.clone(),
            italic: spec.italic,
            pins: pinned_axes(&spec.steps),
            steps: spec.steps.clone(),
        }
    }

    /// The implicit variant behind the color guideline build.
    pub fn color() -> Variant {
        Variant {
            name: "Color".to_string(),
            alias: Some("COLR".to_string()),
            italic: false,
            steps: Vec::new(),
            pins: HashSet::new(),
        }
    }
}

/// Normalize configured variant specs in declaration order.
pub fn registry(specs: &[VariantSpec]) -> Vec<Variant> {
    specs.iter().map(Variant::new).collect()
}

/// Axes a step list pins: any `tag=value` assignment in a subspace step
/// whose value carries no `lo:hi` range delimiter. Assignments that don't
/// parse as an axis tag never pin anything.
fn pinned_axes(steps: &[Step]) -> HashSet<Tag> {
    let mut pins = HashSet::new();
    for step in steps {
        let Step::Operation(Operation::Subspace { axes, .. }) = step else {
            continue;
        };
        for assignment in axes.split_whitespace() {
            let Some((tag, stops)) = assignment.split_once('=') else {
                continue;
            };
            if stops.contains(':') {
                continue;
            }
            if let Ok(tag) = Tag::new_checked(tag.as_bytes()) {
                pins.insert(tag);
            }
        }
    }
    pins
}
