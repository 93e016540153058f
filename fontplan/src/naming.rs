//! Family-name abbreviation under a character budget.
//!
//! Name records have limited room, so the joined family name (family +
//! variant + guideline marker + whichever style name is longest) has to fit
//! a budget. Shortening substitutes configured short forms one element at a
//! time, longest-lived element last.

use fontmodel::FontModel;
use log::warn;

use crate::{
    config::{NameOverflow, ResolvedConfig},
    error::Error,
    variants::Variant,
};

/// Style names excluded from sizing: these four never stretch a name
/// beyond what the family name itself costs.
const RIBBI_STYLES: [&str; 4] = ["Regular", "Italic", "Bold", "Bold Italic"];

/// Label used in file names and path templates for guideline builds.
pub const GUIDELINE_LABEL: &str = "Guides";

const GUIDELINE_ELEMENT: &str = "Guidelines";

/// An abbreviated family name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyName {
    pub name: String,
    /// Set when no substitution got the measured name under budget. Under
    /// the `warn` policy this is the only overflow signal callers see.
    pub over_budget: bool,
}

impl FamilyName {
    pub fn file_stem(&self) -> String {
        self.name.replace(' ', "")
    }
}

/// Compute the family name for one (variant, guideline-flag) combination.
///
/// The measured length includes a sizing element: the longest style name of
/// any non-RIBBI instance that could be appended to this family (italic or
/// upright instances only, when a variant dictates). The sizing element is
/// dropped from the returned name.
pub fn abbreviate(
    config: &ResolvedConfig,
    model: &FontModel,
    variant: Option<&Variant>,
    guidelines: bool,
) -> Result<FamilyName, Error> {
    let mut elements = vec![model.family_name.clone()];
    if let Some(variant) = variant {
        elements.push(variant.name.clone());
    }
    if guidelines {
        elements.push(GUIDELINE_ELEMENT.to_string());
    }
    elements.push(longest_custom_style(model, variant));

    let budget = config.config.family_name_budget;
    let measure = |elements: &[String]| elements.join(" ").chars().count();

    if measure(&elements) > budget && guidelines {
        let guideline_idx = if variant.is_some() { 2 } else { 1 };
        elements[guideline_idx] = GUIDELINE_LABEL.to_string();
    }
    if measure(&elements) > budget {
        if let Some(alias) = variant.and_then(|v| v.alias.as_deref()) {
            elements[1] = alias.to_string();
        }
    }
    if measure(&elements) > budget {
        if let Some(short) = &config.config.short_family_name {
            elements[0] = short.clone();
        }
    }

    let over_budget = measure(&elements) > budget;
    if over_budget {
        let measured = elements.join(" ");
        match config.config.name_overflow {
            NameOverflow::Fail => return Err(Error::NameTooLong(measured)),
            NameOverflow::Warn => {
                warn!("Font name '{measured}' too long; provide shortFamilyName and variant aliases")
            }
        }
    }

    elements.pop(); // the sizing element is never part of the name
    Ok(FamilyName {
        name: elements.join(" "),
        over_budget,
    })
}

fn longest_custom_style(model: &FontModel, variant: Option<&Variant>) -> String {
    model
        .instances
        .iter()
        .map(|instance| instance.style_name.as_str())
        .filter(|name| !RIBBI_STYLES.contains(name))
        .filter(|name| match variant {
            Some(variant) if variant.italic => name.contains("Italic"),
            Some(_) => !name.contains("Italic"),
            None => true,
        })
        .max_by_key(|name| name.chars().count())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use fontmodel::{Axis, FontModel, Instance};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use write_fonts::types::Tag;

    use crate::config::{Config, ResolvedConfig};
    use crate::error::Error;
    use crate::variants::Variant;

    use super::abbreviate;

    fn config_from(yml: &str) -> ResolvedConfig {
        let config: Config = serde_yaml::from_str(yml).unwrap();
        let temp_dir = tempfile::tempdir().unwrap();
        config.resolve(temp_dir.path()).unwrap()
    }

    fn model(family: &str, styles: &[&str]) -> FontModel {
        FontModel {
            family_name: family.to_string(),
            axes: vec![Axis::new("Weight", Tag::new(b"wght"))],
            instances: styles
                .iter()
                .map(|style| Instance::new(*style, vec![(Tag::new(b"wght"), 400.0)].into()))
                .collect(),
            positions: 2,
        }
    }

    fn display_variant(alias: Option<&str>) -> Variant {
        Variant {
            name: "Display".to_string(),
            alias: alias.map(str::to_string),
            italic: false,
            steps: Vec::new(),
            pins: Default::default(),
        }
    }

    #[test]
    fn short_names_pass_through() {
        let config = config_from("sources: [A.glyphs]");
        let model = model("Example Sans", &["Regular", "Bold"]);
        let family = abbreviate(&config, &model, None, false).unwrap();
        assert_eq!("Example Sans", family.name);
        assert!(!family.over_budget);
    }

    #[test]
    fn ribbi_styles_do_not_size() {
        let config = config_from("sources: [A.glyphs]\nfamilyNameBudget: 12");
        let model = model("Example Sans", &["Regular", "Bold", "Bold Italic"]);
        // Joined with the empty sizing element: "Example Sans " is 13 chars
        // with the join, but the sizing element itself adds nothing.
        let family = abbreviate(&config, &model, None, false).unwrap();
        assert!(family.over_budget); // the trailing join space still counts
        assert_eq!("Example Sans", family.name);
    }

    #[test]
    fn longest_custom_style_sizes_the_name() {
        let config = config_from("sources: [A.glyphs]\nfamilyNameBudget: 20");
        // "Example Sans" + " " + "ExtraCondensed" = 27 > 20
        let model = model("Example Sans", &["Regular", "ExtraCondensed"]);
        let family = abbreviate(&config, &model, None, false).unwrap();
        assert!(family.over_budget);
    }

    #[test]
    fn guideline_element_shortens_first() {
        let config = config_from("sources: [A.glyphs]\nfamilyNameBudget: 20");
        let model = model("Example Sans", &["Regular"]);
        // "Example Sans Guidelines" is 23; "Example Sans Guides" is 19.
        let family = abbreviate(&config, &model, None, true).unwrap();
        assert_eq!("Example Sans Guides", family.name);
        assert!(!family.over_budget);
    }

    #[test]
    fn guideline_element_kept_long_when_it_fits() {
        let config = config_from("sources: [A.glyphs]");
        let model = model("Example Sans", &["Regular"]);
        let family = abbreviate(&config, &model, None, true).unwrap();
        assert_eq!("Example Sans Guidelines", family.name);
    }

    #[test]
    fn variant_alias_substituted_when_over_budget() {
        let config = config_from("sources: [A.glyphs]\nfamilyNameBudget: 18");
        let model = model("Example Sans", &["Regular"]);
        let variant = display_variant(Some("DS"));
        // "Example Sans Display" is 20; "Example Sans DS" is 15.
        let family = abbreviate(&config, &model, Some(&variant), false).unwrap();
        assert_eq!("Example Sans DS", family.name);
        assert!(!family.over_budget);
    }

    #[test]
    fn short_family_name_substituted_last() {
        let config =
            config_from("sources: [A.glyphs]\nfamilyNameBudget: 12\nshortFamilyName: ExSans");
        let model = model("Example Sans", &["Regular"]);
        let variant = display_variant(None);
        let family = abbreviate(&config, &model, Some(&variant), false).unwrap();
        assert_eq!("ExSans Display", family.name);
    }

    #[rstest]
    #[case(false, &["Black Condensed", "Black Condensed Italic"], "Black Condensed")]
    #[case(true, &["Black Condensed", "Black Condensed Italic"], "Black Condensed Italic")]
    fn sizing_follows_variant_italicness(
        #[case] italic: bool,
        #[case] styles: &[&str],
        #[case] expected_sizer: &str,
    ) {
        // Budget exactly fits family + sizer; one char less overflows.
        let fits = "Example Sans Display".chars().count() + 1 + expected_sizer.chars().count();
        let config = config_from(&format!(
            "sources: [A.glyphs]\nfamilyNameBudget: {fits}"
        ));
        let model = model("Example Sans", styles);
        let mut variant = display_variant(None);
        variant.italic = italic;
        let family = abbreviate(&config, &model, Some(&variant), false).unwrap();
        assert!(!family.over_budget);

        let config = config_from(&format!(
            "sources: [A.glyphs]\nfamilyNameBudget: {}",
            fits - 1
        ));
        let family = abbreviate(&config, &model, Some(&variant), false).unwrap();
        assert!(family.over_budget);
    }

    #[test]
    fn warn_policy_keeps_unshortened_name() {
        let config = config_from("sources: [A.glyphs]\nfamilyNameBudget: 28");
        let model = model("A Very Long Example Family Name Indeed", &["Regular"]);
        let family = abbreviate(&config, &model, None, false).unwrap();
        assert_eq!("A Very Long Example Family Name Indeed", family.name);
        assert!(family.over_budget);
    }

    #[test]
    fn fail_policy_aborts() {
        let config =
            config_from("sources: [A.glyphs]\nfamilyNameBudget: 28\nnameOverflow: fail");
        let model = model("A Very Long Example Family Name Indeed", &["Regular"]);
        let result = abbreviate(&config, &model, None, false);
        assert!(matches!(result, Err(Error::NameTooLong(_))));
    }

    #[test]
    fn file_stem_strips_spaces() {
        let config = config_from("sources: [A.glyphs]");
        let model = model("Example Sans", &["Regular"]);
        let family = abbreviate(&config, &model, None, false).unwrap();
        assert_eq!("ExampleSans", family.file_stem());
    }
}
