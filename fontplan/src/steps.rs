//! Pipeline assembly: the step sequences shared by every target.

use std::collections::HashSet;

use fontmodel::{FontModel, Instance, Source};
use write_fonts::types::Tag;

use crate::{
    config::ResolvedConfig,
    error::Error,
    naming,
    recipe::{Operation, Step},
    variants::Variant,
};

/// The base pipeline every variable and static target starts from, for one
/// guideline flag.
///
/// With guidelines on, the external generator rewrites the source into a
/// sibling file which becomes the pipeline's effective source, and the
/// family is renamed so the proofing fonts install alongside the plain
/// ones.
pub fn variable_steps(
    config: &ResolvedConfig,
    model: &FontModel,
    source: &Source,
    guidelines: bool,
) -> Result<Vec<Step>, Error> {
    let mut steps = vec![Step::source(&source.path)];
    if guidelines {
        let generated = source.sibling("guidelines");
        steps.push(
            Operation::Exec {
                exe: config.config.guideline_generator.clone(),
                args: format!(
                    "-o {} --config '{}' {}",
                    generated.display(),
                    generator_config(config),
                    source.path.display()
                ),
            }
            .into(),
        );
        steps.push(Step::source(generated));
    }
    steps.push(
        Operation::BuildVariable {
            args: Some(compiler_args(config)),
            fontmake_args: None,
        }
        .into(),
    );
    if guidelines {
        let family = naming::abbreviate(config, model, None, true)?;
        steps.push(Operation::rename(family.name).into());
    }
    steps.push(fix(config));
    steps.push(build_stat(config));
    Ok(steps)
}

/// Steps that turn the base pipeline into one static instance: the owning
/// variant's extra steps, then rename, subspace, hbsubset, fix.
///
/// The variant's step list is cloned per target. The same list is spliced
/// into many pipelines; sharing it would let a mutation through one recipe
/// entry surface in another.
pub fn static_extension(
    config: &ResolvedConfig,
    variant: Option<&Variant>,
    family_name: String,
    location: &str,
) -> Vec<Step> {
    let mut steps = Vec::new();
    if let Some(variant) = variant {
        steps.extend(variant.steps.iter().cloned());
    }
    steps.push(Operation::rename(family_name).into());
    steps.push(
        Operation::Subspace {
            axes: location.to_string(),
            args: Some("--update-name-table".to_string()),
        }
        .into(),
    );
    steps.push(
        Operation::Hbsubset {
            args: Some("--passthrough-tables".to_string()),
        }
        .into(),
    );
    steps.push(fix(config));
    steps
}

/// `tag=value` tokens for every model axis in the instance's location that
/// the variant doesn't pin, in model axis order. Axes unknown to the model
/// are dropped. An empty result means the instance sits at the subspace
/// default and no file should be cut for it.
pub fn location_string(model: &FontModel, instance: &Instance, pins: &HashSet<Tag>) -> String {
    model
        .axis_tags()
        .filter(|tag| !pins.contains(tag))
        .filter_map(|tag| {
            instance
                .location
                .get(tag)
                .map(|value| format!("{}={}", tag, format_coord(value)))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Arguments handed to the variable-font compiler.
pub(crate) fn compiler_args(config: &ResolvedConfig) -> String {
    match &config.config.fontmake_args {
        Some(extra) => format!("{extra} --no-production-names"),
        None => "--no-production-names".to_string(),
    }
}

pub(crate) fn fix(config: &ResolvedConfig) -> Step {
    let args = config
        .config
        .include_source_fixes
        .then(|| "--include-source-fixes".to_string());
    Operation::Fix { args }.into()
}

pub(crate) fn build_stat(config: &ResolvedConfig) -> Step {
    let args = config
        .stat_file
        .as_ref()
        .map(|path| format!("--src {}", path.display()));
    Operation::BuildStat { args }.into()
}

/// The `--config` payload for the guideline generator: the copy+guidelines
/// effect stack merged with the user's parameters.
fn generator_config(config: &ResolvedConfig) -> String {
    let mut payload = serde_json::Map::new();
    payload.insert(
        "effects".to_string(),
        serde_json::json!(["Copy", "Guidelines"]),
    );
    if let Some(params) = &config.config.guidelines {
        payload.extend(params.iter().map(|(key, value)| (key.clone(), value.clone())));
    }
    serde_json::Value::Object(payload).to_string()
}

/// Coordinates print the way a human wrote them: no trailing `.0`.
fn format_coord(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
