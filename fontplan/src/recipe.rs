//! The build plan: output paths mapped to ordered pipeline steps.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A build plan, keyed by output path in insertion order.
///
/// Inserting a path twice overwrites the earlier pipeline and keeps the
/// original key position; nothing is ever merged.
pub type Recipe = IndexMap<String, Vec<Step>>;

/// A named operation the build orchestrator executes.
///
/// This is a closed set: operations are interpreted downstream by name, so
/// each kind carries exactly the payload its operation consumes, and an
/// unknown operation name in configuration fails at deserialization rather
/// than at build time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "operation", rename_all = "camelCase")]
pub enum Operation {
    BuildVariable {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        args: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fontmake_args: Option<String>,
    },
    BuildStat {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        args: Option<String>,
    },
    Rename {
        args: String,
        name: String,
    },
    Fix {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        args: Option<String>,
    },
    Subspace {
        axes: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        args: Option<String>,
    },
    Hbsubset {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        args: Option<String>,
    },
    Exec {
        exe: String,
        args: String,
    },
}

impl Operation {
    /// The family rename applied ahead of subsetting and fixing.
    pub fn rename(name: impl Into<String>) -> Operation {
        Operation::Rename {
            args: "--just-family".to_string(),
            name: name.into(),
        }
    }
}

/// One step in an output's pipeline.
///
/// Order within a pipeline is significant and reproduced exactly as
/// assembled.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Step {
    /// Declares the source subsequent operations consume.
    Source { source: PathBuf },
    /// Runs against the built binary after the main pipeline.
    Postprocess {
        postprocess: String,
        exe: String,
        args: String,
    },
    Operation(Operation),
}

impl Step {
    pub fn source(path: impl Into<PathBuf>) -> Step {
        Step::Source {
            source: path.into(),
        }
    }

    pub fn postprocess_exec(exe: impl Into<String>, args: impl Into<String>) -> Step {
        Step::Postprocess {
            postprocess: "exec".to_string(),
            exe: exe.into(),
            args: args.into(),
        }
    }
}

impl From<Operation> for Step {
    fn from(value: Operation) -> Self {
        Step::Operation(value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Operation, Recipe, Step};

    #[test]
    fn source_step_yaml() {
        let step = Step::source("sources/MyFont.glyphs");
        assert_eq!(
            "source: sources/MyFont.glyphs\n",
            serde_yaml::to_string(&step).unwrap()
        );
    }

    #[test]
    fn operation_yaml_uses_wire_names() {
        let step: Step = Operation::BuildVariable {
            args: Some("--no-production-names".to_string()),
            fontmake_args: None,
        }
        .into();
        let yml = serde_yaml::to_string(&step).unwrap();
        assert!(yml.contains("operation: buildVariable"), "{yml}");
        assert!(!yml.contains("fontmake_args"), "{yml}");
    }

    #[test]
    fn subspace_without_args_round_trips() {
        let yml = "operation: subspace\naxes: wght=700\n";
        let step: Step = serde_yaml::from_str(yml).unwrap();
        assert_eq!(
            Step::Operation(Operation::Subspace {
                axes: "wght=700".to_string(),
                args: None,
            }),
            step
        );
        assert_eq!(step, serde_yaml::from_str(&serde_yaml::to_string(&step).unwrap()).unwrap());
    }

    #[test]
    fn postprocess_step_shape() {
        let step = Step::postprocess_exec("python3 -m paintcompiler", "-o out.ttf out.ttf");
        let yml = serde_yaml::to_string(&step).unwrap();
        assert!(yml.contains("postprocess: exec"), "{yml}");
        assert_eq!(step, serde_yaml::from_str(&yml).unwrap());
    }

    #[test]
    fn unknown_operation_fails_to_parse() {
        let yml = "operation: transmogrify\nargs: --hard\n";
        assert!(serde_yaml::from_str::<Step>(yml).is_err());
    }

    #[test]
    fn recipe_collision_overwrites_and_keeps_position() {
        let mut recipe = Recipe::new();
        recipe.insert("a.ttf".to_string(), vec![Step::source("one.glyphs")]);
        recipe.insert("b.ttf".to_string(), vec![Step::source("two.glyphs")]);
        recipe.insert("a.ttf".to_string(), vec![Step::source("three.glyphs")]);

        assert_eq!(2, recipe.len());
        let keys: Vec<_> = recipe.keys().map(String::as_str).collect();
        assert_eq!(vec!["a.ttf", "b.ttf"], keys);
        assert_eq!(
            &vec![Step::source("three.glyphs")],
            recipe.get("a.ttf").unwrap()
        );
    }
}
