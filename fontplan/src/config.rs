//! User configuration: recognized options, defaults, one-shot resolution.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use fontmodel::Source;
use serde::{Deserialize, Serialize};

use crate::{error::Error, recipe::Step};

fn default_true() -> bool {
    true
}

fn default_output_dir() -> String {
    "fonts".to_string()
}

fn default_vf_dir() -> String {
    "$outputDir/variable".to_string()
}

fn default_tt_dir() -> String {
    "$outputDir/ttf".to_string()
}

fn default_ot_dir() -> String {
    "$outputDir/otf".to_string()
}

fn default_woff_dir() -> String {
    "$outputDir/webfonts".to_string()
}

fn default_name_budget() -> usize {
    32
}

fn default_guideline_generator() -> String {
    "python3 -m pendot".to_string()
}

fn default_color_compiler() -> String {
    "python3 -m paintcompiler".to_string()
}

/// What to do when no amount of shortening gets a family name under budget.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NameOverflow {
    /// Log a warning and keep the over-budget name.
    #[default]
    Warn,
    /// Abort the planning pass.
    Fail,
}

/// A brand variant as written in configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VariantSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Recognized configuration options.
///
/// Field names mirror the configuration file keys. Unrecognized keys with
/// string values collect in [`extra`](Config::extra) and are reachable from
/// path templates; they mean nothing anywhere else.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub sources: Vec<PathBuf>,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_vf_dir")]
    pub vf_dir: String,
    #[serde(default = "default_tt_dir")]
    pub tt_dir: String,
    #[serde(default = "default_ot_dir")]
    pub ot_dir: String,
    #[serde(default = "default_woff_dir")]
    pub woff_dir: String,
    #[serde(default)]
    pub do_guidelines: bool,
    #[serde(default = "default_true")]
    pub build_variable: bool,
    #[serde(default = "default_true")]
    pub build_static: bool,
    #[serde(default = "default_true")]
    pub build_color_variable: bool,
    #[serde(default = "default_true")]
    pub include_source_fixes: bool,
    #[serde(default)]
    pub variants: Vec<VariantSpec>,
    /// STAT axis definitions, written to a file during resolution and
    /// referenced by the buildStat step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stat: Option<serde_yaml::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_family_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_template: Option<String>,
    /// Parameters for the guideline generator (overlap, thicknesses, ...),
    /// merged into its `--config` payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guidelines: Option<serde_json::Map<String, serde_json::Value>>,
    /// Extra arguments for the variable-font compiler.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fontmake_args: Option<String>,
    #[serde(default = "default_name_budget")]
    pub family_name_budget: usize,
    #[serde(default)]
    pub name_overflow: NameOverflow,
    #[serde(default = "default_guideline_generator")]
    pub guideline_generator: String,
    #[serde(default = "default_color_compiler")]
    pub color_compiler: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Config, Error> {
        let yml = fs::read_to_string(path).map_err(|source| Error::FileIo {
            path: path.to_owned(),
            source,
        })?;
        serde_yaml::from_str(&yml).map_err(Into::into)
    }

    /// One-shot resolution: substitute `$outputDir` into the output
    /// directories, classify sources, and write the STAT definition file
    /// into `build_dir` if one is configured.
    ///
    /// The resolved configuration is immutable for the rest of the pass.
    pub fn resolve(mut self, build_dir: &Path) -> Result<ResolvedConfig, Error> {
        for dir in [
            &mut self.vf_dir,
            &mut self.tt_dir,
            &mut self.ot_dir,
            &mut self.woff_dir,
        ] {
            *dir = dir.replace("$outputDir", &self.output_dir);
        }

        let sources = self
            .sources
            .iter()
            .map(Source::new)
            .collect::<Result<Vec<_>, _>>()?;

        let stat_file = match &self.stat {
            Some(stat) => {
                let path = build_dir.join("stat.yaml");
                fs::write(&path, serde_yaml::to_string(stat)?).map_err(|source| {
                    Error::FileIo {
                        path: path.clone(),
                        source,
                    }
                })?;
                Some(path)
            }
            None => None,
        };

        Ok(ResolvedConfig {
            config: self,
            sources,
            stat_file,
        })
    }
}

/// Configuration after [`Config::resolve`].
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: Config,
    pub sources: Vec<Source>,
    pub stat_file: Option<PathBuf>,
}
