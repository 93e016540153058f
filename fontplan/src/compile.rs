//! Recipe assembly: enumerate every output the configuration asks for.
//!
//! One linear pass: apex variable fonts, the color apex, variant variable
//! fonts, then statics for the apex and every variant. The recipe map is
//! populated monotonically; nothing is revisited.

use std::collections::HashSet;

use fontmodel::{FontModel, Instance, Source, SourceKind};
use log::{debug, trace};
use write_fonts::types::Tag;

use crate::{
    config::ResolvedConfig,
    error::Error,
    naming,
    recipe::{Operation, Recipe, Step},
    steps,
    template::{self, TemplateContext},
    variants::{self, Variant},
};

/// Tag of the guideline-opacity axis the color-mode generator adds.
const GUIDELINE_OPACITY_AXIS: Tag = Tag::new(b"GDLO");

/// Compile one configuration plus font model into a build plan.
///
/// Pure and synchronous; either a complete recipe comes back or the first
/// error aborts the whole pass.
pub fn compile(config: &ResolvedConfig, model: &FontModel) -> Result<Recipe, Error> {
    let source = match config.sources.as_slice() {
        [source] => source,
        [] => return Err(Error::NoSources),
        sources => return Err(Error::UnsupportedMultiSource(sources.len())),
    };
    let mut compiler = Compiler {
        config,
        model,
        source,
        variants: variants::registry(&config.config.variants),
        recipe: Recipe::new(),
    };
    compiler.build_all_variables()?;
    compiler.build_all_statics()?;
    Ok(compiler.recipe)
}

struct Compiler<'a> {
    config: &'a ResolvedConfig,
    model: &'a FontModel,
    source: &'a Source,
    variants: Vec<Variant>,
    recipe: Recipe,
}

impl Compiler<'_> {
    /// Guideline flag values to enumerate.
    fn guideline_flags(&self) -> &'static [bool] {
        if self.config.config.do_guidelines {
            &[false, true]
        } else {
            &[false]
        }
    }

    /// A variable font needs at least two design-space positions to span.
    fn supports_variable(&self) -> bool {
        self.source.kind == SourceKind::MultiMaster && self.model.positions >= 2
    }

    fn build_all_variables(&mut self) -> Result<(), Error> {
        if !self.config.config.build_variable {
            return Ok(());
        }

        if self.supports_variable() {
            for &guidelines in self.guideline_flags() {
                let target = self.apex_vf_path(guidelines)?;
                let steps =
                    steps::variable_steps(self.config, self.model, self.source, guidelines)?;
                self.insert(target, steps);
            }
        } else {
            debug!(
                "{} spans fewer than two positions, not building an apex variable font",
                self.source.path.display()
            );
        }

        if self.config.config.build_color_variable {
            self.build_color_apex()?;
        }

        let variants = self.variants.clone();
        for variant in &variants {
            for &guidelines in self.guideline_flags() {
                self.build_variant_vf(variant, guidelines)?;
            }
        }
        Ok(())
    }

    fn build_all_statics(&mut self) -> Result<(), Error> {
        if !self.config.config.build_static {
            return Ok(());
        }
        let model = self.model;

        for &guidelines in self.guideline_flags() {
            for instance in &model.instances {
                self.build_a_static(instance, None, guidelines)?;
            }
        }

        let variants = self.variants.clone();
        for variant in &variants {
            for &guidelines in self.guideline_flags() {
                for instance in &model.instances {
                    self.build_a_static(instance, Some(variant), guidelines)?;
                }
            }
        }
        Ok(())
    }

    /// `<vfDir>/<Family>[<sorted tags>].ttf`
    fn apex_vf_path(&self, guidelines: bool) -> Result<String, Error> {
        let mut tags: Vec<String> = self.model.axis_tags().map(|tag| tag.to_string()).collect();
        tags.sort();
        let family = naming::abbreviate(self.config, self.model, None, guidelines)?;
        Ok(format!(
            "{}/{}[{}].ttf",
            self.config.config.vf_dir,
            family.file_stem(),
            tags.join(",")
        ))
    }

    /// One variable font per variant and guideline flag, with pinned axes
    /// dropped from the file name's axis list.
    fn build_variant_vf(&mut self, variant: &Variant, guidelines: bool) -> Result<(), Error> {
        let family = naming::abbreviate(self.config, self.model, Some(variant), guidelines)?;
        let tags: Vec<String> = self
            .model
            .axis_tags()
            .filter(|tag| !variant.pins.contains(tag))
            .map(|tag| tag.to_string())
            .collect();
        let italic_part = if variant.italic { "-Italic" } else { "" };
        let target = format!(
            "{}/{}{}[{}].ttf",
            self.config.config.vf_dir,
            family.file_stem(),
            italic_part,
            tags.join(",")
        );

        let mut steps = steps::variable_steps(self.config, self.model, self.source, guidelines)?;
        steps.push(Operation::rename(family.name).into());
        // Structural copy; see static_extension for why sharing is off limits.
        steps.extend(variant.steps.iter().cloned());
        steps.push(steps::fix(self.config));

        self.insert(target, steps);
        Ok(())
    }

    /// The color apex: a variable font whose guideline overlay lives in a
    /// paint table rather than in outline geometry, driven by an extra
    /// opacity axis. The paint graph is grafted on as a postprocess.
    fn build_color_apex(&mut self) -> Result<(), Error> {
        let variant = Variant::color();
        let family = naming::abbreviate(self.config, self.model, Some(&variant), false)?;
        let mut tags: Vec<String> = self.model.axis_tags().map(|tag| tag.to_string()).collect();
        tags.push(GUIDELINE_OPACITY_AXIS.to_string());
        let target = format!(
            "{}/{}[{}].ttf",
            self.config.config.vf_dir,
            family.file_stem(),
            tags.join(",")
        );

        let generated = self.source.sibling("colr-guidelines");
        let steps = vec![
            Step::source(&self.source.path),
            Operation::Exec {
                exe: self.config.config.guideline_generator.clone(),
                args: format!(
                    "--color -o {} {}",
                    generated.display(),
                    self.source.path.display()
                ),
            }
            .into(),
            Step::source(generated),
            Operation::BuildVariable {
                args: None,
                fontmake_args: Some(steps::compiler_args(self.config)),
            }
            .into(),
            steps::build_stat(self.config),
            Operation::rename(family.name).into(),
            Step::postprocess_exec(
                self.config.config.color_compiler.clone(),
                format!("-o {target} {target}"),
            ),
        ];

        self.insert(target, steps);
        Ok(())
    }

    fn build_a_static(
        &mut self,
        instance: &Instance,
        variant: Option<&Variant>,
        guidelines: bool,
    ) -> Result<(), Error> {
        let format = "ttf";
        let family = naming::abbreviate(self.config, self.model, variant, guidelines)?;
        let filename = format!(
            "{}-{}",
            family.file_stem(),
            instance.style_name.replace(' ', "")
        );
        let outdir = match &self.config.config.static_template {
            Some(static_template) => template::resolve(
                static_template,
                &TemplateContext {
                    variant,
                    format,
                    guidelines,
                },
                self.config,
            )?,
            None => self.config.config.tt_dir.clone(),
        };
        let target = format!("{outdir}/{filename}.{format}");

        let no_pins = HashSet::new();
        let pins = variant.map(|variant| &variant.pins).unwrap_or(&no_pins);
        let location = steps::location_string(self.model, instance, pins);
        if location.is_empty() {
            trace!("skipping {target}: location is empty after pinning");
            return Ok(());
        }

        // Italic membership is judged by file name. Fragile (a style named
        // e.g. "Italianate" would trip it) but matches what shipped.
        if let Some(variant) = variant {
            if filename.contains("Italic") != variant.italic {
                trace!("skipping {target}: italic mismatch");
                return Ok(());
            }
        }

        let mut steps = steps::variable_steps(self.config, self.model, self.source, guidelines)?;
        steps.extend(steps::static_extension(
            self.config,
            variant,
            family.name,
            &location,
        ));
        self.insert(target, steps);
        Ok(())
    }

    fn insert(&mut self, target: String, steps: Vec<Step>) {
        debug!("plan {target}");
        if self.recipe.insert(target.clone(), steps).is_some() {
            debug!("replacing earlier plan for {target}");
        }
    }
}
