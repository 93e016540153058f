//! Output-path templates.
//!
//! `staticTemplate` lets a configuration place static output directories
//! per variant/format/guideline combination, e.g.
//! `proofs/%{variant}/%{format}`.

use regex::Regex;

use crate::{config::ResolvedConfig, error::Error, naming::GUIDELINE_LABEL, variants::Variant};

/// The combination a template is being expanded for.
pub struct TemplateContext<'a> {
    pub variant: Option<&'a Variant>,
    pub format: &'a str,
    pub guidelines: bool,
}

/// Substitute `%{token}` placeholders in a user-supplied path template.
///
/// Known tokens (`variant`, `format`, `guidelines`) are matched explicitly,
/// then the string-valued config options, then the config's extra keys.
/// Unknown tokens fail rather than expanding to the empty string.
pub fn resolve(
    template: &str,
    ctx: &TemplateContext,
    config: &ResolvedConfig,
) -> Result<String, Error> {
    let placeholder = Regex::new(r"%\{([^}]+)\}").unwrap();
    let mut resolved = String::with_capacity(template.len());
    let mut last = 0;
    for caps in placeholder.captures_iter(template) {
        let whole = caps.get(0).unwrap();
        resolved.push_str(&template[last..whole.start()]);
        resolved.push_str(&expand(&caps[1], ctx, config)?);
        last = whole.end();
    }
    resolved.push_str(&template[last..]);
    Ok(resolved)
}

fn expand(token: &str, ctx: &TemplateContext, config: &ResolvedConfig) -> Result<String, Error> {
    let options = &config.config;
    match token {
        "variant" => Ok(ctx
            .variant
            .map(|variant| variant.name.clone())
            .unwrap_or_default()),
        "format" => Ok(ctx.format.to_string()),
        "guidelines" => Ok(if ctx.guidelines {
            GUIDELINE_LABEL.to_string()
        } else {
            String::new()
        }),
        // String-valued config options, then whatever the config carried
        // beyond the recognized set.
        "outputDir" => Ok(options.output_dir.clone()),
        "vfDir" => Ok(options.vf_dir.clone()),
        "ttDir" => Ok(options.tt_dir.clone()),
        "otDir" => Ok(options.ot_dir.clone()),
        "woffDir" => Ok(options.woff_dir.clone()),
        "shortFamilyName" => options
            .short_family_name
            .clone()
            .ok_or_else(|| Error::UnknownPlaceholder(token.to_string())),
        _ => options
            .extra
            .get(token)
            .cloned()
            .ok_or_else(|| Error::UnknownPlaceholder(token.to_string())),
    }
}
