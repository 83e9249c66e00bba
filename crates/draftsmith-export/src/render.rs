use draftsmith_core::models::output::ParsedOutput;
use draftsmith_core::storage_keys;
use tera::{Context, Tera};

use crate::error::ExportError;
use crate::formats::ExportFile;

const BUNDLE_TEMPLATE_NAME: &str = "bundle.md";

/// The three sections under the headings the output parser recognizes.
/// Template names ending in `.md` are not autoescaped.
const BUNDLE_TEMPLATE: &str = "\
## Blog Draft
{{ blog_draft }}

## LinkedIn Post
{{ linkedin_post }}

## Footnotes / Sources
{{ footnotes }}
";

/// Render all sections back into one markdown document.
///
/// Parsing the result gives back `parsed`, provided each section is already
/// trimmed (which parser output always is).
pub fn render_bundle(parsed: &ParsedOutput) -> Result<String, ExportError> {
    render_template(BUNDLE_TEMPLATE_NAME, BUNDLE_TEMPLATE, parsed)
}

/// Render a Tera template with a ParsedOutput as context.
///
/// The output fields (`blog_draft`, `linkedin_post`, `footnotes`) become
/// the template variables.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    parsed: &ParsedOutput,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(parsed)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// A single section as a markdown download, named after its title.
pub fn section_markdown(title: &str, content: &str) -> ExportFile {
    ExportFile {
        filename: storage_keys::section_markdown(title),
        bytes: content.as_bytes().to_vec(),
    }
}
