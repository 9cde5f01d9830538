use crate::error::Result;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Adds a template to the renderer's template collection.
    ///
    /// Adding a template under an existing name replaces it.
    ///
    /// # Arguments
    /// * `name` - Name to identify the template
    /// * `template` - Template content as string
    fn add_template(&mut self, name: &str, template: &str) -> Result<()>;

    /// Renders a template previously registered with `add_template`.
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template, or an error if no template has that name
    fn render_named(&self, name: &str, context: &serde_json::Value) -> Result<String>;
}
