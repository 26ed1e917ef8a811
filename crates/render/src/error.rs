use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Template rendering error: {0}")]
    Template(#[from] handlebars::RenderError),
    #[error("Template syntax error: {0}")]
    TemplateSyntax(#[from] Box<handlebars::TemplateError>),
    #[error("Chart configuration could not be serialized: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<handlebars::TemplateError> for RenderError {
    fn from(err: handlebars::TemplateError) -> Self {
        RenderError::TemplateSyntax(Box::new(err))
    }
}
