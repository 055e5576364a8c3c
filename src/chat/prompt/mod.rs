mod normalize;
mod prompt;
mod template;

pub use normalize::normalize;
pub use prompt::Prompt;
pub use template::TemplateVariables;
