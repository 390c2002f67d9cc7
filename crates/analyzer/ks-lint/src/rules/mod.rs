//! Built-in rules

mod inline_class;
mod shadowed_variable;
mod unused_variable;
mod var_could_be_val;

pub use inline_class::InlineClassRule;
pub use shadowed_variable::ShadowedVariableRule;
pub use unused_variable::UnusedVariableRule;
pub use var_could_be_val::VarCouldBeValRule;
