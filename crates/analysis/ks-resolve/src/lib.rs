//! Variable reference resolution
//!
//! Finds every property declared in a file and, for each one, the name
//! references that denote that declaration rather than another entity with
//! the same name. The analysis is purely syntactic and conservative: it
//! is meant for lint rules, not as a compiler-grade symbol table.
//!
//! # Architecture
//!
//! - **Ordering**: line-based "comes after" comparisons
//! - **Scopes**: the block, class body or program a declaration is visible in
//! - **Search**: collects declarations and their candidate references per
//!   kind of scope
//! - **Shadow filter**: drops references to same-named fields, nested
//!   redeclarations and lambda or function parameters
//!
//! # Usage
//!
//! ```rust,ignore
//! use ks_resolve::{SearchTarget, VariablesSearch};
//!
//! let search = VariablesSearch::new(&tree, tree.root(), SearchTarget::Usages, |declaration| {
//!     declaration.is_local()
//! });
//! for (declaration, references) in search.collect_variables()? {
//!     // act on the reference list
//! }
//! ```

pub mod declaration;
pub mod error;
pub mod ordering;
pub mod scope;
pub mod search;
pub mod shadow;

#[cfg(test)]
mod sketch;

pub use declaration::{Declaration, Locality};
pub use error::ResolveError;
pub use ordering::comes_after;
pub use scope::{
    DeclarationScope, declaration_scope, find_local_declaration, in_nested_scope_of,
    is_containing_scope, is_shadow_of, is_supported_scope,
};
pub use search::{ReferenceMap, SearchTarget, VariablesSearch, any_declaration, is_assignment_target};
pub use shadow::{is_reference_to_field_of_object, is_reference_to_other_variable};
