//! The bracketed type-filter expression of the command language.
//!
//! A filter argument is a bracketed, comma-separated component list such as
//! `[Position, Velocity]`. The brackets are validated and stripped here; the
//! interior goes to the provider's expression compiler, which resolves each
//! token (numeric id or name) and unions the results into a type set.

use spyglass_foundation::{Error, Filter, Result};

use crate::provider::Provider;

/// Parses a bracketed component list into a filter.
///
/// # Errors
///
/// Returns a parse error when the text is not wrapped in `[` and `]`, and a
/// resolution error when the provider cannot resolve a component token.
pub fn parse_filter<P: Provider>(provider: &P, text: &str) -> Result<Filter> {
    let interior = text
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| Error::parse(format!("expected a bracketed component list, got '{text}'")))?;

    let include = provider.expr_to_type(interior)?;
    Ok(Filter::new(include))
}
