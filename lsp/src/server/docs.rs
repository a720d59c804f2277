//! Markdown rendering for hover, completion and signature help.

use gremlin_core::catalog::{Kind, Parameter, Signature};

fn param_name(parameter: &Parameter) -> String {
    if parameter.multiple {
        format!("{}[]", parameter.name)
    } else {
        parameter.name.to_string()
    }
}

/// `has(propertyKey: string, value: any)`
pub(crate) fn signature_label(name: &str, signature: &Signature) -> String {
    let parameters = signature
        .parameters
        .iter()
        .map(|p| format!("{}: {}", param_name(p), p.kind))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{name}({parameters})")
}

/// Completion detail line, e.g. `(traversal) out(edgeLabels[])`.
pub(crate) fn completion_detail(namespace: &str, name: &str, signature: &Signature) -> String {
    let parameters = signature
        .parameters
        .iter()
        .map(param_name)
        .collect::<Vec<_>>()
        .join(", ");
    format!("({namespace}) {name}({parameters})")
}

/// Javadoc-flavoured overload documentation for signature help.
pub(crate) fn signature_markdown(signature: &Signature) -> String {
    let mut out = String::from(signature.description);

    for parameter in signature.parameters {
        out.push_str("\n\n*@param* `");
        out.push_str(&param_name(parameter));
        out.push_str(": ");
        out.push_str(parameter.kind.as_str());
        out.push('`');
        if let Some(description) = parameter.description {
            out.push_str(" — ");
            out.push_str(description);
        }
    }

    if let Some(returns) = signature.returns {
        out.push_str("\n\n*@returns* ");
        out.push_str(returns);
    }

    out.push_str("\n\n*@since* ");
    out.push_str(signature.since);

    out
}

/// Hover body for a resolved invocation. Steps show their return type,
/// predicates do not have one.
pub(crate) fn hover_markdown(label: &str, kind: Kind, signature: &Signature) -> String {
    let mut parameter_block = String::new();
    if !signature.parameters.is_empty() {
        parameter_block.push_str("\n**Parameter**\n");
        for parameter in signature.parameters {
            parameter_block.push_str("- ");
            parameter_block.push_str(&param_name(parameter));
            if let Some(description) = parameter.description {
                parameter_block.push_str(" *");
                parameter_block.push_str(description);
                parameter_block.push('*');
            }
            parameter_block.push('\n');
        }
        parameter_block.push('\n');
    }

    match (kind, signature.returns) {
        (Kind::Traversal, Some(returns)) => format!(
            "**{label}**\n\n{}\n{parameter_block}\n**Returns**\n\n{returns}\n",
            signature.description
        ),
        _ => format!("**{label}**\n\n{}\n{parameter_block}", signature.description),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gremlin_core::catalog;

    fn overload(name: &str, index: usize) -> &'static Signature {
        &catalog::step(name).unwrap()[index]
    }

    #[test]
    fn label_lists_typed_parameters() {
        let label = signature_label("has", overload("has", 1));
        assert_eq!(label, "has(propertyKey: string, value: any)");
    }

    #[test]
    fn variadic_parameters_get_a_bracket_suffix() {
        let label = signature_label("out", overload("out", 0));
        assert_eq!(label, "out(edgeLabels[]: string)");

        let detail = completion_detail("traversal", "out", overload("out", 0));
        assert_eq!(detail, "(traversal) out(edgeLabels[])");
    }

    #[test]
    fn overload_documentation_carries_javadoc_tags() {
        let markdown = signature_markdown(overload("has", 1));
        assert!(markdown.contains("*@param* `propertyKey: string`"));
        assert!(markdown.contains("*@param* `value: any`"));
        assert!(markdown.contains("*@returns* "));
        assert!(markdown.contains("*@since* "));
    }

    #[test]
    fn step_hover_shows_parameters_and_returns() {
        let markdown = hover_markdown("has", catalog::Kind::Traversal, overload("has", 1));
        assert!(markdown.starts_with("**has**\n\n"));
        assert!(markdown.contains("**Parameter**\n- propertyKey"));
        assert!(markdown.contains("**Returns**"));
    }

    #[test]
    fn predicate_hover_has_no_returns_section() {
        let gt = &catalog::predicate("gt").unwrap()[0];
        let markdown = hover_markdown("gt", catalog::Kind::Predicate, gt);
        assert!(markdown.starts_with("**gt**\n\n"));
        assert!(!markdown.contains("**Returns**"));
    }

    #[test]
    fn nullary_hover_omits_the_parameter_block() {
        let markdown = hover_markdown("count", catalog::Kind::Traversal, overload("count", 0));
        assert!(!markdown.contains("**Parameter**"));
    }
}
