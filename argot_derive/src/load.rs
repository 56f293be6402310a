mod attribute;
mod record;

fn unknown_error(field_name: &syn::Ident, attribute: impl Into<String>) -> syn::Error {
    syn::Error::new(
        field_name.span(),
        format!(
            "Invalid - unknown attribute `#[argot({})]` on field `{field_name}`.",
            attribute.into(),
        ),
    )
}

fn repeated_error(field_name: &syn::Ident, attribute: impl Into<String>) -> syn::Error {
    syn::Error::new(
        field_name.span(),
        format!(
            "Invalid - attribute `{}` cannot be repeated on field `{field_name}`.",
            attribute.into(),
        ),
    )
}
