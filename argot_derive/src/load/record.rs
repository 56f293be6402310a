use crate::load::{repeated_error, unknown_error};
use crate::model::{DeriveField, DeriveRecord, DeriveValue, IntermediateAttributes};
use quote::ToTokens;

const ATTRIBUTE: &str = "argot";

impl TryFrom<syn::DeriveInput> for DeriveRecord {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let named = match &value.data {
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Named(fields),
                ..
            }) => &fields.named,
            _ => {
                return Err(syn::Error::new(
                    value.ident.span(),
                    "Invalid - FromValues requires a struct with named fields.",
                ));
            }
        };
        let fields = named
            .iter()
            .map(DeriveField::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let (impl_generics, type_generics, where_clause) = value.generics.split_for_impl();

        Ok(DeriveRecord {
            struct_name: value.ident.clone(),
            impl_generics: DeriveValue {
                tokens: impl_generics.to_token_stream(),
            },
            type_generics: DeriveValue {
                tokens: type_generics.to_token_stream(),
            },
            where_clause: DeriveValue {
                tokens: where_clause.to_token_stream(),
            },
            fields,
        })
    }
}

impl TryFrom<&syn::Field> for DeriveField {
    type Error = syn::Error;

    fn try_from(value: &syn::Field) -> Result<Self, Self::Error> {
        let field_name = value
            .ident
            .clone()
            .expect("internal error - named fields must have an ident");
        let mut attributes = IntermediateAttributes::default();

        for attribute in &value.attrs {
            if attribute.path().is_ident(ATTRIBUTE) {
                let current = IntermediateAttributes::try_from(attribute)?;
                attributes.singletons.extend(current.singletons);

                for (key, values) in current.pairs {
                    attributes.pairs.entry(key).or_default().extend(values);
                }
            }
        }

        if let Some(singleton) = attributes
            .singletons
            .iter()
            .find(|singleton| singleton.as_str() != "default")
        {
            return Err(unknown_error(&field_name, singleton));
        }

        if let Some(key) = attributes.pairs.keys().find(|key| key.as_str() != "field") {
            return Err(unknown_error(&field_name, format!("{key} = ..")));
        }

        let key = match attributes.pairs.get("field").map(Vec::as_slice) {
            None => field_name.to_string(),
            Some([value]) => syn::parse2::<syn::LitStr>(value.tokens.clone())
                .map_err(|_| {
                    syn::Error::new(
                        field_name.span(),
                        format!(
                            "Invalid - attribute `field` on field `{field_name}` must be a string literal."
                        ),
                    )
                })?
                .value(),
            Some(_) => return Err(repeated_error(&field_name, "field")),
        };

        Ok(DeriveField {
            key,
            field_type: DeriveValue {
                tokens: value.ty.to_token_stream(),
            },
            default: attributes.singletons.contains("default"),
            field_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::Span;
    use quote::quote;
    use rstest::rstest;

    #[test]
    fn construct_record() {
        // Setup
        let input: syn::DeriveInput = syn::parse_str(
            r#"
            struct Args {
                verbose: bool,
                #[argot(field = "out")]
                output: Option<String>,
                #[argot(default)]
                items: Vec<u32>,
            }
            "#,
        )
        .unwrap();

        // Execute
        let record = DeriveRecord::try_from(input).unwrap();

        // Verify
        assert_eq!(
            record,
            DeriveRecord {
                struct_name: syn::Ident::new("Args", Span::call_site()),
                impl_generics: DeriveValue {
                    tokens: quote! {},
                },
                type_generics: DeriveValue {
                    tokens: quote! {},
                },
                where_clause: DeriveValue {
                    tokens: quote! {},
                },
                fields: vec![
                    DeriveField {
                        field_name: syn::Ident::new("verbose", Span::call_site()),
                        key: "verbose".to_string(),
                        field_type: DeriveValue {
                            tokens: quote! { bool },
                        },
                        default: false,
                    },
                    DeriveField {
                        field_name: syn::Ident::new("output", Span::call_site()),
                        key: "out".to_string(),
                        field_type: DeriveValue {
                            tokens: quote! { Option<String> },
                        },
                        default: false,
                    },
                    DeriveField {
                        field_name: syn::Ident::new("items", Span::call_site()),
                        key: "items".to_string(),
                        field_type: DeriveValue {
                            tokens: quote! { Vec<u32> },
                        },
                        default: true,
                    },
                ],
            }
        );
    }

    #[test]
    fn construct_record_generics() {
        // Setup
        let input: syn::DeriveInput = syn::parse_str(
            r#"
            struct Args<T> where T: Clone {
                value: T,
            }
            "#,
        )
        .unwrap();

        // Execute
        let record = DeriveRecord::try_from(input).unwrap();

        // Verify
        assert_eq!(record.impl_generics.tokens.to_string(), "< T >");
        assert_eq!(record.type_generics.tokens.to_string(), "< T >");
        assert_eq!(record.where_clause.tokens.to_string(), "where T : Clone");
    }

    #[rstest]
    #[case("struct Args;")]
    #[case("struct Args(u32);")]
    #[case("enum Args { A }")]
    fn construct_record_unnamed(#[case] source: &str) {
        // Setup
        let input: syn::DeriveInput = syn::parse_str(source).unwrap();

        // Execute
        let error = DeriveRecord::try_from(input).unwrap_err();

        // Verify
        assert_eq!(
            error.to_string(),
            "Invalid - FromValues requires a struct with named fields."
        );
    }

    #[rstest]
    #[case(
        r#"struct Args { #[argot(short = 'a')] a: bool }"#,
        "Invalid - unknown attribute `#[argot(short = ..)]` on field `a`."
    )]
    #[case(
        r#"struct Args { #[argot(positional)] a: bool }"#,
        "Invalid - unknown attribute `#[argot(positional)]` on field `a`."
    )]
    #[case(
        r#"struct Args { #[argot(field = "x", field = "y")] a: bool }"#,
        "Invalid - attribute `field` cannot be repeated on field `a`."
    )]
    #[case(
        r#"struct Args { #[argot(field = "x")] #[argot(field = "y")] a: bool }"#,
        "Invalid - attribute `field` cannot be repeated on field `a`."
    )]
    #[case(
        r#"struct Args { #[argot(field = 1)] a: bool }"#,
        "Invalid - attribute `field` on field `a` must be a string literal."
    )]
    fn construct_field_invalid(#[case] source: &str, #[case] expected: &str) {
        // Setup
        let input: syn::DeriveInput = syn::parse_str(source).unwrap();

        // Execute
        let error = DeriveRecord::try_from(input).unwrap_err();

        // Verify
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn construct_field_ignores_other_attributes() {
        // Setup
        let input: syn::DeriveInput = syn::parse_str(
            r#"
            struct Args {
                #[allow(dead_code)]
                #[argot(field = "x")]
                a: bool,
            }
            "#,
        )
        .unwrap();

        // Execute
        let record = DeriveRecord::try_from(input).unwrap();

        // Verify
        assert_eq!(record.fields[0].key, "x");
    }
}
