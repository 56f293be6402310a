use crate::model::{DeriveField, DeriveRecord};
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

impl From<DeriveRecord> for TokenStream2 {
    fn from(value: DeriveRecord) -> Self {
        let DeriveRecord {
            struct_name,
            impl_generics,
            type_generics,
            where_clause,
            fields,
        } = value;
        let impl_generics = impl_generics.tokens;
        let type_generics = type_generics.tokens;
        let where_clause = where_clause.tokens;
        let assignments = fields.iter().map(field_assignment).collect::<Vec<_>>();

        quote! {
            impl #impl_generics ::argot::FromValues for #struct_name #type_generics #where_clause {
                fn from_values(mut values: ::argot::Values) -> ::std::result::Result<Self, ::argot::ValueError> {
                    ::std::result::Result::Ok(Self {
                        #( #assignments )*
                    })
                }
            }
        }
    }
}

fn field_assignment(field: &DeriveField) -> TokenStream2 {
    let field_name = &field.field_name;
    let field_type = &field.field_type.tokens;
    let key = &field.key;

    if field.default {
        quote! {
            #field_name: match values.take::<#field_type>(#key) {
                ::std::result::Result::Err(::argot::ValueError::Missing(_)) => ::std::default::Default::default(),
                other => other?,
            },
        }
    } else {
        quote! {
            #field_name: values.take::<#field_type>(#key)?,
        }
    }
}
