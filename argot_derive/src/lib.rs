extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::DeriveRecord;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

/// Derive `FromValues` for a struct with named fields.
///
/// Each field is taken from the `Values` entry of the same name.
/// Use `#[argot(field = "name")]` to read a differently named entry, and `#[argot(default)]` to fall back to `Default::default()` when the entry is absent.
#[proc_macro_derive(FromValues, attributes(argot))]
pub fn from_values(input: TokenStream) -> TokenStream {
    let derive_input: syn::DeriveInput = match syn::parse(input) {
        Ok(derive_input) => derive_input,
        Err(error) => return error.to_compile_error().into(),
    };

    match DeriveRecord::try_from(derive_input) {
        Ok(record) => TokenStream2::from(record).into(),
        Err(error) => error.to_compile_error().into(),
    }
}
