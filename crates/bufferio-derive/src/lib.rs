//! `#[derive(FixedLayout)]` for bufferio.
//!
//! The generated implementation encodes and decodes every field in
//! declaration order with no padding, so the layout of
//!
//! ```ignore
//! #[derive(FixedLayout)]
//! struct Header {
//!     magic: u32,
//!     version: u16,
//!     flags: [u8; 2],
//! }
//! ```
//!
//! is exactly `magic ++ version ++ flags` in the requested byte order. The
//! derive also implements `FixedSize` as the sum of the field sizes.
//!
//! Every field type must implement `FixedSize`. A `String`, `usize`, `Vec` or
//! `Box` field is a compile error at the field's span, since its encoded
//! length is not known from the type alone.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned};
use syn::{
    parse_macro_input, parse_quote, spanned::Spanned, Data, DeriveInput, Error, Fields, Index,
};

#[proc_macro_derive(FixedLayout)]
pub fn derive_fixed_layout(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn expand(mut input: DeriveInput) -> Result<TokenStream2, Error> {
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(data) => {
            return Err(Error::new(
                data.enum_token.span(),
                "FixedLayout can only be derived for structs",
            ))
        }
        Data::Union(data) => {
            return Err(Error::new(
                data.union_token.span(),
                "FixedLayout can only be derived for structs",
            ))
        }
    };

    let members: Vec<TokenStream2> = match fields {
        Fields::Named(named) => named
            .named
            .iter()
            .map(|f| {
                let ident = &f.ident;
                quote!(#ident)
            })
            .collect(),
        Fields::Unnamed(unnamed) => (0..unnamed.unnamed.len())
            .map(|i| {
                let index = Index::from(i);
                quote!(#index)
            })
            .collect(),
        Fields::Unit => Vec::new(),
    };
    let spans: Vec<_> = fields.iter().map(|f| f.ty.span()).collect();

    let sizes = fields.iter().map(|f| {
        let ty = &f.ty;
        quote_spanned!(ty.span()=> + <#ty as ::bufferio::FixedSize>::SIZE)
    });
    let encode = members.iter().zip(&spans).map(|(m, span)| {
        quote_spanned!(*span=> ::bufferio::FixedLayout::encode(&self.#m, order, out);)
    });
    let decode = members.iter().zip(&spans).map(|(m, span)| {
        quote_spanned!(*span=> ::bufferio::FixedLayout::decode(&mut self.#m, order, src)?;)
    });

    for param in input.generics.type_params_mut() {
        param.bounds.push(parse_quote!(::bufferio::FixedSize));
    }
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::bufferio::FixedSize for #name #ty_generics #where_clause {
            const SIZE: usize = 0 #(#sizes)*;
        }

        #[automatically_derived]
        impl #impl_generics ::bufferio::FixedLayout for #name #ty_generics #where_clause {
            fn encoded_len(&self) -> usize {
                <Self as ::bufferio::FixedSize>::SIZE
            }

            #[allow(unused_variables)]
            fn encode(&self, order: ::bufferio::ByteOrder, out: &mut ::std::vec::Vec<u8>) {
                #(#encode)*
            }

            #[allow(unused_variables)]
            fn decode(
                &mut self,
                order: ::bufferio::ByteOrder,
                src: &mut ::bufferio::Reader<'_>,
            ) -> ::core::result::Result<(), ::bufferio::EncodingError> {
                #(#decode)*
                ::core::result::Result::Ok(())
            }
        }
    })
}
