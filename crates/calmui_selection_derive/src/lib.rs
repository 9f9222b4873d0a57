use proc_macro::TokenStream;
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use proc_macro_crate::{FoundCrate, crate_name};
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

#[proc_macro_derive(AnimationToken)]
pub fn derive_animation_token(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(
            input.ident,
            "AnimationToken derive currently supports only non-generic enums",
        )
        .to_compile_error()
        .into();
    }

    let token_ident = input.ident;
    let variants = match input.data {
        Data::Enum(data) => data.variants,
        _ => {
            return syn::Error::new_spanned(
                token_ident,
                "AnimationToken derive is only supported on enums",
            )
            .to_compile_error()
            .into();
        }
    };

    if variants.is_empty() {
        return syn::Error::new_spanned(
            token_ident,
            "AnimationToken derive requires at least one variant",
        )
        .to_compile_error()
        .into();
    }

    let mut all_values = Vec::new();
    for variant in variants {
        if !matches!(variant.fields, Fields::Unit) {
            return syn::Error::new_spanned(
                variant.ident,
                "AnimationToken derive requires fieldless variants",
            )
            .to_compile_error()
            .into();
        }
        let variant_ident = variant.ident;
        all_values.push(quote!(#token_ident::#variant_ident));
    }

    let selection = calmui_selection_path();
    quote! {
        impl #selection::view_model::AnimationToken for #token_ident {
            const ALL: &'static [Self] = &[#(#all_values),*];
        }
    }
    .into()
}

fn calmui_selection_path() -> TokenStream2 {
    match crate_name("calmui_selection") {
        Ok(FoundCrate::Name(name)) => {
            let ident = Ident::new(&name, Span::call_site());
            quote!(::#ident)
        }
        Ok(FoundCrate::Itself) => quote!(crate),
        Err(_) => quote!(::calmui_selection),
    }
}
