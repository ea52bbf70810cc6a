use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, Field, Fields};

/// Implements `conduit_di::Build` by building every field from the
/// provider. Fields marked `#[state]` are initialized with their `Default`
/// value instead. Built values are cached by the provider.
#[proc_macro_derive(Build, attributes(state))]
pub fn derive_build(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let Data::Struct(data) = &input.data else {
        return syn::Error::new_spanned(&input.ident, "Build can only be derived for structs")
            .to_compile_error()
            .into();
    };

    let ident = &input.ident;
    let (_, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut impl_generics = input.generics.clone();
    impl_generics
        .params
        .push(parse_quote!(__P: ::conduit_di::Provider));
    let (impl_generics, _, _) = impl_generics.split_for_impl();

    let mut predicates = where_clause
        .map(|w| w.predicates.iter().cloned().collect::<Vec<_>>())
        .unwrap_or_default();
    predicates.push(parse_quote!(Self: ::core::clone::Clone + 'static));
    predicates.extend(
        data.fields
            .iter()
            .filter(|f| !is_state(f))
            .map(|Field { ty, .. }| -> syn::WherePredicate {
                parse_quote!(#ty: ::conduit_di::Build<__P>)
            }),
    );

    let construct = construct(&data.fields);
    let provider = if data.fields.iter().all(is_state) {
        quote!(_)
    } else {
        quote!(provider)
    };

    quote! {
        impl #impl_generics ::conduit_di::Build<__P> for #ident #ty_generics
        where
            #(#predicates,)*
        {
            fn build(provider: &mut __P) -> Self {
                ::conduit_di::cached(provider, |#provider| #construct)
            }
        }
    }
    .into()
}

fn is_state(field: &Field) -> bool {
    field.attrs.iter().any(|a| a.path().is_ident("state"))
}

fn init(field: &Field) -> proc_macro2::TokenStream {
    if is_state(field) {
        quote!(::core::default::Default::default())
    } else {
        quote!(::conduit_di::Build::build(provider))
    }
}

fn construct(fields: &Fields) -> proc_macro2::TokenStream {
    match fields {
        Fields::Named(named) => {
            let fields = named.named.iter().map(|f| {
                let ident = &f.ident;
                let init = init(f);
                quote!(#ident: #init)
            });
            quote!(Self { #(#fields),* })
        }
        Fields::Unnamed(unnamed) => {
            let fields = unnamed.unnamed.iter().map(init);
            quote!(Self(#(#fields),*))
        }
        Fields::Unit => quote!(Self),
    }
}
