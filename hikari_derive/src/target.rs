use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, Data, DeriveInput, Fields, GenericParam, Generics, Ident, WherePredicate};

/// A math type the macros generate code for
///
/// These are always structs with named scalar components and a single type
/// parameter for the scalar, e.g. `struct Vec3<T> { x: T, y: T, z: T }`.
#[derive(Clone)]
pub struct Target {
    pub ident: Ident,
    /// The scalar type parameter.
    pub param: Ident,
    pub fields: Vec<Ident>,
    generics: Generics,
}

impl Target {
    pub fn parse(item: &DeriveInput) -> syn::Result<Self> {
        let fields = match &item.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named
                    .named
                    .iter()
                    .filter_map(|f| f.ident.clone())
                    .collect(),
                _ => {
                    return Err(syn::Error::new_spanned(
                        &item.ident,
                        "Expected a struct with named fields",
                    ))
                }
            },
            _ => {
                return Err(syn::Error::new_spanned(
                    &item.ident,
                    "Expected a struct with named fields",
                ))
            }
        };

        let mut param = None;
        for p in &item.generics.params {
            match p {
                GenericParam::Type(t) if param.is_none() => param = Some(t.ident.clone()),
                GenericParam::Type(t) => {
                    return Err(syn::Error::new_spanned(t, "Expected a single type param"))
                }
                GenericParam::Lifetime(l) => {
                    return Err(syn::Error::new_spanned(l, "Lifetime params are not supported"))
                }
                GenericParam::Const(c) => {
                    return Err(syn::Error::new_spanned(c, "Const params are not supported"))
                }
            }
        }
        let param = param
            .ok_or_else(|| syn::Error::new_spanned(&item.ident, "Expected a single type param"))?;

        Ok(Self {
            ident: item.ident.clone(),
            param,
            fields,
            generics: item.generics.clone(),
        })
    }

    /// Returns a copy whose impls additionally require `param: bound`.
    pub fn bounded(&self, bound: TokenStream) -> Self {
        let param = &self.param;
        let predicate: WherePredicate = parse_quote!(#param: #bound);

        let mut ret = self.clone();
        ret.generics.make_where_clause().predicates.push(predicate);
        ret
    }

    /// The target type with its generics, e.g. `Vec3<T>`.
    pub fn ty(&self) -> TokenStream {
        self.sibling(&self.ident)
    }

    /// Another math type over the same scalar, e.g. `Point3<T>` for a `Vec3<T>`.
    pub fn sibling(&self, other: &Ident) -> TokenStream {
        let (_, type_generics, _) = self.generics.split_for_impl();
        quote!(#other #type_generics)
    }

    /// Maps every component through `f`.
    pub fn each<F>(&self, f: F) -> Vec<TokenStream>
    where
        F: Fn(&Ident) -> TokenStream,
    {
        self.fields.iter().map(f).collect()
    }

    /// Wraps `body` in an impl of `trait_path` for the target, or an inherent impl if `None`.
    pub fn impl_block(&self, trait_path: Option<TokenStream>, body: TokenStream) -> TokenStream {
        let ident = &self.ident;
        let (impl_generics, type_generics, where_clause) = self.generics.split_for_impl();
        match trait_path {
            Some(trait_path) => quote! {
                impl #impl_generics #trait_path for #ident #type_generics
                #where_clause
                {
                    #body
                }
            },
            None => quote! {
                impl #impl_generics #ident #type_generics
                #where_clause
                {
                    #body
                }
            },
        }
    }
}
