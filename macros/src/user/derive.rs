use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{DeriveInput, Ident};

use crate::common::{RecordModel, ELEM};

fn gen_ident(name: &str) -> Ident {
    Ident::new(name, Span::call_site())
}

/// #[derive(Functor)] emits the witness type, `Kind`, `HasKind` and `Functor`.
///
/// ```ignore
/// pub struct SeriesKind;
/// impl Kind for SeriesKind { type Of<__A> = Series<__A>; }
/// impl<T> HasKind for Series<T> { type Kind = SeriesKind; type Elem = T; ... }
/// impl Functor for SeriesKind { fn map(..) { Series { samples: VecK::map(..), .. } } }
/// ```
pub fn expand_derive_functor(input: DeriveInput) -> TokenStream2 {
    let model = match RecordModel::parse(&input) {
        Ok(model) => model,
        Err(err) => return err.to_compile_error(),
    };

    let RecordModel {
        ident,
        vis,
        witness,
        generics,
        fixed,
        elem,
        fields,
    } = &model;

    let (a, b, f) = (gen_ident(ELEM), gen_ident("__B"), gen_ident("__F"));

    // Witness declaration: fixed parameters only, no bounds.
    let fixed_idents: Vec<&Ident> = fixed.type_params().map(|t| &t.ident).collect();
    let doc = format!("Shape witness for [`{ident}`], generated by `#[derive(Functor)]`.");
    let witness_decl = if fixed_idents.is_empty() {
        quote! {
            #[doc = #doc]
            #vis struct #witness;
        }
    } else {
        quote! {
            #[doc = #doc]
            #vis struct #witness<#(#fixed_idents),*>(
                ::core::marker::PhantomData<fn() -> (#(#fixed_idents,)*)>
            );
        }
    };

    let (impl_fixed, _, where_fixed) = fixed.split_for_impl();
    let (impl_all, ty_all, where_all) = generics.split_for_impl();
    let witness_ty = model.witness_ty();
    let of_a = model.record_of(quote! { #a });
    let of_b = model.record_of(quote! { #b });

    let map_fields = fields.iter().map(|field| {
        let member = &field.member;
        let w = field.witness();
        quote! {
            #member: <#w as ::semialign::Functor>::map::<#a, #b, _>(fa.#member, &mut f)
        }
    });

    quote! {
        #witness_decl

        impl #impl_fixed ::semialign::Kind for #witness_ty #where_fixed {
            type Of<#a> = #of_a;
        }

        impl #impl_all ::semialign::HasKind for #ident #ty_all #where_all {
            type Kind = #witness_ty;
            type Elem = #elem;

            #[inline(always)]
            fn into_kind(self) -> ::semialign::Of<Self::Kind, Self::Elem> {
                self
            }

            #[inline(always)]
            fn from_kind(of: ::semialign::Of<Self::Kind, Self::Elem>) -> Self {
                of
            }
        }

        impl #impl_fixed ::semialign::Functor for #witness_ty #where_fixed {
            fn map<#a, #b, #f>(fa: #of_a, mut f: #f) -> #of_b
            where
                #f: ::core::ops::FnMut(#a) -> #b,
            {
                #ident {
                    #(#map_fields,)*
                }
            }
        }
    }
}

/// #[derive(Semialign)] aligns field by field. Both `align` and `align_with`
/// are emitted so no intermediate `These` record is built for the latter.
pub fn expand_derive_semialign(input: DeriveInput) -> TokenStream2 {
    let model = match RecordModel::parse(&input) {
        Ok(model) => model,
        Err(err) => return err.to_compile_error(),
    };

    let (a, b, c, f) = (gen_ident(ELEM), gen_ident("__B"), gen_ident("__C"), gen_ident("__F"));
    let ident = &model.ident;
    let (impl_fixed, _, where_fixed) = model.fixed.split_for_impl();
    let witness_ty = model.witness_ty();
    let of_a = model.record_of(quote! { #a });
    let of_b = model.record_of(quote! { #b });
    let of_c = model.record_of(quote! { #c });
    let of_these = model.record_of(quote! { ::semialign::These<#a, #b> });

    let align_fields = model.fields.iter().map(|field| {
        let member = &field.member;
        let w = field.witness();
        quote! {
            #member: <#w as ::semialign::Semialign>::align::<#a, #b>(fa.#member, fb.#member)
        }
    });

    let align_with_fields = model.fields.iter().map(|field| {
        let member = &field.member;
        let w = field.witness();
        quote! {
            #member: <#w as ::semialign::Semialign>::align_with::<#a, #b, #c, _>(
                fa.#member,
                fb.#member,
                &mut f,
            )
        }
    });

    quote! {
        impl #impl_fixed ::semialign::Semialign for #witness_ty #where_fixed {
            fn align<#a, #b>(fa: #of_a, fb: #of_b) -> #of_these {
                #ident {
                    #(#align_fields,)*
                }
            }

            fn align_with<#a, #b, #c, #f>(fa: #of_a, fb: #of_b, mut f: #f) -> #of_c
            where
                #f: ::core::ops::FnMut(::semialign::These<#a, #b>) -> #c,
            {
                #ident {
                    #(#align_with_fields,)*
                }
            }
        }
    }
}

/// #[derive(Align)] builds the empty record from each field's `nil`.
pub fn expand_derive_align(input: DeriveInput) -> TokenStream2 {
    let model = match RecordModel::parse(&input) {
        Ok(model) => model,
        Err(err) => return err.to_compile_error(),
    };

    if let Some(bare) = model.first_bare_field() {
        return syn::Error::new_spanned(
            &bare.ty,
            "`Align` cannot be derived: a bare element field has no empty shape",
        )
        .to_compile_error();
    }

    let a = gen_ident(ELEM);
    let ident = &model.ident;
    let (impl_fixed, _, where_fixed) = model.fixed.split_for_impl();
    let witness_ty = model.witness_ty();
    let of_a = model.record_of(quote! { #a });

    let nil_fields = model.fields.iter().map(|field| {
        let member = &field.member;
        let w = field.witness();
        quote! {
            #member: <#w as ::semialign::Align>::nil::<#a>()
        }
    });

    quote! {
        impl #impl_fixed ::semialign::Align for #witness_ty #where_fixed {
            fn nil<#a>() -> #of_a {
                #ident {
                    #(#nil_fields,)*
                }
            }
        }
    }
}
