//! Record model: which parameter is the element, and how each field aligns.

use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{
    parse_quote,
    visit::{self, Visit},
    visit_mut::{self, VisitMut},
    Data, DeriveInput, Fields, GenericArgument, GenericParam, Generics, Ident, Member,
    PathArguments, Type, TypePath, Visibility,
};

/// Name of the element parameter inside generated methods.
pub const ELEM: &str = "__A";

/// How a single field participates in the record's shape.
pub enum FieldShape {
    /// The field is the bare element: one slot, always populated.
    Bare,
    /// A container; holds the field type with the element renamed to `__A`.
    Container(Type),
}

pub struct FieldModel {
    pub member: Member,
    /// The field type as written, for error spans.
    pub ty: Type,
    pub shape: FieldShape,
}

impl FieldModel {
    /// Path to the field's witness, e.g. `<Vec<__A> as ::semialign::HasKind>::Kind`.
    pub fn witness(&self) -> TokenStream2 {
        match &self.shape {
            FieldShape::Bare => quote! { ::semialign::Identity },
            FieldShape::Container(ty) => quote! { <#ty as ::semialign::HasKind>::Kind },
        }
    }
}

pub struct RecordModel {
    pub ident: Ident,
    pub vis: Visibility,
    pub witness: Ident,
    /// The declared generics, element included.
    pub generics: Generics,
    /// Generics with the element parameter removed; these go on the witness.
    pub fixed: Generics,
    pub elem: Ident,
    pub fields: Vec<FieldModel>,
}

impl RecordModel {
    pub fn parse(input: &DeriveInput) -> syn::Result<Self> {
        let fields = match &input.data {
            Data::Struct(data) => &data.fields,
            Data::Enum(data) => {
                return Err(syn::Error::new_spanned(
                    data.enum_token,
                    "alignment can only be derived for structs",
                ))
            }
            Data::Union(data) => {
                return Err(syn::Error::new_spanned(
                    data.union_token,
                    "alignment can only be derived for structs",
                ))
            }
        };

        let elem = element_param(&input.generics, &input.ident)?;
        check_fixed_params(&input.generics, &elem)?;

        let mut fixed = input.generics.clone();
        fixed.params = fixed
            .params
            .into_iter()
            .filter(|p| !matches!(p, GenericParam::Type(t) if t.ident == elem))
            .collect();

        let fields = match fields {
            Fields::Unit => Vec::new(),
            Fields::Named(named) => named.named.iter().collect(),
            Fields::Unnamed(unnamed) => unnamed.unnamed.iter().collect(),
        };
        if fields.is_empty() {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "alignment needs at least one field holding the element type",
            ));
        }

        let fields = fields
            .into_iter()
            .enumerate()
            .map(|(i, field)| {
                let member = match &field.ident {
                    Some(ident) => Member::Named(ident.clone()),
                    None => Member::Unnamed(i.into()),
                };
                let shape = field_shape(&field.ty, &elem)?;
                Ok(FieldModel {
                    member,
                    ty: field.ty.clone(),
                    shape,
                })
            })
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(RecordModel {
            ident: input.ident.clone(),
            vis: input.vis.clone(),
            witness: format_ident!("{}Kind", input.ident),
            generics: input.generics.clone(),
            fixed,
            elem,
            fields,
        })
    }

    /// `Name<Fixed.., $arg>`: the record with the element replaced by `arg`.
    pub fn record_of(&self, arg: TokenStream2) -> TokenStream2 {
        let ident = &self.ident;
        let args = self.generics.params.iter().map(|p| match p {
            GenericParam::Type(t) if t.ident == self.elem => arg.clone(),
            GenericParam::Type(t) => {
                let i = &t.ident;
                quote! { #i }
            }
            // Rejected in `check_fixed_params`.
            GenericParam::Lifetime(_) | GenericParam::Const(_) => quote! {},
        });
        quote! { #ident<#(#args),*> }
    }

    /// `NameKind<Fixed..>`
    pub fn witness_ty(&self) -> TokenStream2 {
        let witness = &self.witness;
        let (_, ty_generics, _) = self.fixed.split_for_impl();
        quote! { #witness #ty_generics }
    }

    /// Bare element fields have no empty shape; `Align` needs one per field.
    pub fn first_bare_field(&self) -> Option<&FieldModel> {
        self.fields
            .iter()
            .find(|f| matches!(f.shape, FieldShape::Bare))
    }
}

// =============================================================================
// Analysis helpers
// =============================================================================

fn element_param(generics: &Generics, ident: &Ident) -> syn::Result<Ident> {
    generics
        .type_params()
        .last()
        .map(|t| t.ident.clone())
        .ok_or_else(|| {
            syn::Error::new_spanned(
                ident,
                "alignment needs a type parameter for the element type (the last one)",
            )
        })
}

fn check_fixed_params(generics: &Generics, elem: &Ident) -> syn::Result<()> {
    for param in &generics.params {
        match param {
            GenericParam::Lifetime(l) => {
                return Err(syn::Error::new_spanned(
                    l,
                    "lifetime parameters are not supported on aligned records",
                ))
            }
            GenericParam::Const(c) => {
                return Err(syn::Error::new_spanned(
                    c,
                    "const parameters are not supported on aligned records",
                ))
            }
            GenericParam::Type(t) if t.ident == *elem && !t.bounds.is_empty() => {
                return Err(syn::Error::new_spanned(
                    &t.bounds,
                    "the element type parameter cannot carry bounds",
                ))
            }
            GenericParam::Type(t) if t.ident != *elem => {
                if t.bounds.iter().any(|bound| mentions(bound, elem) > 0) {
                    return Err(syn::Error::new_spanned(
                        &t.bounds,
                        "the element type parameter cannot appear in the bounds of another parameter",
                    ));
                }
            }
            GenericParam::Type(_) => {}
        }
    }
    if let Some(where_clause) = &generics.where_clause {
        for predicate in &where_clause.predicates {
            if mentions(predicate, elem) > 0 {
                return Err(syn::Error::new_spanned(
                    predicate,
                    "the element type parameter cannot appear in the where clause",
                ));
            }
        }
    }
    Ok(())
}

fn field_shape(ty: &Type, elem: &Ident) -> syn::Result<FieldShape> {
    if is_elem(ty, elem) {
        return Ok(FieldShape::Bare);
    }
    match mentions(ty, elem) {
        0 => {
            return Err(syn::Error::new_spanned(
                ty,
                format!("field does not hold the element type `{elem}`"),
            ))
        }
        1 if last_argument_is(ty, elem) => {}
        _ => {
            return Err(syn::Error::new_spanned(
                ty,
                format!(
                    "the element type `{elem}` must appear exactly once, as the last generic argument"
                ),
            ))
        }
    }
    let mut ty = ty.clone();
    Rename {
        from: elem,
        to: Ident::new(ELEM, Span::call_site()),
    }
    .visit_type_mut(&mut ty);
    Ok(FieldShape::Container(ty))
}

fn is_elem(ty: &Type, elem: &Ident) -> bool {
    match ty {
        Type::Path(TypePath { qself: None, path }) => path.is_ident(elem),
        Type::Group(g) => is_elem(&g.elem, elem),
        Type::Paren(p) => is_elem(&p.elem, elem),
        _ => false,
    }
}

fn last_argument_is(ty: &Type, elem: &Ident) -> bool {
    let Type::Path(TypePath { qself: None, path }) = ty else {
        return false;
    };
    let Some(last) = path.segments.last() else {
        return false;
    };
    let PathArguments::AngleBracketed(args) = &last.arguments else {
        return false;
    };
    let last_type = args.args.iter().rev().find_map(|arg| match arg {
        GenericArgument::Type(t) => Some(t),
        _ => None,
    });
    matches!(last_type, Some(t) if is_elem(t, elem))
}

/// Count the type paths rooted at `elem` (`T`, `T::Assoc`) inside a node.
fn mentions<N: CountElem>(node: &N, elem: &Ident) -> usize {
    let mut counter = Counter { elem, hits: 0 };
    node.count(&mut counter);
    counter.hits
}

struct Counter<'a> {
    elem: &'a Ident,
    hits: usize,
}

impl<'ast> Visit<'ast> for Counter<'_> {
    fn visit_type_path(&mut self, tp: &'ast TypePath) {
        if tp.qself.is_none() && tp.path.segments.first().is_some_and(|s| s.ident == *self.elem) {
            self.hits += 1;
        }
        visit::visit_type_path(self, tp);
    }
}

trait CountElem {
    fn count(&self, counter: &mut Counter<'_>);
}

impl CountElem for Type {
    fn count(&self, counter: &mut Counter<'_>) {
        counter.visit_type(self);
    }
}

impl CountElem for syn::TypeParamBound {
    fn count(&self, counter: &mut Counter<'_>) {
        counter.visit_type_param_bound(self);
    }
}

impl CountElem for syn::WherePredicate {
    fn count(&self, counter: &mut Counter<'_>) {
        counter.visit_where_predicate(self);
    }
}

struct Rename<'a> {
    from: &'a Ident,
    to: Ident,
}

impl VisitMut for Rename<'_> {
    fn visit_type_mut(&mut self, ty: &mut Type) {
        if is_elem(ty, self.from) {
            let to = &self.to;
            *ty = parse_quote!(#to);
            return;
        }
        visit_mut::visit_type_mut(self, ty);
    }
}
