//! Implementation of the `#[derive(Fields)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    Data, DeriveInput, Fields, FieldsNamed, GenericParam, Generics, Ident, Type, parse_macro_input,
    parse_quote,
};

/// Main implementation of the Fields derive macro.
pub fn derive_fields_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand(&input))
}

fn expand(input: &DeriveInput) -> TokenStream2 {
    match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(named_fields) => generate_struct_fields(input, named_fields),
            Fields::Unnamed(_) => syn::Error::new_spanned(
                &input.ident,
                "Fields can only be derived for structs with named fields, not tuple structs.",
            )
            .to_compile_error(),
            Fields::Unit => syn::Error::new_spanned(
                &input.ident,
                "Fields cannot be derived for unit structs (structs with no fields).",
            )
            .to_compile_error(),
        },
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            "Fields can only be derived for structs, not enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Fields cannot be derived for unions.")
                .to_compile_error()
        }
    }
}

/// The pieces of a named struct every generated item needs.
struct Shape<'a> {
    name: &'a Ident,
    generics: &'a Generics,
    fields_name: Ident,
    field_names: Vec<&'a Ident>,
    field_types: Vec<&'a Type>,
    components: Vec<Ident>,
}

fn generate_struct_fields(input: &DeriveInput, named_fields: &FieldsNamed) -> TokenStream2 {
    let (field_names, field_types): (Vec<&Ident>, Vec<&Type>) = named_fields
        .named
        .iter()
        .filter_map(|field| field.ident.as_ref().map(|ident| (ident, &field.ty)))
        .unzip();
    let components = (0..field_names.len())
        .map(|index| format_ident!("__Field{}", index))
        .collect();

    let shape = Shape {
        name: &input.ident,
        generics: &input.generics,
        fields_name: format_ident!("{}Fields", input.ident),
        field_names,
        field_types,
        components,
    };

    let fields_struct = generate_fields_struct(&shape, &input.vis);
    let semigroup = generate_semigroup(&shape);
    let monoid = generate_monoid(&shape);
    let predicate = generate_predicate(&shape);
    let product = generate_product_fields(&shape);

    quote! {
        #fields_struct
        #semigroup
        #monoid
        #predicate
        #product
    }
}

fn generate_fields_struct(shape: &Shape<'_>, visibility: &syn::Visibility) -> TokenStream2 {
    let Shape {
        name,
        fields_name,
        field_names,
        components,
        ..
    } = shape;
    let documentation = format!("One component per field of [`{name}`].");

    quote! {
        #[doc = #documentation]
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        #visibility struct #fields_name<#(#components),*> {
            #(
                #[allow(missing_docs)]
                pub #field_names: #components,
            )*
        }
    }
}

/// Struct generics extended with one component parameter per field, each
/// bounded by `bound(field_type)`.
fn component_generics(shape: &Shape<'_>, bound: impl Fn(&Type) -> TokenStream2) -> Generics {
    let mut generics = shape.generics.clone();
    for component in &shape.components {
        generics.params.push(GenericParam::Type(parse_quote!(#component)));
    }
    let where_clause = generics.make_where_clause();
    for (component, field_type) in shape.components.iter().zip(&shape.field_types) {
        let bound = bound(field_type);
        where_clause.predicates.push(parse_quote!(#component: #bound));
    }
    generics
}

fn generate_semigroup(shape: &Shape<'_>) -> TokenStream2 {
    let Shape {
        name,
        generics,
        fields_name,
        field_names,
        components,
        ..
    } = shape;
    let extended = component_generics(shape, |field_type| {
        quote!(::fpcore::typeclass::Semigroup<#field_type>)
    });
    let (impl_generics, _, where_clause) = extended.split_for_impl();
    let (_, type_generics, _) = generics.split_for_impl();

    quote! {
        #[allow(non_camel_case_types)]
        impl #impl_generics ::fpcore::typeclass::Semigroup<#name #type_generics>
            for #fields_name<#(#components),*>
        #where_clause
        {
            #[allow(unused_variables)]
            fn combine(&self, left: #name #type_generics, right: #name #type_generics) -> #name #type_generics {
                #name {
                    #(
                        #field_names: ::fpcore::typeclass::Semigroup::combine(
                            &self.#field_names,
                            left.#field_names,
                            right.#field_names,
                        ),
                    )*
                }
            }
        }
    }
}

fn generate_monoid(shape: &Shape<'_>) -> TokenStream2 {
    let Shape {
        name,
        generics,
        fields_name,
        field_names,
        components,
        ..
    } = shape;
    let extended = component_generics(shape, |field_type| {
        quote!(::fpcore::typeclass::Monoid<#field_type>)
    });
    let (impl_generics, _, where_clause) = extended.split_for_impl();
    let (_, type_generics, _) = generics.split_for_impl();

    quote! {
        #[allow(non_camel_case_types)]
        impl #impl_generics ::fpcore::typeclass::Monoid<#name #type_generics>
            for #fields_name<#(#components),*>
        #where_clause
        {
            fn empty(&self) -> #name #type_generics {
                #name {
                    #(#field_names: ::fpcore::typeclass::Monoid::empty(&self.#field_names),)*
                }
            }
        }
    }
}

/// Struct generics with every type parameter, every field type and the
/// struct itself required to be `'static`.
fn static_generics(shape: &Shape<'_>) -> Generics {
    let mut generics = shape.generics.clone();
    let type_parameters: Vec<Ident> = generics
        .type_params()
        .map(|parameter| parameter.ident.clone())
        .collect();
    let name = shape.name;
    let (_, type_generics, _) = shape.generics.split_for_impl();
    let self_type: Type = parse_quote!(#name #type_generics);

    let where_clause = generics.make_where_clause();
    for parameter in type_parameters {
        where_clause.predicates.push(parse_quote!(#parameter: 'static));
    }
    for field_type in &shape.field_types {
        where_clause.predicates.push(parse_quote!(#field_type: 'static));
    }
    where_clause.predicates.push(parse_quote!(#self_type: 'static));
    generics
}

fn generate_predicate(shape: &Shape<'_>) -> TokenStream2 {
    let Shape {
        name,
        generics,
        fields_name,
        field_names,
        field_types,
        ..
    } = shape;
    let extended = static_generics(shape);
    let (impl_generics, _, where_clause) = extended.split_for_impl();
    let (_, type_generics, _) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::core::convert::From<#fields_name<#(::fpcore::predicate::Predicate<#field_types>),*>>
            for ::fpcore::predicate::Predicate<#name #type_generics>
        #where_clause
        {
            #[allow(unused_variables)]
            fn from(fields: #fields_name<#(::fpcore::predicate::Predicate<#field_types>),*>) -> Self {
                Self::new(move |value: &#name #type_generics| {
                    true #(&& fields.#field_names.test(&value.#field_names))*
                })
            }
        }
    }
}

fn generate_product_fields(shape: &Shape<'_>) -> TokenStream2 {
    let Shape {
        name,
        generics,
        field_names,
        field_types,
        ..
    } = shape;
    let (Some(first_name), Some(first_type)) = (field_names.first(), field_types.first()) else {
        return TokenStream2::new();
    };

    let mut accumulated_type = quote!(#first_type);
    let mut accumulated_pattern = quote!(#first_name);
    let mut accumulated_clone = quote!(::core::clone::Clone::clone(&__value.#first_name));
    let mut steps = Vec::new();

    for (field_name, field_type) in field_names.iter().zip(field_types.iter()).skip(1) {
        steps.push(quote! {
            let __product = <__Brand as ::fpcore::typeclass::SemiProduct>::product::<
                __R, __O, __E, #accumulated_type, #field_type
            >(__product, #field_name);
        });
        accumulated_type = quote!((#accumulated_type, #field_type));
        accumulated_pattern = quote!((#accumulated_pattern, #field_name));
        accumulated_clone = quote!((
            #accumulated_clone,
            ::core::clone::Clone::clone(&__value.#field_name)
        ));
    }

    let extended = static_generics(shape);
    let (impl_generics, _, where_clause) = extended.split_for_impl();
    let (_, type_generics, _) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            /// Pairs one shape per field into a shape of the whole struct.
            #[allow(clippy::too_many_arguments, clippy::type_complexity)]
            pub fn product_fields<__Brand, __R, __O, __E>(
                #(#field_names: ::fpcore::typeclass::Kind<__Brand, __R, __O, __E, #field_types>,)*
            ) -> ::fpcore::typeclass::Kind<__Brand, __R, __O, __E, Self>
            where
                __Brand: ::fpcore::typeclass::SemiProduct,
                #(#field_types: ::core::clone::Clone,)*
            {
                let __product = #first_name;
                #(#steps)*
                <__Brand as ::fpcore::typeclass::Invariant>::imap::<__R, __O, __E, #accumulated_type, Self>(
                    __product,
                    |#accumulated_pattern| #name { #(#field_names,)* },
                    |__value: &Self| #accumulated_clone,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn expand_source(source: &str) -> String {
        let input: DeriveInput = syn::parse_str(source).unwrap();
        expand(&input).to_string()
    }

    #[rstest]
    #[case("enum Shape { Circle }", "not enums")]
    #[case("struct Pair(i32, i32);", "not tuple structs")]
    #[case("struct Marker;", "unit structs")]
    #[case("union Bits { a: u32 }", "unions")]
    fn rejects_unsupported_shapes(#[case] source: &str, #[case] message: &str) {
        let output = expand_source(source);
        assert!(output.contains("compile_error"));
        assert!(output.contains(message));
    }

    #[rstest]
    fn generates_companion_struct_and_instances() {
        let output = expand_source("pub struct Point { x: i32, label: String }");
        assert!(output.contains("pub struct PointFields"));
        assert!(output.contains("Semigroup < Point >"));
        assert!(output.contains("Monoid < Point >"));
        assert!(output.contains("Predicate < Point >"));
        assert!(output.contains("fn product_fields"));
    }

    #[rstest]
    fn empty_struct_has_no_product_fields() {
        let output = expand_source("struct Nothing {}");
        assert!(output.contains("NothingFields"));
        assert!(!output.contains("product_fields"));
    }
}
