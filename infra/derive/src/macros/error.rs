use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    Attribute, Data, DeriveInput, Field, Fields, FieldsNamed, GenericArgument, Ident,
    PathArguments, Type, Variant,
};

const INTERNAL_VARIANT: &str = "Internal";

struct ErrorVariant<'a> {
    ident: &'a Ident,
    source: Option<(&'a Ident, &'a Type)>,
    has_context: bool,
    cfg_attrs: Vec<Attribute>,
}

impl ErrorVariant<'_> {
    fn is_internal(&self) -> bool {
        self.ident == INTERNAL_VARIANT
    }
}

pub fn expand_derive(input: DeriveInput) -> TokenStream {
    let name = &input.ident;
    let ext_trait = format_ident!("{}Ext", name);

    let Data::Enum(data) = &input.data else {
        return quote! { compile_error!("bemt_error can only be applied to enums"); };
    };

    let variants = match data.variants.iter().map(inspect_variant).collect::<Result<Vec<_>, _>>()
    {
        Ok(variants) => variants,
        Err(err) => return err.to_compile_error(),
    };

    if let Some(missing) = variants.iter().find(|v| v.source.is_some() && !v.has_context) {
        return syn::Error::new_spanned(
            missing.ident,
            "bemt_error requires `context: Option<Cow<'static, str>>` next to a source field",
        )
        .to_compile_error();
    }

    let derives = missing_derives(&input);
    let ext_impl = expand_ext_trait(name, &ext_trait, &variants);
    let source_impls = variants
        .iter()
        .filter(|v| !v.is_internal())
        .filter_map(|v| expand_source_impls(name, &ext_trait, v));
    let internal_impls = variants
        .iter()
        .find(|v| v.is_internal())
        .map(|v| expand_internal_impls(name, v))
        .unwrap_or_default();

    quote! {
        #[allow(non_shorthand_field_patterns)]
        #derives
        #input

        #ext_impl
        #(#source_impls)*
        #internal_impls

        #[allow(dead_code)]
        fn format_context(
            context: &Option<std::borrow::Cow<'static, str>>,
        ) -> std::borrow::Cow<'static, str> {
            match context {
                Some(c) => std::borrow::Cow::Owned(format!(" ({c})")),
                None => std::borrow::Cow::Borrowed(""),
            }
        }
    }
}

fn inspect_variant(variant: &Variant) -> Result<ErrorVariant<'_>, syn::Error> {
    let Fields::Named(fields) = &variant.fields else {
        return Err(syn::Error::new_spanned(
            variant,
            "bemt_error requires named fields on every variant",
        ));
    };

    let has_context = context_field(fields)?.is_some();
    let source = fields
        .named
        .iter()
        .find(|field| is_source_field(field))
        .and_then(|field| field.ident.as_ref().map(|ident| (ident, &field.ty)));

    Ok(ErrorVariant {
        ident: &variant.ident,
        source,
        has_context,
        cfg_attrs: variant.attrs.iter().filter(|a| a.path().is_ident("cfg")).cloned().collect(),
    })
}

fn context_field(fields: &FieldsNamed) -> Result<Option<&Field>, syn::Error> {
    let Some(field) =
        fields.named.iter().find(|f| f.ident.as_ref().is_some_and(|ident| ident == "context"))
    else {
        return Ok(None);
    };

    if is_optional_static_cow(&field.ty) {
        Ok(Some(field))
    } else {
        Err(syn::Error::new_spanned(&field.ty, "context field must be Option<Cow<'static, str>>"))
    }
}

fn is_source_field(field: &Field) -> bool {
    field.ident.as_ref().is_some_and(|ident| ident == "source")
        || field.attrs.iter().any(|a| a.path().is_ident("source") || a.path().is_ident("from"))
}

fn expand_ext_trait(name: &Ident, ext_trait: &Ident, variants: &[ErrorVariant<'_>]) -> TokenStream {
    let arms = variants.iter().filter(|v| v.has_context).map(|v| {
        let cfg_attrs = &v.cfg_attrs;
        let ident = v.ident;
        quote! { #(#cfg_attrs)* #name::#ident { context: slot, .. } => *slot = Some(context.into()), }
    });

    quote! {
        pub trait #ext_trait<T> {
            /// Attaches a human-readable context to the error branch of this result.
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext_trait<T> for Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut err| {
                    match &mut err {
                        #(#arms)*
                        _ => {}
                    }
                    err
                })
            }
        }
    }
}

fn expand_source_impls(
    name: &Ident,
    ext_trait: &Ident,
    variant: &ErrorVariant<'_>,
) -> Option<TokenStream> {
    let (field, ty) = variant.source?;
    let ident = variant.ident;
    let cfg_attrs = &variant.cfg_attrs;

    Some(quote! {
        #(#cfg_attrs)*
        #[automatically_derived]
        impl From<#ty> for #name {
            #[inline]
            fn from(#field: #ty) -> Self { Self::#ident { #field, context: None } }
        }

        #(#cfg_attrs)*
        #[automatically_derived]
        impl<T> #ext_trait<T> for std::result::Result<T, #ty> {
            #[inline]
            fn context(
                self,
                context: impl Into<std::borrow::Cow<'static, str>>,
            ) -> std::result::Result<T, #name> {
                self.map_err(|#field| #name::#ident { #field, context: Some(context.into()) })
            }
        }
    })
}

fn expand_internal_impls(name: &Ident, internal: &ErrorVariant<'_>) -> TokenStream {
    let cfg_attrs = &internal.cfg_attrs;

    quote! {
        #(#cfg_attrs)*
        impl From<&'static str> for #name {
            #[inline]
            fn from(s: &'static str) -> Self {
                Self::Internal { message: std::borrow::Cow::Borrowed(s), context: None }
            }
        }

        #(#cfg_attrs)*
        impl From<String> for #name {
            #[inline]
            fn from(s: String) -> Self {
                Self::Internal { message: std::borrow::Cow::Owned(s), context: None }
            }
        }
    }
}

fn missing_derives(input: &DeriveInput) -> TokenStream {
    let mut present = FxHashSet::default();

    for attr in input.attrs.iter().filter(|a| a.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(last) = meta.path.segments.last() {
                present.insert(last.ident.to_string());
            }
            Ok(())
        });
    }

    let mut derives = Vec::new();
    if !present.contains("Debug") {
        derives.push(quote! { Debug });
    }
    if !present.contains("Error") {
        derives.push(quote! { ::thiserror::Error });
    }

    if derives.is_empty() { quote! {} } else { quote! { #[derive(#(#derives),*)] } }
}

/// Matches `Option<Cow<'static, str>>` by the last segment of each path.
fn is_optional_static_cow(ty: &Type) -> bool {
    let Some(inner) = single_type_argument(ty, "Option") else {
        return false;
    };
    let Type::Path(path) = inner else {
        return false;
    };
    let Some(segment) = path.path.segments.last().filter(|s| s.ident == "Cow") else {
        return false;
    };
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return false;
    };

    let mut args = args.args.iter();
    let is_static = matches!(args.next(), Some(GenericArgument::Lifetime(lt)) if lt.ident == "static");
    let is_str = matches!(
        args.next(),
        Some(GenericArgument::Type(Type::Path(p)))
            if p.path.segments.last().is_some_and(|s| s.ident == "str")
    );

    is_static && is_str
}

fn single_type_argument<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last().filter(|s| s.ident == wrapper)?;
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first() {
        Some(GenericArgument::Type(inner)) => Some(inner),
        _ => None,
    }
}
