// #[derive(FlagEnum)] expansion: parses a fieldless enum and generates the
// FlagBits / FlagEnum impls, `|` operators, and compile-time validity checks.

use proc_macro2::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::{parse2, Data, DeriveInput, Fields, Ident, Meta, Token};

// ---------------------------------------------------------------------------
// Attribute parsing
// ---------------------------------------------------------------------------

/// Options parsed from #[flags(...)] on the enum.
#[derive(Default)]
struct FlagsArgs {
    unchecked: bool,
}

fn parse_flags_args(attrs: &[syn::Attribute]) -> syn::Result<FlagsArgs> {
    let mut args = FlagsArgs::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("flags")) {
        let nested = attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?;
        for meta in &nested {
            match meta {
                Meta::Path(p) if p.is_ident("unchecked") => args.unchecked = true,
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "unknown #[flags] option.\n\n\
                         Supported: #[flags(unchecked)]",
                    ));
                }
            }
        }
    }
    Ok(args)
}

/// Collect variant identifiers, rejecting anything that is not a unit variant.
fn unit_variants(input: &DeriveInput) -> syn::Result<Vec<Ident>> {
    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "#[derive(FlagEnum)] can only be used on enums",
            ));
        }
    };

    let mut variants = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "FlagEnum variants cannot carry fields; each variant is one flag constant",
            ));
        }
        if let Some(attr) = variant.attrs.iter().find(|a| a.path().is_ident("flags")) {
            return Err(syn::Error::new_spanned(
                attr,
                "#[flags(...)] goes on the enum, not on a variant",
            ));
        }
        variants.push(variant.ident.clone());
    }
    if variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "FlagEnum needs at least one variant",
        ));
    }
    Ok(variants)
}

// ---------------------------------------------------------------------------
// Expansion
// ---------------------------------------------------------------------------

pub fn expand_flag_enum(input: TokenStream) -> syn::Result<TokenStream> {
    let input: DeriveInput = parse2(input)?;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "#[derive(FlagEnum)] does not support generic enums",
        ));
    }

    let args = parse_flags_args(&input.attrs)?;
    let variants = unit_variants(&input)?;
    let name = &input.ident;
    let name_str = name.to_string();
    let variant_strs: Vec<String> = variants.iter().map(|v| v.to_string()).collect();

    let flags = quote! { ::bitmask::flags };

    let checks = if args.unchecked {
        quote! {}
    } else {
        let range_msg = format!("FlagEnum {name_str}: every value must fit in a 32-bit register");
        let bits_msg = format!(
            "FlagEnum {name_str}: every non-zero value must be a single bit and no two values \
             may share a bit (use #[flags(unchecked)] to allow composites)"
        );
        quote! {
            const _: () = ::core::assert!(
                #flags::fits_register(&[#(#name::#variants as i128),*]),
                #range_msg,
            );
            const _: () = ::core::assert!(
                #flags::is_valid_flag_set(&[#(#name::#variants as #flags::Register),*]),
                #bits_msg,
            );
        }
    };

    Ok(quote! {
        impl #flags::FlagBits for #name {
            #[inline]
            fn to_bits(self) -> #flags::Register {
                self as #flags::Register
            }
        }

        impl #flags::FlagEnum for #name {
            const NAME: &'static str = #name_str;
            const VARIANTS: &'static [Self] = &[#(#name::#variants),*];

            fn name(self) -> &'static str {
                match self {
                    #(#name::#variants => #variant_strs,)*
                }
            }
        }

        impl ::core::ops::BitOr for #name {
            type Output = #flags::FlagMask<#name>;
            #[inline]
            fn bitor(self, rhs: Self) -> Self::Output {
                #flags::FlagMask::<#name>::from(self) | rhs
            }
        }

        impl ::core::ops::BitOr<#flags::FlagMask<#name>> for #name {
            type Output = #flags::FlagMask<#name>;
            #[inline]
            fn bitor(self, rhs: #flags::FlagMask<#name>) -> Self::Output {
                #flags::FlagMask::<#name>::from(self) | rhs
            }
        }

        #checks
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expand(input: DeriveInput) -> syn::Result<String> {
        expand_flag_enum(quote! { #input }).map(|ts| ts.to_string())
    }

    #[test]
    fn expands_unit_enum() {
        let out = expand(parse_quote! {
            #[repr(u8)]
            enum Element { None = 0, Fire = 1, Frost = 2 }
        })
        .unwrap();
        assert!(out.contains("FlagEnum for Element"));
        assert!(out.contains("\"Element\""));
        assert!(out.contains("\"Frost\""));
        assert!(out.contains("is_valid_flag_set"));
        assert!(out.contains("fits_register"));
    }

    #[test]
    fn unchecked_skips_assertions() {
        let out = expand(parse_quote! {
            #[flags(unchecked)]
            enum Element { Fire = 1, Frost = 2, Both = 3 }
        })
        .unwrap();
        assert!(!out.contains("is_valid_flag_set"));
        assert!(!out.contains("fits_register"));
    }

    #[test]
    fn rejects_struct() {
        let err = expand(parse_quote! { struct NotAnEnum(u8); }).unwrap_err();
        assert!(err.to_string().contains("can only be used on enums"));
    }

    #[test]
    fn rejects_variant_fields() {
        let err = expand(parse_quote! { enum Bad { Fire(u8) } }).unwrap_err();
        assert!(err.to_string().contains("cannot carry fields"));
    }

    #[test]
    fn rejects_unknown_option() {
        let err = expand(parse_quote! {
            #[flags(loose)]
            enum Element { Fire = 1 }
        })
        .unwrap_err();
        assert!(err.to_string().contains("unknown #[flags] option"));
    }

    #[test]
    fn rejects_variant_attribute() {
        let err = expand(parse_quote! {
            enum Element { #[flags(unchecked)] Fire = 1 }
        })
        .unwrap_err();
        assert!(err.to_string().contains("goes on the enum"));
    }

    #[test]
    fn rejects_empty_enum() {
        let err = expand(parse_quote! { enum Nothing {} }).unwrap_err();
        assert!(err.to_string().contains("at least one variant"));
    }

    #[test]
    fn rejects_generics() {
        let err = expand(parse_quote! { enum Element<T> { Fire = 1, _P(T) } }).unwrap_err();
        assert!(err.to_string().contains("generic enums"));
    }
}
