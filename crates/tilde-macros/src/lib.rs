use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields, Lit, Meta};

/// Derive macro that generates a companion `*Series` struct holding one
/// column per field, for collecting sweep points. All fields in the source
/// struct must be `f64`.
///
/// The generated series struct has the same fields as `Vec<f64>`, along with
/// `with_capacity`, `push`, `len`, `is_empty` and `column` methods.
/// A `column_names()` associated function is added to the point struct.
///
/// Use `#[columns(series_name = "CustomName")]` to override the default
/// series struct name (`{StructName}Series`).
#[proc_macro_derive(Columns, attributes(columns))]
pub fn derive_columns(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let vis = &input.vis;

    let series_name =
        extract_series_name(&input).unwrap_or_else(|| format_ident!("{}Series", name));

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return syn::Error::new_spanned(
                    name,
                    "Columns can only be derived for structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(name, "Columns can only be derived for structs")
                .to_compile_error()
                .into();
        }
    };

    if fields.is_empty() {
        return syn::Error::new_spanned(name, "Columns struct must have at least one field")
            .to_compile_error()
            .into();
    }

    let mut column_names = Vec::new();
    let mut field_idents = Vec::new();
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        if !is_f64_type(&field.ty) {
            return syn::Error::new_spanned(&field.ty, "Columns derive: all fields must be f64")
                .to_compile_error()
                .into();
        }
        column_names.push(ident.to_string());
        field_idents.push(ident);
    }

    let first_field = &field_idents[0];
    let column_name_strs: Vec<&str> = column_names.iter().map(|s| s.as_str()).collect();

    let series_fields = field_idents.iter().map(|f| {
        quote! { pub #f: Vec<f64> }
    });

    let with_cap_fields = field_idents.iter().map(|f| {
        quote! { #f: Vec::with_capacity(n) }
    });

    let push_fields = field_idents.iter().map(|f| {
        quote! { self.#f.push(p.#f); }
    });

    let column_arms = field_idents
        .iter()
        .zip(column_name_strs.iter())
        .map(|(f, s)| {
            quote! { #s => Some(self.#f.as_slice()) }
        });

    let expanded = quote! {
        /// Auto-generated columnar series for collecting sweep points.
        #[derive(Debug, Clone, PartialEq)]
        #vis struct #series_name {
            #(#series_fields,)*
        }

        impl #series_name {
            /// Pre-allocate every column for `n` points.
            pub fn with_capacity(n: usize) -> Self {
                Self {
                    #(#with_cap_fields,)*
                }
            }

            /// Append one point, one value per column.
            pub fn push(&mut self, p: &#name) {
                #(#push_fields)*
            }

            /// Number of points stored.
            pub fn len(&self) -> usize {
                self.#first_field.len()
            }

            /// Returns `true` if no points have been stored.
            pub fn is_empty(&self) -> bool {
                self.#first_field.is_empty()
            }

            /// Look a column up by field name.
            pub fn column(&self, name: &str) -> Option<&[f64]> {
                match name {
                    #(#column_arms,)*
                    _ => None,
                }
            }
        }

        impl #name {
            /// Returns the column names, in field order.
            pub fn column_names() -> &'static [&'static str] {
                &[#(#column_name_strs),*]
            }
        }
    };

    expanded.into()
}

fn extract_series_name(input: &DeriveInput) -> Option<proc_macro2::Ident> {
    for attr in &input.attrs {
        if attr.path().is_ident("columns") {
            let nested = attr
                .parse_args_with(
                    syn::punctuated::Punctuated::<syn::Meta, syn::Token![,]>::parse_terminated,
                )
                .ok()?;
            for meta in nested {
                if let Meta::NameValue(nv) = meta {
                    if nv.path.is_ident("series_name") {
                        if let syn::Expr::Lit(expr_lit) = &nv.value {
                            if let Lit::Str(lit_str) = &expr_lit.lit {
                                return Some(format_ident!("{}", lit_str.value()));
                            }
                        }
                    }
                }
            }
        }
    }
    None
}

fn is_f64_type(ty: &syn::Type) -> bool {
    if let syn::Type::Path(type_path) = ty {
        type_path.path.is_ident("f64")
    } else {
        false
    }
}
