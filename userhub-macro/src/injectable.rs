use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Type};

pub fn derive_injectable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_injectable_impl(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => err.to_compile_error().into(),
    }
}

fn generate_injectable_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            Fields::Unit => {
                return Ok(quote! {
                    impl #impl_generics ::userhub::Injectable for #struct_name #ty_generics #where_clause {
                        fn inject(
                            _container: &::userhub::Container
                        ) -> ::userhub::Result<Self> {
                            Ok(Self)
                        }
                    }
                });
            }
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    struct_name,
                    "#[derive(Injectable)] only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "#[derive(Injectable)] can only be applied to structs",
            ));
        }
    };

    let field_injections = fields.iter().map(|field| {
        let field_name = &field.ident;
        let field_type = extract_injectable_type(&field.ty);

        // syn parses `dyn Trait` as a trait object; those go through the binding table.
        let resolve_method = match &field_type {
            Type::TraitObject(_) => quote!(resolve_trait),
            _ => quote!(resolve),
        };

        quote! {
            #field_name: container.#resolve_method::<#field_type>()?
        }
    });

    Ok(quote! {
        impl #impl_generics ::userhub::Injectable for #struct_name #ty_generics #where_clause {
            fn inject(
                container: &::userhub::Container
            ) -> ::userhub::Result<Self> {
                Ok(Self {
                    #(#field_injections),*
                })
            }
        }
    })
}

/// Extract the inner type from Arc<T> or Arc<dyn Trait>
pub(crate) fn extract_injectable_type(ty: &Type) -> Type {
    if let Type::Path(type_path) = ty {
        if let Some(segment) = type_path.path.segments.last() {
            if segment.ident == "Arc" {
                if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                    if let Some(syn::GenericArgument::Type(inner_type)) = args.args.first() {
                        return inner_type.clone();
                    }
                }
            }
        }
    }

    // If not Arc<T>, return as-is
    ty.clone()
}
