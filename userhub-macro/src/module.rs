use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{parse_macro_input, Ident, ItemStruct, Path, Token, Type};

/// `(dyn Trait => Impl)`
struct Binding {
    contract: Type,
    implementation: Path,
}

impl Parse for Binding {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let inner;
        syn::parenthesized!(inner in input);
        let contract = inner.parse()?;
        inner.parse::<Token![=>]>()?;
        let implementation = inner.parse()?;
        Ok(Self {
            contract,
            implementation,
        })
    }
}

/// The `#[module(...)]` argument list. Every key is optional and may appear
/// once.
#[derive(Default)]
struct Declaration {
    imports: Vec<Path>,
    providers: Vec<Path>,
    controllers: Vec<Path>,
    bindings: Vec<Binding>,
}

fn bracketed_list<T: Parse>(input: ParseStream) -> syn::Result<Vec<T>> {
    let inner;
    syn::bracketed!(inner in input);
    let items = Punctuated::<T, Token![,]>::parse_terminated(&inner)?;
    Ok(items.into_iter().collect())
}

impl Parse for Declaration {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut declaration = Declaration::default();
        let mut seen: Vec<String> = Vec::new();

        while !input.is_empty() {
            let key: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            let name = key.to_string();
            if seen.contains(&name) {
                return Err(syn::Error::new_spanned(&key, format!("`{}` given twice", name)));
            }
            match name.as_str() {
                "imports" => declaration.imports = bracketed_list(input)?,
                "providers" => declaration.providers = bracketed_list(input)?,
                "controllers" => declaration.controllers = bracketed_list(input)?,
                "bindings" => declaration.bindings = bracketed_list(input)?,
                _ => {
                    return Err(syn::Error::new_spanned(
                        &key,
                        "expected one of: imports, providers, controllers, bindings",
                    ));
                }
            }
            seen.push(name);

            if !input.is_empty() {
                input.parse::<Token![,]>()?;
            }
        }
        Ok(declaration)
    }
}

pub fn module_attribute(attr: TokenStream, item: TokenStream) -> TokenStream {
    let declaration = parse_macro_input!(attr as Declaration);
    let input = parse_macro_input!(item as ItemStruct);
    expand(&declaration, &input).into()
}

/// `Module::register` fills the container in dependency order: bindings,
/// imported modules, providers, then controllers.
fn expand(declaration: &Declaration, input: &ItemStruct) -> TokenStream2 {
    let module = &input.ident;

    let bindings = declaration.bindings.iter().map(|binding| {
        let contract = &binding.contract;
        let implementation = &binding.implementation;
        quote! {
            container.register_trait::<#contract, #implementation, _>(
                |instance| instance as ::std::sync::Arc<#contract>
            );
        }
    });

    let imports = declaration.imports.iter().map(|import| {
        quote! { <#import as ::userhub::Module>::register(container)?; }
    });

    let injectables = declaration
        .providers
        .iter()
        .chain(&declaration.controllers)
        .map(|path| {
            let label = quote!(#path).to_string().replace(' ', "");
            quote! {
                let instance = <#path as ::userhub::Injectable>::inject(container).map_err(|e| {
                    ::userhub::UserhubError::ModuleRegistrationFailed {
                        message: format!("{} in {}: {}", #label, stringify!(#module), e),
                    }
                })?;
                container.register(instance);
            }
        });

    quote! {
        #input

        impl ::userhub::Module for #module {
            fn register(container: &mut ::userhub::Container) -> ::userhub::Result<()> {
                #(#bindings)*
                #(#imports)*
                #(#injectables)*
                Ok(())
            }
        }
    }
}
