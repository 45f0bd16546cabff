use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::Parse, parse::ParseStream, parse_macro_input, Attribute, FnArg, ImplItem, ItemImpl,
    ItemStruct, LitStr, Token,
};

use crate::injectable::extract_injectable_type;

const HTTP_METHODS: [&str; 5] = ["get", "post", "put", "delete", "patch"];

struct ControllerArgs {
    path: String,
}

impl Parse for ControllerArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut path = None;
        while !input.is_empty() {
            let name: syn::Ident = input.parse()?;
            input.parse::<Token![=]>()?;
            if name == "path" {
                let lit: LitStr = input.parse()?;
                path = Some(lit.value());
            } else {
                let _: syn::Expr = input.parse()?;
            }
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }
        Ok(ControllerArgs {
            path: path.unwrap_or_else(|| "/".to_string()),
        })
    }
}

pub fn controller_attribute(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as ControllerArgs);
    let input = parse_macro_input!(item as ItemStruct);
    match generate_controller_impl(&args, &input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => err.to_compile_error().into(),
    }
}

fn generate_controller_impl(args: &ControllerArgs, input: &ItemStruct) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let base_path = &args.path;
    let injectable_impl = generate_injectable_for_controller(input)?;
    Ok(quote! {
        #input
        #injectable_impl
        impl #struct_name {
            pub fn base_path() -> &'static str { #base_path }
        }
    })
}

fn generate_injectable_for_controller(input: &ItemStruct) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let fields = match &input.fields {
        syn::Fields::Named(fields) => &fields.named,
        _ => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "#[controller] only supports structs with named fields",
            ));
        }
    };
    let field_injections = fields.iter().map(|field| {
        let field_name = &field.ident;
        let field_type = extract_injectable_type(&field.ty);
        let resolve_method = match &field_type {
            syn::Type::TraitObject(_) => quote!(resolve_trait),
            _ => quote!(resolve),
        };
        quote! { #field_name: container.#resolve_method::<#field_type>()? }
    });
    Ok(quote! {
        impl ::userhub::Injectable for #struct_name {
            fn inject(container: &::userhub::Container) -> ::userhub::Result<Self> {
                Ok(Self { #(#field_injections),* })
            }
        }
    })
}

/// One handler method: its verb, path and the extractor type of every
/// argument after `&self`.
struct RouteInfo {
    method: String,
    path: String,
    fn_name: syn::Ident,
    extractors: Vec<syn::Type>,
}

pub fn routes_attribute(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemImpl);
    match generate_routes_impl(input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => err.to_compile_error().into(),
    }
}

fn generate_routes_impl(input: ItemImpl) -> syn::Result<TokenStream2> {
    let mut routes: Vec<RouteInfo> = Vec::new();
    let mut clean_items: Vec<ImplItem> = Vec::new();

    for item in input.items.iter() {
        if let ImplItem::Fn(method) = item {
            if let Some(route_info) = extract_route_info(method)? {
                routes.push(route_info);
                let mut clean_method = method.clone();
                clean_method.attrs.retain(|attr| !is_http_method_attr(attr));
                clean_items.push(ImplItem::Fn(clean_method));
                continue;
            }
        }
        clean_items.push(item.clone());
    }

    let route_registrations = routes.iter().map(|route| {
        let method_ident = match route.method.as_str() {
            "POST" => quote! { ::axum::routing::post },
            "PUT" => quote! { ::axum::routing::put },
            "DELETE" => quote! { ::axum::routing::delete },
            "PATCH" => quote! { ::axum::routing::patch },
            _ => quote! { ::axum::routing::get },
        };

        let path = &route.path;
        let fn_name = &route.fn_name;

        let internal_args: Vec<_> = (0..route.extractors.len())
            .map(|i| quote::format_ident!("__p_{}", i))
            .collect();
        let extractor_types = &route.extractors;
        let extractor_patterns = quote! { #(#internal_args: #extractor_types),* };

        quote! {
            .route(#path, #method_ident({
                let controller = controller.clone();
                move |#extractor_patterns| {
                    let controller = controller.clone();
                    async move {
                        use ::axum::response::IntoResponse;
                        controller.#fn_name(#(#internal_args),*).await.into_response()
                    }
                }
            }))
        }
    });

    let self_ty = &input.self_ty;
    let (impl_generics, _, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #self_ty #where_clause {
            #(#clean_items)*

            pub fn router<S>(controller: ::std::sync::Arc<Self>) -> ::axum::Router<S>
            where
                S: Clone + Send + Sync + ::userhub::di::HasContainer + 'static,
            {
                ::axum::Router::new() #(#route_registrations)*
            }
        }
    })
}

fn extract_route_info(method: &syn::ImplItemFn) -> syn::Result<Option<RouteInfo>> {
    let mut http_method = None;
    let mut path = String::new();

    for attr in &method.attrs {
        if is_http_method_attr(attr) {
            if let Some(ident) = attr.path().get_ident() {
                http_method = Some(ident.to_string().to_uppercase());
            }
            let lit: LitStr = attr.parse_args()?;
            path = lit.value();
        }
    }
    let Some(http_method) = http_method else {
        return Ok(None);
    };

    let extractors = method
        .sig
        .inputs
        .iter()
        .filter_map(|input| match input {
            FnArg::Typed(pat_type) => Some((*pat_type.ty).clone()),
            FnArg::Receiver(_) => None,
        })
        .collect();
    Ok(Some(RouteInfo {
        method: http_method,
        path,
        fn_name: method.sig.ident.clone(),
        extractors,
    }))
}

fn is_http_method_attr(attr: &Attribute) -> bool {
    attr.path()
        .get_ident()
        .is_some_and(|ident| HTTP_METHODS.contains(&ident.to_string().as_str()))
}
