use proc_macro2::TokenStream;
use quote::{format_ident, quote, ToTokens};
use syn::{
    parse_quote, Data, DataStruct, DeriveInput, Fields, GenericParam, Generics, Ident, LitStr,
    Type, Visibility,
};

struct ShapeField {
    ident: Ident,
    ty: Type,
    slot: Ident,
}

struct ShapeInput {
    vis: Visibility,
    ident: Ident,
    args_ident: Ident,
    generics: Generics,
    fields: Vec<ShapeField>,
}

pub fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    let shape = ShapeInput::parse(input)?;
    let args_struct = shape.args_struct();
    let field_shape = shape.field_shape_impl();
    let places = (0..shape.fields.len()).map(|index| shape.place_impl(index));
    let finish = shape.finish_impl();
    let dynamic = shape.dynamic_impl();

    Ok(quote! {
        #args_struct
        #field_shape
        #(#places)*
        #finish
        #dynamic
    })
}

impl ShapeInput {
    fn parse(input: DeriveInput) -> syn::Result<Self> {
        let named = match &input.data {
            Data::Struct(DataStruct {
                fields: Fields::Named(named),
                ..
            }) => named.named.clone(),
            Data::Struct(_) => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "FieldShape requires a struct with named fields",
                ))
            }
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "FieldShape cannot be derived for enums",
                ))
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "FieldShape cannot be derived for unions",
                ))
            }
        };

        for param in &input.generics.params {
            match param {
                GenericParam::Type(_) => {}
                GenericParam::Lifetime(lifetime) => {
                    return Err(syn::Error::new_spanned(
                        lifetime,
                        "FieldShape does not support lifetime parameters",
                    ))
                }
                GenericParam::Const(param) => {
                    return Err(syn::Error::new_spanned(
                        param,
                        "FieldShape does not support const parameters",
                    ))
                }
            }
        }

        let fields = named
            .into_iter()
            .enumerate()
            .map(|(index, field)| ShapeField {
                // named fields always carry an ident
                ident: field.ident.unwrap_or_else(|| format_ident!("field{}", index)),
                ty: field.ty,
                slot: format_ident!("__S{}", index),
            })
            .collect::<Vec<_>>();
        check_distinct(&fields)?;

        Ok(Self {
            vis: input.vis,
            args_ident: format_ident!("{}Args", input.ident),
            ident: input.ident,
            generics: input.generics,
            fields,
        })
    }

    fn type_params(&self) -> Vec<&Ident> {
        self.generics.type_params().map(|param| &param.ident).collect()
    }

    /// `FooArgs<T.., slots..>`
    fn args_type<S: ToTokens>(&self, slots: &[S]) -> TokenStream {
        let args_ident = &self.args_ident;
        let type_params = self.type_params();
        quote!(#args_ident<#(#type_params,)* #(#slots),*>)
    }

    /// The shape's generics plus one type parameter per listed slot.
    fn generics_with_slots<'a>(&self, slots: impl IntoIterator<Item = &'a Ident>) -> Generics {
        let mut generics = self.generics.clone();
        for slot in slots {
            generics.params.push(GenericParam::Type(parse_quote!(#slot)));
        }
        generics
    }

    fn args_struct(&self) -> TokenStream {
        let vis = &self.vis;
        let args_ident = &self.args_ident;
        let type_params = self.type_params();
        let slots: Vec<_> = self.fields.iter().map(|f| &f.slot).collect();
        let idents: Vec<_> = self.fields.iter().map(|f| &f.ident).collect();
        let doc = format!(
            "Argument slots for [`{}`], one per field. Build it with `FieldShape::args`.",
            self.ident
        );

        quote! {
            #[doc = #doc]
            #vis struct #args_ident<#(#type_params,)* #(#slots),*> {
                #(#idents: #slots,)*
                __marker: ::core::marker::PhantomData<fn() -> (#(#type_params,)*)>,
            }
        }
    }

    fn field_shape_impl(&self) -> TokenStream {
        let ident = &self.ident;
        let args_ident = &self.args_ident;
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();
        let vacant: Vec<TokenStream> = self
            .fields
            .iter()
            .map(|_| quote!(::tm_core::Vacant))
            .collect();
        let args_type = self.args_type(&vacant);
        let idents = self.fields.iter().map(|f| &f.ident);
        let count = self.fields.len();

        quote! {
            impl #impl_generics ::tm_core::FieldShape for #ident #ty_generics #where_clause {
                type Args = #args_type;

                const FIELD_COUNT: usize = #count;

                fn args() -> Self::Args {
                    #args_ident {
                        #(#idents: ::tm_core::Vacant,)*
                        __marker: ::core::marker::PhantomData,
                    }
                }
            }
        }
    }

    fn place_impl(&self, index: usize) -> TokenStream {
        let args_ident = &self.args_ident;
        let target = &self.fields[index];
        let target_ident = &target.ident;
        let target_ty = &target.ty;
        let name = LitStr::new(&target_ident.to_string(), target_ident.span());

        let generics = self.generics_with_slots(
            self.fields
                .iter()
                .filter(|f| f.ident != target.ident)
                .map(|f| &f.slot),
        );
        let (impl_generics, _, where_clause) = generics.split_for_impl();

        let slots_with = |filled: TokenStream| -> Vec<TokenStream> {
            self.fields
                .iter()
                .enumerate()
                .map(|(i, f)| {
                    if i == index {
                        filled.clone()
                    } else {
                        f.slot.to_token_stream()
                    }
                })
                .collect()
        };
        let self_type = self.args_type(&slots_with(quote!(::tm_core::Vacant)));
        let output_type = self.args_type(&slots_with(quote!(::tm_core::Filled<#target_ty>)));
        let others: Vec<_> = self
            .fields
            .iter()
            .filter(|f| f.ident != target.ident)
            .map(|f| &f.ident)
            .collect();

        quote! {
            impl #impl_generics ::tm_core::Place<#target_ty> for #self_type #where_clause {
                type Output = #output_type;

                fn place(self, arg: #target_ty) -> Self::Output {
                    ::tm_core::tracing::trace!(
                        field = #name,
                        argument = ::core::any::type_name::<#target_ty>(),
                        "placed argument"
                    );
                    #args_ident {
                        #(#others: self.#others,)*
                        #target_ident: ::tm_core::Filled(arg),
                        __marker: ::core::marker::PhantomData,
                    }
                }
            }
        }
    }

    fn finish_impl(&self) -> TokenStream {
        let ident = &self.ident;
        let (_, ty_generics, _) = self.generics.split_for_impl();
        let mut generics = self.generics_with_slots(self.fields.iter().map(|f| &f.slot));
        {
            let where_clause = generics.make_where_clause();
            for field in &self.fields {
                let slot = &field.slot;
                let ty = &field.ty;
                where_clause
                    .predicates
                    .push(parse_quote!(#slot: ::tm_core::Slot<#ty>));
            }
        }
        let (impl_generics, _, where_clause) = generics.split_for_impl();
        let slots: Vec<_> = self.fields.iter().map(|f| &f.slot).collect();
        let self_type = self.args_type(&slots);
        let resolved = self.fields.iter().map(|f| {
            let field = &f.ident;
            let slot = &f.slot;
            let ty = &f.ty;
            quote!(#field: <#slot as ::tm_core::Slot<#ty>>::resolve(self.#field))
        });

        quote! {
            impl #impl_generics ::tm_core::Finish for #self_type #where_clause {
                type Output = #ident #ty_generics;

                fn finish(self) -> Self::Output {
                    #ident {
                        #(#resolved,)*
                    }
                }
            }
        }
    }

    fn dynamic_impl(&self) -> TokenStream {
        let ident = &self.ident;
        let mut generics = self.generics.clone();
        {
            let type_params: Vec<Ident> = self
                .generics
                .type_params()
                .map(|param| param.ident.clone())
                .collect();
            let where_clause = generics.make_where_clause();
            for param in type_params {
                where_clause.predicates.push(parse_quote!(#param: 'static));
            }
            for field in &self.fields {
                let ty = &field.ty;
                where_clause
                    .predicates
                    .push(parse_quote!(#ty: ::core::default::Default + 'static));
            }
        }
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
        let descriptors = self.fields.iter().enumerate().map(|(index, f)| {
            let ty = &f.ty;
            let name = LitStr::new(&f.ident.to_string(), f.ident.span());
            quote!(::tm_core::FieldDescriptor::of::<#ty>(#index, #name))
        });
        let resolved = self.fields.iter().enumerate().map(|(index, f)| {
            let field = &f.ident;
            let ty = &f.ty;
            quote!(#field: ::tm_core::matcher::resolve::<#ty>(&mut args, &descriptors[#index]))
        });

        quote! {
            impl #impl_generics ::tm_core::DynamicShape for #ident #ty_generics #where_clause {
                fn descriptors() -> ::std::vec::Vec<::tm_core::FieldDescriptor> {
                    ::std::vec![#(#descriptors),*]
                }

                #[allow(unused_mut, unused_variables)]
                fn from_arg_set(mut args: ::tm_core::ArgSet) -> ::tm_core::Result<Self> {
                    let descriptors = <Self as ::tm_core::DynamicShape>::descriptors();
                    ::tm_core::matcher::validate(
                        ::core::any::type_name::<Self>(),
                        &descriptors,
                        &args,
                    )?;
                    ::core::result::Result::Ok(#ident {
                        #(#resolved,)*
                    })
                }
            }
        }
    }
}

fn check_distinct(fields: &[ShapeField]) -> syn::Result<()> {
    let mut seen: Vec<(String, &Ident)> = Vec::with_capacity(fields.len());
    for field in fields {
        let key = field.ty.to_token_stream().to_string();
        if let Some((_, first)) = seen.iter().find(|(seen_key, _)| *seen_key == key) {
            return Err(syn::Error::new_spanned(
                &field.ty,
                format!(
                    "field `{}` has the same type as field `{}`; field types of a shape must be distinct",
                    field.ident, first
                ),
            ));
        }
        seen.push((key, &field.ident));
    }
    Ok(())
}
