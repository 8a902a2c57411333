use super::Expand;
use crate::util;

use dbg_core::schema::{ColumnType, Field, Table};

use proc_macro2::{Span, TokenStream};
use quote::quote;

impl Expand<'_> {
    pub(crate) fn expand_table(&self, table: &Table) -> TokenStream {
        let struct_name = &self.names.tables[&table.name].struct_name;
        let fields = table.columns().map(|field| {
            let name = self.field_name(table, field);
            let ty = self.field_ty(field);

            quote!(pub #name: #ty,)
        });

        let table_impl = self.expand_table_impl(table);
        let display_impl = self.expand_display_impl(table);
        let accessors = self.expand_accessors(table);

        quote! {
            #[derive(Debug, Clone, PartialEq)]
            pub struct #struct_name {
                #( #fields )*
            }

            #table_impl
            #display_impl
            #accessors
        }
    }

    fn expand_table_impl(&self, table: &Table) -> TokenStream {
        let rt = &self.rt;
        let struct_name = &self.names.tables[&table.name].struct_name;
        let table_name = &table.table_name;
        let columns = table.columns().map(|field| self.expand_column(field));

        let int_columns = table
            .columns()
            .filter(|field| field.ty.is_integer())
            .map(|field| {
                let column = &field.name;
                let name = self.field_name(table, field);

                if field.nullable {
                    quote!(#column => self.#name.map(i64::from),)
                } else {
                    quote!(#column => ::std::option::Option::Some(i64::from(self.#name)),)
                }
            });

        quote! {
            impl #rt::Table for #struct_name {
                const NAME: &'static str = #table_name;

                const COLUMNS: &'static [#rt::Column] = &[
                    #( #columns ),*
                ];

                fn int_column(&self, column: &str) -> ::std::option::Option<i64> {
                    match column {
                        #( #int_columns )*
                        _ => ::std::option::Option::None,
                    }
                }
            }
        }
    }

    fn expand_column(&self, field: &Field) -> TokenStream {
        let rt = &self.rt;
        let name = &field.name;
        let primary_key = field.primary_key;
        let nullable = field.nullable;
        let unique = field.unique;
        let default = util::opt_str(field.default.as_deref());
        let sequence = util::opt_str(field.sequence.as_deref());
        let foreign_key = util::opt_str(
            field
                .foreign_key
                .as_ref()
                .map(ToString::to_string)
                .as_deref(),
        );

        let ty = match &field.ty {
            ColumnType::Integer => quote!(Integer),
            ColumnType::SmallInteger => quote!(SmallInteger),
            ColumnType::String(Some(len)) => quote!(String(::std::option::Option::Some(#len))),
            ColumnType::String(None) => quote!(String(::std::option::Option::None)),
            ColumnType::DateTime => quote!(DateTime),
            ColumnType::Date => quote!(Date),
            ColumnType::Enum(symbol) => quote!(Enum(#symbol)),
        };

        quote! {
            #rt::Column {
                name: #name,
                ty: #rt::ColumnType::#ty,
                primary_key: #primary_key,
                nullable: #nullable,
                unique: #unique,
                default: #default,
                sequence: #sequence,
                foreign_key: #foreign_key,
            }
        }
    }

    /// Renders the repr fields as `Table{ a:.., b:.. }`, each value with its
    /// `Debug` form.
    fn expand_display_impl(&self, table: &Table) -> TokenStream {
        let struct_name = &self.names.tables[&table.name].struct_name;

        let parts: Vec<_> = table
            .repr
            .fields
            .iter()
            .map(|field| format!("{field}:{{:?}}"))
            .collect();
        let format = syn::LitStr::new(
            &format!("{}{{{{ {} }}}}", table.name, parts.join(", ")),
            Span::call_site(),
        );

        let values = table
            .repr
            .fields
            .iter()
            .map(|field| &self.names.tables[&table.name].fields[field]);

        quote! {
            impl ::std::fmt::Display for #struct_name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    write!(f, #format, #( self.#values ),*)
                }
            }
        }
    }

    pub(super) fn field_name(&self, table: &Table, field: &Field) -> &syn::Ident {
        &self.names.tables[&table.name].fields[&field.name]
    }

    fn field_ty(&self, field: &Field) -> TokenStream {
        let rt = &self.rt;

        let ty = match &field.ty {
            ColumnType::Integer => quote!(i64),
            ColumnType::SmallInteger => quote!(i16),
            ColumnType::String(_) => quote!(::std::string::String),
            ColumnType::DateTime => quote!(#rt::DateTime),
            ColumnType::Date => quote!(#rt::Date),
            ColumnType::Enum(symbol) => {
                let ident = &self.names.enums[symbol];
                quote!(#ident)
            }
        };

        if field.nullable {
            quote!(::std::option::Option<#ty>)
        } else {
            ty
        }
    }
}
