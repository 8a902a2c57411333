use super::Expand;

use dbg_core::schema::{Relationship, Table};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_accessors(&self, table: &Table) -> TokenStream {
        if table.relation.is_empty() {
            return quote!();
        }

        let struct_name = &self.names.tables[&table.name].struct_name;

        let methods = table.relation.iter().map(|(name, relation)| {
            if relation.many {
                self.expand_collection_accessor(table, name, relation)
            } else {
                self.expand_back_reference(table, name, relation)
            }
        });

        quote! {
            impl #struct_name {
                #( #methods )*
            }
        }
    }

    /// Lists the link rows referencing this row.
    fn expand_collection_accessor(
        &self,
        table: &Table,
        name: &str,
        relation: &Relationship,
    ) -> TokenStream {
        let rt = &self.rt;
        let method = &self.names.tables[&table.name].accessors[name];
        let target = &self.names.tables[&relation.target].struct_name;
        let column = &relation.column;
        let id = &self.names.tables[&table.name].fields["id"];

        quote! {
            pub fn #method<__S: #rt::Session>(
                &self,
                session: &mut __S,
            ) -> ::std::result::Result<::std::vec::Vec<#target>, __S::Error> {
                session.select::<#target>(#column, i64::from(self.#id))
            }
        }
    }

    /// Loads the row a link row points at. `None` if it no longer exists.
    fn expand_back_reference(
        &self,
        table: &Table,
        name: &str,
        relation: &Relationship,
    ) -> TokenStream {
        let rt = &self.rt;
        let method = &self.names.tables[&table.name].accessors[name];
        let target = &self.names.tables[&relation.target].struct_name;
        let column = &self.names.tables[&table.name].fields[&relation.column];

        quote! {
            pub fn #method<__S: #rt::Session>(
                &self,
                session: &mut __S,
            ) -> ::std::result::Result<::std::option::Option<#target>, __S::Error> {
                ::std::result::Result::Ok(
                    session.select::<#target>("id", self.#column)?.into_iter().next()
                )
            }
        }
    }
}
