use super::Expand;
use crate::names::RelationDelete;

use dbg_core::schema::Table;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Types shared by every delete procedure.
    pub(crate) fn expand_delete_support(&self) -> TokenStream {
        let rt = &self.rt;

        quote! {
            /// Rows visited by one top-level delete.
            #[derive(Debug, Default)]
            pub struct DeleteScope {
                visited: ::std::collections::BTreeSet<(&'static str, ::std::vec::Vec<i64>)>,
            }

            impl DeleteScope {
                pub fn new() -> DeleteScope {
                    DeleteScope::default()
                }

                /// Records `row`, returning `false` if it was already visited.
                /// Rows with a primary key that is not integer valued are not
                /// tracked.
                pub fn visit<T: #rt::Table>(&mut self, row: &T) -> bool {
                    let mut key = ::std::vec::Vec::new();

                    for column in T::COLUMNS.iter().filter(|column| column.primary_key) {
                        match row.int_column(column.name) {
                            ::std::option::Option::Some(value) => key.push(value),
                            ::std::option::Option::None => return true,
                        }
                    }

                    self.visited.insert((T::NAME, key))
                }

                pub fn len(&self) -> usize {
                    self.visited.len()
                }

                pub fn is_empty(&self) -> bool {
                    self.visited.is_empty()
                }
            }

            /// Outcome of an entity-delete procedure.
            #[derive(Debug, Clone, PartialEq)]
            pub struct Deleted {
                /// Storage name of the deleted row's table
                pub table: &'static str,

                /// Result of each relation-delete procedure, keyed by the
                /// related table's lowercase name
                pub relations: ::std::vec::Vec<(
                    &'static str,
                    ::std::option::Option<::std::vec::Vec<Unlinked>>,
                )>,
            }

            impl Deleted {
                pub fn get(
                    &self,
                    relation: &str,
                ) -> ::std::option::Option<&::std::option::Option<::std::vec::Vec<Unlinked>>> {
                    self.relations
                        .iter()
                        .find(|(name, _)| *name == relation)
                        .map(|(_, unlinked)| unlinked)
                }
            }

            /// Outcome of removing one link row of an owned relation.
            #[derive(Debug, Clone, PartialEq)]
            pub struct Unlinked {
                pub link: ::std::option::Option<Deleted>,

                /// Result of deleting the owned row the link pointed at
                pub target: ::std::option::Option<Deleted>,
            }
        }
    }

    /// `delete_<table>`: runs every relation-delete procedure of the table,
    /// then deletes the row itself.
    pub(crate) fn expand_entity_delete(&self, table: &Table) -> TokenStream {
        let rt = &self.rt;
        let names = &self.names.tables[&table.name];
        let struct_name = &names.struct_name;
        let delete_fn = &names.delete_fn;

        let relations: Vec<_> = self
            .names
            .relation_deletes
            .iter()
            .filter(|relation| relation.managing == table.name)
            .collect();

        if relations.is_empty() {
            return quote! {
                pub fn #delete_fn<__S: #rt::Session>(
                    session: &mut __S,
                    scope: &mut DeleteScope,
                    row: &#struct_name,
                ) -> ::std::result::Result<::std::option::Option<Deleted>, __S::Error> {
                    if scope.visit(row) {
                        session.delete(row)?;
                    }

                    ::std::result::Result::Ok(::std::option::Option::None)
                }
            };
        }

        let lowers = relations.iter().map(|relation| &relation.lower);
        let ref_accessors = relations
            .iter()
            .map(|relation| &names.accessors[&relation.ref_accessor]);
        let relation_fns = relations.iter().map(|relation| &relation.fn_name);

        quote! {
            pub fn #delete_fn<__S: #rt::Session>(
                session: &mut __S,
                scope: &mut DeleteScope,
                row: &#struct_name,
            ) -> ::std::result::Result<::std::option::Option<Deleted>, __S::Error> {
                if !scope.visit(row) {
                    return ::std::result::Result::Ok(::std::option::Option::None);
                }

                let mut deleted = Deleted {
                    table: <#struct_name as #rt::Table>::NAME,
                    relations: ::std::vec::Vec::new(),
                };

                #(
                    let links = row.#ref_accessors(session)?;
                    deleted.relations.push((#lowers, #relation_fns(session, scope, &links)?));
                )*

                session.delete(row)?;

                ::std::result::Result::Ok(::std::option::Option::Some(deleted))
            }
        }
    }

    /// `delete_<deleted>_from_<managing>`: removes the given link rows and,
    /// where `managing` owns the other side, the rows they point at.
    pub(crate) fn expand_relation_delete(&self, relation: &RelationDelete) -> TokenStream {
        let rt = &self.rt;
        let fn_name = &relation.fn_name;
        let link = &self.names.tables[&relation.link];
        let link_struct = &link.struct_name;
        let link_delete = &link.delete_fn;

        let Some(owned_accessor) = &relation.owned_accessor else {
            return quote! {
                pub fn #fn_name<__S: #rt::Session>(
                    session: &mut __S,
                    scope: &mut DeleteScope,
                    links: &[#link_struct],
                ) -> ::std::result::Result<
                    ::std::option::Option<::std::vec::Vec<Unlinked>>,
                    __S::Error,
                > {
                    for link in links {
                        #link_delete(session, scope, link)?;
                    }

                    ::std::result::Result::Ok(::std::option::Option::None)
                }
            };
        };

        let target = &link.accessors[owned_accessor];
        let target_delete = &self.names.tables[&relation.deleted].delete_fn;

        quote! {
            pub fn #fn_name<__S: #rt::Session>(
                session: &mut __S,
                scope: &mut DeleteScope,
                links: &[#link_struct],
            ) -> ::std::result::Result<
                ::std::option::Option<::std::vec::Vec<Unlinked>>,
                __S::Error,
            > {
                let mut unlinked = ::std::vec::Vec::with_capacity(links.len());

                for link in links {
                    let target = link.#target(session)?;
                    let link_deleted = #link_delete(session, scope, link)?;

                    let target_deleted = match target {
                        ::std::option::Option::Some(target) => #target_delete(session, scope, &target)?,
                        ::std::option::Option::None => ::std::option::Option::None,
                    };

                    unlinked.push(Unlinked {
                        link: link_deleted,
                        target: target_deleted,
                    });
                }

                ::std::result::Result::Ok(::std::option::Option::Some(unlinked))
            }
        }
    }
}
