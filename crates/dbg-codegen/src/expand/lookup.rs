use super::Expand;

use dbg_core::schema::Cardinality;

use indexmap::IndexMap;
use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Static datasets describing the relation graph.
    pub(crate) fn expand_lookup(&self) -> TokenStream {
        let relations = &self.schema.relations;

        let relation_spec = self.schema.tables().filter_map(|table| {
            let related: Vec<_> = relations.related(&table.name).collect();

            if related.is_empty() {
                return None;
            }

            let name = &table.name;
            Some(quote!((#name, &[ #( #related ),* ])))
        });

        let ref_table = pair_map(&relations.ref_table);
        let destruction = pair_map(&relations.destruction);
        let lr_type = pair_map(&relations.lr_type);

        let field_spec = self.schema.tables().map(|table| {
            let name = &table.name;
            let fields = table.columns().map(|field| &field.name);

            quote!((#name, &[ #( #fields ),* ]))
        });

        let cardinality = relations.links.iter().map(|link| {
            let name = &link.name;
            let left = cardinality(link.left.cardinality);
            let right = cardinality(link.right.cardinality);

            quote!((#name, (#left, #right)))
        });

        let delete_procedures = self.schema.tables().map(|table| {
            let name = &table.name;
            let delete_fn = self.names.tables[&table.name].delete_fn.to_string();

            quote!((#name, #delete_fn))
        });

        let relation_delete_procedures = self.relation_delete_procedures();

        quote! {
            pub mod lookup {
                /// Table → lowercase names of related tables
                pub const RELATION_SPEC: &[(&str, &[&str])] = &[ #( #relation_spec ),* ];

                /// (A, B) → accessor on A listing the link rows to B
                pub const REF_TABLE: &[(&str, &[(&str, &str)])] = #ref_table;

                pub const LR_REF: &[(&str, &[(&str, &str)])] = REF_TABLE;

                /// (owner, owned) → link row field naming the owned side
                pub const RELATION_SPEC_FOR_DESTRUCTION: &[(&str, &[(&str, &str)])] = #destruction;

                /// (A, B) → link entity
                pub const LR_TYPE: &[(&str, &[(&str, &str)])] = #lr_type;

                /// Table → column names
                pub const FIELD_SPEC: &[(&str, &[&str])] = &[ #( #field_spec ),* ];

                /// Link entity → (left, right) cardinality
                pub const CARDINALITY: &[(&str, (&str, &str))] = &[ #( #cardinality ),* ];

                /// Table → entity-delete procedure
                pub const DELETE_PROCEDURES: &[(&str, &str)] = &[ #( #delete_procedures ),* ];

                /// (managing, related) → relation-delete procedure
                pub const RELATION_DELETE_PROCEDURES: &[(&str, &[(&str, &str)])] =
                    #relation_delete_procedures;

                pub fn get<V: Copy>(map: &[(&str, V)], key: &str) -> ::std::option::Option<V> {
                    map.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
                }

                pub fn get_pair<V: Copy>(
                    map: &[(&str, &[(&str, V)])],
                    a: &str,
                    b: &str,
                ) -> ::std::option::Option<V> {
                    get(get(map, a)?, b)
                }
            }
        }
    }

    fn relation_delete_procedures(&self) -> TokenStream {
        let mut map: IndexMap<String, IndexMap<String, String>> = IndexMap::new();

        for relation in &self.names.relation_deletes {
            map.entry(relation.managing.clone())
                .or_default()
                .insert(relation.deleted.clone(), relation.fn_name.to_string());
        }

        pair_map(&map)
    }
}

fn pair_map(map: &IndexMap<String, IndexMap<String, String>>) -> TokenStream {
    let entries = map.iter().map(|(a, inner)| {
        let keys = inner.keys();
        let values = inner.values();

        quote!((#a, &[ #( (#keys, #values) ),* ]))
    });

    quote!(&[ #( #entries ),* ])
}

fn cardinality(cardinality: Cardinality) -> &'static str {
    match cardinality {
        Cardinality::One => "one",
        Cardinality::Many => "many",
    }
}
