use super::name;

use indexmap::{IndexMap, IndexSet};

/// Bookkeeping derived from every relation statement.
///
/// Each map is keyed by table symbol. Entries are always inserted in
/// reciprocal pairs, except for `destruction` which only records the
/// directions in which ownership holds.
#[derive(Debug, Default)]
pub struct RelationGraph {
    /// Table → lowercase names of related tables (`RelationSpec`)
    pub relation_spec: IndexMap<String, IndexSet<String>>,

    /// (A, B) → accessor on A listing the link rows to B (`RefTable`)
    pub ref_table: IndexMap<String, IndexMap<String, String>>,

    /// (owner, owned) → link row field naming the owned side
    /// (`RelationSpecForDestruction`)
    pub destruction: IndexMap<String, IndexMap<String, String>>,

    /// (A, B) → link entity symbol (`LRType`)
    pub lr_type: IndexMap<String, IndexMap<String, String>>,

    /// Relations in declaration order
    pub links: Vec<Link>,

    /// Lowercase name → declared table symbol
    symbols: IndexMap<String, String>,
}

/// A resolved relation statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    /// Symbol of the synthesized link entity
    pub name: String,
    pub left: Endpoint,
    pub right: Endpoint,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    /// Declared table symbol
    pub table: String,

    /// Lowercased symbol
    pub lower: String,

    /// Number of `^` marks
    pub weight: usize,

    pub cardinality: Cardinality,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    One,
    Many,
}

/// Direction(s) in which deletes cascade across a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    None,
    Left,
    Right,
    Mutual,
}

impl RelationGraph {
    /// Lowercase names of the tables related to `table`, in declaration
    /// order.
    pub fn related(&self, table: &str) -> impl Iterator<Item = &str> + '_ {
        self.relation_spec
            .get(table)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    pub fn ref_table(&self, from: &str, to: &str) -> Option<&str> {
        get_pair(&self.ref_table, from, to)
    }

    /// Same as [`ref_table`](Self::ref_table).
    pub fn lr_ref(&self, from: &str, to: &str) -> Option<&str> {
        self.ref_table(from, to)
    }

    /// Link row field naming `owned`, if `owner` owns it.
    pub fn destruction(&self, owner: &str, owned: &str) -> Option<&str> {
        get_pair(&self.destruction, owner, owned)
    }

    pub fn owns(&self, owner: &str, owned: &str) -> bool {
        self.destruction(owner, owned).is_some()
    }

    pub fn lr_type(&self, a: &str, b: &str) -> Option<&str> {
        get_pair(&self.lr_type, a, b)
    }

    /// Resolve a lowercase name to a declared table symbol.
    pub fn resolve(&self, lower: &str) -> Option<&str> {
        self.symbols.get(lower).map(String::as_str)
    }

    pub fn symbols(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.symbols.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The relation between `a` and `b`, in either order.
    pub fn link(&self, a: &str, b: &str) -> Option<&Link> {
        let name = self.lr_type(a, b)?;
        self.links.iter().find(|link| link.name == name)
    }

    /// Register a declared table's lowercase name. Returns the symbol
    /// already registered under that name, if any.
    pub(crate) fn register(&mut self, symbol: &str) -> Option<&str> {
        let lower = name::lower(symbol);

        if self.symbols.contains_key(&lower) {
            return self.symbols.get(&lower).map(String::as_str);
        }

        self.symbols.insert(lower, symbol.to_string());
        None
    }

    pub(crate) fn insert(&mut self, link: Link) {
        let (left, right) = (&link.left, &link.right);

        self.relation_spec
            .entry(left.table.clone())
            .or_default()
            .insert(right.lower.clone());
        self.relation_spec
            .entry(right.table.clone())
            .or_default()
            .insert(left.lower.clone());

        insert_pair(&mut self.lr_type, &left.table, &right.table, &link.name);
        insert_pair(&mut self.lr_type, &right.table, &left.table, &link.name);

        insert_pair(
            &mut self.ref_table,
            &left.table,
            &right.table,
            &name::ref_name(&right.lower),
        );
        insert_pair(
            &mut self.ref_table,
            &right.table,
            &left.table,
            &name::ref_name(&left.lower),
        );

        let ownership = link.ownership();

        if matches!(ownership, Ownership::Left | Ownership::Mutual) {
            insert_pair(&mut self.destruction, &left.table, &right.table, &right.lower);
        }

        if matches!(ownership, Ownership::Right | Ownership::Mutual) {
            insert_pair(&mut self.destruction, &right.table, &left.table, &left.lower);
        }

        tracing::trace!(
            link = %link.name,
            left = %left.table,
            left_weight = left.weight,
            right = %right.table,
            right_weight = right.weight,
            ?ownership,
            "resolved relation"
        );

        self.links.push(link);
    }
}

impl Link {
    /// Ownership follows the relative weights only: the heavier side owns
    /// the lighter one, equal nonzero weights own each other and two
    /// unweighted sides own nothing.
    pub fn ownership(&self) -> Ownership {
        let (lw, rw) = (self.left.weight, self.right.weight);

        match (lw, rw) {
            (0, 0) => Ownership::None,
            _ if lw == rw => Ownership::Mutual,
            _ if lw > rw => Ownership::Left,
            _ => Ownership::Right,
        }
    }

    /// The endpoint for `table`, if it takes part in this relation.
    pub fn endpoint(&self, table: &str) -> Option<&Endpoint> {
        [&self.left, &self.right]
            .into_iter()
            .find(|endpoint| endpoint.table == table)
    }
}

impl Cardinality {
    pub(crate) fn from_count(count: usize) -> Cardinality {
        if count > 1 {
            Cardinality::Many
        } else {
            Cardinality::One
        }
    }
}

fn get_pair<'a>(
    map: &'a IndexMap<String, IndexMap<String, String>>,
    a: &str,
    b: &str,
) -> Option<&'a str> {
    map.get(a)?.get(b).map(String::as_str)
}

fn insert_pair(map: &mut IndexMap<String, IndexMap<String, String>>, a: &str, b: &str, value: &str) {
    map.entry(a.to_string())
        .or_default()
        .insert(b.to_string(), value.to_string());
}
