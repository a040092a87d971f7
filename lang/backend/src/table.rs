use std::collections::HashMap;

use indexmap::IndexMap;

use jnigen_lang_ast::{InterfaceId, JavaType, MethodDecl, Param};

use crate::naming::{NamingMode, compute_flat_name, method_descriptor};
use crate::normalize::{NormalizeContext, normalize_type};
use crate::result::GenerateError;

/// One declared method bound to an entry of the flat binding table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingEntry {
    pub owner: InterfaceId,
    /// The declaration as written, with precise types.
    pub decl: MethodDecl,
    pub flat_name: String,
    /// Parameters of the table entry, normalized for the binding table.
    pub params: Vec<Param>,
    /// Return type of the table entry, normalized for the binding table.
    pub ret: JavaType,
}

impl BindingEntry {
    pub fn new(owner: InterfaceId, type_name: &str, decl: MethodDecl, mode: NamingMode) -> Self {
        let flat_name = compute_flat_name(&owner.package, type_name, &decl.name, mode);
        let params = decl
            .params
            .iter()
            .map(|Param { name, typ }| Param {
                name: name.clone(),
                typ: normalize_type(typ, NormalizeContext::BindingTable),
            })
            .collect();
        let ret = normalize_type(&decl.ret, NormalizeContext::BindingTable);
        BindingEntry { owner, decl, flat_name, params, ret }
    }

    /// The dotted descriptor `package.Type.method` of the declared method.
    pub fn descriptor(&self) -> String {
        let type_name = self.owner.enclosing.as_deref().unwrap_or(&self.owner.name);
        method_descriptor(&self.owner.package, type_name, &self.decl.name)
    }

    /// Whether a forwarding method has to cast the result of this entry back to the declared type.
    pub fn needs_cast(&self) -> bool {
        !self.decl.ret.is_void() && self.ret != self.decl.ret
    }
}

/// The entries contributed by one natives interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingGroup {
    pub id: InterfaceId,
    pub is_public: bool,
    /// Entries by declared method name, in declaration order.
    pub entries: IndexMap<String, BindingEntry>,
}

/// The shared binding table of one processing unit.
///
/// Groups are kept in the order in which their interfaces were discovered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingTable {
    groups: IndexMap<InterfaceId, BindingGroup>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_group(&self, id: &InterfaceId) -> bool {
        self.groups.contains_key(id)
    }

    /// Start a new, empty group. Returns `false` if the interface already has a group.
    pub fn insert_group(&mut self, id: InterfaceId, is_public: bool) -> bool {
        if self.groups.contains_key(&id) {
            return false;
        }
        let group = BindingGroup { id: id.clone(), is_public, entries: IndexMap::new() };
        self.groups.insert(id, group);
        true
    }

    /// Add an entry to the group of its owner. The first entry of a method name wins: if the name
    /// is already bound, the table is left unchanged and `false` is returned.
    pub fn insert_entry(&mut self, entry: BindingEntry) -> bool {
        let Some(group) = self.groups.get_mut(&entry.owner) else {
            return false;
        };
        if group.entries.contains_key(&entry.decl.name) {
            return false;
        }
        log::trace!("Binding {} to {}", entry.descriptor(), entry.flat_name);
        group.entries.insert(entry.decl.name.clone(), entry);
        true
    }

    pub fn lookup(&self, id: &InterfaceId, method: &str) -> Option<&BindingEntry> {
        self.groups.get(id).and_then(|group| group.entries.get(method))
    }

    pub fn groups(&self) -> impl Iterator<Item = &BindingGroup> {
        self.groups.values()
    }

    pub fn entries(&self) -> impl Iterator<Item = &BindingEntry> {
        self.groups.values().flat_map(|group| group.entries.values())
    }

    pub fn len(&self) -> usize {
        self.groups.values().map(|group| group.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Report every pair of entries that share a flat name.
    ///
    /// Descriptor names never collide. Hashed names are truncated digests and may.
    pub fn collisions(&self) -> Vec<GenerateError> {
        let mut seen: HashMap<&str, &BindingEntry> = HashMap::new();
        let mut errors = Vec::new();
        for entry in self.entries() {
            match seen.get(entry.flat_name.as_str()) {
                Some(first) => errors.push(GenerateError::FlatNameCollision {
                    flat_name: entry.flat_name.clone(),
                    first: first.descriptor(),
                    second: entry.descriptor(),
                }),
                None => {
                    seen.insert(entry.flat_name.as_str(), entry);
                }
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use jnigen_lang_ast::{OBJECT, Primitive, THROWABLE};

    use super::*;

    fn foo_natives() -> InterfaceId {
        InterfaceId {
            package: "p".to_owned(),
            enclosing: Some("Foo".to_owned()),
            name: "Natives".to_owned(),
        }
    }

    fn entry(decl: MethodDecl, mode: NamingMode) -> BindingEntry {
        BindingEntry::new(foo_natives(), "Foo", decl, mode)
    }

    #[test]
    fn test_entry_signature_is_normalized() {
        let decl = MethodDecl::new("get", JavaType::declared("p.Bar"))
            .param("s", JavaType::declared("java.lang.String"))
            .param("o", JavaType::declared("p.Baz"));
        let entry = entry(decl, NamingMode::Descriptor);

        assert_eq!(entry.flat_name, "p_Foo_get");
        assert_eq!(entry.descriptor(), "p.Foo.get");
        assert_eq!(entry.params[0].typ, JavaType::declared("java.lang.String"));
        assert_eq!(entry.params[1].typ, JavaType::declared(OBJECT));
        assert_eq!(entry.ret, JavaType::declared(OBJECT));
        assert!(entry.needs_cast());
    }

    #[test]
    fn test_no_cast_for_primitives_and_exempt_types() {
        let int = MethodDecl::new("bar", JavaType::Primitive(Primitive::Int));
        assert!(!entry(int, NamingMode::Descriptor).needs_cast());

        let throwable = MethodDecl::new("fail", JavaType::declared(THROWABLE));
        let throwable = entry(throwable, NamingMode::Hashed);
        assert_eq!(throwable.ret, JavaType::declared(THROWABLE));
        assert!(!throwable.needs_cast());
    }

    #[test]
    fn test_first_entry_wins() {
        let mut table = BindingTable::new();
        assert!(table.insert_group(foo_natives(), false));
        assert!(!table.insert_group(foo_natives(), true));

        let first = MethodDecl::new("read", JavaType::Primitive(Primitive::Int));
        let long = JavaType::Primitive(Primitive::Long);
        let second = MethodDecl::new("read", JavaType::Void).param("x", long);
        assert!(table.insert_entry(entry(first.clone(), NamingMode::Descriptor)));
        assert!(!table.insert_entry(entry(second, NamingMode::Descriptor)));

        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup(&foo_natives(), "read").map(|e| &e.decl), Some(&first));
    }

    #[test]
    fn test_entry_without_group_is_rejected() {
        let mut table = BindingTable::new();
        let decl = MethodDecl::new("bar", JavaType::Void);
        assert!(!table.insert_entry(entry(decl, NamingMode::Descriptor)));
        assert!(table.is_empty());
    }

    #[test]
    fn test_collisions() {
        let mut table = BindingTable::new();
        table.insert_group(foo_natives(), false);
        let mut a = entry(MethodDecl::new("a", JavaType::Void), NamingMode::Hashed);
        let mut b = entry(MethodDecl::new("b", JavaType::Void), NamingMode::Hashed);
        a.flat_name = "Mclash".to_owned();
        b.flat_name = "Mclash".to_owned();
        table.insert_entry(a);
        table.insert_entry(b);

        let errors = table.collisions();
        assert_eq!(
            errors,
            vec![GenerateError::FlatNameCollision {
                flat_name: "Mclash".to_owned(),
                first: "p.Foo.a".to_owned(),
                second: "p.Foo.b".to_owned(),
            }]
        );
    }
}
