use indexmap::IndexMap;
use janus_cpp::CppType;

/// Names synthesized for anonymous types, scoped to one compilation unit.
///
/// Lookup is by structural identity: two descriptors the front end considers
/// the same type resolve to the same name. Once assigned, a name is never
/// reassigned or evicted for the rest of the unit.
#[derive(Debug, Default)]
pub struct AnonymousTypes {
    names: IndexMap<CppType, String>,
    counter: usize,
}

impl AnonymousTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// The name already assigned to a structurally equal descriptor, if any.
    pub fn lookup(&self, ty: &CppType) -> Option<&str> {
        self.names.get(ty).map(String::as_str)
    }

    /// The name for this descriptor, allocating `AnonClass<N>` (zero-based)
    /// on the first miss.
    pub fn name_for(&mut self, ty: &CppType) -> &str {
        if !self.names.contains_key(ty) {
            let name = format!("AnonClass{}", self.counter);
            self.counter += 1;
            self.names.insert(ty.clone(), name);
        }
        self.names[ty].as_str()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
