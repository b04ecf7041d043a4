use crate::param::Param;
use std::sync::Arc;

/// One builder call's contribution: a literal fragment and its bind
/// arguments, in the order their `?` markers appear in the fragment.
#[derive(Clone, Debug, Default)]
pub struct Component {
    pub(crate) fragment: String,
    pub(crate) args: Vec<Param>,
}

impl Component {
    pub(crate) fn new(fragment: String, args: Vec<Param>) -> Self {
        Self { fragment, args }
    }

    /// The SQL text as stored (WHERE/HAVING fragments include their parentheses).
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// The bind arguments of this component.
    pub fn args(&self) -> &[Param] {
        &self.args
    }
}

/// Append-only list of components for one clause.
///
/// The backing slice is shared between statements derived from each other and
/// is never written after creation. Appending allocates a fresh slice of
/// exactly `len + 1`, so siblings derived from the same parent cannot observe
/// each other's appends.
#[derive(Clone, Debug, Default)]
pub struct Clause {
    items: Option<Arc<[Component]>>,
}

impl Clause {
    /// New clause with `component` added at the end. `self` is left unchanged.
    pub(crate) fn appended(&self, component: Component) -> Clause {
        let items: Arc<[Component]> = self
            .iter()
            .cloned()
            .chain(std::iter::once(component))
            .collect();
        Clause { items: Some(items) }
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.items.as_ref().map_or(0, |items| items.len())
    }

    /// True when no component was added.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Components in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.as_slice().iter()
    }

    /// Components as a slice, in insertion order.
    pub fn as_slice(&self) -> &[Component] {
        self.items.as_deref().unwrap_or(&[])
    }

    /// Whether both clauses share the same backing storage.
    #[cfg(test)]
    pub(crate) fn shares_storage(&self, other: &Clause) -> bool {
        match (&self.items, &other.items) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    /// Fragments joined with `joiner`.
    pub(crate) fn joined(&self, joiner: &str) -> String {
        let mut out = String::new();
        for (i, component) in self.iter().enumerate() {
            if i > 0 {
                out.push_str(joiner);
            }
            out.push_str(&component.fragment);
        }
        out
    }
}

impl<'a> IntoIterator for &'a Clause {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
