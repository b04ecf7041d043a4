//! Bind arguments.
//!
//! A [`Param`] is an opaque, clone-friendly handle around any value the
//! driver can bind. Statements never look inside one; they only count and
//! order them.

use std::sync::Arc;
use tokio_postgres::types::ToSql;

/// A clone-friendly bind argument using Arc.
///
/// Cloning a `Param` (and therefore a `Statement`) never copies the value
/// itself.
#[derive(Clone)]
pub struct Param(pub(crate) Arc<dyn ToSql + Send + Sync>);

impl Param {
    /// Create a new parameter from any ToSql value.
    pub fn new<T: ToSql + Send + Sync + 'static>(value: T) -> Self {
        Param(Arc::new(value))
    }

    /// Get a reference to the inner value as a ToSql trait object.
    pub fn as_ref(&self) -> &(dyn ToSql + Sync) {
        &*self.0 as &(dyn ToSql + Sync)
    }

    /// Whether two params point at the same underlying value.
    pub fn ptr_eq(&self, other: &Param) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

// `ToSql` requires `Debug`, so the bound value can be shown as-is.
impl std::fmt::Debug for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&*self.0, f)
    }
}

/// Conversion into the ordered argument list of a single stanza.
///
/// This is how builder methods accept a variable number of heterogeneous
/// values:
///
/// ```
/// use sqlstanza::{Param, Statement};
///
/// let s = Statement::new()
///     .where_("deleted_at IS NULL", ())
///     .where_("name = ? OR age > ?", ("Marge", 40_i32))
///     .where_("role = ?", Param::new("Comptroller"));
/// assert_eq!(s.arg_count(), 3);
/// ```
pub trait IntoArgs {
    /// Consume `self`, producing the arguments in placeholder order.
    fn into_args(self) -> Vec<Param>;
}

impl IntoArgs for () {
    fn into_args(self) -> Vec<Param> {
        Vec::new()
    }
}

impl IntoArgs for Param {
    fn into_args(self) -> Vec<Param> {
        vec![self]
    }
}

impl IntoArgs for Vec<Param> {
    fn into_args(self) -> Vec<Param> {
        self
    }
}

impl<const N: usize> IntoArgs for [Param; N] {
    fn into_args(self) -> Vec<Param> {
        self.into()
    }
}

macro_rules! impl_into_args_for_tuple {
    ($($name:ident),+) => {
        impl<$($name),+> IntoArgs for ($($name,)+)
        where
            $($name: ToSql + Send + Sync + 'static),+
        {
            #[allow(non_snake_case)]
            fn into_args(self) -> Vec<Param> {
                let ($($name,)+) = self;
                vec![$(Param::new($name)),+]
            }
        }
    };
}

impl_into_args_for_tuple!(A);
impl_into_args_for_tuple!(A, B);
impl_into_args_for_tuple!(A, B, C);
impl_into_args_for_tuple!(A, B, C, D);
impl_into_args_for_tuple!(A, B, C, D, E);
impl_into_args_for_tuple!(A, B, C, D, E, F);
impl_into_args_for_tuple!(A, B, C, D, E, F, G);
impl_into_args_for_tuple!(A, B, C, D, E, F, G, H);
impl_into_args_for_tuple!(A, B, C, D, E, F, G, H, I);
impl_into_args_for_tuple!(A, B, C, D, E, F, G, H, I, J);
impl_into_args_for_tuple!(A, B, C, D, E, F, G, H, I, J, K);
impl_into_args_for_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);

/// Build a `Vec<Param>` from heterogeneous values.
///
/// Useful when the argument list is longer than the tuple impls allow or is
/// assembled ahead of time.
///
/// ```
/// let args = sqlstanza::args!["Marge", 42_i64, true];
/// assert_eq!(args.len(), 3);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Param>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Param::new($value)),+]
    };
}
