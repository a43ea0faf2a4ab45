//! # Opaque argument values passed to handlers at fire time.
//!
//! An [`Arg`] is a reference-counted, type-erased value that remembers the
//! name of its concrete type. [`Args`] is the ordered argument list handed to
//! every handler of an event.
//!
//! ## Building arguments
//! ```rust
//! use trigger::{args, Arg, Args};
//!
//! let a: Args = ("Ada", 36).into();
//! let b = args!["Ada", 36];
//! let c = Args::from(vec![Arg::new("Ada"), Arg::new(36)]);
//!
//! assert_eq!(a.len(), 2);
//! assert_eq!(b.type_names(), c.type_names());
//! ```
//!
//! ## Rules
//! - Values must be `Send + Sync + 'static` (they may cross into background tasks).
//! - Cloning an `Arg` clones the `Arc`, never the value itself.
//! - Handlers receive their own clone of the value (see [`Arg::downcast`]).

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// Single type-erased argument.
#[derive(Clone)]
pub struct Arg {
    value: Arc<dyn Any + Send + Sync>,
    type_id: TypeId,
    type_name: &'static str,
}

impl Arg {
    /// Wraps a value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Arc::new(value),
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// `TypeId` of the wrapped value.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Name of the wrapped value's type (for diagnostics).
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if the wrapped value is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Borrows the wrapped value as `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Returns an owned clone of the wrapped value as `T`.
    pub fn downcast<T: Any + Clone>(&self) -> Option<T> {
        self.downcast_ref::<T>().cloned()
    }
}

impl fmt::Debug for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arg").field("type", &self.type_name).finish()
    }
}

/// Ordered argument list for one fire call.
#[derive(Clone, Debug, Default)]
pub struct Args {
    items: Vec<Arg>,
}

impl Args {
    /// Empty argument list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an argument.
    #[must_use]
    pub fn with<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.items.push(Arg::new(value));
        self
    }

    /// Appends an already wrapped argument.
    pub fn push(&mut self, arg: Arg) {
        self.items.push(arg);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arg> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Arg> {
        self.items.iter()
    }

    /// Type names of every argument, in order.
    pub fn type_names(&self) -> Vec<&'static str> {
        self.items.iter().map(Arg::type_name).collect()
    }
}

impl From<Vec<Arg>> for Args {
    fn from(items: Vec<Arg>) -> Self {
        Self { items }
    }
}

impl FromIterator<Arg> for Args {
    fn from_iter<I: IntoIterator<Item = Arg>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Args {
    type Item = &'a Arg;
    type IntoIter = std::slice::Iter<'a, Arg>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl From<()> for Args {
    fn from(_: ()) -> Self {
        Self::new()
    }
}

macro_rules! impl_args_from_tuple {
    ($($ty:ident),+) => {
        impl<$($ty),+> From<($($ty,)+)> for Args
        where
            $($ty: Any + Send + Sync,)+
        {
            #[allow(non_snake_case)]
            fn from(($($ty,)+): ($($ty,)+)) -> Self {
                Self { items: vec![$(Arg::new($ty)),+] }
            }
        }
    };
}

impl_args_from_tuple!(A1);
impl_args_from_tuple!(A1, A2);
impl_args_from_tuple!(A1, A2, A3);
impl_args_from_tuple!(A1, A2, A3, A4);
impl_args_from_tuple!(A1, A2, A3, A4, A5);
impl_args_from_tuple!(A1, A2, A3, A4, A5, A6);
impl_args_from_tuple!(A1, A2, A3, A4, A5, A6, A7);
impl_args_from_tuple!(A1, A2, A3, A4, A5, A6, A7, A8);

/// Builds [`Args`] from a comma-separated list of values.
///
/// ```rust
/// let args = trigger::args!["Ada", 1815_u32];
/// assert_eq!(args.type_names(), vec!["&str", "u32"]);
/// ```
#[macro_export]
macro_rules! args {
    () => { $crate::Args::new() };
    ($($value:expr),+ $(,)?) => {
        $crate::Args::from(vec![$($crate::Arg::new($value)),+])
    };
}
