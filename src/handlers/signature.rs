//! # Handler signature descriptor.
//!
//! A [`Signature`] records the parameter and return types of a handler. The
//! first handler registered for an event fixes the event's signature; later
//! registrations must match it exactly.
//!
//! Equality compares `TypeId`s only. Type names are kept for rendering and come
//! from [`std::any::type_name`], whose output is not guaranteed to be stable
//! across compiler versions (paths like `alloc::string::String` may change).
//! Match on [`Signature`] values, not on their rendered strings:
//! ```text
//! |name: &str|            -> fn(&str)
//! |a: u32, b: u32| a + b  -> fn(u32, u32) -> u32
//! ||                      -> fn()
//! ```

use std::any::{Any, TypeId};
use std::fmt;

use super::args::Args;

/// One parameter (or return) type.
#[derive(Clone, Copy, Debug)]
pub struct TypeInfo {
    id: TypeId,
    name: &'static str,
}

impl TypeInfo {
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

/// Parameter/return shape of a handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    params: Vec<TypeInfo>,
    output: TypeInfo,
}

impl Signature {
    pub fn new(params: Vec<TypeInfo>, output: TypeInfo) -> Self {
        Self { params, output }
    }

    /// Declared parameter count.
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn params(&self) -> &[TypeInfo] {
        &self.params
    }

    pub fn output(&self) -> TypeInfo {
        self.output
    }

    /// Checks an argument list against the declared parameters.
    ///
    /// Count is checked first; types are checked left to right and the first
    /// mismatching position is reported.
    pub fn check(&self, args: &Args) -> Result<(), ArgMismatch> {
        if args.len() != self.params.len() {
            return Err(ArgMismatch::Count {
                required: self.params.len(),
                got: args.len(),
            });
        }
        for (index, (param, arg)) in self.params.iter().zip(args).enumerate() {
            if param.id != arg.type_id() {
                return Err(ArgMismatch::Type {
                    index,
                    required: param.name,
                    got: arg.type_name(),
                });
            }
        }
        Ok(())
    }
}

/// Why an argument list does not fit a [`Signature`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArgMismatch {
    /// Wrong number of arguments.
    Count { required: usize, got: usize },
    /// Argument at `index` has the wrong type.
    Type {
        index: usize,
        required: &'static str,
        got: &'static str,
    },
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        for (i, p) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(p.name)?;
        }
        f.write_str(")")?;
        if self.output.id != TypeId::of::<()>() {
            write!(f, " -> {}", self.output.name)?;
        }
        Ok(())
    }
}
