//! # Handler adaptation (`Handler` → `Listener`)
//!
//! Any `Fn(A1, .., An) -> R` with `n <= 8` is a [`Handler`]. At registration
//! time it is adapted into a [`Listener`]: a fixed-shape `Fn(&Args)` wrapper
//! plus the [`Signature`] the closure was declared with. Dispatch then never
//! needs to know the concrete closure type.
//!
//! ## Requirements
//! - parameters: `Clone + Send + Sync + 'static` (each handler gets its own copy)
//! - return type: `'static`; the value is discarded after the call
//! - the closure itself: `Send + Sync + 'static` (it may run on any thread)
//!
//! ## Example
//! ```rust
//! use trigger::{args, Listener};
//!
//! let listener = Listener::new(|name: &str, times: u32| {
//!     assert_eq!((name, times), ("Ada", 2));
//! });
//! assert_eq!(listener.signature().to_string(), "fn(&str, u32)");
//! listener.call(&args!["Ada", 2_u32]);
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::args::{Arg, Args};
use super::signature::{Signature, TypeInfo};

/// Callable that can be registered for an event.
///
/// `Params` is a marker (`fn(A1, ..) -> R`) that keeps the implementations for
/// different arities apart; callers never name it.
pub trait Handler<Params>: Send + Sync + 'static {
    /// Declared parameter/return shape.
    fn signature() -> Signature;

    /// Invokes the handler with already validated arguments.
    fn invoke(&self, args: &Args);
}

/// Type-erased handler with its recorded signature.
#[derive(Clone)]
pub struct Listener {
    signature: Signature,
    call: Arc<dyn Fn(&Args) + Send + Sync>,
}

impl Listener {
    /// Adapts a handler.
    pub fn new<H, P>(handler: H) -> Self
    where
        H: Handler<P>,
    {
        Self {
            signature: H::signature(),
            call: Arc::new(move |args: &Args| handler.invoke(args)),
        }
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Calls the wrapped handler.
    ///
    /// # Panics
    /// If `args` does not fit the signature. The registry validates before
    /// calling, so this only fires when a `Listener` is invoked directly.
    pub fn call(&self, args: &Args) {
        (self.call)(args)
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("signature", &self.signature.to_string())
            .finish()
    }
}

/// Extracts an owned parameter value.
fn take<T: Any + Clone>(args: &Args, index: usize) -> T {
    match args.get(index).and_then(Arg::downcast::<T>) {
        Some(value) => value,
        None => panic!(
            "argument {} mismatched: required {} got {}",
            index,
            std::any::type_name::<T>(),
            args.get(index).map_or("nothing", Arg::type_name),
        ),
    }
}

macro_rules! impl_handler {
    ($($ty:ident => $idx:tt),*) => {
        impl<F, R, $($ty),*> Handler<fn($($ty),*) -> R> for F
        where
            F: Fn($($ty),*) -> R + Send + Sync + 'static,
            R: 'static,
            $($ty: Any + Clone + Send + Sync,)*
        {
            fn signature() -> Signature {
                Signature::new(vec![$(TypeInfo::of::<$ty>()),*], TypeInfo::of::<R>())
            }

            #[allow(unused_variables)]
            fn invoke(&self, args: &Args) {
                let _ = (self)($(take::<$ty>(args, $idx)),*);
            }
        }
    };
}

impl_handler!();
impl_handler!(A1 => 0);
impl_handler!(A1 => 0, A2 => 1);
impl_handler!(A1 => 0, A2 => 1, A3 => 2);
impl_handler!(A1 => 0, A2 => 1, A3 => 2, A4 => 3);
impl_handler!(A1 => 0, A2 => 1, A3 => 2, A4 => 3, A5 => 4);
impl_handler!(A1 => 0, A2 => 1, A3 => 2, A4 => 3, A5 => 4, A6 => 5);
impl_handler!(A1 => 0, A2 => 1, A3 => 2, A4 => 3, A5 => 4, A6 => 5, A7 => 6);
impl_handler!(A1 => 0, A2 => 1, A3 => 2, A4 => 3, A5 => 4, A6 => 5, A7 => 6, A8 => 7);
