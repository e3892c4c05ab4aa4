//! Caller-supplied event callbacks.
//!
//! ## Example
//!
//! ```
//! use schemaform_pages::{Callback, FieldEvent};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let blurred = Rc::new(Cell::new(0));
//! let on_blur = Callback::new({
//!     let blurred = blurred.clone();
//!     move |_event: FieldEvent| blurred.set(blurred.get() + 1)
//! });
//!
//! on_blur.call(FieldEvent::blur(Default::default()));
//! assert_eq!(blurred.get(), 1);
//! ```

use crate::event::FieldEvent;
use std::fmt;
use std::rc::Rc;

/// A cloneable callback wrapper.
///
/// Form components live on the UI thread, so callbacks may capture
/// non-`Send` state such as `Rc<Cell<_>>`.
pub struct Callback<Args = FieldEvent, Ret = ()> {
	inner: Rc<dyn Fn(Args) -> Ret + 'static>,
}

impl<Args, Ret> Callback<Args, Ret> {
	/// Wraps a function or closure.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + 'static,
	{
		Self { inner: Rc::new(f) }
	}

	/// Invokes the callback.
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}
}

impl<Args, Ret> Clone for Callback<Args, Ret> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<Args, Ret> fmt::Debug for Callback<Args, Ret> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Callback")
			.field("inner", &"<function>")
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_clones_share_the_function() {
		let double = Callback::<i32, i32>::new(|n| n * 2);
		let cloned = double.clone();
		assert_eq!(double.call(2), 4);
		assert_eq!(cloned.call(5), 10);
	}

	#[rstest]
	fn test_debug_hides_function() {
		let cb = Callback::<(), ()>::new(|_| {});
		assert_eq!(format!("{:?}", cb), "Callback { inner: \"<function>\" }");
	}
}
