//! Java AST builders.
//!
//! Small builder types that render themselves to code fragments; the
//! fragments are assembled into files by [`JavaFile`].
//!
//! [`JavaFile`]: crate::JavaFile

mod classes;
mod fields;

pub use classes::{Constructor, JavaClass};
pub use fields::{JavaField, Param};
