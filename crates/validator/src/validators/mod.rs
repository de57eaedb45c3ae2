//! Built-in validator families
//!
//! | Family | Accepts | Emits |
//! |---|---|---|
//! | [`StringValidator`] | strings | the string, trimmed if configured |
//! | [`NumberValidator`] | integers and floats | the number unchanged |
//! | [`BooleanValidator`] | per [`BooleanMode`] | a boolean |
//! | [`DateValidator`] | dates, epoch millis, date strings | a UTC date |
//! | [`ArrayValidator`] | arrays | the validated items |
//! | [`ObjectValidator`] | objects | the validated fields |
//!
//! Every family runs through the shared [`Base`](crate::Base) skeleton, so
//! `optional()` and `with_message()` behave the same everywhere.

pub mod array;
pub mod boolean;
pub mod date;
pub mod number;
pub mod object;
pub mod string;

pub use array::ArrayValidator;
pub use boolean::{BooleanMode, BooleanValidator};
pub use date::{DateFormat, DateValidator};
pub use number::NumberValidator;
pub use object::ObjectValidator;
pub use string::StringValidator;
