//! Macros for building schemas with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`fields!`]: ordered `(name, validator)` list for [`object`](crate::schema::object)
//!   and [`ObjectValidator::extend`](crate::validators::ObjectValidator::extend)

// ============================================================================
// FIELDS MACRO
// ============================================================================

/// Builds an ordered field list from `name => validator` pairs.
///
/// Each validator may be any concrete validator or a
/// [`SharedValidator`](crate::SharedValidator); they are erased with
/// [`IntoShared`](crate::IntoShared), so fields of different families can
/// sit side by side.
///
/// # Examples
///
/// ```
/// use strata_validator::prelude::*;
///
/// let address = object(fields! {
///     "street" => string().min_length(1),
///     "zip" => string().pattern(r"^\d{5}$").unwrap(),
/// });
/// let person = object(fields! {
///     "name" => string(),
///     "address" => address.optional(),
/// });
///
/// assert_eq!(person.shape().collect::<Vec<_>>(), ["name", "address"]);
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        ::std::vec::Vec::<(::std::string::String, $crate::SharedValidator)>::new()
    };
    ($($name:expr => $validator:expr),+ $(,)?) => {
        ::std::vec![
            $((
                ::std::string::String::from($name),
                $crate::IntoShared::into_shared($validator),
            )),+
        ]
    };
}
