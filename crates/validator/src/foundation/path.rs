//! Error path composition.
//!
//! Paths address a node from the validation root: `"root"` for the top-level
//! value, `"user.email"` for a field, `"tags[2]"` for an array item. Fields
//! directly under the root use their bare name.
//!
//! While validating, the top-level node is addressed by the empty path
//! [`TOP`]. It is rendered as [`ROOT`] only where it ends up in an error, so a
//! field that happens to be named `root` is still an ordinary field.

/// Rendered path of the top-level value.
pub const ROOT: &str = "root";

/// Path passed down for the top-level value.
pub const TOP: &str = "";

/// Path of `key` inside the object at `parent`.
#[must_use]
pub fn field(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_owned()
    } else {
        format!("{parent}.{key}")
    }
}

/// Path of item `index` inside the array at `parent`.
#[must_use]
pub fn index(parent: &str, index: usize) -> String {
    format!("{}[{index}]", display(parent))
}

/// How `path` appears in an error.
#[must_use]
pub fn display(path: &str) -> &str {
    if path.is_empty() { ROOT } else { path }
}
