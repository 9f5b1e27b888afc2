//! Built-in rules
//!
//! Every rule has a constructor function and accepts a custom message through
//! `.message(...)`. All rules except [`NotNull`] and [`NotEmpty`] accept `null`.
//!
//! ## Leaf rules
//!
//! - **Text**: [`Alphabetic`], [`Alphanumeric`], [`StringLength`], [`Email`], [`Url`]
//! - **Numbers**: [`Integer`], [`Numeric`], [`Boolean`]
//! - **Presence**: [`NotNull`], [`NotEmpty`]
//! - **Other**: [`Choice`], [`Custom`], [`UploadedFileRule`]
//!
//! ## Composite rules
//!
//! - [`Item`]: a nested object with its own rule-set
//! - [`Collection`]: every element of an array or object

pub mod boolean;
pub mod choice;
pub mod collection;
pub mod content;
pub mod custom;
pub mod item;
pub mod length;
pub mod nullable;
pub mod numeric;
pub mod pattern;
pub mod upload;

pub use boolean::{Boolean, boolean};
pub use choice::{Choice, choice};
pub use collection::{Collection, collection};
pub use content::{Email, Url, email, url};
pub use custom::{Custom, custom};
pub use item::{Item, item};
pub use length::{StringLength, length_max, length_min, string_length};
pub use nullable::{NotEmpty, NotNull, not_empty, not_null};
pub use numeric::{Integer, Numeric, integer, integer_max, integer_min, integer_range, numeric};
pub use pattern::{Alphabetic, Alphanumeric, alphabetic, alphanumeric};
pub use upload::{UploadedFileRule, uploaded_file};
