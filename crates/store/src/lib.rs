// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

mod datatype;
mod error;
pub mod parse;
mod resource;
mod store;
pub mod validate;
mod value;

pub use datatype::Datatype;
pub use error::{Error, Result};
pub use resource::Resource;
pub use store::{MemoryStore, Storelike};
pub use validate::{validate_store, ValidationReport};
pub use value::{is_slug, Value};

// This tests rust code in the README with doc-tests.
// Though, It will not appear in the generated documentation.
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
