// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

mod handlers;
mod tag;

pub use handlers::{is_tag_used, EnumHandlers, TagRemoval};
pub use tag::new_tag;

// This tests rust code in the README with doc-tests.
// Though, It will not appear in the generated documentation.
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Tag shortname '{0}' is not a slug (lowercase letters, digits and single dashes)")]
    InvalidShortname(String),

    #[error("Failed to derive a tag subject: {0}")]
    InvalidSubject(String),

    #[error(transparent)]
    Store(#[from] ontokit_store::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
