// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::io;

use crate::datatype::Datatype;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Resource not found in the store: '{0}'")]
    NotFound(String),

    #[error("Not a valid subject IRI '{subject}': {reason}")]
    InvalidSubject { subject: String, reason: String },

    #[error("Value '{value}' is not a valid {datatype}: {reason}")]
    InvalidValue {
        value: String,
        datatype: Datatype,
        reason: String,
    },

    #[error("Unsupported input format: '{0}'")]
    UnsupportedFormat(String),

    #[error("The input was not syntactically valid:\n{0}")]
    Syntax(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Represents all cases of `std::io::Error`.
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
