// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! [Atomic Data datatypes](
//! https://atomicdata.dev/datatypes)
//! vocabulary.

use crate::named_node;

pub const NS_BASE: &str = const_format::concatcp!(crate::NS_BASE_ATOMIC, "datatypes/");
pub const NS_PREFERRED_PREFIX: &str = "datatypes";

named_node!(
    ATOMIC_URL,
    NS_BASE,
    "atomicURL",
    "A URL pointing to another Atomic Data resource."
);
named_node!(BOOLEAN, NS_BASE, "boolean", "Either `true` or `false`.");
named_node!(DATE, NS_BASE, "date", "ISO date, e.g. `1991-01-20`.");
named_node!(FLOAT, NS_BASE, "float", "A floating point number.");
named_node!(INTEGER, NS_BASE, "integer", "A signed integer.");
named_node!(JSON, NS_BASE, "json", "Any JSON value.");
named_node!(
    MARKDOWN,
    NS_BASE,
    "markdown",
    "A string containing Markdown."
);
named_node!(
    RESOURCE_ARRAY,
    NS_BASE,
    "resourceArray",
    "An ordered list of Atomic Data resource URLs."
);
named_node!(
    SLUG,
    NS_BASE,
    "slug",
    "Lowercase letters and digits, separated by dashes."
);
named_node!(STRING, NS_BASE, "string", "A UTF-8 string.");
named_node!(
    TIMESTAMP,
    NS_BASE,
    "timestamp",
    "Milliseconds since the UNIX epoch."
);
named_node!(URI, NS_BASE, "uri", "Any URI, not necessarily Atomic Data.");
