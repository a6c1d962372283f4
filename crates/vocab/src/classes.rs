// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! [Atomic Data core classes](
//! https://atomicdata.dev/classes)
//! vocabulary.

use crate::named_node;

pub const NS_BASE: &str = const_format::concatcp!(crate::NS_BASE_ATOMIC, "classes/");
pub const NS_PREFERRED_PREFIX: &str = "classes";

named_node!(
    CLASS,
    NS_BASE,
    "Class",
    "Describes the shape of a set of resources."
);
named_node!(
    ONTOLOGY,
    NS_BASE,
    "Ontology",
    "A set of related classes, properties and instances."
);
named_node!(
    PROPERTY,
    NS_BASE,
    "Property",
    "A single typed attribute that resources can have."
);
named_node!(
    TAG,
    NS_BASE,
    "Tag",
    "One allowed value of an enumerated property."
);
