// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! [Atomic Data core properties](
//! https://atomicdata.dev/properties)
//! vocabulary.

use oxrdf::NamedNodeRef;

use crate::named_node;

pub const NS_BASE: &str = const_format::concatcp!(crate::NS_BASE_ATOMIC, "properties/");
pub const NS_PREFERRED_PREFIX: &str = "properties";

named_node!(
    ALLOWS_ONLY,
    NS_BASE,
    "allowsOnly",
    "Restricts the values of a property to the listed resources (its \"enum\" tags)."
);
named_node!(
    CLASSES,
    NS_BASE,
    "classes",
    "The classes defined by an ontology."
);
named_node!(
    COLOR,
    NS_BASE,
    "color",
    "A color, most commonly a CSS hex code."
);
named_node!(
    DATATYPE,
    NS_BASE,
    "datatype",
    "The datatype of the values of a property."
);
named_node!(
    DESCRIPTION,
    NS_BASE,
    "description",
    "A textual (Markdown) description of a resource."
);
named_node!(EMOJI, NS_BASE, "emoji", "A single emoji character.");
named_node!(
    INSTANCES,
    NS_BASE,
    "instances",
    "Resources that are instances (e.g. tags) owned by an ontology."
);
named_node!(
    IS_A,
    NS_BASE,
    "isA",
    "The classes a resource is an instance of."
);
named_node!(NAME, NS_BASE, "name", "A human readable name.");
named_node!(
    PARENT,
    NS_BASE,
    "parent",
    "The resource this resource is nested below."
);
named_node!(
    PROPERTIES,
    NS_BASE,
    "properties",
    "The properties defined by an ontology."
);
named_node!(
    REQUIRES,
    NS_BASE,
    "requires",
    "The properties every instance of a class has to have."
);
named_node!(
    SHORTNAME,
    NS_BASE,
    "shortname",
    "A short, unique, slug-style name."
);

/// Core properties whose values are always resource arrays,
/// even when only a single value is present.
pub const ARRAY_PROPERTIES: [NamedNodeRef<'_>; 6] =
    [ALLOWS_ONLY, CLASSES, INSTANCES, IS_A, PROPERTIES, REQUIRES];

/// Core properties whose value is a single resource URL.
pub const URL_PROPERTIES: [NamedNodeRef<'_>; 2] = [DATATYPE, PARENT];
