// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::PathBuf;

#[derive(Clone, Debug, Default)]
pub struct Config {
    /**
     * Paths to locally stored files (JSON-AD or RDF)
     * containing the ontologies to be converted to TypeScript modules,
     * plus the classes and properties they define.
     */
    pub ontologies: Vec<PathBuf>,
    /**
     * Where to write the output TypeScript files to.
     */
    pub out_dir: PathBuf,
    /**
     * The text to insert on top of all output files
     * (generated TypeScript source code).
     */
    pub header: Option<String>,
    /**
     * Subjects of the ontologies to generate code for;
     * if empty, code is generated for all ontologies found.
     */
    pub only: Vec<String>,
    /**
     * Whether to overwrite potentially already existing output files.
     */
    pub force: bool,
    /**
     * Whether to skip writing the output files.
     */
    pub dry_run: bool,
    /**
     * Whether to validate all loaded resources against their
     * property datatypes and class requirements before generating code.
     */
    pub validate: bool,
}
