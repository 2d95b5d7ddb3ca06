//! Parse V2000 `.mol` files into [`Molecule`]s.
//!
//! Every atom in the atom block becomes a node, hydrogens included, so atom
//! `k` in the file (1-based) has dense id `k - 1`. Bonds are added in file
//! order. Coordinates, charges and stereo flags are ignored.

use std::{fs, path::Path};

use petgraph::graph::NodeIndex;
use thiserror::Error;

use crate::molecule::{Atom, Bond, Element, MGraph, Molecule};

/// Thrown when a molfile cannot be parsed. Line numbers are 1-based.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParserError {
    #[error("could not read molfile: {0}")]
    Io(String),
    #[error("molfile ended before line {0}")]
    UnexpectedEnd(usize),
    #[error("line {0}: malformed counts line")]
    CountsLine(usize),
    #[error("line {0}: unknown element symbol {1:?}")]
    Element(usize, String),
    #[error("line {0}: malformed bond line")]
    BondLine(usize),
    #[error("line {0}: unsupported bond type {1}")]
    BondType(usize, usize),
    #[error("line {0}: bond references atom {1}, but there are only {2} atoms")]
    BondAtom(usize, usize, usize),
}

/// Read and parse the molfile at `p`.
pub fn parse(p: &Path) -> Result<Molecule, ParserError> {
    let contents = fs::read_to_string(p).map_err(|e| ParserError::Io(e.to_string()))?;
    parse_molfile_str(&contents)
}

/// Parse the first molecule in a molfile (or SD file) held in memory.
pub fn parse_molfile_str(input: &str) -> Result<Molecule, ParserError> {
    let lines: Vec<&str> = input
        .lines()
        .take_while(|line| !matches!(line.trim_end(), "M  END" | "$$$$"))
        .collect();

    // Three header lines, then the counts line.
    let counts_line = lines.get(3).ok_or(ParserError::UnexpectedEnd(4))?;
    let (num_atoms, num_bonds) = parse_counts_line(counts_line).ok_or(ParserError::CountsLine(4))?;

    let atom_start = 4;
    let bond_start = atom_start + num_atoms;
    let bond_end = bond_start + num_bonds;
    if lines.len() < bond_end {
        return Err(ParserError::UnexpectedEnd(lines.len() + 1));
    }

    let mut graph = MGraph::with_capacity(num_atoms, num_bonds);
    for (i, atom_line) in lines[atom_start..bond_start].iter().enumerate() {
        let lineno = atom_start + i + 1;
        let symbol = parse_atom_line(atom_line);
        let element = symbol
            .parse::<Element>()
            .map_err(|_| ParserError::Element(lineno, symbol.to_string()))?;
        graph.add_node(Atom::new(element));
    }

    for (i, bond_line) in lines[bond_start..bond_end].iter().enumerate() {
        let lineno = bond_start + i + 1;
        let (one, two, bond_type) = parse_bond_line(bond_line).ok_or(ParserError::BondLine(lineno))?;
        for atom in [one, two] {
            if atom == 0 || atom > num_atoms {
                return Err(ParserError::BondAtom(lineno, atom, num_atoms));
            }
        }
        let bond = Bond::try_from(bond_type).map_err(|_| ParserError::BondType(lineno, bond_type))?;
        graph.add_edge(NodeIndex::new(one - 1), NodeIndex::new(two - 1), bond);
    }

    Ok(Molecule::from_graph(graph))
}

fn field(line: &str, start: usize, end: usize) -> Option<&str> {
    line.get(start..end.min(line.len())).map(str::trim)
}

fn parse_counts_line(counts_line: &str) -> Option<(usize, usize)> {
    Some((
        field(counts_line, 0, 3)?.parse().ok()?,
        field(counts_line, 3, 6)?.parse().ok()?,
    ))
}

fn parse_atom_line(atom_line: &str) -> &str {
    field(atom_line, 31, 34).unwrap_or("")
}

fn parse_bond_line(bond_line: &str) -> Option<(usize, usize, usize)> {
    Some((
        field(bond_line, 0, 3)?.parse().ok()?,
        field(bond_line, 3, 6)?.parse().ok()?,
        field(bond_line, 6, 9)?.parse().ok()?,
    ))
}
