use pyo3::{exceptions::PyValueError, prelude::*};

use crate::{loader::parse_molfile_str, AdjacencyList, ShortestPaths};

fn search(mol_block: &str, start: usize) -> PyResult<ShortestPaths> {
    let mol = parse_molfile_str(mol_block).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let adj = AdjacencyList::from_molecule(Some(&mol)).map_err(|e| PyValueError::new_err(e.to_string()))?;
    ShortestPaths::new(&adj, start).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Distance in bonds between atoms `start` and `end`, or `None` if they are
/// not connected.
#[pyfunction]
fn distance(mol_block: String, start: usize, end: usize) -> PyResult<Option<u32>> {
    Ok(search(&mol_block, start)?.distance(end))
}

#[pyfunction]
fn n_paths(mol_block: String, start: usize, end: usize) -> PyResult<u64> {
    Ok(search(&mol_block, start)?.n_paths_to(end))
}

#[pyfunction]
fn shortest_path(mol_block: String, start: usize, end: usize) -> PyResult<Vec<usize>> {
    Ok(search(&mol_block, start)?.path_to(end))
}

#[pyfunction]
fn shortest_paths(mol_block: String, start: usize, end: usize) -> PyResult<Vec<Vec<usize>>> {
    Ok(search(&mol_block, start)?.paths_to(end))
}

/// A Python module implemented in Rust. The name of this function must match
/// the `lib.name` setting in the `Cargo.toml`, else Python will not be able to
/// import the module.
#[pymodule]
#[pyo3(name = "molpaths")]
fn _molpaths(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(distance, m)?)?;
    m.add_function(wrap_pyfunction!(n_paths, m)?)?;
    m.add_function(wrap_pyfunction!(shortest_path, m)?)?;
    m.add_function(wrap_pyfunction!(shortest_paths, m)?)?;

    Ok(())
}
