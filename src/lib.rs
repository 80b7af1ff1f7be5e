//! Symmetric word-square solver.
//!
//! Given a side length N, a multiset of N² letters, and a dictionary, find N
//! words of length N that form a grid whose column i equals its row i for
//! every i, spending the supplied letters exactly. See [`solver::solve_square`]
//! for the entry point.

pub mod errors;
pub mod letters;
pub mod log;
pub mod prefix_index;
pub mod solver;
pub mod word_list;
