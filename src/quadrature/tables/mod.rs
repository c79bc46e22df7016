//! Compiled-in rule tables, one file per reference geometry.
//!
//! Point values were computed offline to full double precision and checked
//! for exactness before being written here.

mod hexahedron;
mod line;
mod quadrilateral;
mod tetrahedron;
mod triangle;
