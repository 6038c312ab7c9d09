//! Reed-Solomon encoding and errors-and-erasures decoding over GF(2<sup>8</sup>).

mod bmcf;

pub mod galois;
pub mod reed_solomon;
