#![no_std]

pub use lexical_float::*;
