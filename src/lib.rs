#![doc = include_str!("../README.md")]
#![no_std]

extern crate alloc;

pub mod a_list;
pub mod array;
pub mod list;
pub mod s_list;

pub use a_list::ArrayList;
pub use array::Array;
pub use list::{List, OutOfBoundsError};
pub use s_list::LinkedList;
