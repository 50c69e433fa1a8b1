//! Internal tree structure.

pub mod inode;
pub mod itree;
pub mod shapes;


pub use inode::*;
pub use itree::*;
