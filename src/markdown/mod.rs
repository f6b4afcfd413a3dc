pub mod toc;

pub use toc::{extract, insert, slugify, Item, Toc};
