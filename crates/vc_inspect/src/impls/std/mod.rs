mod collections;
mod sync;
