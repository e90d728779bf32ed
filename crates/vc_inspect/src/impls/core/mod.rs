mod array;
mod cell;
mod num;
mod option;
mod primitives;
