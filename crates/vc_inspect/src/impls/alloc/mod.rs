mod boxed;
mod collections;
mod rc;
mod string;
