//! [`Inspect`](crate::Inspect) implementations for library types.
//!
//! | classification | types |
//! |---|---|
//! | leaf | integers, floats, `bool`, `char`, `String`, `&'static str`, `Cow<'static, str>`, `Decimal`, `chrono` dates and times |
//! | sequence | `Vec`, `VecDeque`, `LinkedList`, `BTreeSet`, `BinaryHeap`, `HashSet` |
//! | associative | `BTreeMap`, `HashMap` |
//! | array | `[T; N]` |
//!
//! `Option`, `Box`, `Rc` and `Arc` are transparent: they inspect as their
//! content, `None` as null. `RefCell`, `Mutex`, `RwLock` and `Weak` are
//! [`Indirect`](crate::access::Indirect).
//!
//! ## Default population rules
//!
//! | type | value for field `name` and seed `n` |
//! |---|---|
//! | strings | `"name{n}"` |
//! | integers | `n`, wrapping into the target width |
//! | floats, decimals | `n` |
//! | `bool` | `n` is even |
//! | `char` | `'A' + n % 26` |
//! | containers | a fresh empty container |
//! | `Option<T>` | `Some` of the rule for `T`, untouched if `T` has none |
//! | others | untouched |

// -----------------------------------------------------------------------------
// Modules

mod utils;

mod alloc;
mod core;

#[cfg(feature = "std")]
mod std;

mod hashbrown;

#[cfg(feature = "chrono")]
mod chrono;

#[cfg(feature = "decimal")]
mod rust_decimal;
