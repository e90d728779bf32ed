use crate::info::{Absent, Leaf};
use crate::inspection::{impl_assign_self, impl_populate_from_synthesize};
use crate::{Inspect, InspectRef};

impl Inspect for bool {
    #[inline]
    fn inspect_ref(&self) -> InspectRef<'_> {
        InspectRef::Leaf(Leaf::Bool(*self))
    }

    impl_assign_self!();

    impl_populate_from_synthesize!();

    /// `true` for even seeds.
    #[inline]
    fn synthesize(_field: &str, seed: usize) -> Option<Self> {
        Some(seed % 2 == 0)
    }
}

impl Inspect for char {
    #[inline]
    fn inspect_ref(&self) -> InspectRef<'_> {
        InspectRef::Leaf(Leaf::Char(*self))
    }

    impl_assign_self!();

    impl_populate_from_synthesize!();

    /// `'A'` to `'Z'`, cycling with the seed.
    #[inline]
    fn synthesize(_field: &str, seed: usize) -> Option<Self> {
        Some(char::from(b'A' + (seed % 26) as u8))
    }
}

impl Inspect for &'static str {
    #[inline]
    fn inspect_ref(&self) -> InspectRef<'_> {
        InspectRef::Leaf(Leaf::Str(self))
    }

    impl_assign_self!();
}

impl Inspect for Absent {
    #[inline]
    fn inspect_ref(&self) -> InspectRef<'_> {
        InspectRef::Null
    }

    impl_assign_self!();
}

#[cfg(test)]
mod tests {
    use crate::Inspect;
    use crate::info::{Absent, Classification, LeafKind};

    #[test]
    fn booleans_follow_parity() {
        assert_eq!(bool::synthesize("flag", 7), Some(false));
        assert_eq!(bool::synthesize("flag", 8), Some(true));
    }

    #[test]
    fn characters_cycle() {
        assert_eq!(char::synthesize("c", 0), Some('A'));
        assert_eq!(char::synthesize("c", 25), Some('Z'));
        assert_eq!(char::synthesize("c", 27), Some('B'));
    }

    #[test]
    fn classification() {
        assert_eq!('x'.classify(), Classification::Leaf(LeafKind::Char));
        assert_eq!("x".classify(), Classification::Leaf(LeafKind::Str));
        assert_eq!(Absent.classify(), Classification::Null);
    }

    #[test]
    fn static_str_is_left_untouched() {
        let mut s: &'static str = "keep";
        assert!(!s.populate_default("s", 1));
        assert_eq!(s, "keep");
    }
}
