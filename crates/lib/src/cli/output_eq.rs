use arrayvec::ArrayString;

/// Helper trait to compare answers against expected values which may have a
/// different type, such as a string literal against an [ArrayString].
pub trait OutputEq<O = Self>
where
    O: ?Sized,
{
    fn output_eq(&self, other: &O) -> bool;
}

macro_rules! by_partial_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl OutputEq for $ty {
                #[inline]
                fn output_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

by_partial_eq! {
    usize, isize, u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, bool, (),
}

impl<A, B, C, D> OutputEq<(C, D)> for (A, B)
where
    A: OutputEq<C>,
    B: OutputEq<D>,
{
    #[inline]
    fn output_eq(&self, other: &(C, D)) -> bool {
        self.0.output_eq(&other.0) && self.1.output_eq(&other.1)
    }
}

impl<A, B> OutputEq<Option<B>> for Option<A>
where
    A: OutputEq<B>,
{
    #[inline]
    fn output_eq(&self, other: &Option<B>) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.output_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<const N: usize> OutputEq<ArrayString<N>> for &str {
    #[inline]
    fn output_eq(&self, other: &ArrayString<N>) -> bool {
        other.as_str() == *self
    }
}

impl<const N: usize> OutputEq<&str> for ArrayString<N> {
    #[inline]
    fn output_eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(test)]
mod tests {
    use arrayvec::ArrayString;

    use super::OutputEq;

    #[test]
    fn tuples() {
        assert!((1448u32, 1471u32).output_eq(&(1448, 1471)));
        assert!(!(1448u32, 0u32).output_eq(&(1448, 1471)));
    }

    #[test]
    fn strings() {
        let mut s = ArrayString::<8>::new();
        s.push_str("ZKAUCFUC");
        assert!(s.output_eq(&"ZKAUCFUC"));
        assert!((731u32, s).output_eq(&(731, "ZKAUCFUC")));
    }
}
