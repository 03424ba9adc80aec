use std::hash::Hash;

pub mod entry;

pub use entry::Entry;

/// Capability a key type must provide to be usable inside a [`Table`](crate::Table).
///
/// `Eq` plays the role of the C source's injected `keycmp_t` ("C") — only
/// the zero/non-zero distinction of the original comparator was ever
/// semantically load-bearing, which is exactly what `Eq` gives you. `Hash`
/// (together with the table's `BuildHasher`) plays the role of the
/// injected `key2int_t` ("H"). `WIDTH`/`to_bytes`/`from_bytes` exist only
/// for the on-disk format (§4.6/§6.4): the same container can carry
/// heterogeneous widths *between* `Table` instantiations, never within
/// one, so a per-type associated constant is all persistence needs.
pub trait Key: Eq + Hash + Clone + Send + Sync + 'static {
    const WIDTH: usize;
    fn to_bytes(&self) -> Vec<u8>;
    fn from_bytes(bytes: &[u8]) -> Self;
}

/// Capability a value type must provide to be usable inside a [`Table`](crate::Table).
///
/// Values are always returned from `get` as owned clones (§5: "Clients
/// never receive borrowing views"), hence the `Clone` bound.
pub trait Value: Clone + Send + Sync + 'static {
    const WIDTH: usize;
    fn to_bytes(&self) -> Vec<u8>;
    fn from_bytes(bytes: &[u8]) -> Self;
}

macro_rules! impl_fixed_width_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Key for $t {
                const WIDTH: usize = std::mem::size_of::<$t>();

                #[inline]
                fn to_bytes(&self) -> Vec<u8> {
                    self.to_ne_bytes().to_vec()
                }

                #[inline]
                fn from_bytes(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; std::mem::size_of::<$t>()];
                    buf.copy_from_slice(bytes);
                    <$t>::from_ne_bytes(buf)
                }
            }

            impl Value for $t {
                const WIDTH: usize = std::mem::size_of::<$t>();

                #[inline]
                fn to_bytes(&self) -> Vec<u8> {
                    self.to_ne_bytes().to_vec()
                }

                #[inline]
                fn from_bytes(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; std::mem::size_of::<$t>()];
                    buf.copy_from_slice(bytes);
                    <$t>::from_ne_bytes(buf)
                }
            }
        )*
    };
}

impl_fixed_width_int!(i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize);

macro_rules! impl_fixed_width_float_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl Value for $t {
                const WIDTH: usize = std::mem::size_of::<$t>();

                #[inline]
                fn to_bytes(&self) -> Vec<u8> {
                    self.to_ne_bytes().to_vec()
                }

                #[inline]
                fn from_bytes(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; std::mem::size_of::<$t>()];
                    buf.copy_from_slice(bytes);
                    <$t>::from_ne_bytes(buf)
                }
            }
        )*
    };
}

impl_fixed_width_float_value!(f32, f64);

impl<const N: usize> Key for [u8; N] {
    const WIDTH: usize = N;

    #[inline]
    fn to_bytes(&self) -> Vec<u8> {
        self.to_vec()
    }

    #[inline]
    fn from_bytes(bytes: &[u8]) -> Self {
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        out
    }
}

impl<const N: usize> Value for [u8; N] {
    const WIDTH: usize = N;

    #[inline]
    fn to_bytes(&self) -> Vec<u8> {
        self.to_vec()
    }

    #[inline]
    fn from_bytes(bytes: &[u8]) -> Self {
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_round_trips() {
        let v: i32 = -42;
        assert_eq!(i32::from_bytes(&v.to_bytes()), v);
        assert_eq!(i32::WIDTH, 4);
    }

    #[test]
    fn byte_array_round_trips() {
        let v: [u8; 6] = [1, 2, 3, 4, 5, 6];
        assert_eq!(<[u8; 6]>::from_bytes(&v.to_bytes()), v);
        assert_eq!(<[u8; 6]>::WIDTH, 6);
    }
}
