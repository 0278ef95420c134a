use super::Sort;

const BASE: u64 = 10;

/// Integers that [`RadixSort`] can sort. The key must order the same way as the value.
pub trait RadixKey: Copy {
    /// Maps the value to an unsigned key with the same ordering.
    fn radix_key(self) -> u64;
}

macro_rules! unsigned_radix_key {
    ($($t:ty)*) => {
        $(
            impl RadixKey for $t {
                fn radix_key(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

// Flipping the sign bit moves negative values below positive ones.
macro_rules! signed_radix_key {
    ($($t:ty => $u:ty),*) => {
        $(
            impl RadixKey for $t {
                fn radix_key(self) -> u64 {
                    (self as $u ^ (1 << (<$u>::BITS - 1))) as u64
                }
            }
        )*
    };
}

unsigned_radix_key!(u8 u16 u32 u64 usize);
signed_radix_key!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, isize => usize);

/// Least significant digit radix sort in base 10. Each pass distributes the values into ten
/// buckets by one decimal digit of their key and gathers them back in bucket order. Sorting
/// stops after the first pass that puts every value in the zero bucket.
#[derive(Clone, Copy, Debug, Default)]
pub struct RadixSort;

impl<T> Sort<T> for RadixSort
where
    T: RadixKey,
{
    fn sort<I>(&self, source: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut values: Vec<T> = source.into_iter().collect();
        let mut buckets: [Vec<T>; BASE as usize] = Default::default();
        let mut divisor = 1;

        loop {
            for value in values.drain(..) {
                let digit = value.radix_key() / divisor % BASE;
                buckets[digit as usize].push(value);
            }
            let settled = buckets[1..].iter().all(Vec::is_empty);
            for bucket in &mut buckets {
                values.append(bucket);
            }
            log::trace!("radix pass with divisor {divisor} done, settled: {settled}");

            if settled {
                break;
            }
            match divisor.checked_mul(BASE) {
                Some(next) => divisor = next,
                None => break,
            }
        }
        values
    }
}
