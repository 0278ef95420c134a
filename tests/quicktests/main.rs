use quickcheck::{Arbitrary, Gen};

mod contract;
mod heap;
mod tree;

/// An enum for the various kinds of "things" to do to
/// collections in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Add the T to the collection
    Add(T),
    /// Remove one T from the collection
    Remove(T),
    /// Empty the collection
    Clear,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match u8::arbitrary(g) % 16 {
            0..=8 => Op::Add(T::arbitrary(g)),
            9..=14 => Op::Remove(T::arbitrary(g)),
            _ => Op::Clear,
        }
    }
}
