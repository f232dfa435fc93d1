use crate::cube::STICKER_COUNT;

/// A bijection on the 54 sticker positions in goes-to form: the sticker at
/// position `i` moves to position `mapping[i]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Permutation {
    mapping: [u8; STICKER_COUNT],
}

impl Permutation {
    #[must_use]
    pub fn identity() -> Permutation {
        let mut mapping = [0; STICKER_COUNT];

        for (i, value) in mapping.iter_mut().enumerate() {
            *value = u8::try_from(i).expect("54 positions fit in a u8");
        }

        Permutation { mapping }
    }

    /// Builds a permutation from disjoint cycles of positions. Each position in
    /// a cycle goes to the one after it, and the last goes to the first.
    ///
    /// # Panics
    ///
    /// If the cycles overlap, which would not describe a bijection.
    #[must_use]
    pub fn from_cycles<C: AsRef<[usize]>>(cycles: &[C]) -> Permutation {
        let mut permutation = Permutation::identity();
        let mut covered = [false; STICKER_COUNT];

        for cycle in cycles {
            let cycle = cycle.as_ref();

            for (i, &start) in cycle.iter().enumerate() {
                assert!(!covered[start], "position {start} appears in two cycles");
                covered[start] = true;

                let end = cycle[(i + 1) % cycle.len()];
                permutation.mapping[start] = u8::try_from(end).expect("54 positions fit in a u8");
            }
        }

        permutation
    }

    #[must_use]
    pub fn mapping(&self) -> &[u8; STICKER_COUNT] {
        &self.mapping
    }

    #[must_use]
    pub fn inverse(&self) -> Permutation {
        let mut inverse = Permutation::identity();

        for (from, &to) in self.mapping.iter().enumerate() {
            inverse.mapping[usize::from(to)] =
                u8::try_from(from).expect("54 positions fit in a u8");
        }

        inverse
    }

    /// Moves every item of `items` to where this permutation sends it.
    pub fn permute<T: Copy>(&self, items: &mut [T; STICKER_COUNT]) {
        let old = *items;

        for (from, &to) in self.mapping.iter().enumerate() {
            items[usize::from(to)] = old[from];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Permutation;

    #[test]
    fn cycles_and_inverse() {
        let permutation = Permutation::from_cycles(&[vec![0, 1, 2], vec![10, 20]]);

        assert_eq!(permutation.mapping()[0], 1);
        assert_eq!(permutation.mapping()[2], 0);
        assert_eq!(permutation.mapping()[20], 10);
        assert_eq!(permutation.mapping()[5], 5);

        let mut items = [0_usize; 54];
        for (i, item) in items.iter_mut().enumerate() {
            *item = i;
        }

        permutation.permute(&mut items);
        assert_eq!(items[1], 0);
        assert_eq!(items[0], 2);

        permutation.inverse().permute(&mut items);
        assert!(items.iter().enumerate().all(|(i, &item)| i == item));
    }

    #[test]
    #[should_panic(expected = "appears in two cycles")]
    fn overlapping_cycles() {
        let _ = Permutation::from_cycles(&[vec![0, 1], vec![1, 2]]);
    }
}
