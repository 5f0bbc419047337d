#[macro_use]
extern crate quickcheck_macros;

use quickcheck::{Arbitrary, Gen};

mod tree;

/// The values a quicktest throws at a tree, as one batch of inserts
/// followed by a value to look for.
#[derive(Clone, Debug)]
pub struct Scenario<V> {
    inserts: Vec<V>,
    needle: V,
}

impl<V> Arbitrary for Scenario<V>
where
    V: Arbitrary,
{
    /// Half the time the needle is picked from the inserted values so
    /// searches hit as often as they miss.
    fn arbitrary(g: &mut Gen) -> Self {
        let inserts = Vec::<V>::arbitrary(g);
        let needle = match g.choose(&[true, false]) {
            Some(&true) if !inserts.is_empty() => g.choose(&inserts).cloned().unwrap(),
            _ => V::arbitrary(g),
        };

        Self { inserts, needle }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let needle = self.needle.clone();
        Box::new(self.inserts.shrink().map(move |inserts| Self {
            inserts,
            needle: needle.clone(),
        }))
    }
}
