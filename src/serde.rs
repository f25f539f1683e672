use alloc::format;
use core::{fmt, marker::PhantomData};

use serde_core::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
    ser::SerializeSeq,
};

use crate::{FixedVec, GrowVec, HybridVec, allocator::Global};

fn serialize_slice<T: Serialize, S: Serializer>(items: &[T], serializer: S) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(items.len()))?;
    for element in items {
        seq.serialize_element(element)?;
    }
    seq.end()
}

impl<T: Serialize, const N: usize> Serialize for FixedVec<T, N> {
    /// Serialize a `FixedVec` as a sequence.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_slice(self, serializer)
    }
}

impl<T: Serialize, const I: usize, A: crate::Allocator> Serialize for GrowVec<T, I, A> {
    /// Serialize a `GrowVec` as a sequence, inline or not.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_slice(self, serializer)
    }
}

impl<T: Serialize, const N: usize, const MIN: usize, A: crate::Allocator + Clone> Serialize
    for HybridVec<T, N, MIN, A>
{
    /// Serialize a `HybridVec` as a sequence.
    ///
    /// The format is identical for the static and dynamic representations.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_slice(self, serializer)
    }
}

impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for FixedVec<T, N> {
    /// Deserialize a `FixedVec` from a sequence.
    ///
    /// Fails if the sequence holds more than `N` elements.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FixedVecVisitor<T, const N: usize> {
            _marker: PhantomData<T>,
        }

        impl<'de, T: Deserialize<'de>, const N: usize> Visitor<'de> for FixedVecVisitor<T, N> {
            type Value = FixedVec<T, N>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a sequence of at most {N} elements")
            }

            fn visit_seq<S: SeqAccess<'de>>(self, mut seq: S) -> Result<Self::Value, S::Error> {
                if let Some(hint) = seq.size_hint() {
                    if hint > N {
                        return Err(de::Error::custom(format!(
                            "FixedVec capacity {N} exceeded (incoming len hint: {hint})"
                        )));
                    }
                }

                let mut vec = FixedVec::new();
                while let Some(element) = seq.next_element()? {
                    if vec.is_full() {
                        return Err(de::Error::custom(format!(
                            "FixedVec capacity {N} exceeded while deserializing sequence"
                        )));
                    }
                    vec.push(element);
                }
                Ok(vec)
            }
        }

        deserializer.deserialize_seq(FixedVecVisitor {
            _marker: PhantomData,
        })
    }
}

impl<'de, T: Deserialize<'de>, const I: usize> Deserialize<'de> for GrowVec<T, I, Global> {
    /// Deserialize a `GrowVec` from a sequence.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GrowVecVisitor<T, const I: usize> {
            _marker: PhantomData<T>,
        }

        impl<'de, T: Deserialize<'de>, const I: usize> Visitor<'de> for GrowVecVisitor<T, I> {
            type Value = GrowVec<T, I>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence")
            }

            fn visit_seq<S: SeqAccess<'de>>(self, mut seq: S) -> Result<Self::Value, S::Error> {
                let mut vec = GrowVec::new();
                if let Some(hint) = seq.size_hint() {
                    vec.try_reserve(hint)
                        .map_err(<S::Error as de::Error>::custom)?;
                }
                while let Some(element) = seq.next_element()? {
                    vec.push(element);
                }
                Ok(vec)
            }
        }

        deserializer.deserialize_seq(GrowVecVisitor {
            _marker: PhantomData,
        })
    }
}

impl<'de, T: Deserialize<'de>, const N: usize, const MIN: usize> Deserialize<'de>
    for HybridVec<T, N, MIN, Global>
{
    /// Deserialize a `HybridVec` from a sequence.
    ///
    /// If the sequence is longer than `N` the result is dynamic.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HybridVecVisitor<T, const N: usize, const MIN: usize> {
            _marker: PhantomData<T>,
        }

        impl<'de, T: Deserialize<'de>, const N: usize, const MIN: usize> Visitor<'de>
            for HybridVecVisitor<T, N, MIN>
        {
            type Value = HybridVec<T, N, MIN>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence")
            }

            fn visit_seq<S: SeqAccess<'de>>(self, mut seq: S) -> Result<Self::Value, S::Error> {
                let mut vec = HybridVec::new();
                if let Some(hint) = seq.size_hint() {
                    vec.try_reserve(hint)
                        .map_err(<S::Error as de::Error>::custom)?;
                }
                while let Some(element) = seq.next_element()? {
                    vec.push(element);
                }
                Ok(vec)
            }
        }

        deserializer.deserialize_seq(HybridVecVisitor {
            _marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::{FixedVec, GrowVec, HybridVec, fixedvec, growvec, hybridvec};

    #[test]
    fn fixedvec_json() {
        let v: FixedVec<_, 5> = fixedvec![1, 2, 3];
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[1,2,3]");
        let r: FixedVec<i32, 5> = serde_json::from_str(&s).unwrap();
        assert_eq!(r, [1, 2, 3]);
    }

    #[test]
    fn fixedvec_json_overflow_is_an_error() {
        let err = serde_json::from_str::<FixedVec<i32, 2>>("[1,2,3]").unwrap_err();
        assert!(err.to_string().contains("capacity 2 exceeded"));
    }

    #[test]
    fn growvec_json() {
        let v: GrowVec<_, 2> = growvec![1, 2, 3];
        let s = serde_json::to_string(&v).unwrap();
        let r: GrowVec<i32, 2> = serde_json::from_str(&s).unwrap();
        assert_eq!(r, [1, 2, 3]);
    }

    #[test]
    fn hybridvec_json_picks_representation() {
        let v: HybridVec<_, 2> = hybridvec![1, 2, 3];
        let s = serde_json::to_string(&v).unwrap();

        let wide: HybridVec<i32, 5> = serde_json::from_str(&s).unwrap();
        assert!(wide.is_static());
        let narrow: HybridVec<i32, 2> = serde_json::from_str(&s).unwrap();
        assert!(narrow.is_dynamic());
        assert_eq!(wide, narrow);
    }
}
