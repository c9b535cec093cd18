//! Turning loosely-typed source records into canonical [`Verse`](crate::Verse) values.

pub(crate) mod normalize;
pub(crate) mod raw;
pub(crate) mod reference;

pub use normalize::{Normalizer, normalize};
pub use raw::RawVerseRecord;
pub use reference::{ParsedReference, parse_reference};
