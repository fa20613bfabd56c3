//! Logic behind the tour editor modal: the month grid and range picker used
//! for the travel dates, slug ids, and the per-language edit buffer.

pub mod calendar;
pub mod form;
pub mod range;
pub mod slug;
