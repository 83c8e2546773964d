pub use itertools::Itertools;

///////////////////////////////////////////////////////////////////////////////
////
//// * workspace
////
///////////////////////////////////////////////////////////////////////////////
pub use aoc_runner::{file_reader, parse_to, InputError, Solver};

///////////////////////////////////////////////////////////////////////////////
////
//// * stdlib
////
///////////////////////////////////////////////////////////////////////////////
pub use std::{
    collections::BTreeSet,
    fmt::{self, Display, Formatter},
    io,
    iter::FromIterator,
    path::Path,
};
