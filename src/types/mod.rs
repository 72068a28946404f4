mod combinators;
mod instances;
mod non_empty;

pub use combinators::group_by;
pub use instances::{get_eq, get_show, BracketedShow, Concat, ElementwiseEq, NonEmptyVecKind};
pub use non_empty::{append, is_non_empty, prepend, IntoIter, Iter, NonEmptyVec};
