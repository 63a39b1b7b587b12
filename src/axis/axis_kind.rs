use strum_macros::{Display, EnumIter};

//=====================================================================
// The two independent axes of a table. Used to tag errors and to walk
// both axes with the same code.
//=====================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum AxisKind {
    Row,
    Column,
}
