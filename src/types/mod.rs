mod control;
mod field;
mod serialized;
mod value;

pub use control::{Control, ControlType, SelectOption};
pub use field::Field;
pub use serialized::Serialized;
pub use value::{FormMap, FormValue};
