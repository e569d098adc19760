mod id;
mod patch;
mod product;
mod validation;

pub use id::ProductId;
pub use patch::ProductPatch;
pub use product::{Footprint, ProductData, ProductRecord, Rating};
pub use validation::{MAX_GRADE, ValidationError};
