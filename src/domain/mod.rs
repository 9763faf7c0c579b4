//! Domain layer: strong types with validation and invariants (no I/O).

mod message;
mod validation;
mod value;

pub use message::{DailyPrice, Message, MessageRecord};
pub use validation::ValidationError;
pub use value::{Carrier, CountryCode, LengthOptions, MessageId};
