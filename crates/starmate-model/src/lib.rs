pub mod credentials;
pub mod enums;
pub mod error;
pub mod profile;

pub use credentials::{Credentials, LoginInput, RegisterInput, Registration};
pub use enums::{Gender, MonthDay, Zodiac};
pub use error::{Field, FieldError, FormValidationError};
pub use profile::{BIRTHDAY_FORMAT, InterestsInput, ProfileInput, ProfileRecord};
