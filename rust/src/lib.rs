//! resident-identity: parsing of 15- and 18-character resident identity numbers.
//!
//! A number is split at fixed offsets into region codes, birthday,
//! sequence code and check character; sex is derived from the parity of
//! the last sequence digit.
//!
//! # Format
//!
//! ```text
//! ID18 ::= PROVINCE CITY AREA YYYYMMDD SEQ CHECK
//! ID15 ::= PROVINCE CITY AREA YYMMDD SEQ
//! ```
//!
//! # Example
//!
//! ```
//! use identity::{Identity, Sex};
//!
//! let id = Identity::parse("110101199003075170").expect("valid identity number");
//! assert_eq!(id.province_name(), "北京市");
//! assert_eq!(id.birthday(), "19900307");
//! assert_eq!(id.sex(), Sex::Male);
//! ```

mod identity;
mod province;

pub use identity::{Identity, IdentityError, Sex, Variant, parse_identity, validate_identity};
pub use province::{PROVINCES, province_name};
