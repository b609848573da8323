//! Circa – resolves fuzzy historical date expressions into sortable intervals.
//!
//! Manuscript and prosopographical records rarely carry exact dates. They
//! say `7c`, `c. 1780`, `fl. 700 AH`, `not before 1815-11` or
//! `130 - 1989-01`. Circa turns such an expression into a
//! [`interval::DateInterval`]: an inclusive `from_date`/`to_date` pair, either
//! of which may be open, plus a derived `sort_date` for ordering.
//!
//! ## Modules
//! * [`parser`] – Entry point. Classifies the shape of an expression (range,
//!   open range, qualifier, single date) and assembles the result.
//! * [`resolve`] – Resolves a single date in its era (Gregorian, century,
//!   Hijri) to the period its precision implies.
//! * [`approximate`] – Circa and floruit windows.
//! * [`calendar`] – Hijri to Gregorian conversion via Julian Day Numbers.
//! * [`interval`] – The [`interval::DateInterval`] and [`interval::PartialDate`] types.
//! * [`report`] – Collects unparseable values from a batch of records.
//! * [`config`] – Settings for the command line tool.
//!
//! ## Conventions
//! * The century number is one-based: `7c` is 600–699.
//! * A Hijri year is a leap year when `(11 * year + 14) mod 30 == 0`.
//! * BC dates are recognised but left unresolved: all three dates are `None`.
//! * Anything else that cannot be read is an error, never an empty interval.
//!   Use [`try_parse_date`] where an empty interval is preferable.
//!
//! ## Quick Start
//! ```
//! use circa::parse_date;
//! let century = parse_date("7c").unwrap();
//! assert_eq!(century.from_date.unwrap().to_string(), "0600-01-01");
//! assert_eq!(century.to_date.unwrap().to_string(), "0699-12-31");
//! assert_eq!(century.sort_date.unwrap().to_string(), "0649-12-31");
//!
//! let hijri = parse_date("700 AH").unwrap();
//! assert_eq!(hijri.from_date.unwrap().to_string(), "1300-09-16");
//!
//! assert!(parse_date("not a date").is_err());
//! ```
//!
//! The engine holds no state: every call is independent and may run on any
//! thread.

pub mod approximate;
pub mod calendar;
pub mod config;
pub mod error;
pub mod interval;
pub mod parser;
pub mod report;
pub mod resolve;

pub use error::{DateError, Result};
pub use interval::DateInterval;
pub use parser::{parse_date, try_parse_date};
