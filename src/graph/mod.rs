mod wards;

pub use wards::{WardColumns, WardData, WardGraph};
