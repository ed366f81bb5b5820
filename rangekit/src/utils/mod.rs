pub mod numeric;
pub mod priority;
