pub mod c_source;
pub mod repr;
