pub mod formatted;
pub mod profile;
pub mod text;
pub mod tiers;
