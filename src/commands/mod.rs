pub mod interactive;
pub mod split;
