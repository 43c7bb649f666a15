pub mod providers;
pub mod search;
pub mod stream;
