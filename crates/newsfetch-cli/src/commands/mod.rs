pub mod article;
pub mod domain;
pub mod headlines;
pub mod sources;
