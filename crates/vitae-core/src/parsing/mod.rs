pub mod normalize;
pub mod sections;
pub mod tokenize;

pub use normalize::normalize;
pub use sections::segment;
pub use tokenize::tokenize;
