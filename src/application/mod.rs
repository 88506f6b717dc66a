pub mod normalize;
pub mod process;
pub mod prompts;
