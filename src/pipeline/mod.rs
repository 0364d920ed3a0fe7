pub mod ad_copy;
pub mod animation;
pub mod assets;
pub mod prompts;
