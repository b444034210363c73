// Game-side actors built on the engine's physics and input

pub mod characters;
