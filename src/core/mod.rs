pub mod entrain;
pub mod sync;
pub mod utterance;
