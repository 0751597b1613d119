pub mod strings;

// Reexporting the formats for easier access
pub use strings::Format as StringsFormat;
