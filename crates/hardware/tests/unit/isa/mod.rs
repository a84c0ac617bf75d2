/// Assembler parsing, range checks and error recovery.
pub mod assembler;

/// Property tests over the encode/decode/disassemble cycle.
pub mod codec_properties;
