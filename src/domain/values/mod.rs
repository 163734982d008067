pub mod correlation_mode;
pub mod depth;
pub mod origin;
pub mod source_kind;
