//! Posts domain layer: like entities and toggle outcomes

pub mod entities;
