//! `SeaORM` entity definitions.

pub mod settings;
