//! # Handlers del Servidor
//!
//! Cada handler es una función que recibe un Request y retorna un
//! `ResponseDescriptor`. Se registran en `RouteTable::builtin`.

pub mod basic;

pub use basic::*;
