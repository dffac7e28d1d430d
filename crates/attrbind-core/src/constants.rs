//! Constantes del binder.

/// Separador entre prefijo (o nombre de clase) y nombre de campo en las
/// claves compuestas.
pub const KEY_SEPARATOR: &str = ".";
