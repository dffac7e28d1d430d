//! Resolución de metadatos: qué atributos tiene una clase y con qué prefijo.
//!
//! La agregación por herencia ocurre una vez, al registrar la clase
//! (`ClassInfo::new`); aquí sólo se compone `ancestros ++ propios`. El orden
//! resultante es estable durante todo el proceso.

use crate::model::{ClassInfo, FieldDescriptor};

/// Compone la lista plana de atributos: los del padre (ya aplanados) seguidos
/// de los declarados por la propia clase.
pub fn aggregate_fields(parent: Option<&ClassInfo>, declared: &[FieldDescriptor]) -> Vec<FieldDescriptor> {
    let inherited = parent.map(|p| p.fields()).unwrap_or(&[]);
    let mut out = Vec::with_capacity(inherited.len() + declared.len());
    out.extend_from_slice(inherited);
    out.extend_from_slice(declared);
    out
}

/// Atributos de `class` y de todos sus ancestros, en orden estable.
///
/// No exige el marcador bindable: los ancestros aportan atributos aunque no
/// lo lleven. La elegibilidad se valida en el binder.
pub fn fields_of(class: &ClassInfo) -> &[FieldDescriptor] {
    class.fields()
}

/// Prefijo de la clase en tiempo de ejecución. Nunca se acumula con el de
/// ancestros ni con el del objeto contenedor.
pub fn prefix_of(class: &ClassInfo) -> &'static str {
    class.bindable().map(|b| b.prefix).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AttributeSpec, BindableSpec, BindingDirection};
    use once_cell::sync::Lazy;

    static BASE: Lazy<ClassInfo> = Lazy::new(|| {
        ClassInfo::new("app::Base",
                       None,
                       None,
                       vec![("a", AttributeSpec::new(BindingDirection::In)),
                            ("b", AttributeSpec::with_key(BindingDirection::Out, "bee"))])
    });

    static CHILD: Lazy<ClassInfo> = Lazy::new(|| {
        ClassInfo::new("app::Child",
                       Some(BindableSpec::with_prefix("child")),
                       Some(&*BASE),
                       vec![("c", AttributeSpec::new(BindingDirection::InOut))])
    });

    static GRANDCHILD: Lazy<ClassInfo> =
        Lazy::new(|| ClassInfo::new("app::GrandChild", Some(BindableSpec::new()), Some(&*CHILD), vec![]));

    #[test]
    fn fields_include_ancestors_first() {
        let names: Vec<_> = fields_of(&CHILD).iter().map(|f| (f.declaring_class(), f.name())).collect();
        assert_eq!(names, vec![("app::Base", "a"), ("app::Base", "b"), ("app::Child", "c")]);
    }

    #[test]
    fn fields_cover_whole_hierarchy() {
        let owners: Vec<_> = fields_of(&GRANDCHILD).iter().map(|f| f.declaring_class()).collect();
        assert_eq!(owners, vec!["app::Base", "app::Base", "app::Child"]);
    }

    #[test]
    fn unmarked_class_still_resolves_fields() {
        assert!(!BASE.is_bindable());
        assert_eq!(fields_of(&BASE).len(), 2);
        assert_eq!(prefix_of(&BASE), "");
    }

    #[test]
    fn prefix_is_not_inherited() {
        assert_eq!(prefix_of(&CHILD), "child");
        assert_eq!(prefix_of(&GRANDCHILD), "");
    }
}
