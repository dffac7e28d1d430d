//! Macro para declarar clases bindable sin boilerplate.
//!
//! Formas soportadas (cabecera):
//! - `bindable struct Name { .. }`: marcador sin prefijo.
//! - `bindable(prefix = "p") struct Name { .. }`: marcador con prefijo.
//! - `plain struct Name { .. }`: sin marcador (sólo aporta atributos como
//!   ancestro; no puede ser raíz de `bind`).
//!
//! Cuerpo (todas las secciones son opcionales, en este orden):
//!
//! ```ignore
//! bindable! {
//!     bindable(prefix = "clustering") struct Clustering extends Algorithm as base {
//!         attributes {
//!             max_clusters: u32 = 20 => In,
//!             label_count: u32 = 3 => InOut as "labels.count",
//!         }
//!         references {
//!             tokenizer: Option<Rc<RefCell<Tokenizer>>> = None,
//!         }
//!         fields {
//!             cache: Vec<String> = Vec::new(),
//!         }
//!     }
//! }
//! ```
//!
//! Genera el struct (campos `pub`), `Default` con los inicializadores,
//! `Configurable`, `Reference` y, si hay `extends`, `Deref`/`DerefMut` hacia
//! la parte base.

#[macro_export]
macro_rules! bindable {
    (
        $(#[$meta:meta])*
        bindable ( prefix = $prefix:literal ) struct $($rest:tt)*
    ) => {
        $crate::bindable!(@class [$(#[$meta])*]
                          [::core::option::Option::Some($crate::model::BindableSpec::with_prefix($prefix))]
                          $($rest)*);
    };
    (
        $(#[$meta:meta])*
        bindable struct $($rest:tt)*
    ) => {
        $crate::bindable!(@class [$(#[$meta])*]
                          [::core::option::Option::Some($crate::model::BindableSpec::new())]
                          $($rest)*);
    };
    (
        $(#[$meta:meta])*
        plain struct $($rest:tt)*
    ) => {
        $crate::bindable!(@class [$(#[$meta])*] [::core::option::Option::None] $($rest)*);
    };

    (
        @class [$($attrs:tt)*] [$($marker:tt)*]
        $name:ident $(extends $parent:ty as $base:ident)? {
            $(attributes { $($fname:ident : $fty:ty = $finit:expr => $dir:ident $(as $key:literal)?),* $(,)? })?
            $(references { $($rname:ident : $rty:ty = $rinit:expr),* $(,)? })?
            $(fields { $($pname:ident : $pty:ty = $pinit:expr),* $(,)? })?
        }
    ) => {
        $($attrs)*
        pub struct $name {
            $(pub $base: $parent,)?
            $($(pub $fname: $fty,)*)?
            $($(pub $rname: $rty,)*)?
            $($(pub $pname: $pty,)*)?
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self {
                    $($base: <$parent as ::core::default::Default>::default(),)?
                    $($($fname: $finit,)*)?
                    $($($rname: $rinit,)*)?
                    $($($pname: $pinit,)*)?
                }
            }
        }

        impl $crate::Configurable for $name {
            fn class_info() -> &'static $crate::model::ClassInfo {
                static INFO: $crate::__private::Lazy<$crate::model::ClassInfo> = $crate::__private::Lazy::new(|| {
                    $crate::model::ClassInfo::new(
                        ::core::concat!(::core::module_path!(), "::", ::core::stringify!($name)),
                        $($marker)*,
                        $crate::__bind_parent_info!($($parent)?),
                        ::std::vec![$($((::core::stringify!($fname), $crate::__bind_attribute!($dir $(, $key)?)),)*)?],
                    )
                });
                $crate::__private::Lazy::force(&INFO)
            }

            fn runtime_class(&self) -> &'static $crate::model::ClassInfo {
                <Self as $crate::Configurable>::class_info()
            }

            #[allow(unused_variables)]
            fn read_declared(&self, field: &$crate::model::FieldDescriptor)
                             -> ::core::option::Option<::core::result::Result<$crate::__private::Value, $crate::BindError>> {
                if !field.is_declared_by(<Self as $crate::Configurable>::class_info()) {
                    return ::core::option::Option::None;
                }
                $($(
                    if field.name() == ::core::stringify!($fname) {
                        return ::core::option::Option::Some($crate::__private::export(field, &self.$fname));
                    }
                )*)?
                ::core::option::Option::None
            }

            #[allow(unused_variables)]
            fn write_declared(&mut self,
                              field: &$crate::model::FieldDescriptor,
                              key: &str,
                              value: &$crate::__private::Value)
                              -> ::core::option::Option<::core::result::Result<(), $crate::BindError>> {
                if !field.is_declared_by(<Self as $crate::Configurable>::class_info()) {
                    return ::core::option::Option::None;
                }
                $($(
                    if field.name() == ::core::stringify!($fname) {
                        return ::core::option::Option::Some($crate::__private::assign(&mut self.$fname, field, key, value));
                    }
                )*)?
                ::core::option::Option::None
            }

            #[allow(unused_variables)]
            fn visit_declared_references(&mut self, walker: &mut $crate::binder::GraphWalker<'_>)
                                         -> ::core::result::Result<(), $crate::BindError> {
                $($(
                    $crate::binder::Reference::descend(&mut self.$rname, walker)?;
                )*)?
                ::core::result::Result::Ok(())
            }

            $(
            fn superclass(&self) -> ::core::option::Option<&dyn $crate::Configurable> {
                ::core::option::Option::Some(&self.$base)
            }

            fn superclass_mut(&mut self) -> ::core::option::Option<&mut dyn $crate::Configurable> {
                ::core::option::Option::Some(&mut self.$base)
            }
            )?
        }

        impl $crate::binder::Reference for $name {
            fn descend(&mut self, walker: &mut $crate::binder::GraphWalker<'_>)
                       -> ::core::result::Result<(), $crate::BindError> {
                walker.visit(self)
            }
        }

        $(
        impl ::core::ops::Deref for $name {
            type Target = $parent;
            fn deref(&self) -> &$parent {
                &self.$base
            }
        }

        impl ::core::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut $parent {
                &mut self.$base
            }
        }
        )?
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __bind_attribute {
    ($dir:ident) => {
        $crate::model::AttributeSpec::new($crate::model::BindingDirection::$dir)
    };
    ($dir:ident, $key:literal) => {
        $crate::model::AttributeSpec::with_key($crate::model::BindingDirection::$dir, $key)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __bind_parent_info {
    () => {
        ::core::option::Option::None
    };
    ($parent:ty) => {
        ::core::option::Option::Some(<$parent as $crate::Configurable>::class_info())
    };
}
