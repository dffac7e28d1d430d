//! Comportamiento observable del binder sobre clases declaradas con
//! `bindable!`: direcciones, claves por defecto, prefijos, herencia,
//! referencias anidadas y ciclos.

use std::cell::RefCell;
use std::rc::Rc;

use attrbind_core::{bind, bindable, BindError, BindingDirection, Parameters};
use serde_json::json;

bindable! {
    bindable struct TestImpl {
        attributes {
            in_field: i32 = 5 => In as "inField",
            inout_field: i32 = 5 => InOut as "inoutField",
            out_field: i32 = 5 => Out as "outField",
            default_key_field: i32 = 5 => InOut,
        }
    }
}

bindable! {
    bindable struct TestImplSubclass extends TestImpl as base {
        attributes {
            subclass_in_field: i32 = 5 => In as "subclassInField",
            subclass_out_field: i32 = 5 => Out as "subclassOutField",
        }
    }
}

bindable! {
    bindable(prefix = "prefix") struct TestImpl2 {
        attributes {
            in_field: i32 = 5 => In,
        }
        references {
            referenced: TestImpl = TestImpl::default(),
        }
    }
}

bindable! {
    bindable(prefix = "circular1") struct CircularReference1 {
        attributes { in_field: i32 = 5 => In }
        references { reference: Option<Rc<RefCell<CircularReference2>>> = None }
    }
}

bindable! {
    bindable(prefix = "circular2") struct CircularReference2 {
        attributes { in_field: i32 = 5 => In }
        references { reference: Option<Rc<RefCell<CircularReference1>>> = None }
    }
}

bindable! {
    plain struct NotBindable {
        attributes { test: i32 = 20 => In as "test" }
    }
}

fn params(entries: &[(&str, i32)]) -> Parameters {
    entries.iter().map(|(k, v)| (k.to_string(), json!(v))).collect()
}

#[test]
fn in_attributes() {
    let mut p = params(&[("inField", 10), ("outField", 10), ("inoutField", 7)]);
    let mut instance = TestImpl::default();

    bind(&mut instance, &mut p, BindingDirection::In).unwrap();

    assert_eq!(instance.in_field, 10);
    assert_eq!(instance.out_field, 5);
    assert_eq!(instance.inout_field, 7);
    // IN never touches the map
    assert_eq!(p.len(), 3);
}

#[test]
fn in_attributes_for_subclass() {
    let mut p = params(&[("inField", 10),
                         ("outField", 10),
                         ("inoutField", 7),
                         ("subclassInField", 10),
                         ("subclassOutField", 10)]);
    let mut instance = TestImplSubclass::default();

    bind(&mut instance, &mut p, BindingDirection::In).unwrap();
    assert_eq!(instance.in_field, 10);
    assert_eq!(instance.inout_field, 7);
    assert_eq!(instance.out_field, 5);
    assert_eq!(instance.subclass_in_field, 10);
    assert_eq!(instance.subclass_out_field, 5);

    bind(&mut instance, &mut p, BindingDirection::Out).unwrap();
    assert_eq!(p["outField"], json!(5));
    assert_eq!(p["subclassOutField"], json!(5));
}

#[test]
fn out_attributes() {
    let mut p = params(&[("inField", 10), ("outField", 10)]);
    let mut instance = TestImpl::default();

    bind(&mut instance, &mut p, BindingDirection::Out).unwrap();

    assert_eq!(p["outField"], json!(5));
    assert_eq!(p["inField"], json!(10));
    assert_eq!(p["inoutField"], json!(5));
}

#[test]
fn out_attributes_for_subclass() {
    let mut p = params(&[("inField", 10),
                         ("outField", 10),
                         ("inoutField", 7),
                         ("subclassInField", 10),
                         ("subclassOutField", 10)]);
    let mut instance = TestImplSubclass::default();

    bind(&mut instance, &mut p, BindingDirection::Out).unwrap();

    assert_eq!(p["outField"], json!(5));
    assert_eq!(p["inField"], json!(10));
    assert_eq!(p["inoutField"], json!(5));
    assert_eq!(p["subclassOutField"], json!(5));
    assert_eq!(p["subclassInField"], json!(10));
}

#[test]
fn default_key_is_fully_qualified() {
    let key = format!("{}::TestImpl.default_key_field", module_path!());
    let mut p = Parameters::new();
    let mut instance = TestImpl::default();

    bind(&mut instance, &mut p, BindingDirection::InOut).unwrap();
    assert_eq!(p[&key], json!(5));

    p.insert(key.clone(), json!(10));
    bind(&mut instance, &mut p, BindingDirection::InOut).unwrap();
    assert_eq!(p[&key], json!(10));
    assert_eq!(instance.default_key_field, 10);
}

#[test]
fn inherited_default_key_uses_declaring_class() {
    let mut p = Parameters::new();
    let mut instance = TestImplSubclass::default();
    bind(&mut instance, &mut p, BindingDirection::Out).unwrap();
    let key = format!("{}::TestImpl.default_key_field", module_path!());
    assert_eq!(p[&key], json!(5));
}

#[test]
fn class_prefix() {
    let mut p = params(&[("prefix.in_field", 10)]);
    let mut instance = TestImpl2::default();

    bind(&mut instance, &mut p, BindingDirection::In).unwrap();

    assert_eq!(instance.in_field, 10);
}

#[test]
fn referenced_objects_are_bound() {
    let mut p = Parameters::new();
    let mut instance = TestImpl2::default();

    bind(&mut instance, &mut p, BindingDirection::InOut).unwrap();
    // IN-only attributes are not exported, OUT-capable ones of the nested object are
    assert!(!p.contains_key("prefix.in_field"));
    assert!(!p.contains_key("inField"));
    assert_eq!(p["inoutField"], json!(5));
    assert_eq!(p["outField"], json!(5));

    p.insert("prefix.in_field".into(), json!(10));
    p.insert("inField".into(), json!(10));
    bind(&mut instance, &mut p, BindingDirection::InOut).unwrap();
    assert_eq!(instance.in_field, 10);
    assert_eq!(instance.referenced.in_field, 10);
}

#[test]
fn nested_prefix_does_not_accumulate() {
    let mut p = Parameters::new();
    let mut instance = TestImpl2::default();
    bind(&mut instance, &mut p, BindingDirection::Out).unwrap();
    let nested_default = format!("{}::TestImpl.default_key_field", module_path!());
    assert!(p.contains_key(&nested_default));
    assert!(p.keys().all(|k| !k.starts_with("prefix.prefix")));
}

#[test]
fn circular_references() {
    let first = Rc::new(RefCell::new(CircularReference1::default()));
    let second = Rc::new(RefCell::new(CircularReference2::default()));
    first.borrow_mut().reference = Some(Rc::clone(&second));
    second.borrow_mut().reference = Some(Rc::clone(&first));
    let mut p = params(&[("circular1.in_field", 7), ("circular2.in_field", 8)]);

    bind(&mut *first.borrow_mut(), &mut p, BindingDirection::In).unwrap();

    assert_eq!(first.borrow().in_field, 7);
    let nested = first.borrow().reference.clone().unwrap();
    assert_eq!(nested.borrow().in_field, 8);

    // break the Rc cycle
    second.borrow_mut().reference = None;
}

#[test]
fn not_bindable_binding_attempt() {
    let mut instance = NotBindable::default();
    let mut p = params(&[("test", 30)]);

    let err = bind(&mut instance, &mut p, BindingDirection::InOut).unwrap_err();

    assert!(err.is_configuration());
    assert!(matches!(err, BindError::NotBindable { class } if class.ends_with("::NotBindable")));
    assert_eq!(instance.test, 20, "field value not changed");
    assert_eq!(p.len(), 1);
    assert_eq!(p["test"], json!(30));
}
