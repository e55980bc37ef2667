use dyncall::{
    bind_by_name, bindings_from_json, call_method, call_method_named, invoke, signature_of,
    Callable, MethodTable, NaturalConverter, RuntimeError, Signature, TypeExpr, Value,
};
use std::collections::HashMap;
use std::sync::Arc;

// An owner exposing a few methods, the way a registry is built at startup.
fn report_printer() -> MethodTable {
    let mut table = MethodTable::new("ReportPrinter");

    table.define(Callable::new(
        "Render",
        Signature::new(
            vec![TypeExpr::INT, TypeExpr::STRING],
            vec![TypeExpr::STRING],
        ),
        Arc::new(|args| {
            let (count, label) = match (&args[0], &args[1]) {
                (Value::Integer(c), Value::String(l)) => (*c, l.clone()),
                _ => return Err(RuntimeError::new("Render: bad argument types")),
            };
            Ok(vec![Value::String(format!("{}x{}", count, label))])
        }),
    ));

    table.define(Callable::new(
        "Join",
        Signature::variadic(vec![TypeExpr::STRING], TypeExpr::STRING, vec![TypeExpr::STRING]),
        Arc::new(|args| {
            let mut parts = Vec::with_capacity(args.len());
            for arg in &args {
                match arg {
                    Value::String(s) => parts.push(s.clone()),
                    other => {
                        return Err(RuntimeError::new(&format!(
                            "Join: expected string, got {}",
                            other.type_name()
                        )))
                    }
                }
            }
            let (sep, rest) = parts.split_first().expect("Join has a separator");
            Ok(vec![Value::String(rest.join(sep))])
        }),
    ));

    table.define(Callable::new(
        "DivMod",
        Signature::new(
            vec![TypeExpr::INT, TypeExpr::INT],
            vec![TypeExpr::INT, TypeExpr::INT],
        ),
        Arc::new(|args| match (&args[0], &args[1]) {
            (Value::Integer(_), Value::Integer(0)) => Err(RuntimeError::new("DivMod: zero divisor")),
            (Value::Integer(a), Value::Integer(b)) => {
                Ok(vec![Value::Integer(a / b), Value::Integer(a % b)])
            }
            _ => Err(RuntimeError::new("DivMod: bad argument types")),
        }),
    ));

    table
}

#[test]
fn resolve_unknown_name_reports_owner_and_name() {
    let table = report_printer();
    let err = table.resolve("DoesNotExist").unwrap_err();
    assert_eq!(
        err,
        RuntimeError::NotFound {
            owner: "ReportPrinter".to_string(),
            name: "DoesNotExist".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "failed to lookup ReportPrinter.DoesNotExist"
    );
}

#[test]
fn signature_of_reports_declaration_order_and_variadic_flag() {
    let table = report_printer();

    let render = table.resolve("Render").unwrap();
    let (params, variadic) = signature_of(&render);
    assert_eq!(params, &[TypeExpr::INT, TypeExpr::STRING]);
    assert!(!variadic);

    let join = table.resolve("Join").unwrap();
    let (params, variadic) = signature_of(&join);
    assert_eq!(
        params,
        &[TypeExpr::STRING, TypeExpr::vector(TypeExpr::STRING)]
    );
    assert!(variadic);
}

#[test]
fn bind_by_name_converts_text_dictionary_values() {
    let table = report_printer();
    let render = table.resolve("Render").unwrap();

    let mut values = HashMap::new();
    values.insert("count".to_string(), Value::String("5".to_string()));
    values.insert("label".to_string(), Value::String("x".to_string()));

    let args = bind_by_name(&render, &["count", "label"], &values, &NaturalConverter)
        .expect("should bind");
    assert_eq!(args, vec![Value::Integer(5), Value::String("x".to_string())]);

    let results = invoke(&render, args).expect("should invoke");
    assert_eq!(results, vec![Value::String("5xx".to_string())]);
}

#[test]
fn bind_by_name_missing_scalar_fails_in_conversion() {
    let table = report_printer();
    let render = table.resolve("Render").unwrap();

    let mut values = HashMap::new();
    values.insert("label".to_string(), Value::String("x".to_string()));

    let err = bind_by_name(&render, &["count", "label"], &values, &NaturalConverter).unwrap_err();
    assert!(matches!(err, RuntimeError::ConversionError { .. }));
}

#[test]
fn variadic_call_through_pipeline() {
    let table = report_printer();

    let results = call_method(
        &table,
        "Join",
        vec![
            Value::String("-".to_string()),
            Value::Vector(vec![
                Value::String("a".to_string()),
                Value::String("b".to_string()),
                Value::String("c".to_string()),
            ]),
        ],
        &NaturalConverter,
    )
    .expect("should call");
    assert_eq!(results, vec![Value::String("a-b-c".to_string())]);
}

#[test]
fn variadic_call_with_missing_rest() {
    let table = report_printer();

    let results = call_method(
        &table,
        "Join",
        vec![Value::String("-".to_string()), Value::Nil],
        &NaturalConverter,
    )
    .expect("should call");
    assert_eq!(results, vec![Value::String(String::new())]);
}

#[test]
fn results_preserve_declaration_order() {
    let table = report_printer();

    let results = call_method(
        &table,
        "DivMod",
        vec![Value::Integer(7), Value::Integer(2)],
        &NaturalConverter,
    )
    .expect("should call");
    assert_eq!(results, vec![Value::Integer(3), Value::Integer(1)]);
}

#[test]
fn callee_failure_propagates_unmodified() {
    let table = report_printer();

    let err = call_method(
        &table,
        "DivMod",
        vec![Value::Integer(7), Value::Integer(0)],
        &NaturalConverter,
    )
    .unwrap_err();
    assert_eq!(err, RuntimeError::new("DivMod: zero divisor"));
}

#[test]
fn named_call_from_json_configuration() {
    let table = report_printer();
    let json: serde_json::Value = serde_json::from_str(r#"{"count": "5", "label": "x"}"#)
        .expect("valid JSON");
    let values = bindings_from_json(&json).expect("object bindings");

    let results = call_method_named(
        &table,
        "Render",
        &["count", "label"],
        &values,
        &NaturalConverter,
    )
    .expect("should call");
    assert_eq!(results, vec![Value::String("5xx".to_string())]);
}
